//! Parchment-on-slate egui styling.
//!
//! Flat panels, hard borders, muted colors, so the dialogue box reads as
//! part of the game world rather than a floating OS window.

use egui::epaint::Shadow;
use egui::{Frame, Margin, Rounding, Stroke, Style, Visuals};

/// Color palette
pub mod colors {
    use egui::Color32;

    // Panel backgrounds
    pub const PANEL_BG: Color32 = Color32::from_rgb(24, 24, 28);
    pub const PANEL_BORDER: Color32 = Color32::from_rgb(68, 64, 58);

    // Text colors
    pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(218, 212, 198);
    pub const TEXT_MUTED: Color32 = Color32::from_rgb(140, 134, 122);
    pub const TEXT_ACCENT: Color32 = Color32::from_rgb(222, 186, 108);

    // Key cap in the interact prompt
    pub const KEYCAP_BG: Color32 = Color32::from_rgb(48, 46, 42);
    pub const KEYCAP_BORDER: Color32 = Color32::from_rgb(110, 100, 86);

    // World view
    pub const FLOOR: Color32 = Color32::from_rgb(42, 40, 46);
    pub const FLOOR_ALT: Color32 = Color32::from_rgb(46, 44, 50);
    pub const WALL: Color32 = Color32::from_rgb(18, 17, 20);
    pub const ZONE_FILL: Color32 = Color32::from_rgba_premultiplied(40, 60, 40, 40);
    pub const ZONE_BORDER: Color32 = Color32::from_rgb(90, 140, 90);
}

/// Border width for panels
pub const BORDER_WIDTH: f32 = 1.0;

/// Create the game visuals
pub fn game_visuals() -> Visuals {
    let mut visuals = Visuals::dark();

    visuals.window_rounding = Rounding::ZERO;
    visuals.window_shadow = Shadow::NONE;
    visuals.popup_shadow = Shadow::NONE;

    visuals.window_fill = colors::PANEL_BG;
    visuals.window_stroke = Stroke::new(BORDER_WIDTH, colors::PANEL_BORDER);
    visuals.panel_fill = colors::PANEL_BG;

    visuals.override_text_color = Some(colors::TEXT_PRIMARY);

    visuals
}

/// Create the game style
pub fn game_style() -> Style {
    let mut style = Style::default();
    style.visuals = game_visuals();
    style
}

/// Frame used by the dialogue box and overlays
pub fn panel_frame() -> Frame {
    Frame::none()
        .fill(colors::PANEL_BG)
        .stroke(Stroke::new(BORDER_WIDTH, colors::PANEL_BORDER))
        .inner_margin(Margin::same(12.0))
}
