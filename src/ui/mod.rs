//! UI rendering using egui.
//!
//! The dialogue box and interact prompt own their presentation state and
//! draw themselves; the world view renders the grid and actors behind
//! them.

pub mod dialogue_window;
pub mod interact_prompt;
pub mod style;
pub mod world_view;

pub use dialogue_window::DialogueWindow;
pub use interact_prompt::InteractPrompt;
pub use world_view::draw_world;

use egui::{Align2, RichText};
use style::colors;

/// Dim the screen and announce the paused state.
pub fn draw_pause_overlay(ctx: &egui::Context) {
    let painter = ctx.layer_painter(egui::LayerId::new(
        egui::Order::Foreground,
        egui::Id::new("pause_dim"),
    ));
    painter.rect_filled(
        ctx.screen_rect(),
        0.0,
        egui::Color32::from_black_alpha(120),
    );

    egui::Area::new(egui::Id::new("pause_overlay"))
        .anchor(Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            ui.label(
                RichText::new("PAUSED")
                    .color(colors::TEXT_ACCENT)
                    .size(28.0)
                    .strong(),
            );
        });
}

/// One-line key reference in the corner.
pub fn draw_controls_hint(ctx: &egui::Context) {
    egui::Area::new(egui::Id::new("controls_hint"))
        .anchor(Align2::LEFT_BOTTOM, [12.0, -10.0])
        .show(ctx, |ui| {
            ui.label(
                RichText::new("WASD move · E talk/skip · P pause · T zones")
                    .color(colors::TEXT_MUTED)
                    .size(12.0),
            );
        });
}
