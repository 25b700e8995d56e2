//! Floating "press X to talk" prompt.
//!
//! Shown while the player stands inside a trigger zone. Pure
//! presentation: text on either side of an input indicator, with a
//! dt-driven fade replacing canned show/hide animations.

use egui::{Align2, Color32, RichText, Stroke};

use super::style::{self, colors};
use crate::components::IndicatorKind;
use crate::constants::*;

#[derive(Debug, Clone, Copy, PartialEq)]
enum PromptPhase {
    Hidden,
    FadingIn { t: f32 },
    Shown,
    FadingOut { t: f32 },
}

pub struct InteractPrompt {
    phase: PromptPhase,
    before: String,
    after: String,
    indicator: IndicatorKind,
}

impl InteractPrompt {
    pub fn new() -> Self {
        Self {
            phase: PromptPhase::Hidden,
            before: String::new(),
            after: String::new(),
            indicator: IndicatorKind::Key('e'),
        }
    }

    /// Configure the texts and indicator, then fade in. Replaces any
    /// previous configuration.
    pub fn show(&mut self, before: &str, after: &str, indicator: IndicatorKind) {
        self.before = before.to_string();
        self.after = after.to_string();
        self.indicator = indicator;
        self.phase = PromptPhase::FadingIn { t: 0.0 };
    }

    /// Hide immediately, or play the fade-out transition.
    pub fn hide(&mut self, animated: bool) {
        if !animated {
            self.phase = PromptPhase::Hidden;
            return;
        }
        if self.phase != PromptPhase::Hidden {
            self.phase = PromptPhase::FadingOut { t: 0.0 };
        }
    }

    /// Advance the fade animation.
    pub fn update(&mut self, dt: f32) {
        match self.phase {
            PromptPhase::FadingIn { t } => {
                let t = t + dt;
                self.phase = if t >= PROMPT_FADE_IN_DURATION {
                    PromptPhase::Shown
                } else {
                    PromptPhase::FadingIn { t }
                };
            }
            PromptPhase::FadingOut { t } => {
                let t = t + dt;
                self.phase = if t >= PROMPT_FADE_OUT_DURATION {
                    PromptPhase::Hidden
                } else {
                    PromptPhase::FadingOut { t }
                };
            }
            PromptPhase::Hidden | PromptPhase::Shown => {}
        }
    }

    pub fn is_visible(&self) -> bool {
        self.phase != PromptPhase::Hidden
    }

    pub fn is_fading_out(&self) -> bool {
        matches!(self.phase, PromptPhase::FadingOut { .. })
    }

    /// Current opacity in `[0, 1]`
    pub fn alpha(&self) -> f32 {
        match self.phase {
            PromptPhase::Hidden => 0.0,
            PromptPhase::Shown => 1.0,
            PromptPhase::FadingIn { t } => (t / PROMPT_FADE_IN_DURATION).clamp(0.0, 1.0),
            PromptPhase::FadingOut { t } => 1.0 - (t / PROMPT_FADE_OUT_DURATION).clamp(0.0, 1.0),
        }
    }

    pub fn draw(&self, ctx: &egui::Context) {
        if !self.is_visible() {
            return;
        }
        let alpha = self.alpha();

        egui::Area::new(egui::Id::new("interact_prompt"))
            .anchor(Align2::CENTER_BOTTOM, [0.0, -140.0])
            .show(ctx, |ui| {
                style::panel_frame()
                    .fill(colors::PANEL_BG.gamma_multiply(alpha))
                    .stroke(Stroke::new(
                        style::BORDER_WIDTH,
                        colors::PANEL_BORDER.gamma_multiply(alpha),
                    ))
                    .show(ui, |ui| {
                        ui.horizontal(|ui| {
                            if !self.before.is_empty() {
                                ui.label(faded(&self.before, colors::TEXT_PRIMARY, alpha));
                            }
                            draw_keycap(ui, &self.indicator.label(), alpha);
                            if !self.after.is_empty() {
                                ui.label(faded(&self.after, colors::TEXT_PRIMARY, alpha));
                            }
                        });
                    });
            });
    }
}

impl Default for InteractPrompt {
    fn default() -> Self {
        Self::new()
    }
}

fn faded(text: &str, color: Color32, alpha: f32) -> RichText {
    RichText::new(text).color(color.gamma_multiply(alpha)).size(15.0)
}

fn draw_keycap(ui: &mut egui::Ui, label: &str, alpha: f32) {
    egui::Frame::none()
        .fill(colors::KEYCAP_BG.gamma_multiply(alpha))
        .stroke(Stroke::new(1.0, colors::KEYCAP_BORDER.gamma_multiply(alpha)))
        .inner_margin(egui::Margin::symmetric(6.0, 2.0))
        .show(ui, |ui| {
            ui.label(faded(label, colors::TEXT_ACCENT, alpha).strong());
        });
}
