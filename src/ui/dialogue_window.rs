//! Dialogue box widget.
//!
//! Owns the active session (parallel title/message/voice arrays) and the
//! typewriter reveal. Ticked once per frame while visible; skip either
//! force-completes the current message or advances to the next one.

use egui::{Align2, RichText};

use super::style::{self, colors};
use crate::audio::AudioOutput;
use crate::constants::INTERACT_SOUND_PATH;
use crate::typewriter::{visible_prefix, Typewriter};
use crate::voice::{VoiceListId, VoiceRegistry};

pub struct DialogueWindow {
    visible: bool,
    titles: Vec<String>,
    messages: Vec<String>,
    voices: Vec<VoiceListId>,
    index: usize,
    typewriter: Typewriter,
}

impl DialogueWindow {
    pub fn new() -> Self {
        Self {
            visible: false,
            titles: Vec::new(),
            messages: Vec::new(),
            voices: Vec::new(),
            index: 0,
            typewriter: Typewriter::idle(),
        }
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn entry_index(&self) -> usize {
        self.index
    }

    pub fn is_typing(&self) -> bool {
        self.typewriter.is_typing()
    }

    /// Title of the current entry, or empty while hidden
    pub fn title(&self) -> &str {
        if self.visible {
            &self.titles[self.index]
        } else {
            ""
        }
    }

    /// Text currently visible in the message area
    pub fn visible_message(&self) -> &str {
        if !self.visible {
            return "";
        }
        let message = &self.messages[self.index];
        if self.typewriter.is_typing() {
            visible_prefix(message, self.typewriter.revealed())
        } else {
            message
        }
    }

    /// Start a dialogue session. The three arrays must be parallel and
    /// non-empty; a mismatch is an authoring error and leaves the widget
    /// untouched. Returns true if the session started.
    pub fn show(
        &mut self,
        titles: &[String],
        messages: &[String],
        voices: &[VoiceListId],
        audio: &mut AudioOutput,
    ) -> bool {
        if titles.len() != messages.len() || titles.len() != voices.len() {
            log::error!(
                "dialogue entry arrays differ in length ({}/{}/{})",
                titles.len(),
                messages.len(),
                voices.len()
            );
            return false;
        }
        if titles.is_empty() {
            log::error!("dialogue session has no entries");
            return false;
        }

        log::info!("showing dialogue with {} entries", titles.len());
        self.titles = titles.to_vec();
        self.messages = messages.to_vec();
        self.voices = voices.to_vec();
        self.begin_entry(0);
        self.visible = true;
        audio.play_oneshot(INTERACT_SOUND_PATH);
        true
    }

    fn begin_entry(&mut self, index: usize) {
        log::info!("dialogue entry {index}");
        self.index = index;
        self.typewriter = Typewriter::start();
    }

    /// Per-frame update. While the host is paused the reveal is frozen
    /// and any playing voice clip is silenced; otherwise a voice clip is
    /// kept going and characters are released on the reveal interval.
    pub fn tick(&mut self, dt: f32, paused: bool, voices: &VoiceRegistry, audio: &mut AudioOutput) {
        if !self.visible {
            return;
        }

        if paused {
            if audio.is_voice_playing() {
                log::info!("host paused, stopping voice audio");
                audio.stop_voice();
            }
            return;
        }

        if !self.typewriter.is_typing() {
            return;
        }

        if !audio.is_voice_playing() {
            if let Some(list) = voices.get(self.voices[self.index]) {
                if let Some(clip) = list.pick_random() {
                    audio.play_voice(clip);
                }
            }
        }

        let total = self.messages[self.index].chars().count();
        self.typewriter.tick(dt, total);
    }

    /// Skip the typing animation, or continue to the next message.
    /// Returns true iff this skip dismissed the whole dialogue.
    pub fn skip(&mut self, audio: &mut AudioOutput) -> bool {
        if !self.visible {
            log::warn!("skip on a hidden dialogue widget");
            return false;
        }
        audio.play_oneshot(INTERACT_SOUND_PATH);

        if self.typewriter.is_typing() {
            let total = self.messages[self.index].chars().count();
            self.typewriter.finish(total);
            return false;
        }

        if self.index + 1 < self.titles.len() {
            self.begin_entry(self.index + 1);
            return false;
        }

        log::info!("hiding dialogue widget");
        self.visible = false;
        audio.stop_voice();
        true
    }

    pub fn draw(&self, ctx: &egui::Context) {
        if !self.visible {
            return;
        }

        let width = (ctx.screen_rect().width() - 80.0).min(560.0);
        egui::Window::new("dialogue")
            .title_bar(false)
            .resizable(false)
            .collapsible(false)
            .anchor(Align2::CENTER_BOTTOM, [0.0, -28.0])
            .frame(style::panel_frame())
            .fixed_size([width, 96.0])
            .show(ctx, |ui| {
                ui.label(
                    RichText::new(self.title())
                        .color(colors::TEXT_ACCENT)
                        .size(16.0)
                        .strong(),
                );
                ui.add_space(6.0);
                ui.label(RichText::new(self.visible_message()).size(15.0));

                // continue marker once the message is fully revealed
                if !self.typewriter.is_typing() {
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Max), |ui| {
                        ui.label(RichText::new("▸").color(colors::TEXT_MUTED).size(14.0));
                    });
                }
            });
    }
}

impl Default for DialogueWindow {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::TYPE_REVEAL_INTERVAL;
    use crate::voice::{VoiceList, VoiceRegistry};

    fn session() -> (Vec<String>, Vec<String>, Vec<VoiceListId>, VoiceRegistry) {
        let mut registry = VoiceRegistry::new();
        let id = registry.add(VoiceList::new("v", vec!["clip.ogg".to_string()]));
        (
            vec!["A".to_string(), "B".to_string()],
            vec!["hi".to_string(), "bye".to_string()],
            vec![id, id],
            registry,
        )
    }

    #[test]
    fn test_show_starts_at_first_entry() {
        let (titles, messages, voices, _registry) = session();
        let mut audio = AudioOutput::disabled();
        let mut window = DialogueWindow::new();

        assert!(window.show(&titles, &messages, &voices, &mut audio));
        assert!(window.is_visible());
        assert_eq!(window.entry_index(), 0);
        assert_eq!(window.title(), "A");
        assert_eq!(window.visible_message(), "");
        assert!(window.is_typing());
    }

    #[test]
    fn test_show_rejects_mismatched_arrays() {
        let (titles, messages, voices, _registry) = session();
        let mut audio = AudioOutput::disabled();
        let mut window = DialogueWindow::new();

        assert!(!window.show(&titles[..1], &messages, &voices, &mut audio));
        assert!(!window.is_visible());
        assert_eq!(window.title(), "");
        assert_eq!(window.visible_message(), "");
    }

    #[test]
    fn test_show_rejects_empty_session() {
        let mut audio = AudioOutput::disabled();
        let mut window = DialogueWindow::new();
        assert!(!window.show(&[], &[], &[], &mut audio));
        assert!(!window.is_visible());
    }

    #[test]
    fn test_tick_reveals_prefix_then_holds() {
        let (titles, messages, voices, registry) = session();
        let mut audio = AudioOutput::disabled();
        let mut window = DialogueWindow::new();
        window.show(&titles, &messages, &voices, &mut audio);

        window.tick(TYPE_REVEAL_INTERVAL, false, &registry, &mut audio);
        assert_eq!(window.visible_message(), "h");

        window.tick(TYPE_REVEAL_INTERVAL, false, &registry, &mut audio);
        assert_eq!(window.visible_message(), "hi");
        assert!(!window.is_typing());
    }

    #[test]
    fn test_paused_tick_makes_no_progress() {
        let (titles, messages, voices, registry) = session();
        let mut audio = AudioOutput::disabled();
        let mut window = DialogueWindow::new();
        window.show(&titles, &messages, &voices, &mut audio);

        for _ in 0..10 {
            window.tick(TYPE_REVEAL_INTERVAL, true, &registry, &mut audio);
        }
        assert_eq!(window.visible_message(), "");
        assert!(window.is_typing());
    }

    #[test]
    fn test_skip_while_typing_force_completes() {
        let (titles, messages, voices, registry) = session();
        let mut audio = AudioOutput::disabled();
        let mut window = DialogueWindow::new();
        window.show(&titles, &messages, &voices, &mut audio);

        window.tick(TYPE_REVEAL_INTERVAL, false, &registry, &mut audio);
        assert!(window.is_typing());
        assert!(!window.skip(&mut audio));
        assert!(!window.is_typing());
        assert_eq!(window.visible_message(), "hi");
        assert_eq!(window.entry_index(), 0);
    }

    #[test]
    fn test_skip_sequence_through_both_entries() {
        let (titles, messages, voices, _registry) = session();
        let mut audio = AudioOutput::disabled();
        let mut window = DialogueWindow::new();
        window.show(&titles, &messages, &voices, &mut audio);

        assert!(!window.skip(&mut audio)); // force-complete "hi"
        assert!(!window.skip(&mut audio)); // advance to entry 1
        assert_eq!(window.entry_index(), 1);
        assert!(window.is_typing());
        assert!(!window.skip(&mut audio)); // force-complete "bye"
        assert!(window.skip(&mut audio)); // dismiss
        assert!(!window.is_visible());
    }

    #[test]
    fn test_skip_on_hidden_widget_is_noop() {
        let mut audio = AudioOutput::disabled();
        let mut window = DialogueWindow::new();
        assert!(!window.skip(&mut audio));
        assert!(!window.is_visible());
    }
}
