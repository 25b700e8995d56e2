//! Dialogue session control.
//!
//! `DialogueManager` owns the "which trigger is the player standing in"
//! state and routes show/skip/dismiss commands between the trigger's
//! configuration and the two widgets. Widgets are handed in by the
//! caller; the manager never goes looking for them.

use hecs::{Entity, World};

use crate::audio::AudioOutput;
use crate::components::{ActorKind, DialogueSource, TriggerZone};
use crate::ui::{DialogueWindow, InteractPrompt};

/// Routes dialogue commands to whichever trigger the player occupies.
///
/// At most one trigger is current at a time; the reference is a plain
/// entity handle compared by identity, never dereferenced blindly.
pub struct DialogueManager {
    current_trigger: Option<Entity>,
    dialogue_shown: bool,
}

impl DialogueManager {
    pub fn new() -> Self {
        Self {
            current_trigger: None,
            dialogue_shown: false,
        }
    }

    pub fn is_dialogue_shown(&self) -> bool {
        self.dialogue_shown
    }

    pub fn current_trigger(&self) -> Option<Entity> {
        self.current_trigger
    }

    /// The player entered a trigger; it becomes current unconditionally.
    /// Overlap events arrive sequentially, so the last writer wins.
    pub fn set_current_trigger(&mut self, trigger: Entity) {
        log::info!("current trigger is now {trigger:?}");
        self.current_trigger = Some(trigger);
    }

    /// Clear the current trigger, but only if `trigger` still is the
    /// current one. An exit event from a zone the player already left
    /// (stepping straight into a neighboring zone) must not clobber the
    /// new occupancy.
    pub fn reset_trigger(&mut self, trigger: Entity) {
        if self.current_trigger != Some(trigger) {
            log::info!("reset ignored for non-current trigger {trigger:?}");
            return;
        }
        log::info!("current trigger cleared");
        self.current_trigger = None;
    }

    /// Show the interact prompt configured by the current trigger.
    pub fn show_interact_prompt(&self, world: &World, prompt: &mut InteractPrompt) {
        let Some(trigger) = self.current_trigger else {
            log::error!("show_interact_prompt: no trigger is current");
            return;
        };
        show_prompt_for(world, trigger, prompt);
    }

    /// Open the dialogue session of the current trigger. The prompt is
    /// swapped out for the dialogue box only once the session actually
    /// starts; a refused session (bad entry data) changes nothing.
    pub fn show_dialogue(
        &mut self,
        world: &World,
        prompt: &mut InteractPrompt,
        window: &mut DialogueWindow,
        audio: &mut AudioOutput,
    ) {
        if self.dialogue_shown {
            log::warn!("show_dialogue: dialogue is already shown");
            return;
        }
        let Some(trigger) = self.current_trigger else {
            log::error!("show_dialogue: no trigger is current");
            return;
        };
        if !start_trigger_dialogue(world, trigger, window, audio) {
            return;
        }
        prompt.hide(false);
        self.dialogue_shown = true;
    }

    /// Skip the typing animation or advance to the next message.
    pub fn skip_message(
        &mut self,
        world: &World,
        prompt: &mut InteractPrompt,
        window: &mut DialogueWindow,
        audio: &mut AudioOutput,
    ) {
        if !self.dialogue_shown {
            log::warn!("skip_message: no dialogue is shown");
            return;
        }
        if window.skip(audio) {
            self.on_dialogue_dismissed(world, prompt);
        }
    }

    /// The dialogue box closed; bring the interact prompt back.
    pub fn on_dialogue_dismissed(&mut self, world: &World, prompt: &mut InteractPrompt) {
        let Some(trigger) = self.current_trigger else {
            log::error!("on_dialogue_dismissed: no trigger is current");
            return;
        };
        log::info!("dialogue dismissed");
        show_prompt_for(world, trigger, prompt);
        self.dialogue_shown = false;
    }
}

impl Default for DialogueManager {
    fn default() -> Self {
        Self::new()
    }
}

/// An actor stepped into a trigger zone.
pub fn handle_trigger_entered(
    world: &World,
    manager: &mut DialogueManager,
    prompt: &mut InteractPrompt,
    trigger: Entity,
    other: Entity,
) {
    if !accepts_activator(world, trigger, other) {
        return;
    }
    manager.set_current_trigger(trigger);
    manager.show_interact_prompt(world, prompt);
}

/// An actor stepped out of a trigger zone.
pub fn handle_trigger_exited(
    world: &World,
    manager: &mut DialogueManager,
    prompt: &mut InteractPrompt,
    trigger: Entity,
    other: Entity,
) {
    if !accepts_activator(world, trigger, other) {
        return;
    }
    manager.reset_trigger(trigger);
    prompt.hide(true);
}

/// Does this zone react to this actor? The actor may already be gone by
/// the time the event is handled.
fn accepts_activator(world: &World, trigger: Entity, other: Entity) -> bool {
    let Ok(zone) = world.get::<&TriggerZone>(trigger) else {
        log::error!("trigger {trigger:?} has no zone component");
        return false;
    };
    let Ok(kind) = world.get::<&ActorKind>(other) else {
        log::info!("ignoring overlap from missing actor {other:?}");
        return false;
    };
    if *kind != zone.activator {
        log::info!("{other:?} is not a {:?}, ignoring", zone.activator);
        return false;
    }
    true
}

/// Push the trigger's configured entries into the dialogue window.
/// Returns true if the session started.
fn start_trigger_dialogue(
    world: &World,
    trigger: Entity,
    window: &mut DialogueWindow,
    audio: &mut AudioOutput,
) -> bool {
    let Ok(source) = world.get::<&DialogueSource>(trigger) else {
        log::error!("trigger {trigger:?} has no dialogue source");
        return false;
    };
    window.show(&source.titles, &source.messages, &source.voices, audio)
}

fn show_prompt_for(world: &World, trigger: Entity, prompt: &mut InteractPrompt) {
    let Ok(source) = world.get::<&DialogueSource>(trigger) else {
        log::error!("trigger {trigger:?} has no dialogue source");
        return;
    };
    prompt.show(&source.prompt_before, &source.prompt_after, source.indicator);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::{ActorKind, IndicatorKind, Position};
    use crate::constants::TYPE_REVEAL_INTERVAL;
    use crate::voice::{VoiceList, VoiceRegistry};

    struct Fixture {
        world: World,
        manager: DialogueManager,
        prompt: InteractPrompt,
        window: DialogueWindow,
        audio: AudioOutput,
        voices: VoiceRegistry,
        trigger: Entity,
        player: Entity,
    }

    fn fixture_with_entries(entries: &[(&str, &str)]) -> Fixture {
        let mut voices = VoiceRegistry::new();
        let v = voices.add(VoiceList::new("test", vec!["clip.ogg".to_string()]));

        let mut world = World::new();
        let trigger = world.spawn((
            TriggerZone::new(0, 0, 2, 2, ActorKind::Player),
            DialogueSource {
                prompt_before: "Press".to_string(),
                prompt_after: "to talk".to_string(),
                indicator: IndicatorKind::Key('e'),
                titles: entries.iter().map(|(t, _)| t.to_string()).collect(),
                messages: entries.iter().map(|(_, m)| m.to_string()).collect(),
                voices: vec![v; entries.len()],
            },
        ));
        let player = world.spawn((Position::new(0, 0), ActorKind::Player));

        Fixture {
            world,
            manager: DialogueManager::new(),
            prompt: InteractPrompt::new(),
            window: DialogueWindow::new(),
            audio: AudioOutput::disabled(),
            voices,
            trigger,
            player,
        }
    }

    fn fixture() -> Fixture {
        fixture_with_entries(&[("A", "hi"), ("B", "bye")])
    }

    /// Run enough ticks to fully reveal a message of `chars` characters.
    fn reveal_fully(fx: &mut Fixture, chars: usize) {
        for _ in 0..chars + 1 {
            fx.window
                .tick(TYPE_REVEAL_INTERVAL, false, &fx.voices, &mut fx.audio);
        }
    }

    #[test]
    fn test_reset_ignores_non_current_trigger() {
        let mut fx = fixture();
        let stranger = fx.world.spawn(());
        fx.manager.set_current_trigger(fx.trigger);
        fx.manager.reset_trigger(stranger);
        assert_eq!(fx.manager.current_trigger(), Some(fx.trigger));
        fx.manager.reset_trigger(fx.trigger);
        assert_eq!(fx.manager.current_trigger(), None);
    }

    #[test]
    fn test_show_dialogue_requires_current_trigger() {
        let mut fx = fixture();
        fx.manager
            .show_dialogue(&fx.world, &mut fx.prompt, &mut fx.window, &mut fx.audio);
        assert!(!fx.manager.is_dialogue_shown());
        assert!(!fx.window.is_visible());
    }

    #[test]
    fn test_show_dialogue_refused_while_shown() {
        let mut fx = fixture();
        fx.manager.set_current_trigger(fx.trigger);
        fx.manager
            .show_dialogue(&fx.world, &mut fx.prompt, &mut fx.window, &mut fx.audio);
        assert!(fx.manager.is_dialogue_shown());
        assert_eq!(fx.window.entry_index(), 0);

        // a second show must not restart the session
        reveal_fully(&mut fx, 2);
        fx.manager
            .skip_message(&fx.world, &mut fx.prompt, &mut fx.window, &mut fx.audio);
        assert_eq!(fx.window.entry_index(), 1);
        fx.manager
            .show_dialogue(&fx.world, &mut fx.prompt, &mut fx.window, &mut fx.audio);
        assert_eq!(fx.window.entry_index(), 1);
    }

    #[test]
    fn test_mismatched_entry_arrays_do_not_open() {
        let mut fx = fixture();
        // corrupt the source so the widget refuses the session
        fx.world
            .get::<&mut DialogueSource>(fx.trigger)
            .unwrap()
            .titles
            .pop();
        fx.manager.set_current_trigger(fx.trigger);
        fx.manager
            .show_dialogue(&fx.world, &mut fx.prompt, &mut fx.window, &mut fx.audio);
        assert!(!fx.manager.is_dialogue_shown());
        assert!(!fx.window.is_visible());
    }

    #[test]
    fn test_skip_without_dialogue_is_noop() {
        let mut fx = fixture();
        fx.manager
            .skip_message(&fx.world, &mut fx.prompt, &mut fx.window, &mut fx.audio);
        assert!(!fx.manager.is_dialogue_shown());
    }

    #[test]
    fn test_enter_sets_trigger_and_shows_prompt() {
        let mut fx = fixture();
        let (trigger, player) = (fx.trigger, fx.player);
        handle_trigger_entered(&fx.world, &mut fx.manager, &mut fx.prompt, trigger, player);
        assert_eq!(fx.manager.current_trigger(), Some(trigger));
        assert!(fx.prompt.is_visible());
    }

    #[test]
    fn test_npc_does_not_activate_trigger() {
        let mut fx = fixture();
        let npc = fx.world.spawn((Position::new(0, 0), ActorKind::Npc));
        let trigger = fx.trigger;
        handle_trigger_entered(&fx.world, &mut fx.manager, &mut fx.prompt, trigger, npc);
        assert_eq!(fx.manager.current_trigger(), None);
        assert!(!fx.prompt.is_visible());
    }

    #[test]
    fn test_despawned_actor_is_ignored() {
        let mut fx = fixture();
        let (trigger, player) = (fx.trigger, fx.player);
        fx.world.despawn(player).unwrap();
        handle_trigger_entered(&fx.world, &mut fx.manager, &mut fx.prompt, trigger, player);
        assert_eq!(fx.manager.current_trigger(), None);
    }

    #[test]
    fn test_exit_clears_trigger_and_hides_prompt() {
        let mut fx = fixture();
        let (trigger, player) = (fx.trigger, fx.player);
        handle_trigger_entered(&fx.world, &mut fx.manager, &mut fx.prompt, trigger, player);
        handle_trigger_exited(&fx.world, &mut fx.manager, &mut fx.prompt, trigger, player);
        assert_eq!(fx.manager.current_trigger(), None);
        assert!(fx.prompt.is_fading_out());
    }

    #[test]
    fn test_full_two_entry_walkthrough() {
        let mut fx = fixture();
        let (trigger, player) = (fx.trigger, fx.player);

        handle_trigger_entered(&fx.world, &mut fx.manager, &mut fx.prompt, trigger, player);
        fx.manager
            .show_dialogue(&fx.world, &mut fx.prompt, &mut fx.window, &mut fx.audio);
        assert!(fx.manager.is_dialogue_shown());
        assert!(fx.window.is_visible());
        assert_eq!(fx.window.title(), "A");
        assert_eq!(fx.window.visible_message(), "");

        // reveal "hi" completely, then advance to entry 1
        reveal_fully(&mut fx, 2);
        assert_eq!(fx.window.visible_message(), "hi");
        fx.manager
            .skip_message(&fx.world, &mut fx.prompt, &mut fx.window, &mut fx.audio);
        assert!(fx.manager.is_dialogue_shown());
        assert_eq!(fx.window.entry_index(), 1);
        assert_eq!(fx.window.title(), "B");

        // skip mid-reveal force-completes "bye"
        fx.window
            .tick(TYPE_REVEAL_INTERVAL, false, &fx.voices, &mut fx.audio);
        fx.manager
            .skip_message(&fx.world, &mut fx.prompt, &mut fx.window, &mut fx.audio);
        assert!(fx.manager.is_dialogue_shown());
        assert_eq!(fx.window.visible_message(), "bye");

        // final skip dismisses and restores the prompt
        fx.manager
            .skip_message(&fx.world, &mut fx.prompt, &mut fx.window, &mut fx.audio);
        assert!(!fx.manager.is_dialogue_shown());
        assert!(!fx.window.is_visible());
        assert!(fx.prompt.is_visible());
    }
}
