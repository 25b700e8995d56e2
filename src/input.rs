//! Input handling and player control.
//!
//! All game actions are edge-triggered: they fire on the key press, not
//! while the key is held.

use std::collections::HashSet;
use winit::keyboard::KeyCode;

/// Input state tracking
pub struct InputState {
    pub keys_held: HashSet<KeyCode>,
    /// Presses since the last `process_keyboard` call
    pressed: Vec<KeyCode>,
}

impl InputState {
    pub fn new() -> Self {
        Self {
            keys_held: HashSet::new(),
            pressed: Vec::new(),
        }
    }

    pub fn key_down(&mut self, key: KeyCode) {
        // winit repeats Pressed while a key is held; only record the edge
        if self.keys_held.insert(key) {
            self.pressed.push(key);
        }
    }

    pub fn key_up(&mut self, key: KeyCode) {
        self.keys_held.remove(&key);
    }
}

impl Default for InputState {
    fn default() -> Self {
        Self::new()
    }
}

/// Result of processing input
#[derive(Default)]
pub struct InputResult {
    /// Movement to execute (dx, dy)
    pub movement: Option<(i32, i32)>,
    /// Player pressed the interact key (talk / skip)
    pub interact: bool,
    /// Player wants to toggle the host pause
    pub toggle_pause: bool,
    /// Player wants to toggle the trigger-zone overlay
    pub toggle_zones: bool,
    /// Player wants to toggle fullscreen
    pub toggle_fullscreen: bool,
}

/// Drain this frame's key presses into game actions.
pub fn process_keyboard(input: &mut InputState) -> InputResult {
    let mut result = InputResult::default();

    for key in input.pressed.drain(..) {
        match key {
            KeyCode::KeyW | KeyCode::ArrowUp => result.movement = Some((0, -1)),
            KeyCode::KeyS | KeyCode::ArrowDown => result.movement = Some((0, 1)),
            KeyCode::KeyA | KeyCode::ArrowLeft => result.movement = Some((-1, 0)),
            KeyCode::KeyD | KeyCode::ArrowRight => result.movement = Some((1, 0)),
            KeyCode::KeyE | KeyCode::Space => result.interact = true,
            KeyCode::KeyP => result.toggle_pause = true,
            KeyCode::KeyT => result.toggle_zones = true,
            KeyCode::F11 => result.toggle_fullscreen = true,
            _ => {}
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_press_is_edge_triggered() {
        let mut input = InputState::new();
        input.key_down(KeyCode::KeyE);
        input.key_down(KeyCode::KeyE); // held repeat
        let result = process_keyboard(&mut input);
        assert!(result.interact);

        // no new press, no new action
        let result = process_keyboard(&mut input);
        assert!(!result.interact);

        // release and press again fires again
        input.key_up(KeyCode::KeyE);
        input.key_down(KeyCode::KeyE);
        let result = process_keyboard(&mut input);
        assert!(result.interact);
    }

    #[test]
    fn test_movement_keys() {
        let mut input = InputState::new();
        input.key_down(KeyCode::ArrowLeft);
        let result = process_keyboard(&mut input);
        assert_eq!(result.movement, Some((-1, 0)));
    }
}
