//! Game event system for decoupled communication between systems.
//!
//! The overlap system emits events, the dialogue handlers consume them.
//! This keeps detection and reaction apart without tight coupling.

use hecs::Entity;

/// Game events that systems can emit and subscribe to
#[derive(Debug, Clone, Copy)]
pub enum GameEvent {
    /// An actor stepped into a trigger zone
    TriggerEntered {
        trigger: Entity,
        other: Entity,
    },
    /// An actor stepped out of a trigger zone
    TriggerExited {
        trigger: Entity,
        other: Entity,
    },
}

/// Simple event queue - events are pushed during update, processed at end of frame
#[derive(Default)]
pub struct EventQueue {
    events: Vec<GameEvent>,
}

impl EventQueue {
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    /// Push an event to be processed later
    pub fn push(&mut self, event: GameEvent) {
        self.events.push(event);
    }

    /// Drain all events for processing
    pub fn drain(&mut self) -> impl Iterator<Item = GameEvent> + '_ {
        self.events.drain(..)
    }

    /// Check if there are pending events
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}
