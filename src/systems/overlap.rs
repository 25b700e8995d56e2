//! Trigger-zone occupancy tracking.
//!
//! Compares actor positions against trigger volumes once per frame and
//! emits enter/exit events on transitions. Who may actually activate a
//! zone is decided downstream by the dialogue handlers; this system only
//! reports geometry.

use std::collections::HashSet;

use hecs::{Entity, World};

use crate::components::{ActorKind, Position, TriggerZone};
use crate::events::{EventQueue, GameEvent};

/// Remembers which (zone, actor) pairs overlapped last frame
#[derive(Default)]
pub struct OverlapTracker {
    inside: HashSet<(Entity, Entity)>,
}

impl OverlapTracker {
    pub fn new() -> Self {
        Self {
            inside: HashSet::new(),
        }
    }
}

/// Emit `TriggerExited`/`TriggerEntered` events for every occupancy
/// change since the previous frame. Exits are emitted before enters so
/// that leaving one zone and entering another in the same step arrives
/// in the natural order.
pub fn detect_overlaps(world: &World, tracker: &mut OverlapTracker, events: &mut EventQueue) {
    puffin::profile_function!();

    let actors: Vec<(Entity, Position)> = world
        .query::<(&Position, &ActorKind)>()
        .iter()
        .map(|(entity, (pos, _))| (entity, *pos))
        .collect();

    let mut now_inside = HashSet::new();
    for (trigger, zone) in world.query::<&TriggerZone>().iter() {
        for (actor, pos) in &actors {
            if zone.contains(pos) {
                now_inside.insert((trigger, *actor));
            }
        }
    }

    for &(trigger, other) in tracker.inside.difference(&now_inside) {
        events.push(GameEvent::TriggerExited { trigger, other });
    }
    for &(trigger, other) in now_inside.difference(&tracker.inside) {
        events.push(GameEvent::TriggerEntered { trigger, other });
    }

    tracker.inside = now_inside;
}
