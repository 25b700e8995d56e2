//! Level definitions loaded from JSON.
//!
//! Raw serde structs are validated and converted into world entities in
//! two phases: everything fallible happens before the first spawn, so a
//! rejected file leaves the world untouched.

use glam::Vec3;
use hecs::{Entity, World};
use serde::Deserialize;

use crate::components::{
    ActorKind, BlocksMovement, DialogueSource, IndicatorKind, Player, Position, Sprite,
    TriggerZone,
};
use crate::constants::*;
use crate::grid::Grid;
use crate::voice::{VoiceList, VoiceRegistry};

/// Built-in copy of the shipped level, used when the file is missing
const DEFAULT_LEVEL_JSON: &str = include_str!("../assets/level.json");

#[derive(Deserialize)]
struct RawLevel {
    #[serde(default)]
    room: RawRoom,
    player: RawActor,
    voice_lists: Vec<RawVoiceList>,
    triggers: Vec<RawTrigger>,
}

#[derive(Deserialize)]
struct RawRoom {
    width: usize,
    height: usize,
}

impl Default for RawRoom {
    fn default() -> Self {
        Self {
            width: ROOM_WIDTH,
            height: ROOM_HEIGHT,
        }
    }
}

#[derive(Deserialize)]
struct RawActor {
    x: i32,
    y: i32,
    color: [f32; 3],
}

#[derive(Deserialize)]
struct RawVoiceList {
    name: String,
    clips: Vec<String>,
}

#[derive(Deserialize)]
struct RawZone {
    x: i32,
    y: i32,
    width: i32,
    height: i32,
}

#[derive(Deserialize)]
struct RawTrigger {
    name: String,
    zone: RawZone,
    npc: Option<RawActor>,
    prompt_before: String,
    #[serde(default)]
    prompt_after: String,
    indicator: IndicatorKind,
    entries: Vec<RawEntry>,
}

#[derive(Deserialize)]
struct RawEntry {
    title: String,
    message: String,
    voice: String,
}

/// A fully built level: the room, the player entity, and the voice lists
/// referenced by its dialogue triggers.
#[derive(Debug)]
pub struct Level {
    pub grid: Grid,
    pub player: Entity,
    pub voices: VoiceRegistry,
}

/// Load the level file from disk, falling back to the embedded copy.
pub fn load_or_default(world: &mut World) -> Level {
    match std::fs::read_to_string(LEVEL_PATH) {
        Ok(text) => match parse_and_build(&text, world) {
            Ok(level) => {
                log::info!("loaded level from {LEVEL_PATH}");
                return level;
            }
            Err(err) => log::warn!("ignoring {LEVEL_PATH}: {err}"),
        },
        Err(err) => log::info!("no level file ({err}), using built-in level"),
    }

    parse_and_build(DEFAULT_LEVEL_JSON, world).expect("built-in level must build")
}

/// Parse a JSON level definition and spawn its entities.
pub fn parse_and_build(text: &str, world: &mut World) -> Result<Level, String> {
    let raw: RawLevel =
        serde_json::from_str(text).map_err(|err| format!("invalid level JSON: {err}"))?;
    build(raw, world)
}

fn build(raw: RawLevel, world: &mut World) -> Result<Level, String> {
    if raw.room.width < 3 || raw.room.height < 3 {
        return Err(format!(
            "room {}x{} is too small to hold a floor",
            raw.room.width, raw.room.height
        ));
    }
    let grid = Grid::new_room(raw.room.width, raw.room.height);

    if !grid.is_walkable(raw.player.x, raw.player.y) {
        return Err(format!(
            "player start ({}, {}) is not walkable",
            raw.player.x, raw.player.y
        ));
    }

    let mut voices = VoiceRegistry::new();
    let mut voice_ids = std::collections::HashMap::new();
    for list in &raw.voice_lists {
        if list.clips.is_empty() {
            return Err(format!("voice list '{}' has no clips", list.name));
        }
        if voice_ids.contains_key(list.name.as_str()) {
            return Err(format!("duplicate voice list '{}'", list.name));
        }
        let id = voices.add(VoiceList::new(list.name.clone(), list.clips.clone()));
        voice_ids.insert(list.name.as_str(), id);
    }

    // Resolve every trigger before spawning anything
    let mut prepared = Vec::with_capacity(raw.triggers.len());
    for trigger in &raw.triggers {
        if trigger.zone.width <= 0 || trigger.zone.height <= 0 {
            return Err(format!("trigger '{}' has an empty zone", trigger.name));
        }
        if trigger.entries.is_empty() {
            return Err(format!("trigger '{}' has no dialogue entries", trigger.name));
        }

        let mut titles = Vec::with_capacity(trigger.entries.len());
        let mut messages = Vec::with_capacity(trigger.entries.len());
        let mut entry_voices = Vec::with_capacity(trigger.entries.len());
        for entry in &trigger.entries {
            let id = voice_ids.get(entry.voice.as_str()).copied().ok_or_else(|| {
                format!(
                    "trigger '{}' references unknown voice list '{}'",
                    trigger.name, entry.voice
                )
            })?;
            titles.push(entry.title.clone());
            messages.push(entry.message.clone());
            entry_voices.push(id);
        }

        let zone = TriggerZone::new(
            trigger.zone.x,
            trigger.zone.y,
            trigger.zone.width,
            trigger.zone.height,
            ActorKind::Player,
        );
        let source = DialogueSource {
            prompt_before: trigger.prompt_before.clone(),
            prompt_after: trigger.prompt_after.clone(),
            indicator: trigger.indicator,
            titles,
            messages,
            voices: entry_voices,
        };
        prepared.push((zone, source, trigger.npc.as_ref().map(actor_parts)));
    }

    // All validation passed; now mutate the world
    let player = world.spawn((
        Position::new(raw.player.x, raw.player.y),
        Sprite::new(Vec3::from_array(raw.player.color)),
        Player,
        ActorKind::Player,
    ));

    for (zone, source, npc) in prepared {
        world.spawn((zone, source));
        if let Some((pos, sprite)) = npc {
            world.spawn((pos, sprite, ActorKind::Npc, BlocksMovement));
        }
    }

    Ok(Level {
        grid,
        player,
        voices,
    })
}

fn actor_parts(actor: &RawActor) -> (Position, Sprite) {
    (
        Position::new(actor.x, actor.y),
        Sprite::new(Vec3::from_array(actor.color)),
    )
}
