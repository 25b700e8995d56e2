use glam::Vec3;
use serde::Deserialize;

use crate::voice::VoiceListId;

/// Position component - world coordinates (grid-based)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Sprite component - visual representation
#[derive(Debug, Clone, Copy)]
pub struct Sprite {
    pub color: Vec3,
}

impl Sprite {
    pub fn new(color: Vec3) -> Self {
        Self { color }
    }
}

/// Player marker component
#[derive(Debug, Clone, Copy)]
pub struct Player;

/// Marker for entities that block movement into their tile
#[derive(Debug, Clone, Copy)]
pub struct BlocksMovement;

/// What kind of actor an entity is, used by triggers to filter who
/// activates them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActorKind {
    Player,
    Npc,
}

/// Which input glyph the interact prompt shows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IndicatorKind {
    /// A keyboard key cap, e.g. `E`
    Key(char),
    MouseLeft,
}

impl IndicatorKind {
    /// Text rendered inside the key cap
    pub fn label(&self) -> String {
        match self {
            IndicatorKind::Key(c) => c.to_uppercase().to_string(),
            IndicatorKind::MouseLeft => "LMB".to_string(),
        }
    }
}

/// An axis-aligned tile rectangle that fires enter/exit events when an
/// actor of the configured kind steps in or out.
#[derive(Debug, Clone, Copy)]
pub struct TriggerZone {
    pub min_x: i32,
    pub min_y: i32,
    pub max_x: i32,
    pub max_y: i32,
    /// Only actors of this kind activate the zone
    pub activator: ActorKind,
}

impl TriggerZone {
    pub fn new(x: i32, y: i32, width: i32, height: i32, activator: ActorKind) -> Self {
        Self {
            min_x: x,
            min_y: y,
            max_x: x + width.max(1) - 1,
            max_y: y + height.max(1) - 1,
            activator,
        }
    }

    pub fn contains(&self, pos: &Position) -> bool {
        pos.x >= self.min_x && pos.x <= self.max_x && pos.y >= self.min_y && pos.y <= self.max_y
    }
}

/// Dialogue configuration carried by a trigger entity.
///
/// The three entry arrays are parallel and must be equal length; the
/// dialogue window re-validates this when a session starts.
#[derive(Debug, Clone)]
pub struct DialogueSource {
    /// Text before the input indicator in the interact prompt
    pub prompt_before: String,
    /// Text after the input indicator in the interact prompt
    pub prompt_after: String,
    pub indicator: IndicatorKind,
    pub titles: Vec<String>,
    pub messages: Vec<String>,
    pub voices: Vec<VoiceListId>,
}
