//! Enumeration types for the Horde Keyboard engine.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// A semantic feedback event, mapped to a vibration pattern by the notifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export, export_to = "bindings/")]
pub enum HapticKind {
    /// Light tap: touching a tile, committing a single character.
    Tap,
    /// Medium press: a drag selection has started.
    Press,
    /// Long press: a tile was seeded.
    LongPress,
    /// Selection: a dragged word was committed.
    Select,
    /// Error feedback.
    Error,
    /// Subtle pulse from simulated swarm activity.
    AmbientActivity,
}

impl HapticKind {
    /// Every kind, in declaration order.
    pub const ALL: [Self; 6] = [
        Self::Tap,
        Self::Press,
        Self::LongPress,
        Self::Select,
        Self::Error,
        Self::AmbientActivity,
    ];
}

/// Which half of the canvas a tile belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export, export_to = "bindings/")]
pub enum HiveSide {
    /// Tile center lies left of the canvas midline.
    Left,
    /// Tile center lies on or right of the canvas midline.
    Right,
}

/// Phase of a pointer (mouse or touch) event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export, export_to = "bindings/")]
pub enum PointerPhase {
    /// Button pressed or finger touched down.
    Down,
    /// Pointer moved.
    Move,
    /// Button released or finger lifted.
    Up,
}

/// Visual state of a tile in a render pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export, export_to = "bindings/")]
pub enum TileStyle {
    /// Untouched tile.
    Idle,
    /// Tile marked by a long press.
    Seeded,
    /// Tile touched during the current gesture (wins over seeded).
    Active,
}
