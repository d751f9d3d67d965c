//! Pointer input delivered to the hive.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::enums::PointerPhase;
use crate::geometry::Vec2;
use crate::time::Timestamp;

/// One pointer event in canvas coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct PointerEvent {
    /// Down, move or up.
    pub phase: PointerPhase,
    /// Position relative to the hive canvas origin.
    pub position: Vec2,
    /// Host time at which the event was observed.
    pub at: Timestamp,
}

impl PointerEvent {
    /// A pointer-down event.
    pub const fn down(position: Vec2, at: Timestamp) -> Self {
        Self { phase: PointerPhase::Down, position, at }
    }

    /// A pointer-move event.
    pub const fn moved(position: Vec2, at: Timestamp) -> Self {
        Self { phase: PointerPhase::Move, position, at }
    }

    /// A pointer-up event.
    pub const fn up(position: Vec2, at: Timestamp) -> Self {
        Self { phase: PointerPhase::Up, position, at }
    }
}
