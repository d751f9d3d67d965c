//! Gesture state machine types.
//!
//! ```text
//!            down on tile
//!   Idle ─────────────────► Pressed ──── long press ───► Seeded
//!    ▲                         │                            │
//!    │                         └──── move to other tile ────┤
//!    │                                      ▼               │
//!    └──────────── up (any state) ──── Dragging ◄───────────┘
//! ```
//!
//! Every non-idle state carries the [`Session`] of the gesture in progress,
//! so an idle hive cannot hold a stale anchor or path.

use horde_core::TimerToken;
use horde_types::Timestamp;

use crate::tile::TileId;

/// A gesture from pointer-down to pointer-up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    /// Tile under the pointer-down.
    pub anchor: TileId,
    /// Time of the pointer-down.
    pub started_at: Timestamp,
    /// Visited tiles without duplicates, anchor first.
    pub path: Vec<TileId>,
    /// Pending long-press timer.
    pub long_press: TimerToken,
}

impl Session {
    /// Start a session anchored on `anchor`.
    pub fn new(anchor: TileId, started_at: Timestamp, long_press: TimerToken) -> Self {
        Self { anchor, started_at, path: vec![anchor], long_press }
    }

    /// Append `tile` to the path unless already visited. Returns whether it
    /// was appended.
    pub fn visit(&mut self, tile: TileId) -> bool {
        if self.path.contains(&tile) {
            false
        } else {
            self.path.push(tile);
            true
        }
    }
}

/// Where the hive is in a gesture.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum GestureState {
    /// No pointer is down on a tile.
    #[default]
    Idle,
    /// Pointer down on the anchor, not yet moved or held long enough.
    Pressed(Session),
    /// Held long enough to seed the anchor; not moved.
    Seeded(Session),
    /// Moved onto at least one tile other than the anchor.
    Dragging(Session),
}

impl GestureState {
    /// The session in progress, if any.
    pub const fn session(&self) -> Option<&Session> {
        match self {
            Self::Idle => None,
            Self::Pressed(s) | Self::Seeded(s) | Self::Dragging(s) => Some(s),
        }
    }

    /// Mutable access to the session in progress, if any.
    pub const fn session_mut(&mut self) -> Option<&mut Session> {
        match self {
            Self::Idle => None,
            Self::Pressed(s) | Self::Seeded(s) | Self::Dragging(s) => Some(s),
        }
    }

    /// Whether no gesture is in progress.
    pub const fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    /// Whether the gesture has become a drag.
    pub const fn is_dragging(&self) -> bool {
        matches!(self, Self::Dragging(_))
    }

    /// Short name for logging.
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Pressed(_) => "pressed",
            Self::Seeded(_) => "seeded",
            Self::Dragging(_) => "dragging",
        }
    }
}
