//! Hex tile input engine for the Horde Keyboard.
//!
//! Two hives of hexagonal keys share one canvas: tiles left of the midline
//! carry letters and digits, tiles right of it the remaining letters and
//! punctuation. A tap types a tile's label, a long press seeds the tile, and
//! a drag across several tiles types their labels as one word.
//!
//! # Modules
//!
//! - [`config`] -- Tile radius, long-press threshold and label sets
//!   ([`HiveConfig`]).
//! - [`error`] -- Error types ([`HiveError`]).
//! - [`gesture`] -- Gesture states and the session they carry.
//! - [`hive`] -- The engine itself ([`Hive`]).
//! - [`labels`] -- Character cycling and the word-mode vocabularies.
//! - [`tessellation`] -- Offset hex grid geometry.
//! - [`tile`] -- Tile state and hit circles.

pub mod config;
pub mod error;
pub mod gesture;
pub mod hive;
pub mod labels;
pub mod tessellation;
pub mod tile;

// Re-export primary types at crate root for convenience.
pub use config::{HiveConfig, LabelMode};
pub use error::HiveError;
pub use gesture::{GestureState, Session};
pub use hive::Hive;
pub use labels::{Expansion, Impulse, LabelSource, SEED_LABEL};
pub use tessellation::GridLayout;
pub use tile::{Tile, TileId};
