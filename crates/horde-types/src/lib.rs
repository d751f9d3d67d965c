//! Shared type definitions for the Horde Keyboard engine.
//!
//! This crate is the single source of truth for the values that cross crate
//! boundaries: identifiers, geometry, timestamps, input events and the frame
//! descriptions handed to whatever draws the hive and the swarm. Types that
//! a browser front end consumes flow to `TypeScript` via `ts-rs`.
//!
//! # Modules
//!
//! - [`ids`] -- Type-safe identifier for swarm agents
//! - [`geometry`] -- [`Vec2`] and [`Viewport`]
//! - [`time`] -- Millisecond [`Timestamp`]
//! - [`enums`] -- Haptic kinds, hive sides, pointer phases, tile styles
//! - [`input`] -- Pointer events delivered to the hive
//! - [`frames`] -- Draw descriptions produced by each render pass
//! - [`snapshot`] -- Application state summary

pub mod enums;
pub mod frames;
pub mod geometry;
pub mod ids;
pub mod input;
pub mod snapshot;
pub mod time;

// Re-export all public types at crate root for convenience.
pub use enums::{HapticKind, HiveSide, PointerPhase, TileStyle};
pub use frames::{AppFrame, HiveFrame, MoteSprite, PressRing, SwarmFrame, TileSprite, TrailStroke};
pub use geometry::{Vec2, Viewport};
pub use ids::AgentId;
pub use input::PointerEvent;
pub use snapshot::AppSnapshot;
pub use time::Timestamp;
