//! Flocking swarm simulation for the Horde Keyboard engine.
//!
//! The horde is purely decorative: a few dozen motes flock across their
//! canvas, leave trails, and now and then flash an expanding ring as if they
//! were typing too. Nothing here reads user input.
//!
//! # Modules
//!
//! - [`agent`] -- Agent state, trail ring buffer and press effects
//! - [`config`] -- Tunable parameters ([`SwarmConfig`])
//! - [`error`] -- Error types ([`SwarmError`])
//! - [`flocking`] -- Separation, alignment and cohesion rules
//! - [`render`] -- Conversion of agent state into draw primitives
//! - [`swarm`] -- The simulation itself ([`Swarm`])

pub mod agent;
pub mod config;
pub mod error;
pub mod flocking;
pub mod render;
pub mod swarm;

// Re-export primary types at crate root for convenience.
pub use agent::{Agent, PressEffect, Trail, TrailSample};
pub use config::SwarmConfig;
pub use error::SwarmError;
pub use swarm::Swarm;
