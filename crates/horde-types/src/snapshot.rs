//! Application state summary.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Point-in-time summary of the keyboard, for debugging consoles and the
/// headless driver's final report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct AppSnapshot {
    /// Whether haptic feedback is currently enabled.
    pub haptics_enabled: bool,
    /// Whether the swarm is in chorus mode.
    pub chorus_mode: bool,
    /// Number of agents in the swarm.
    pub agent_count: usize,
    /// Committed text followed by the pending word.
    pub text: String,
}
