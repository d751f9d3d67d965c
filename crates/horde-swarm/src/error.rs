//! Error types for the `horde-swarm` crate.
//!
//! Running the simulation never fails. Only construction can, when the
//! configuration describes an impossible swarm.

/// Errors that can occur when building a swarm.
#[derive(Debug, thiserror::Error)]
pub enum SwarmError {
    /// The configuration is inconsistent (e.g. a floor above the initial count).
    #[error("invalid swarm configuration: {reason}")]
    InvalidConfig {
        /// Explanation of what is wrong with the configuration.
        reason: String,
    },
}
