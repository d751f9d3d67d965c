//! Error types for the `horde-hive` crate.
//!
//! Gestures never fail; stray input is ignored. Only building a hive from a
//! bad configuration is an error.

/// Errors that can occur when building a hive.
#[derive(Debug, thiserror::Error)]
pub enum HiveError {
    /// The configuration cannot produce a usable tessellation.
    #[error("invalid hive configuration: {reason}")]
    InvalidConfig {
        /// Explanation of what is wrong with the configuration.
        reason: String,
    },
}
