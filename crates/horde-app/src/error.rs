//! Error types for the `horde-app` crate.

use crate::config::ConfigError;

/// Errors that can occur while building or driving the application.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Configuration loading failed.
    #[error("config error: {source}")]
    Config {
        /// The underlying config error.
        #[from]
        source: ConfigError,
    },

    /// The swarm could not be built.
    #[error("swarm error: {source}")]
    Swarm {
        /// The underlying swarm error.
        #[from]
        source: horde_swarm::SwarmError,
    },

    /// The hive could not be built.
    #[error("hive error: {source}")]
    Hive {
        /// The underlying hive error.
        #[from]
        source: horde_hive::HiveError,
    },

    /// A key description could not be parsed.
    #[error("unrecognised key: {input:?}")]
    UnknownKey {
        /// The text that failed to parse.
        input: String,
    },
}
