//! Error types for the headless driver binary.
//!
//! [`EngineError`] is the top-level error type that wraps every failure
//! mode between reading the configuration and printing the final report.

use crate::script::ScriptError;

/// Top-level error for the headless driver.
///
/// Each variant wraps a specific subsystem error, providing a single
/// error type that `main` can propagate with `?`.
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    /// Configuration loading failed.
    #[error("config error: {source}")]
    Config {
        /// The underlying config error.
        #[from]
        source: horde_app::ConfigError,
    },

    /// The application context could not be built.
    #[error("app error: {source}")]
    App {
        /// The underlying application error.
        #[from]
        source: horde_app::AppError,
    },

    /// The session script could not be read or parsed.
    #[error("script error: {source}")]
    Script {
        /// The underlying script error.
        #[from]
        source: ScriptError,
    },

    /// The final report could not be serialized.
    #[error("report error: {source}")]
    Report {
        /// The underlying JSON error.
        #[from]
        source: serde_json::Error,
    },
}
