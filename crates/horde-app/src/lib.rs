//! Application wiring for the Horde Keyboard.
//!
//! Loads configuration, builds the swarm and the hive from it, and routes
//! pointer events, key presses and frame ticks to them through a single
//! [`AppContext`].
//!
//! # Modules
//!
//! - [`banner`] -- Startup instructions typed into the output
//! - [`command`] -- Control commands and keyboard shortcuts
//! - [`config`] -- YAML configuration loading ([`AppConfig`])
//! - [`context`] -- The application context ([`AppContext`])
//! - [`error`] -- Error types ([`AppError`])

pub mod banner;
pub mod command;
pub mod config;
pub mod context;
pub mod error;

// Re-export primary types at crate root for convenience.
pub use command::{Command, Key, KeyPress};
pub use config::{AppConfig, ConfigError, EngineConfig, LoggingConfig, OutputConfig, ViewportConfig};
pub use context::AppContext;
pub use error::AppError;
