//! Headless driver for the Horde Keyboard.
//!
//! Replays a session script against a fully wired keyboard (swarm, hive,
//! output and haptics) at the configured frame rate and prints the final
//! [`AppSnapshot`](horde_types::AppSnapshot) as JSON on stdout. Logs go to
//! stderr.
//!
//! ```text
//! horde-engine [SCRIPT]
//! ```
//!
//! Without `SCRIPT` the steps are read from stdin. Configuration comes from
//! the file named by `HORDE_CONFIG`, or `horde-config.yaml` in the working
//! directory, and falls back to the defaults when that file is absent.
//!
//! # Startup Sequence
//!
//! 1. Load configuration
//! 2. Initialize structured logging (tracing)
//! 3. Read and parse the session script
//! 4. Build the application context
//! 5. Replay the script
//! 6. Print the snapshot

mod error;
mod script;

use std::io::Read;
use std::path::{Path, PathBuf};

use horde_app::{AppConfig, AppContext};
use horde_core::TracingDriver;
use horde_types::Timestamp;
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::error::EngineError;
use crate::script::{Driver, ScriptError};

/// Environment variable naming the configuration file.
const CONFIG_ENV: &str = "HORDE_CONFIG";

/// Configuration file used when `HORDE_CONFIG` is unset.
const DEFAULT_CONFIG_PATH: &str = "horde-config.yaml";

/// Application entry point for the headless driver.
///
/// # Errors
///
/// Returns an error if the configuration or the script cannot be loaded, or
/// the report cannot be written.
fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 1. Load configuration.
    let config_path = std::env::var_os(CONFIG_ENV)
        .map_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH), PathBuf::from);
    let (config, loaded) = load_config(&config_path)?;

    // 2. Initialize structured logging.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.logging.level)),
        )
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();

    info!("horde-engine starting");
    if loaded {
        info!(path = %config_path.display(), "Configuration loaded");
    } else {
        info!(path = %config_path.display(), "Config file not found, using defaults");
    }
    info!(
        seed = config.seed,
        frame_interval_ms = config.engine.frame_interval_ms,
        agents = config.swarm.initial_agents,
        hex_radius = config.hive.hex_radius,
        "Configuration resolved"
    );

    // 3. Read and parse the script.
    let source = read_script(std::env::args_os().nth(1).map(PathBuf::from))?;
    let steps = script::parse(&source).map_err(EngineError::from)?;
    info!(steps = steps.len(), "Script parsed");

    // 4. Build the application context.
    let app = AppContext::new(&config, TracingDriver, Timestamp::ZERO).map_err(EngineError::from)?;

    // 5. Replay.
    let mut driver = Driver::new(app, config.engine.frame_interval_ms);
    driver.run(&steps);
    info!(
        frames = driver.frames(),
        at_ms = driver.now().as_millis(),
        "Script replayed"
    );

    // 6. Report.
    let report = serde_json::to_string_pretty(&driver.app().snapshot()).map_err(EngineError::from)?;
    println!("{report}");
    Ok(())
}

/// Load configuration from `path`, or the defaults if the file is missing.
///
/// Returns the configuration and whether it came from the file.
fn load_config(path: &Path) -> Result<(AppConfig, bool), EngineError> {
    if path.exists() {
        let config = AppConfig::from_file(path)?;
        Ok((config, true))
    } else {
        let mut config = AppConfig::default();
        config.apply_env_overrides();
        Ok((config, false))
    }
}

/// Read the script from `path`, or from stdin when no path is given.
fn read_script(path: Option<PathBuf>) -> Result<String, EngineError> {
    let source = match path {
        Some(path) => std::fs::read_to_string(path).map_err(ScriptError::from)?,
        None => {
            let mut source = String::new();
            let _ = std::io::stdin()
                .read_to_string(&mut source)
                .map_err(ScriptError::from)?;
            source
        }
    };
    Ok(source)
}
