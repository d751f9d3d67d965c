//! Configuration loading and typed config structures for the Horde Keyboard.
//!
//! The configuration lives in `horde-config.yaml`. Every section and every
//! field is optional; omitted values fall back to the defaults documented on
//! each field, which reproduce the classic keyboard.

use std::path::Path;

use horde_core::HapticsConfig;
use horde_hive::HiveConfig;
use horde_swarm::SwarmConfig;
use horde_types::Viewport;
use serde::Deserialize;

/// Environment variable overriding [`AppConfig::seed`].
pub const SEED_ENV: &str = "HORDE_SEED";

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Failed to read the configuration file from disk.
    #[error("failed to read config file: {source}")]
    Io {
        /// The underlying I/O error.
        #[from]
        source: std::io::Error,
    },

    /// Failed to parse YAML content.
    #[error("failed to parse config YAML: {source}")]
    Yaml {
        /// The underlying YAML parse error.
        source: serde_yml::Error,
    },
}

impl From<serde_yml::Error> for ConfigError {
    fn from(source: serde_yml::Error) -> Self {
        Self::Yaml { source }
    }
}

/// Top-level configuration, mirroring `horde-config.yaml`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AppConfig {
    /// Seed for every random stream in the session (default: 42).
    #[serde(default = "default_seed")]
    pub seed: u64,

    /// Flocking simulation parameters.
    #[serde(default)]
    pub swarm: SwarmConfig,

    /// Hex input engine parameters.
    #[serde(default)]
    pub hive: HiveConfig,

    /// Haptic feedback settings.
    #[serde(default)]
    pub haptics: HapticsConfig,

    /// Output area settings.
    #[serde(default)]
    pub output: OutputConfig,

    /// Canvas sizes.
    #[serde(default)]
    pub viewport: ViewportConfig,

    /// Frame loop settings for the headless driver.
    #[serde(default)]
    pub engine: EngineConfig,

    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            seed: default_seed(),
            swarm: SwarmConfig::default(),
            hive: HiveConfig::default(),
            haptics: HapticsConfig::default(),
            output: OutputConfig::default(),
            viewport: ViewportConfig::default(),
            engine: EngineConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

impl AppConfig {
    /// Load configuration from a YAML file at the given path.
    ///
    /// `HORDE_SEED`, when set to an integer, overrides `seed`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file cannot be read, or
    /// [`ConfigError::Yaml`] if the content is not valid YAML.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        let mut config = Self::parse(&contents)?;
        config.apply_env_overrides();
        Ok(config)
    }

    /// Parse configuration from a YAML string. An empty document yields the
    /// defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Yaml`] if the string is not valid YAML.
    pub fn parse(yaml: &str) -> Result<Self, ConfigError> {
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yml::from_str(yaml)?)
    }

    /// Apply `HORDE_SEED` from the environment. Unparseable values are
    /// ignored.
    pub fn apply_env_overrides(&mut self) {
        if let Some(seed) = std::env::var(SEED_ENV).ok().and_then(|v| v.trim().parse().ok()) {
            self.seed = seed;
        }
    }
}

/// Output area settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct OutputConfig {
    /// Type the startup banner into the output (default: true).
    #[serde(default = "default_true")]
    pub show_instructions: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self { show_instructions: true }
    }
}

/// Canvas sizes in canvas units.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct ViewportConfig {
    /// The hive canvas (default: 600 x 300).
    #[serde(default = "default_hive_viewport")]
    pub hive: Viewport,

    /// The horde canvas (default: 800 x 600).
    #[serde(default = "default_horde_viewport")]
    pub horde: Viewport,
}

impl Default for ViewportConfig {
    fn default() -> Self {
        Self {
            hive: default_hive_viewport(),
            horde: default_horde_viewport(),
        }
    }
}

/// Frame loop settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct EngineConfig {
    /// Milliseconds between frames (default: 16, about 60 frames per second).
    #[serde(default = "default_frame_interval_ms")]
    pub frame_interval_ms: u64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self { frame_interval_ms: default_frame_interval_ms() }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoggingConfig {
    /// Log level or filter directive used when `RUST_LOG` is unset
    /// (default: `info`).
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { level: default_log_level() }
    }
}

const fn default_seed() -> u64 {
    42
}

const fn default_true() -> bool {
    true
}

const fn default_hive_viewport() -> Viewport {
    Viewport::new(600.0, 300.0)
}

const fn default_horde_viewport() -> Viewport {
    Viewport::new(800.0, 600.0)
}

const fn default_frame_interval_ms() -> u64 {
    16
}

fn default_log_level() -> String {
    String::from("info")
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use horde_hive::LabelMode;

    use super::*;

    #[test]
    fn default_config_is_classic() {
        let config = AppConfig::default();
        assert_eq!(config.seed, 42);
        assert_eq!(config.swarm.initial_agents, 50);
        assert!((config.hive.hex_radius - 25.0).abs() < f64::EPSILON);
        assert!(config.haptics.enabled);
        assert!(config.output.show_instructions);
        assert_eq!(config.viewport.hive, Viewport::new(600.0, 300.0));
        assert_eq!(config.engine.frame_interval_ms, 16);
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn empty_document_is_default() {
        assert_eq!(AppConfig::parse("").unwrap(), AppConfig::default());
        assert_eq!(AppConfig::parse("{}").unwrap(), AppConfig::default());
    }

    #[test]
    fn parse_full_yaml() {
        let yaml = r"
seed: 7
swarm:
  initial_agents: 20
  min_agents: 5
  chorus_share_pct: 50
hive:
  hex_radius: 30
  labels: words
haptics:
  enabled: false
output:
  show_instructions: false
viewport:
  hive: { width: 320, height: 240 }
  horde: { width: 1024, height: 768 }
engine:
  frame_interval_ms: 33
logging:
  level: debug
";
        let config = AppConfig::parse(yaml).unwrap();
        assert_eq!(config.seed, 7);
        assert_eq!(config.swarm.initial_agents, 20);
        assert_eq!(config.swarm.min_agents, 5);
        assert_eq!(config.swarm.chorus_share_pct, 50);
        assert_eq!(config.swarm.trail_capacity, 30);
        assert_eq!(config.hive.labels, LabelMode::Words);
        assert!(!config.haptics.enabled);
        assert!(!config.output.show_instructions);
        assert_eq!(config.viewport.hive, Viewport::new(320.0, 240.0));
        assert_eq!(config.viewport.horde, Viewport::new(1024.0, 768.0));
        assert_eq!(config.engine.frame_interval_ms, 33);
        assert_eq!(config.logging.level, "debug");
    }

    #[test]
    fn invalid_yaml_is_an_error() {
        let err = AppConfig::parse("seed: [not, a, number]").unwrap_err();
        assert!(matches!(err, ConfigError::Yaml { .. }));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = AppConfig::from_file(Path::new("/nonexistent/horde-config.yaml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }

    #[test]
    fn bundled_config_matches_defaults() {
        let config = AppConfig::parse(include_str!("../../../horde-config.yaml")).unwrap();
        assert_eq!(config, AppConfig::default());
    }
}
