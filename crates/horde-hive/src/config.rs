//! Hive configuration, read from the `hive` key of `horde-config.yaml`.

use serde::Deserialize;

use crate::error::HiveError;

/// What the tiles are labelled with.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LabelMode {
    /// Single characters cycled from the left and right label sets.
    #[default]
    Characters,
    /// Whole words drawn from impulse and expansion vocabularies around a
    /// central seed tile.
    Words,
}

/// Configuration for the hex input engine.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct HiveConfig {
    /// Circumradius of every tile (default: 25).
    #[serde(default = "default_hex_radius")]
    pub hex_radius: f64,

    /// Hold duration that seeds the anchor tile (default: 500 ms).
    #[serde(default = "default_long_press_ms")]
    pub long_press_ms: u64,

    /// Label mode (default: characters).
    #[serde(default)]
    pub labels: LabelMode,

    /// Labels cycled over tiles left of the midline.
    #[serde(default = "default_left_labels")]
    pub left_labels: Vec<String>,

    /// Labels cycled over tiles right of the midline.
    #[serde(default = "default_right_labels")]
    pub right_labels: Vec<String>,
}

impl Default for HiveConfig {
    fn default() -> Self {
        Self {
            hex_radius: default_hex_radius(),
            long_press_ms: default_long_press_ms(),
            labels: LabelMode::default(),
            left_labels: default_left_labels(),
            right_labels: default_right_labels(),
        }
    }
}

impl HiveConfig {
    /// Check that the configuration can produce a tessellation.
    ///
    /// # Errors
    ///
    /// Returns [`HiveError::InvalidConfig`] for a non-positive radius or an
    /// empty label set.
    pub fn validate(&self) -> Result<(), HiveError> {
        if !(self.hex_radius.is_finite() && self.hex_radius > 0.0) {
            return Err(HiveError::InvalidConfig {
                reason: format!("hex_radius must be positive, got {}", self.hex_radius),
            });
        }
        if self.left_labels.is_empty() || self.right_labels.is_empty() {
            return Err(HiveError::InvalidConfig {
                reason: String::from("label sets must not be empty"),
            });
        }
        Ok(())
    }
}

const fn default_hex_radius() -> f64 {
    25.0
}

const fn default_long_press_ms() -> u64 {
    500
}

fn labels(chars: &[&str]) -> Vec<String> {
    chars.iter().map(|c| (*c).to_owned()).collect()
}

fn default_left_labels() -> Vec<String> {
    labels(&[
        "q", "w", "e", "r", "t", "y", //
        "a", "s", "d", "f", "g", "h", //
        "z", "x", "c", "v", "b", "n", //
        "1", "2", "3", "4", "5", "6",
    ])
}

fn default_right_labels() -> Vec<String> {
    labels(&[
        "u", "i", "o", "p", "[", "]", //
        "j", "k", "l", ";", "'", "\\", //
        "m", ",", ".", "/", "?", "!", //
        "7", "8", "9", "0", "-", "=",
    ])
}
