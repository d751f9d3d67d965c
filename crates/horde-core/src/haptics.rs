//! Haptic feedback.
//!
//! The hive and the swarm only ever see a [`HapticSink`]: they report *what*
//! happened and never how it feels. [`HapticNotifier`] turns each
//! [`HapticKind`] into a fixed vibration pattern and forwards it to a
//! [`VibrationDriver`], the seam to real hardware.
//!
//! | Kind              | Pattern (ms, vibrate/pause alternating) |
//! |-------------------|-----------------------------------------|
//! | `Tap`             | 50                                      |
//! | `Press`           | 100                                     |
//! | `LongPress`       | 100, 50, 100                            |
//! | `Select`          | 30, 20, 30, 20, 30                      |
//! | `Error`           | 200, 100, 200                           |
//! | `AmbientActivity` | 20                                      |

use horde_types::HapticKind;
use serde::Deserialize;
use tracing::debug;

/// Receiver of semantic feedback events.
pub trait HapticSink {
    /// Report that `kind` happened.
    fn notify(&mut self, kind: HapticKind);
}

/// Records every event; handy for asserting feedback sequences.
impl HapticSink for Vec<HapticKind> {
    fn notify(&mut self, kind: HapticKind) {
        self.push(kind);
    }
}

/// Discards every event.
impl HapticSink for () {
    fn notify(&mut self, _kind: HapticKind) {}
}

/// Hardware capable of playing a vibration pattern.
pub trait VibrationDriver {
    /// Whether the device can vibrate at all.
    fn is_supported(&self) -> bool;

    /// Play `pattern`: alternating vibrate and pause durations in milliseconds.
    fn vibrate(&mut self, pattern: &[u32]);
}

/// Vibration pattern for a feedback kind.
pub const fn pattern_for(kind: HapticKind) -> &'static [u32] {
    match kind {
        HapticKind::Tap => &[50],
        HapticKind::Press => &[100],
        HapticKind::LongPress => &[100, 50, 100],
        HapticKind::Select => &[30, 20, 30, 20, 30],
        HapticKind::Error => &[200, 100, 200],
        HapticKind::AmbientActivity => &[20],
    }
}

/// Haptic settings from the `haptics` config section.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct HapticsConfig {
    /// Start enabled when the driver supports vibration.
    #[serde(default = "default_true")]
    pub enabled: bool,
}

impl Default for HapticsConfig {
    fn default() -> Self {
        Self { enabled: true }
    }
}

const fn default_true() -> bool {
    true
}

/// Maps feedback kinds to patterns and plays them while enabled.
#[derive(Debug, Clone)]
pub struct HapticNotifier<D> {
    driver: D,
    enabled: bool,
}

impl<D: VibrationDriver> HapticNotifier<D> {
    /// Create a notifier, enabled exactly when the driver is supported.
    pub fn new(driver: D) -> Self {
        let enabled = driver.is_supported();
        Self { driver, enabled }
    }

    /// Create a notifier from configuration.
    pub fn from_config(driver: D, config: &HapticsConfig) -> Self {
        let enabled = config.enabled && driver.is_supported();
        Self { driver, enabled }
    }

    /// Whether feedback is currently played.
    pub const fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Flip the enabled flag and return the new value.
    pub fn toggle(&mut self) -> bool {
        self.enabled = !self.enabled;
        debug!(enabled = self.enabled, "haptics toggled");
        self.enabled
    }

    /// The underlying driver.
    pub const fn driver(&self) -> &D {
        &self.driver
    }
}

impl<D: VibrationDriver> HapticSink for HapticNotifier<D> {
    fn notify(&mut self, kind: HapticKind) {
        // Unsupported hardware stays silent even when toggled on.
        if self.enabled && self.driver.is_supported() {
            self.driver.vibrate(pattern_for(kind));
        }
    }
}

/// Driver that logs each pattern through `tracing` instead of vibrating.
///
/// Used by the headless driver, where there is no hardware.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingDriver;

impl VibrationDriver for TracingDriver {
    fn is_supported(&self) -> bool {
        true
    }

    fn vibrate(&mut self, pattern: &[u32]) {
        debug!(?pattern, "vibrate");
    }
}

/// Driver that keeps every played pattern in memory.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordingDriver {
    /// Whether the simulated device supports vibration.
    pub supported: bool,
    /// Patterns played so far, oldest first.
    pub played: Vec<Vec<u32>>,
}

impl RecordingDriver {
    /// A recording driver for a device that can vibrate.
    pub const fn supported() -> Self {
        Self { supported: true, played: Vec::new() }
    }

    /// A recording driver for a device without vibration.
    pub const fn unsupported() -> Self {
        Self { supported: false, played: Vec::new() }
    }
}

impl VibrationDriver for RecordingDriver {
    fn is_supported(&self) -> bool {
        self.supported
    }

    fn vibrate(&mut self, pattern: &[u32]) {
        self.played.push(pattern.to_vec());
    }
}
