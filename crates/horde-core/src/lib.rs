//! Runtime primitives shared by the hive and the swarm.
//!
//! Nothing in this crate knows about tiles or agents. It provides the time
//! base both subsystems advance on and the two collaborators they write to.
//!
//! # Modules
//!
//! - [`clock`] -- Frame clock turning host timestamps into frame steps.
//! - [`schedule`] -- Cancellable deferred actions drained by the frame clock.
//! - [`haptics`] -- [`HapticSink`] trait, vibration patterns and the
//!   [`HapticNotifier`].
//! - [`output`] -- [`OutputSink`] trait and the [`OutputBuffer`] text model.
//!
//! [`HapticSink`]: haptics::HapticSink
//! [`HapticNotifier`]: haptics::HapticNotifier
//! [`OutputSink`]: output::OutputSink
//! [`OutputBuffer`]: output::OutputBuffer

pub mod clock;
pub mod haptics;
pub mod output;
pub mod schedule;

pub use clock::{FrameClock, FrameStep};
pub use haptics::{
    HapticNotifier, HapticSink, HapticsConfig, RecordingDriver, TracingDriver, VibrationDriver,
    pattern_for,
};
pub use output::{OutputBuffer, OutputSink};
pub use schedule::{Schedule, TimerToken};
