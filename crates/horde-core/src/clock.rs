//! Frame clock for the render loop.
//!
//! The host calls [`FrameClock::tick`] once per display refresh with its
//! current time. The clock is the single place where elapsed time is
//! derived, so every subsystem integrates over the same step.
//!
//! # Design Principles
//!
//! - The first frame has a zero delta.
//! - A timestamp earlier than the previous one also yields a zero delta.
//!   Elapsed time is never negative.
//! - All arithmetic saturates.

use horde_types::Timestamp;

/// One advance of the frame clock.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameStep {
    /// Frame number, starting at 1 for the first tick.
    pub frame: u64,
    /// Host time of this frame.
    pub now: Timestamp,
    /// Milliseconds since the previous frame (0 on the first frame).
    pub delta_ms: u64,
}

impl FrameStep {
    /// Elapsed time in seconds, the unit the flocking rules integrate in.
    pub fn delta_seconds(&self) -> f64 {
        self.delta_ms as f64 / 1000.0
    }
}

/// Derives per-frame deltas from host timestamps.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrameClock {
    /// Number of frames ticked so far.
    frame: u64,
    /// Host time of the most recent frame, `None` before the first tick.
    last: Option<Timestamp>,
}

impl FrameClock {
    /// Create a clock that has not ticked yet.
    pub const fn new() -> Self {
        Self { frame: 0, last: None }
    }

    /// Advance to `now` and return the step to integrate.
    pub fn tick(&mut self, now: Timestamp) -> FrameStep {
        let delta_ms = self.last.map_or(0, |last| now.millis_since(last));
        // Backwards times are still recorded; the next delta starts there.
        self.last = Some(now);
        self.frame = self.frame.saturating_add(1);
        FrameStep { frame: self.frame, now, delta_ms }
    }

    /// Number of frames ticked so far.
    pub const fn frame(&self) -> u64 {
        self.frame
    }

    /// Host time of the most recent frame.
    pub const fn last(&self) -> Option<Timestamp> {
        self.last
    }
}
