//! Millisecond timestamps supplied by the host.
//!
//! The engine never reads a wall clock itself. The host passes the current
//! time into every frame and pointer event, which keeps every subsystem
//! deterministic under test.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// A point in time, in whole milliseconds on the host's monotonic clock.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS,
)]
#[ts(export, export_to = "bindings/")]
pub struct Timestamp(pub u64);

impl Timestamp {
    /// The origin of the host clock.
    pub const ZERO: Self = Self(0);

    /// Create a timestamp from milliseconds.
    pub const fn from_millis(ms: u64) -> Self {
        Self(ms)
    }

    /// Milliseconds since the host clock origin.
    pub const fn as_millis(self) -> u64 {
        self.0
    }

    /// The timestamp `ms` milliseconds later, saturating at `u64::MAX`.
    #[must_use]
    pub const fn plus_millis(self, ms: u64) -> Self {
        Self(self.0.saturating_add(ms))
    }

    /// Milliseconds elapsed since `earlier`, or 0 if `earlier` is in the future.
    pub const fn millis_since(self, earlier: Self) -> u64 {
        self.0.saturating_sub(earlier.0)
    }
}

impl core::fmt::Display for Timestamp {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}ms", self.0)
    }
}
