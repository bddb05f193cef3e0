//! The UTC interval a resolution searches over.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// A half-open-ish UTC search interval. Nominal length is 24 hours plus a
/// small epsilon so an event landing exactly on the boundary is captured.
/// For the Sun the interval may later be widened around the meridian
/// transit (see `widened_around`).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ObservationWindow {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl ObservationWindow {
    /// Invariant: `end > start`. Callers construct windows from a start and
    /// a positive duration, so this is debug-asserted rather than fallible.
    pub fn new(start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        debug_assert!(end > start);
        Self { start, end }
    }

    pub fn duration(&self) -> Duration {
        self.end - self.start
    }

    pub fn contains(&self, instant: DateTime<Utc>) -> bool {
        instant >= self.start && instant <= self.end
    }

    pub fn midpoint(&self) -> DateTime<Utc> {
        self.start + self.duration() / 2
    }

    /// Widen so the result fully contains `[instant - 12h, instant + 12h]`.
    /// Applied to the Sun only: it guarantees the rise/set interval
    /// straddles solar noon even when the naive civil window does not.
    pub fn widened_around(&self, instant: DateTime<Utc>) -> Self {
        let half_day = Duration::hours(12);
        Self {
            start: self.start.min(instant - half_day),
            end: self.end.max(instant + half_day),
        }
    }
}
