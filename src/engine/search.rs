//! Discrete event search over boolean predicates of time.
//!
//! A coarse scan finds the steps where the predicate flips, then bisection
//! narrows each flip down to the configured tolerance. Works for any
//! predicate that is piecewise constant with isolated transitions further
//! apart than the scan step.

use chrono::{DateTime, Duration, Utc};
use serde::Deserialize;

/// Tuning for the coarse scan and the bisection refinement.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct SearchConfig {
    /// Coarse scan step, seconds. Must stay below the shortest interval
    /// between two consecutive transitions of any predicate searched.
    #[serde(default = "SearchConfig::default_step_seconds")]
    pub step_seconds: i64,
    /// Bisection stops once the bracket is narrower than this, seconds.
    #[serde(default = "SearchConfig::default_tolerance_seconds")]
    pub tolerance_seconds: f64,
}

impl SearchConfig {
    fn default_step_seconds() -> i64 {
        300
    }

    fn default_tolerance_seconds() -> f64 {
        1.0
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            step_seconds: Self::default_step_seconds(),
            tolerance_seconds: Self::default_tolerance_seconds(),
        }
    }
}

/// A predicate flip found by [`find_discrete`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    /// Refined instant of the flip.
    pub instant: DateTime<Utc>,
    /// Predicate value just after the flip.
    pub to_state: bool,
}

/// All predicate transitions in `[start, end]`, in time order.
pub fn find_discrete<F>(
    start: DateTime<Utc>,
    end: DateTime<Utc>,
    config: SearchConfig,
    mut predicate: F,
) -> Vec<Transition>
where
    F: FnMut(DateTime<Utc>) -> bool,
{
    let step = Duration::seconds(config.step_seconds.max(1));
    let mut transitions = Vec::new();

    let mut left = start;
    let mut left_state = predicate(left);
    while left < end {
        let right = (left + step).min(end);
        let right_state = predicate(right);
        if right_state != left_state {
            let instant = bisect(left, right, right_state, config.tolerance_seconds, &mut predicate);
            transitions.push(Transition {
                instant,
                to_state: right_state,
            });
        }
        left = right;
        left_state = right_state;
    }

    transitions
}

/// Narrow a bracket known to contain exactly one flip. `hi` evaluates to
/// `hi_state`, `lo` to its negation.
fn bisect<F>(
    mut lo: DateTime<Utc>,
    mut hi: DateTime<Utc>,
    hi_state: bool,
    tolerance_seconds: f64,
    predicate: &mut F,
) -> DateTime<Utc>
where
    F: FnMut(DateTime<Utc>) -> bool,
{
    let tolerance_ms = (tolerance_seconds * 1e3).max(1.0) as i64;
    while (hi - lo) > Duration::milliseconds(tolerance_ms) {
        let mid = lo + (hi - lo) / 2;
        if predicate(mid) == hi_state {
            hi = mid;
        } else {
            lo = mid;
        }
    }
    hi
}
