//! Derive the UTC search window from a civil date.
//!
//! The window is anchored to local *solar* midnight, not civil midnight:
//! starting the day when the body sits lowest keeps each civil date's
//! events inside one window instead of splitting them across two.

use chrono::{Duration, NaiveDate, NaiveTime};

use crate::models::{DisplayOffset, GeoPosition, ObservationWindow};

/// Boundary epsilon: an event landing exactly 24h after the start still
/// belongs to this window.
const WINDOW_EPSILON_SECONDS: i64 = 1;

/// Search window for `date` as seen from `position`.
///
/// Start is the date's UTC midnight shifted by `-longitude / 15` hours, the
/// mean-solar-time correction. Near the date line that shift can land a
/// full day away from the civil date the caller asked about; when the
/// longitude and the requested offset disagree in sign there, the window is
/// pushed a day toward the civil date.
pub fn build_window(
    date: NaiveDate,
    offset: DisplayOffset,
    position: &GeoPosition,
) -> ObservationWindow {
    let mut delta_hours = -position.longitude / 15.0;
    if position.longitude > 100.0 && offset.total_minutes() < 0 {
        delta_hours += 24.0;
    } else if position.longitude < -100.0 && offset.total_minutes() > 0 {
        delta_hours -= 24.0;
    }

    let midnight_utc = date.and_time(NaiveTime::MIN).and_utc();
    let start = midnight_utc + Duration::milliseconds((delta_hours * 3_600_000.0).round() as i64);
    let end = start + Duration::hours(24) + Duration::seconds(WINDOW_EPSILON_SECONDS);
    ObservationWindow::new(start, end)
}
