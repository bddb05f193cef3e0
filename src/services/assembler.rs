//! Wires the pipeline stages into complete event results.

use chrono::{Days, NaiveDate};
use tracing::debug;

use crate::engine::{Engine, EngineError};
use crate::models::{CelestialBody, DisplayOffset, EventResult, GeoPosition};

use super::phase::moon_phase;
use super::rise_set::resolve_rise_set;
use super::transit::resolve_transits;
use super::window::build_window;

/// Resolve all events of `body` for one civil date.
///
/// Transits are searched in the solar-day window itself. The rise/set
/// search widens that window for the Sun so it straddles the meridian
/// transit by twelve hours on each side; without that, extreme
/// longitude/offset combinations can push a sunrise just outside the naive
/// window. The Moon keeps the plain window, since a lunar day exceeds 24
/// hours and widening would pull in the neighbouring day's events.
pub fn resolve_events(
    engine: &Engine,
    body: CelestialBody,
    position: GeoPosition,
    date: NaiveDate,
    offset: DisplayOffset,
) -> Result<EventResult, EngineError> {
    let window = build_window(date, offset, &position);
    debug!(%body, %date, start = %window.start, end = %window.end, "resolving events");

    let transits = resolve_transits(engine, body, &position, &window)?;

    let search_window = match (body, transits.meridian.instant) {
        (CelestialBody::Sun, Some(noon)) => window.widened_around(noon),
        _ => window,
    };

    let probe = transits
        .meridian
        .instant
        .unwrap_or_else(|| search_window.midpoint());
    let rise_set = resolve_rise_set(engine, body, &position, &search_window, probe)?;

    let moon_phase_deg = match body {
        CelestialBody::Moon => Some(moon_phase(engine, &window)?),
        CelestialBody::Sun => None,
    };

    Ok(EventResult {
        body,
        position,
        offset,
        window,
        search_window,
        meridian: transits.meridian,
        antimeridian: transits.antimeridian,
        rise: rise_set.rise,
        set: rise_set.set,
        day_state: rise_set.day_state,
        moon_phase_deg,
    })
}

/// Resolve `days` consecutive civil dates starting at `date`.
pub fn resolve_events_range(
    engine: &Engine,
    body: CelestialBody,
    position: GeoPosition,
    date: NaiveDate,
    days: u64,
    offset: DisplayOffset,
) -> Result<Vec<EventResult>, EngineError> {
    let mut results = Vec::with_capacity(days as usize);
    let mut day = date;
    for _ in 0..days {
        results.push(resolve_events(engine, body, position, day, offset)?);
        // resolve_events rejects anything past the ephemeris range, so the
        // successor always exists when we get here.
        day = day.checked_add_days(Days::new(1)).unwrap_or(day);
    }
    Ok(results)
}
