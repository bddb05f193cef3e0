//! Horizon crossings inside a search window.
//!
//! The predicate is "centre altitude above the refraction-plus-disc
//! threshold". A flip to true is a rise, to false a set; the first of each
//! is kept. When nothing flips at all the day is classified as polar day
//! or polar night from the body's state at the probe instant (the meridian
//! transit when one exists).

use chrono::{DateTime, Utc};

use crate::engine::{Engine, EngineError};
use crate::models::{CelestialBody, DayState, GeoPosition, ObservationWindow, RiseSetEvent};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RiseSetOutcome {
    pub rise: RiseSetEvent,
    pub set: RiseSetEvent,
    pub day_state: DayState,
}

pub fn resolve_rise_set(
    engine: &Engine,
    body: CelestialBody,
    position: &GeoPosition,
    window: &ObservationWindow,
    probe: DateTime<Utc>,
) -> Result<RiseSetOutcome, EngineError> {
    engine.ensure_coverage(window.start)?;
    engine.ensure_coverage(window.end)?;

    let horizon = body.horizon_altitude_deg();
    let transitions = engine.find_discrete(window.start, window.end, |t| {
        matches!(
            engine.observe(body, *position, t),
            Ok(sky) if sky.altitude_deg >= horizon
        )
    });

    if transitions.is_empty() {
        let up = engine.observe(body, *position, probe)?.altitude_deg >= horizon;
        return Ok(RiseSetOutcome {
            rise: RiseSetEvent::default(),
            set: RiseSetEvent::default(),
            day_state: if up {
                DayState::PolarDay
            } else {
                DayState::PolarNight
            },
        });
    }

    let mut rise = RiseSetEvent::default();
    let mut set = RiseSetEvent::default();
    for transition in transitions {
        let slot = if transition.to_state { &mut rise } else { &mut set };
        if slot.instant.is_some() {
            continue;
        }
        let sky = engine.observe(body, *position, transition.instant)?;
        *slot = RiseSetEvent {
            instant: Some(transition.instant),
            azimuth_deg: Some(sky.azimuth_deg),
        };
    }

    Ok(RiseSetOutcome {
        rise,
        set,
        day_state: DayState::Crossing,
    })
}
