//! Meridian and antimeridian crossings inside a window.
//!
//! The transit predicate is `hour angle < 180`: it flips to true when the
//! body crosses the local meridian (hour angle wraps through zero) and to
//! false when it crosses the antimeridian. A 24-hour window holds at most
//! two crossings of each kind for the Moon; the first of each is kept.

use crate::engine::{Engine, EngineError};
use crate::models::{CelestialBody, GeoPosition, ObservationWindow, TransitEvent};

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TransitPair {
    pub meridian: TransitEvent,
    pub antimeridian: TransitEvent,
}

pub fn resolve_transits(
    engine: &Engine,
    body: CelestialBody,
    position: &GeoPosition,
    window: &ObservationWindow,
) -> Result<TransitPair, EngineError> {
    engine.ensure_coverage(window.start)?;
    engine.ensure_coverage(window.end)?;

    let transitions = engine.find_discrete(window.start, window.end, |t| {
        matches!(
            engine.hour_angle_deg(body, *position, t),
            Ok(ha) if ha < 180.0
        )
    });

    let mut pair = TransitPair::default();
    for transition in transitions {
        let slot = if transition.to_state {
            &mut pair.meridian
        } else {
            &mut pair.antimeridian
        };
        if slot.instant.is_some() {
            continue;
        }
        let sky = engine.observe(body, *position, transition.instant)?;
        *slot = TransitEvent {
            instant: Some(transition.instant),
            altitude_deg: Some(sky.altitude_deg),
            distance_km: Some(sky.distance_km),
            visible: Some(sky.altitude_deg >= body.horizon_altitude_deg()),
        };
    }

    Ok(pair)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::SearchConfig;
    use crate::services::window::build_window;
    use chrono::{Duration, NaiveDate};

    fn setup(lat: f64, lon: f64, date: (i32, u32, u32)) -> (Engine, GeoPosition, ObservationWindow) {
        let engine = Engine::new(SearchConfig::default());
        let position = GeoPosition::new(lat, lon, 0.0).unwrap();
        let date = NaiveDate::from_ymd_opt(date.0, date.1, date.2).unwrap();
        let window = build_window(date, Default::default(), &position);
        (engine, position, window)
    }

    #[test]
    fn test_sun_transits_found_and_ordered() {
        let (engine, position, window) = setup(51.5, 0.0, (2022, 6, 1));
        let pair = resolve_transits(&engine, CelestialBody::Sun, &position, &window).unwrap();

        let noon = pair.meridian.instant.unwrap();
        let midnight = pair.antimeridian.instant.unwrap();
        assert!(window.contains(noon));
        assert!(window.contains(midnight));
        // Window starts at solar midnight, so noon comes before the next
        // antimeridian crossing near the window end.
        assert!(noon < midnight);
        // Solar noon at Greenwich sits near 12:00 UT.
        let from_center = noon - window.start - Duration::hours(12);
        assert!(from_center.num_minutes().abs() < 20, "noon {noon}");
    }

    #[test]
    fn test_transit_visibility_flags() {
        let (engine, position, window) = setup(51.5, 0.0, (2022, 6, 1));
        let pair = resolve_transits(&engine, CelestialBody::Sun, &position, &window).unwrap();
        // June at 51.5 N: up at noon, down at midnight.
        assert_eq!(pair.meridian.visible, Some(true));
        assert_eq!(pair.antimeridian.visible, Some(false));
        assert!(pair.meridian.altitude_deg.unwrap() > 55.0);
        assert!(pair.antimeridian.altitude_deg.unwrap() < -10.0);
    }

    #[test]
    fn test_polar_night_transit_stays_hidden() {
        let (engine, position, window) = setup(78.0, 16.0, (2022, 12, 21));
        let pair = resolve_transits(&engine, CelestialBody::Sun, &position, &window).unwrap();
        // Svalbard midwinter: the noon transit exists but stays below the
        // horizon. This flag is what separates polar night from polar day.
        assert_eq!(pair.meridian.visible, Some(false));
    }

    #[test]
    fn test_moon_transit_carries_distance() {
        let (engine, position, window) = setup(51.5, 0.0, (2022, 6, 1));
        let pair = resolve_transits(&engine, CelestialBody::Moon, &position, &window).unwrap();
        let d = pair.meridian.distance_km.unwrap();
        assert!((350_000.0..410_000.0).contains(&d));
    }
}
