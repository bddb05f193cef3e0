//! Astronomical engine: ephemerides, coordinate frames and event search.
//!
//! The engine answers three questions for a body, an observer and an
//! instant: where does it stand in the sky, what is its local hour angle,
//! and when does a boolean predicate over those quantities flip. The
//! resolution pipeline in `services` is built entirely on those three.

pub mod frames;
pub mod lunar;
pub mod search;
pub mod solar;

use chrono::{DateTime, Datelike, Utc};
use thiserror::Error;

use crate::models::{CelestialBody, GeoPosition};
pub use search::{find_discrete, SearchConfig, Transition};

/// First year the Delta-T fit and the truncated series are trusted.
pub const MIN_YEAR: i32 = 1900;
/// Last year the Delta-T fit and the truncated series are trusted.
pub const MAX_YEAR: i32 = 2100;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("instant {instant} outside the supported ephemeris range {MIN_YEAR}-{MAX_YEAR}")]
    OutsideEphemerisRange { instant: DateTime<Utc> },
}

/// Topocentric place of a body: altitude and azimuth for the observer,
/// plus the geocentric distance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SkyPosition {
    pub altitude_deg: f64,
    /// From north, clockwise.
    pub azimuth_deg: f64,
    pub distance_km: f64,
}

/// Stateless ephemeris calculator. Cheap to clone behind an `Arc`; all
/// methods take `&self` and are safe to call from blocking worker threads.
#[derive(Debug, Clone)]
pub struct Engine {
    search: SearchConfig,
}

impl Engine {
    pub fn new(search: SearchConfig) -> Self {
        Self { search }
    }

    pub fn search_config(&self) -> SearchConfig {
        self.search
    }

    /// Reject instants the truncated theories cannot cover.
    pub fn ensure_coverage(&self, instant: DateTime<Utc>) -> Result<(), EngineError> {
        let year = instant.year();
        if (MIN_YEAR..=MAX_YEAR).contains(&year) {
            Ok(())
        } else {
            Err(EngineError::OutsideEphemerisRange { instant })
        }
    }

    /// Altitude, azimuth and distance of `body` for `observer` at `instant`.
    ///
    /// The lunar altitude is corrected for horizontal parallax; at 60 Earth
    /// radii that correction reaches a full degree and moves rise times by
    /// minutes. Solar parallax (under 9") is ignored.
    pub fn observe(
        &self,
        body: CelestialBody,
        observer: GeoPosition,
        instant: DateTime<Utc>,
    ) -> Result<SkyPosition, EngineError> {
        self.ensure_coverage(instant)?;
        let jd = frames::julian_day(instant);
        let jde = frames::julian_ephemeris_day(instant);
        let t = frames::centuries_since_j2000(jde);
        let gast = frames::gast_deg(jd, t);

        let (ra, dec, distance_km, parallax_deg) = match body {
            CelestialBody::Sun => {
                let sun = solar::solar_position(jde);
                (
                    sun.right_ascension_deg,
                    sun.declination_deg,
                    sun.distance_km,
                    0.0,
                )
            }
            CelestialBody::Moon => {
                let moon = lunar::lunar_position(jde);
                (
                    moon.right_ascension_deg,
                    moon.declination_deg,
                    moon.distance_km,
                    moon.horizontal_parallax_deg,
                )
            }
        };

        let ha = frames::hour_angle_deg(gast, observer.longitude, ra);
        let (alt_geo, azimuth_deg) = frames::equatorial_to_horizontal(ha, dec, observer.latitude);
        let altitude_deg = alt_geo - parallax_deg * alt_geo.to_radians().cos();

        Ok(SkyPosition {
            altitude_deg,
            azimuth_deg,
            distance_km,
        })
    }

    /// Local hour angle of `body` in degrees, [0, 360). Zero at the
    /// meridian crossing, 180 at the antimeridian crossing.
    pub fn hour_angle_deg(
        &self,
        body: CelestialBody,
        observer: GeoPosition,
        instant: DateTime<Utc>,
    ) -> Result<f64, EngineError> {
        self.ensure_coverage(instant)?;
        let jd = frames::julian_day(instant);
        let jde = frames::julian_ephemeris_day(instant);
        let t = frames::centuries_since_j2000(jde);
        let gast = frames::gast_deg(jd, t);

        let ra = match body {
            CelestialBody::Sun => solar::solar_position(jde).right_ascension_deg,
            CelestialBody::Moon => lunar::lunar_position(jde).right_ascension_deg,
        };
        Ok(frames::hour_angle_deg(gast, observer.longitude, ra))
    }

    /// Transitions of `predicate` inside `[start, end]`, using the engine's
    /// configured scan step and tolerance.
    pub fn find_discrete<F>(
        &self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
        predicate: F,
    ) -> Vec<Transition>
    where
        F: FnMut(DateTime<Utc>) -> bool,
    {
        search::find_discrete(start, end, self.search, predicate)
    }

    /// Lunar phase angle at `instant`: the ecliptic elongation of the Moon
    /// from the Sun, degrees in [0, 360). 0 new, 90 first quarter, 180
    /// full, 270 last quarter.
    pub fn moon_phase_deg(&self, instant: DateTime<Utc>) -> Result<f64, EngineError> {
        self.ensure_coverage(instant)?;
        let jde = frames::julian_ephemeris_day(instant);
        let sun = solar::solar_position(jde);
        let moon = lunar::lunar_position(jde);
        Ok(frames::normalize_deg(
            moon.apparent_longitude_deg - sun.apparent_longitude_deg,
        ))
    }
}
