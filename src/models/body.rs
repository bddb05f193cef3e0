//! Celestial body selection and per-body constants.
//!
//! The body is resolved once at the API boundary and carried through the
//! pipeline as data: each variant knows its horizon-predicate parameters
//! (refraction + disc radius) and the output keys it reports under.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Standard atmospheric refraction at the horizon, in degrees.
pub const STANDARD_REFRACTION_DEG: f64 = 0.5666;

/// Apparent solar disc radius, in degrees.
pub const SOLAR_DISC_RADIUS_DEG: f64 = 0.26667;

/// Estimated lunar disc radius, in degrees.
pub const LUNAR_DISC_RADIUS_DEG: f64 = 0.2667;

/// A body the service can resolve events for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CelestialBody {
    Sun,
    Moon,
}

/// Output keys for one body's event record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BodyFieldNames {
    pub rise: &'static str,
    pub set: &'static str,
    pub meridian: &'static str,
    pub antimeridian: &'static str,
}

impl CelestialBody {
    /// Angular radius of the visible disc. Rise/set means "first sliver
    /// visible", so the horizon predicate is offset by this amount.
    pub fn disc_radius_deg(self) -> f64 {
        match self {
            CelestialBody::Sun => SOLAR_DISC_RADIUS_DEG,
            CelestialBody::Moon => LUNAR_DISC_RADIUS_DEG,
        }
    }

    /// Apparent altitude threshold of the rise/set predicate: the body is
    /// "up" while its centre is above this (negative) altitude.
    pub fn horizon_altitude_deg(self) -> f64 {
        -(STANDARD_REFRACTION_DEG + self.disc_radius_deg())
    }

    /// The keys this body's events are reported under.
    pub fn field_names(self) -> BodyFieldNames {
        match self {
            CelestialBody::Sun => BodyFieldNames {
                rise: "sunrise",
                set: "sunset",
                meridian: "solarnoon",
                antimeridian: "solarmidnight",
            },
            CelestialBody::Moon => BodyFieldNames {
                rise: "moonrise",
                set: "moonset",
                meridian: "high_moon",
                antimeridian: "low_moon",
            },
        }
    }

    /// Capitalized name used in the response `body` property.
    pub fn display_name(self) -> &'static str {
        match self {
            CelestialBody::Sun => "Sun",
            CelestialBody::Moon => "Moon",
        }
    }
}

/// Requested body is not one the service computes events for.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unsupported body `{0}`: expected `sun` or `moon`")]
pub struct UnsupportedBody(pub String);

impl FromStr for CelestialBody {
    type Err = UnsupportedBody;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "sun" => Ok(CelestialBody::Sun),
            "moon" => Ok(CelestialBody::Moon),
            _ => Err(UnsupportedBody(s.to_string())),
        }
    }
}

impl fmt::Display for CelestialBody {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_body() {
        assert_eq!("sun".parse::<CelestialBody>(), Ok(CelestialBody::Sun));
        assert_eq!("Moon".parse::<CelestialBody>(), Ok(CelestialBody::Moon));
        assert!("mars".parse::<CelestialBody>().is_err());
        assert!("".parse::<CelestialBody>().is_err());
    }

    #[test]
    fn test_horizon_thresholds() {
        // Sun: refraction plus solar disc radius.
        assert!((CelestialBody::Sun.horizon_altitude_deg() + 0.83327).abs() < 1e-9);
        // Moon: refraction plus the estimated lunar disc radius.
        assert!((CelestialBody::Moon.horizon_altitude_deg() + 0.8333).abs() < 1e-9);
    }

    #[test]
    fn test_field_names() {
        let sun = CelestialBody::Sun.field_names();
        assert_eq!(sun.rise, "sunrise");
        assert_eq!(sun.antimeridian, "solarmidnight");

        let moon = CelestialBody::Moon.field_names();
        assert_eq!(moon.meridian, "high_moon");
        assert_eq!(moon.set, "moonset");
    }
}
