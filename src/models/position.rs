//! Observer position on the WGS-84 ellipsoid.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Geographic position of the observer. Immutable for the lifetime of a
/// resolution.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPosition {
    /// Latitude in degrees, positive north.
    pub latitude: f64,
    /// Longitude in degrees, positive east.
    pub longitude: f64,
    /// Elevation above the ellipsoid in meters. Echoed in responses; the
    /// horizon predicate does not depend on it.
    pub elevation: f64,
}

/// Coordinates outside their valid range.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum InvalidPosition {
    #[error("latitude {0} out of range [-90, 90]")]
    Latitude(f64),
    #[error("longitude {0} out of range [-180, 180]")]
    Longitude(f64),
}

impl GeoPosition {
    pub fn new(latitude: f64, longitude: f64, elevation: f64) -> Result<Self, InvalidPosition> {
        if !latitude.is_finite() || !(-90.0..=90.0).contains(&latitude) {
            return Err(InvalidPosition::Latitude(latitude));
        }
        if !longitude.is_finite() || !(-180.0..=180.0).contains(&longitude) {
            return Err(InvalidPosition::Longitude(longitude));
        }
        Ok(Self {
            latitude,
            longitude,
            elevation,
        })
    }
}
