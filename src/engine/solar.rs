//! Geocentric solar position from mean orbital elements.
//!
//! Accuracy is about 0.01 degrees in apparent longitude, which translates
//! to a handful of seconds in rise/set times.

use super::frames;

/// Astronomical unit in kilometers.
pub const AU_KM: f64 = 149_597_870.7;

/// Apparent geocentric solar position at a Julian ephemeris date.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolarPosition {
    /// Apparent ecliptic longitude (nutation and aberration applied), deg.
    pub apparent_longitude_deg: f64,
    pub right_ascension_deg: f64,
    pub declination_deg: f64,
    pub distance_km: f64,
}

pub fn solar_position(jde: f64) -> SolarPosition {
    let t = frames::centuries_since_j2000(jde);

    // Geometric mean longitude and mean anomaly.
    let l0 = frames::normalize_deg(280.46646 + 36000.76983 * t + 0.0003032 * t * t);
    let m = frames::normalize_deg(357.52911 + 35999.05029 * t - 0.0001537 * t * t);
    let m_rad = m.to_radians();

    // Eccentricity and equation of center.
    let e = 0.016708634 - 0.000042037 * t - 0.0000001267 * t * t;
    let c = (1.914602 - 0.004817 * t - 0.000014 * t * t) * m_rad.sin()
        + (0.019993 - 0.000101 * t) * (2.0 * m_rad).sin()
        + 0.000289 * (3.0 * m_rad).sin();

    let true_longitude = l0 + c;
    let true_anomaly = (m + c).to_radians();
    let radius_au = 1.000001018 * (1.0 - e * e) / (1.0 + e * true_anomaly.cos());

    // Aberration (-0.00569) plus nutation gives the apparent longitude.
    let apparent_longitude = frames::normalize_deg(
        true_longitude - 0.00569 + frames::nutation_in_longitude_deg(t),
    );

    let obliquity = frames::true_obliquity_deg(t);
    let (ra, dec) = frames::ecliptic_to_equatorial(apparent_longitude, 0.0, obliquity);

    SolarPosition {
        apparent_longitude_deg: apparent_longitude,
        right_ascension_deg: ra,
        declination_deg: dec,
        distance_km: radius_au * AU_KM,
    }
}
