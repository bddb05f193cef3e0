//! Time scales and reference-frame conversions.
//!
//! Julian dates, Delta-T (TT - UT), mean obliquity, a short nutation series
//! and Greenwich sidereal time. Everything works in degrees at the public
//! surface; radians stay inside individual functions.

use chrono::{DateTime, Datelike, Utc};

/// Julian date of the Unix epoch.
const JD_UNIX_EPOCH: f64 = 2440587.5;

/// Julian date of J2000.0.
pub const JD_J2000: f64 = 2451545.0;

/// Days per Julian century.
pub const DAYS_PER_CENTURY: f64 = 36525.0;

/// Julian date (UT) of a UTC instant.
pub fn julian_day(instant: DateTime<Utc>) -> f64 {
    let seconds = instant.timestamp() as f64 + instant.timestamp_subsec_nanos() as f64 / 1e9;
    JD_UNIX_EPOCH + seconds / 86400.0
}

/// Julian ephemeris date (TT) of a UTC instant.
pub fn julian_ephemeris_day(instant: DateTime<Utc>) -> f64 {
    let year = instant.year() as f64 + (instant.ordinal0() as f64) / 365.25;
    julian_day(instant) + delta_t_seconds(year) / 86400.0
}

/// Julian centuries of a JD since J2000.0.
pub fn centuries_since_j2000(jd: f64) -> f64 {
    (jd - JD_J2000) / DAYS_PER_CENTURY
}

/// TT - UT in seconds for a decimal year, piecewise polynomial fit
/// (Espenak & Meeus). Covers the span the engine accepts, 1900-2100.
pub fn delta_t_seconds(year: f64) -> f64 {
    if year < 1920.0 {
        let t = year - 1900.0;
        -2.79 + 1.494119 * t - 0.0598939 * t * t + 0.0061966 * t * t * t
            - 0.000197 * t * t * t * t
    } else if year < 1941.0 {
        let t = year - 1920.0;
        21.20 + 0.84493 * t - 0.076100 * t * t + 0.0020936 * t * t * t
    } else if year < 1961.0 {
        let t = year - 1950.0;
        29.07 + 0.407 * t - t * t / 233.0 + t * t * t / 2547.0
    } else if year < 1986.0 {
        let t = year - 1975.0;
        45.45 + 1.067 * t - t * t / 260.0 - t * t * t / 718.0
    } else if year < 2005.0 {
        let t = year - 2000.0;
        63.86 + 0.3345 * t - 0.060374 * t * t + 0.0017275 * t * t * t
            + 0.000651814 * t * t * t * t
            + 0.00002373599 * t * t * t * t * t
    } else if year < 2050.0 {
        let t = year - 2000.0;
        62.92 + 0.32217 * t + 0.005589 * t * t
    } else {
        let u = (year - 1820.0) / 100.0;
        -20.0 + 32.0 * u * u - 0.5628 * (2150.0 - year)
    }
}

/// Normalize an angle to [0, 360).
pub fn normalize_deg(angle: f64) -> f64 {
    let wrapped = angle % 360.0;
    if wrapped < 0.0 {
        wrapped + 360.0
    } else {
        wrapped
    }
}

/// Mean obliquity of the ecliptic in degrees (IAU 1980 polynomial).
pub fn mean_obliquity_deg(t: f64) -> f64 {
    23.439291111 - 0.013004167 * t - 1.6389e-7 * t * t + 5.0361e-7 * t * t * t
}

/// Nutation in longitude, degrees. Two-term approximation: the 18.6-year
/// lunar-node term and the semiannual solar term.
pub fn nutation_in_longitude_deg(t: f64) -> f64 {
    let omega = (125.04452 - 1934.136261 * t).to_radians();
    let l_sun = (280.4665 + 36000.7698 * t).to_radians();
    -0.004778 * omega.sin() - 0.000367 * (2.0 * l_sun).sin()
}

/// True obliquity including the dominant nutation term, degrees.
pub fn true_obliquity_deg(t: f64) -> f64 {
    let omega = (125.04452 - 1934.136261 * t).to_radians();
    mean_obliquity_deg(t) + 0.00256 * omega.cos()
}

/// Greenwich mean sidereal time in degrees for a JD (UT).
pub fn gmst_deg(jd_ut: f64) -> f64 {
    let d = jd_ut - JD_J2000;
    let t = d / DAYS_PER_CENTURY;
    normalize_deg(
        280.46061837 + 360.98564736629 * d + 0.000387933 * t * t - t * t * t / 38710000.0,
    )
}

/// Greenwich apparent sidereal time: GMST corrected by the equation of the
/// equinoxes, so hour angles stay consistent with apparent longitudes.
pub fn gast_deg(jd_ut: f64, t_tt: f64) -> f64 {
    let eqeq = nutation_in_longitude_deg(t_tt) * mean_obliquity_deg(t_tt).to_radians().cos();
    normalize_deg(gmst_deg(jd_ut) + eqeq)
}

/// Ecliptic (lon, lat) to equatorial (RA, Dec), all in degrees.
pub fn ecliptic_to_equatorial(lon_deg: f64, lat_deg: f64, obliquity_deg: f64) -> (f64, f64) {
    let lon = lon_deg.to_radians();
    let lat = lat_deg.to_radians();
    let eps = obliquity_deg.to_radians();

    let ra = (lon.sin() * eps.cos() - lat.tan() * eps.sin()).atan2(lon.cos());
    let dec = (lat.sin() * eps.cos() + lat.cos() * eps.sin() * lon.sin()).asin();
    (normalize_deg(ra.to_degrees()), dec.to_degrees())
}

/// Local hour angle in degrees, [0, 360), increasing with time.
pub fn hour_angle_deg(gast: f64, longitude_deg: f64, ra_deg: f64) -> f64 {
    normalize_deg(gast + longitude_deg - ra_deg)
}

/// Geocentric altitude and azimuth (from north, clockwise) in degrees for
/// an hour angle / declination pair seen from `latitude`.
pub fn equatorial_to_horizontal(ha_deg: f64, dec_deg: f64, latitude_deg: f64) -> (f64, f64) {
    let ha = ha_deg.to_radians();
    let dec = dec_deg.to_radians();
    let lat = latitude_deg.to_radians();

    let altitude = (lat.sin() * dec.sin() + lat.cos() * dec.cos() * ha.cos()).asin();
    // Measured from south, westward; shifted to the from-north convention.
    let azimuth = ha.sin().atan2(ha.cos() * lat.sin() - dec.tan() * lat.cos());
    (
        altitude.to_degrees(),
        normalize_deg(azimuth.to_degrees() + 180.0),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_julian_day_epochs() {
        let j2000 = Utc.with_ymd_and_hms(2000, 1, 1, 12, 0, 0).unwrap();
        assert!((julian_day(j2000) - JD_J2000).abs() < 1e-9);

        let unix = Utc.with_ymd_and_hms(1970, 1, 1, 0, 0, 0).unwrap();
        assert!((julian_day(unix) - JD_UNIX_EPOCH).abs() < 1e-9);
    }

    #[test]
    fn test_gmst_reference() {
        // 1987 April 10, 0h UT: theta0 = 13h 10m 46.3668s = 197.693195 deg.
        let jd = julian_day(Utc.with_ymd_and_hms(1987, 4, 10, 0, 0, 0).unwrap());
        assert!((gmst_deg(jd) - 197.693195).abs() < 1e-3);
    }

    #[test]
    fn test_mean_obliquity_j2000() {
        // 23 deg 26' 21.448" at J2000.0.
        assert!((mean_obliquity_deg(0.0) - 23.4392911).abs() < 1e-5);
    }

    #[test]
    fn test_delta_t_plausible() {
        // Observed values: ~29s mid-century, ~66s around 2010.
        assert!((delta_t_seconds(1950.0) - 29.0).abs() < 3.0);
        assert!((delta_t_seconds(2010.0) - 66.0).abs() < 4.0);
        // Monotone-ish growth across the modern era.
        assert!(delta_t_seconds(2100.0) > delta_t_seconds(2000.0));
    }

    #[test]
    fn test_normalize_deg() {
        assert_eq!(normalize_deg(0.0), 0.0);
        assert!((normalize_deg(-90.0) - 270.0).abs() < 1e-12);
        assert!((normalize_deg(725.0) - 5.0).abs() < 1e-12);
    }

    #[test]
    fn test_horizontal_at_upper_culmination() {
        // A body on the meridian (HA = 0) culminates at alt = 90 - lat + dec,
        // due south (az = 180) for a northern observer looking at dec < lat.
        let (alt, az) = equatorial_to_horizontal(0.0, -23.4, 60.0);
        assert!((alt - (90.0 - 60.0 - 23.4)).abs() < 1e-9);
        assert!((az - 180.0).abs() < 1e-6);
    }

    #[test]
    fn test_horizontal_morning_is_east_of_meridian() {
        // A few hours before culmination the body stands in the eastern sky.
        let (_, az) = equatorial_to_horizontal(-45.0, 0.0, 50.0);
        assert!(az > 90.0 && az < 180.0, "azimuth {az}");
    }
}
