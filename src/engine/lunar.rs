//! Geocentric lunar position from a truncated ELP-2000 series.
//!
//! The classical 60-term tables for longitude/distance and latitude give
//! roughly 0.01 degrees in longitude and a few tens of kilometers in
//! distance; comfortably below a minute of rise/set time.

use super::frames;

/// Equatorial Earth radius used for the horizontal parallax, km.
pub const EARTH_RADIUS_KM: f64 = 6378.14;

/// Apparent geocentric lunar position at a Julian ephemeris date.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LunarPosition {
    /// Apparent ecliptic longitude (nutation applied), deg.
    pub apparent_longitude_deg: f64,
    pub latitude_deg: f64,
    pub right_ascension_deg: f64,
    pub declination_deg: f64,
    pub distance_km: f64,
    /// Equatorial horizontal parallax, deg.
    pub horizontal_parallax_deg: f64,
}

/// Mean elements of the lunar orbit, degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LunarArguments {
    /// Mean longitude L'.
    pub mean_longitude: f64,
    /// Mean elongation D.
    pub elongation: f64,
    /// Solar mean anomaly M.
    pub solar_anomaly: f64,
    /// Lunar mean anomaly M'.
    pub lunar_anomaly: f64,
    /// Argument of latitude F.
    pub latitude_argument: f64,
}

pub fn lunar_arguments(t: f64) -> LunarArguments {
    let t2 = t * t;
    let t3 = t2 * t;
    let t4 = t3 * t;
    LunarArguments {
        mean_longitude: frames::normalize_deg(
            218.3164477 + 481267.88123421 * t - 0.0015786 * t2 + t3 / 538841.0
                - t4 / 65194000.0,
        ),
        elongation: frames::normalize_deg(
            297.8501921 + 445267.1114034 * t - 0.0018819 * t2 + t3 / 545868.0
                - t4 / 113065000.0,
        ),
        solar_anomaly: frames::normalize_deg(
            357.5291092 + 35999.0502909 * t - 0.0001536 * t2 + t3 / 24490000.0,
        ),
        lunar_anomaly: frames::normalize_deg(
            134.9633964 + 477198.8675055 * t + 0.0087414 * t2 + t3 / 69699.0
                - t4 / 14712000.0,
        ),
        latitude_argument: frames::normalize_deg(
            93.2720950 + 483202.0175233 * t - 0.0036539 * t2 - t3 / 3526000.0
                + t4 / 863310000.0,
        ),
    }
}

/// Periodic terms for longitude (1e-6 deg, sine) and distance (1e-3 km,
/// cosine). Argument multipliers are (D, M, M', F).
const LON_DIST_TERMS: &[(i8, i8, i8, i8, f64, f64)] = &[
    (0, 0, 1, 0, 6288774.0, -20905355.0),
    (2, 0, -1, 0, 1274027.0, -3699111.0),
    (2, 0, 0, 0, 658314.0, -2955968.0),
    (0, 0, 2, 0, 213618.0, -569925.0),
    (0, 1, 0, 0, -185116.0, 48888.0),
    (0, 0, 0, 2, -114332.0, -3149.0),
    (2, 0, -2, 0, 58793.0, 246158.0),
    (2, -1, -1, 0, 57066.0, -152138.0),
    (2, 0, 1, 0, 53322.0, -170733.0),
    (2, -1, 0, 0, 45758.0, -204586.0),
    (0, 1, -1, 0, -40923.0, -129620.0),
    (1, 0, 0, 0, -34720.0, 108743.0),
    (0, 1, 1, 0, -30383.0, 104755.0),
    (2, 0, 0, -2, 15327.0, 10321.0),
    (0, 0, 1, 2, -12528.0, 0.0),
    (0, 0, 1, -2, 10980.0, 79661.0),
    (4, 0, -1, 0, 10675.0, -34782.0),
    (0, 0, 3, 0, 10034.0, -23210.0),
    (4, 0, -2, 0, 8548.0, -21636.0),
    (2, 1, -1, 0, -7888.0, 24208.0),
    (2, 1, 0, 0, -6766.0, 30824.0),
    (1, 0, -1, 0, -5163.0, -8379.0),
    (1, 1, 0, 0, 4987.0, -16675.0),
    (2, -1, 1, 0, 4036.0, -12831.0),
    (2, 0, 2, 0, 3994.0, -10445.0),
    (4, 0, 0, 0, 3861.0, -11650.0),
    (2, 0, -3, 0, 3665.0, 14403.0),
    (0, 1, -2, 0, -2689.0, -7003.0),
    (2, 0, -1, 2, -2602.0, 0.0),
    (2, -1, -2, 0, 2390.0, 10056.0),
    (1, 0, 1, 0, -2348.0, 6322.0),
    (2, -2, 0, 0, 2236.0, -9884.0),
    (0, 1, 2, 0, -2120.0, 5751.0),
    (0, 2, 0, 0, -2069.0, 0.0),
    (2, -2, -1, 0, 2048.0, -4950.0),
    (2, 0, 1, -2, -1773.0, 4130.0),
    (2, 0, 0, 2, -1595.0, 0.0),
    (4, -1, -1, 0, 1215.0, -3958.0),
    (0, 0, 2, 2, -1110.0, 0.0),
    (3, 0, -1, 0, -892.0, 3258.0),
    (2, 1, 1, 0, -810.0, 2616.0),
    (4, -1, -2, 0, 759.0, -1897.0),
    (0, 2, -1, 0, -713.0, -2117.0),
    (2, 2, -1, 0, -700.0, 2354.0),
    (2, 1, -2, 0, 691.0, 0.0),
    (2, -1, 0, -2, 596.0, 0.0),
    (4, 0, 1, 0, 549.0, -1423.0),
    (0, 0, 4, 0, 537.0, -1117.0),
    (4, -1, 0, 0, 520.0, -1571.0),
    (1, 0, -2, 0, -487.0, -1739.0),
    (2, 1, 0, -2, -399.0, 0.0),
    (0, 0, 2, -2, -381.0, -4421.0),
    (1, 1, 1, 0, 351.0, 0.0),
    (3, 0, -2, 0, -340.0, 0.0),
    (4, 0, -3, 0, 330.0, 0.0),
    (2, -1, 2, 0, 327.0, 0.0),
    (0, 2, 1, 0, -323.0, 1165.0),
    (1, 1, -1, 0, 299.0, 0.0),
    (2, 0, 3, 0, 294.0, 0.0),
    (2, 0, -1, -2, 0.0, 8752.0),
];

/// Periodic terms for latitude (1e-6 deg, sine), multipliers (D, M, M', F).
const LAT_TERMS: &[(i8, i8, i8, i8, f64)] = &[
    (0, 0, 0, 1, 5128122.0),
    (0, 0, 1, 1, 280602.0),
    (0, 0, 1, -1, 277693.0),
    (2, 0, 0, -1, 173237.0),
    (2, 0, -1, 1, 55413.0),
    (2, 0, -1, -1, 46271.0),
    (2, 0, 0, 1, 32573.0),
    (0, 0, 2, 1, 17198.0),
    (2, 0, 1, -1, 9266.0),
    (0, 0, 2, -1, 8822.0),
    (2, -1, 0, -1, 8216.0),
    (2, 0, -2, -1, 4324.0),
    (2, 0, 1, 1, 4200.0),
    (2, 1, 0, -1, -3359.0),
    (2, -1, -1, 1, 2463.0),
    (2, -1, 0, 1, 2211.0),
    (2, -1, -1, -1, 2065.0),
    (0, 1, -1, -1, -1870.0),
    (4, 0, -1, -1, 1828.0),
    (0, 1, 0, 1, -1794.0),
    (0, 0, 0, 3, -1749.0),
    (0, 1, -1, 1, -1565.0),
    (1, 0, 0, 1, -1491.0),
    (0, 1, 1, 1, -1475.0),
    (0, 1, 1, -1, -1410.0),
    (0, 1, 0, -1, -1344.0),
    (1, 0, 0, -1, -1335.0),
    (0, 0, 3, 1, 1107.0),
    (4, 0, 0, -1, 1021.0),
    (4, 0, -1, 1, 833.0),
    (0, 0, 1, -3, 777.0),
    (4, 0, -2, 1, 671.0),
    (2, 0, 0, -3, 607.0),
    (2, 0, 2, -1, 596.0),
    (2, -1, 1, -1, 491.0),
    (2, 0, -2, 1, -451.0),
    (0, 0, 3, -1, 439.0),
    (2, 0, 2, 1, 422.0),
    (2, 0, -3, -1, 421.0),
    (2, 1, -1, 1, -366.0),
    (2, 1, 0, 1, -351.0),
    (4, 0, 0, 1, 331.0),
    (2, -1, 1, 1, 315.0),
    (2, -2, 0, -1, 383.0),
    (0, 0, 1, 3, -283.0),
    (2, 1, 1, -1, -229.0),
    (1, 1, 0, -1, 223.0),
    (1, 1, 0, 1, 223.0),
    (0, 1, -2, -1, -220.0),
    (2, 1, -1, -1, -220.0),
    (1, 0, 1, 1, -185.0),
    (2, -1, -2, -1, 181.0),
    (0, 1, 2, 1, -177.0),
    (4, 0, -2, -1, 176.0),
    (4, -1, -1, -1, 166.0),
    (1, 0, 1, -1, -164.0),
    (4, 0, 1, -1, 132.0),
    (1, 0, -1, -1, -119.0),
    (4, -1, 0, -1, 115.0),
    (2, -2, 0, 1, 107.0),
];

pub fn lunar_position(jde: f64) -> LunarPosition {
    let t = frames::centuries_since_j2000(jde);
    let args = lunar_arguments(t);

    let lp = args.mean_longitude.to_radians();
    let d = args.elongation.to_radians();
    let m = args.solar_anomaly.to_radians();
    let mp = args.lunar_anomaly.to_radians();
    let f = args.latitude_argument.to_radians();

    // Eccentricity damping for terms involving the solar anomaly.
    let e = 1.0 - 0.002516 * t - 0.0000074 * t * t;
    let e_factor = |m_mult: i8| match m_mult.abs() {
        0 => 1.0,
        1 => e,
        _ => e * e,
    };

    let mut sum_l = 0.0;
    let mut sum_r = 0.0;
    for &(td, tm, tmp, tf, sl, sr) in LON_DIST_TERMS {
        let arg = td as f64 * d + tm as f64 * m + tmp as f64 * mp + tf as f64 * f;
        let scale = e_factor(tm);
        sum_l += sl * scale * arg.sin();
        sum_r += sr * scale * arg.cos();
    }

    let mut sum_b = 0.0;
    for &(td, tm, tmp, tf, sb) in LAT_TERMS {
        let arg = td as f64 * d + tm as f64 * m + tmp as f64 * mp + tf as f64 * f;
        sum_b += sb * e_factor(tm) * arg.sin();
    }

    // Planetary perturbations and the flattening term.
    let a1 = (119.75 + 131.849 * t).to_radians();
    let a2 = (53.09 + 479264.290 * t).to_radians();
    let a3 = (313.45 + 481266.484 * t).to_radians();
    sum_l += 3958.0 * a1.sin() + 1962.0 * (lp - f).sin() + 318.0 * a2.sin();
    sum_b += -2235.0 * lp.sin()
        + 382.0 * a3.sin()
        + 175.0 * (a1 - f).sin()
        + 175.0 * (a1 + f).sin()
        + 127.0 * (lp - mp).sin()
        - 115.0 * (lp + mp).sin();

    let longitude = args.mean_longitude + sum_l / 1e6;
    let latitude = sum_b / 1e6;
    let distance_km = 385000.56 + sum_r / 1e3;

    let apparent_longitude =
        frames::normalize_deg(longitude + frames::nutation_in_longitude_deg(t));
    let obliquity = frames::true_obliquity_deg(t);
    let (ra, dec) = frames::ecliptic_to_equatorial(apparent_longitude, latitude, obliquity);

    LunarPosition {
        apparent_longitude_deg: apparent_longitude,
        latitude_deg: latitude,
        right_ascension_deg: ra,
        declination_deg: dec,
        distance_km,
        horizontal_parallax_deg: (EARTH_RADIUS_KM / distance_km).asin().to_degrees(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // 1992 April 12.0 TD.
    const JDE_1992: f64 = 2448724.5;

    #[test]
    fn test_lunar_arguments_reference_1992() {
        let t = frames::centuries_since_j2000(JDE_1992);
        let args = lunar_arguments(t);
        assert!((args.mean_longitude - 134.290182).abs() < 1e-4);
        assert!((args.elongation - 113.842304).abs() < 1e-4);
        assert!((args.solar_anomaly - 97.643514).abs() < 1e-4);
        assert!((args.lunar_anomaly - 5.150833).abs() < 1e-4);
        assert!((args.latitude_argument - 219.889721).abs() < 1e-4);
    }

    #[test]
    fn test_lunar_position_reference_1992() {
        // Geocentric lon 133.162655, lat -3.229126, distance 368409.7 km;
        // nutation that day adds +16.6" to the longitude.
        let moon = lunar_position(JDE_1992);
        assert!(
            (moon.apparent_longitude_deg - 133.167265).abs() < 0.01,
            "lon {}",
            moon.apparent_longitude_deg
        );
        assert!(
            (moon.latitude_deg + 3.229126).abs() < 0.01,
            "lat {}",
            moon.latitude_deg
        );
        assert!(
            (moon.distance_km - 368409.7).abs() < 100.0,
            "dist {}",
            moon.distance_km
        );
        // Meeus gets pi = 0.991990 deg for this distance.
        assert!((moon.horizontal_parallax_deg - 0.99199).abs() < 0.001);
    }

    #[test]
    fn test_distance_stays_in_orbit_bounds() {
        // Sample across a month; the geocentric distance must stay within
        // the perigee/apogee envelope.
        for day in 0..28 {
            let moon = lunar_position(2459580.5 + day as f64);
            assert!(
                (350_000.0..410_000.0).contains(&moon.distance_km),
                "day {day}: {}",
                moon.distance_km
            );
        }
    }

    #[test]
    fn test_latitude_bounded_by_inclination() {
        for day in 0..28 {
            let moon = lunar_position(2459580.5 + day as f64);
            assert!(moon.latitude_deg.abs() < 5.4, "day {day}");
        }
    }
}
