//! Year-long consistency scan near the pole.
//!
//! At 89.99 N the Sun's diurnal altitude swing is a few hundredths of a
//! degree, so the horizon is crossed exactly twice a year: once rising in
//! spring, once setting in autumn. Every other day must classify cleanly
//! as polar day or polar night, with the transit visibility flag agreeing.

use chrono::{Datelike, NaiveDate};

use celestial::engine::{Engine, SearchConfig};
use celestial::models::{CelestialBody, DayState, DisplayOffset, GeoPosition};
use celestial::services::resolve_events;

#[test]
fn polar_year_scan() {
    let engine = Engine::new(SearchConfig::default());
    let position = GeoPosition::new(89.99, 20.0, 0.0).unwrap();
    let offset = DisplayOffset::utc();

    let mut rise_days = Vec::new();
    let mut set_days = Vec::new();
    let mut polar_day_count = 0;
    let mut polar_night_count = 0;

    let mut date = NaiveDate::from_ymd_opt(2022, 1, 1).unwrap();
    let end = NaiveDate::from_ymd_opt(2023, 1, 1).unwrap();
    while date < end {
        let result = resolve_events(&engine, CelestialBody::Sun, position, date, offset)
            .unwrap_or_else(|e| panic!("{date}: {e}"));

        match result.day_state {
            DayState::Crossing => {
                if result.rise.instant.is_some() {
                    rise_days.push(date);
                }
                if result.set.instant.is_some() {
                    set_days.push(date);
                }
            }
            DayState::PolarDay => {
                polar_day_count += 1;
                assert_eq!(
                    result.meridian.visible,
                    Some(true),
                    "{date}: polar day with hidden transit"
                );
                assert_eq!(result.rise.instant, None, "{date}");
                assert_eq!(result.set.instant, None, "{date}");
            }
            DayState::PolarNight => {
                polar_night_count += 1;
                assert_eq!(
                    result.meridian.visible,
                    Some(false),
                    "{date}: polar night with visible transit"
                );
            }
        }

        date = date.succ_opt().unwrap();
    }

    assert_eq!(rise_days.len(), 1, "rise days {rise_days:?}");
    assert_eq!(set_days.len(), 1, "set days {set_days:?}");

    let rise_day = rise_days[0];
    let set_day = set_days[0];
    assert_eq!(rise_day.month(), 3, "rise {rise_day}");
    assert_eq!(set_day.month(), 9, "set {set_day}");
    assert!(rise_day < set_day);

    // Roughly half the year each side, continuous light between the
    // crossings.
    assert!(polar_day_count > 150, "polar days {polar_day_count}");
    assert!(polar_night_count > 150, "polar nights {polar_night_count}");
    assert_eq!(polar_day_count + polar_night_count + rise_days.len() + set_days.len(), 365);
}
