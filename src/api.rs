//! Response document types.
//!
//! The public document is a GeoJSON-flavored `Feature`: a fixed envelope
//! (copyright, license, geometry, `when.interval`) around a `properties`
//! object whose keys depend on the body. Instants are rendered at minute
//! precision in the caller's requested offset; angles carry two decimals.
//! Keys are always present, with `null` standing in for an event that did
//! not occur. Clients key on that schema stability.

use serde::Serialize;

use crate::models::{format_instant, CelestialBody, EventResult, RiseSetEvent, TransitEvent};

pub const COPYRIGHT: &str = "MET Norway";
pub const LICENSE_URL: &str = "https://api.met.no/license_data.html";

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[derive(Debug, Clone, Serialize)]
pub struct Geometry {
    #[serde(rename = "type")]
    pub kind: &'static str,
    /// `[longitude, latitude, elevation]`, GeoJSON axis order.
    pub coordinates: [f64; 3],
}

#[derive(Debug, Clone, Serialize)]
pub struct When {
    /// Search interval bounds, offset-adjusted like every other instant.
    pub interval: [String; 2],
}

/// A rise or set entry. `time` is null when the event did not occur.
#[derive(Debug, Clone, Serialize)]
pub struct RiseSetDto {
    pub time: Option<String>,
    pub azimuth: Option<f64>,
}

/// A meridian or antimeridian crossing entry.
#[derive(Debug, Clone, Serialize)]
pub struct TransitDto {
    pub time: Option<String>,
    pub altitude: Option<f64>,
    pub distance: Option<f64>,
    pub visible: Option<bool>,
}

#[derive(Debug, Clone, Serialize)]
pub struct SunProperties {
    pub body: &'static str,
    pub sunrise: RiseSetDto,
    pub sunset: RiseSetDto,
    pub solarnoon: TransitDto,
    pub solarmidnight: TransitDto,
}

#[derive(Debug, Clone, Serialize)]
pub struct MoonProperties {
    pub body: &'static str,
    pub moonrise: RiseSetDto,
    pub moonset: RiseSetDto,
    pub high_moon: TransitDto,
    pub low_moon: TransitDto,
    /// Phase angle in degrees: 0 new, 180 full.
    pub moonphase: f64,
}

#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum Properties {
    Sun(SunProperties),
    Moon(MoonProperties),
}

/// Single-day response document.
#[derive(Debug, Clone, Serialize)]
pub struct EventsResponse {
    pub copyright: &'static str,
    #[serde(rename = "licenseURL")]
    pub license_url: &'static str,
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub geometry: Geometry,
    pub when: When,
    pub properties: Properties,
}

/// One day of a multi-day (legacy) response.
#[derive(Debug, Clone, Serialize)]
pub struct DayEntry {
    pub date: String,
    pub when: When,
    pub properties: Properties,
}

/// Multi-day response document for the legacy route.
#[derive(Debug, Clone, Serialize)]
pub struct MultiDayResponse {
    pub copyright: &'static str,
    #[serde(rename = "licenseURL")]
    pub license_url: &'static str,
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub geometry: Geometry,
    pub days: Vec<DayEntry>,
}

fn rise_set_dto(event: &RiseSetEvent, result: &EventResult) -> RiseSetDto {
    RiseSetDto {
        time: event.instant.map(|t| format_instant(t, &result.offset)),
        azimuth: event.azimuth_deg.map(round2),
    }
}

fn transit_dto(event: &TransitEvent, result: &EventResult) -> TransitDto {
    TransitDto {
        time: event.instant.map(|t| format_instant(t, &result.offset)),
        altitude: event.altitude_deg.map(round2),
        distance: event.distance_km.map(round2),
        visible: event.visible,
    }
}

fn properties(result: &EventResult) -> Properties {
    match result.body {
        CelestialBody::Sun => Properties::Sun(SunProperties {
            body: result.body.display_name(),
            sunrise: rise_set_dto(&result.rise, result),
            sunset: rise_set_dto(&result.set, result),
            solarnoon: transit_dto(&result.meridian, result),
            solarmidnight: transit_dto(&result.antimeridian, result),
        }),
        CelestialBody::Moon => Properties::Moon(MoonProperties {
            body: result.body.display_name(),
            moonrise: rise_set_dto(&result.rise, result),
            moonset: rise_set_dto(&result.set, result),
            high_moon: transit_dto(&result.meridian, result),
            low_moon: transit_dto(&result.antimeridian, result),
            moonphase: round2(result.moon_phase_deg.unwrap_or(0.0)),
        }),
    }
}

fn geometry(result: &EventResult) -> Geometry {
    Geometry {
        kind: "Point",
        coordinates: [
            result.position.longitude,
            result.position.latitude,
            result.position.elevation,
        ],
    }
}

fn when(result: &EventResult) -> When {
    When {
        interval: [
            format_instant(result.window.start, &result.offset),
            format_instant(result.window.end, &result.offset),
        ],
    }
}

impl From<&EventResult> for EventsResponse {
    fn from(result: &EventResult) -> Self {
        Self {
            copyright: COPYRIGHT,
            license_url: LICENSE_URL,
            kind: "Feature",
            geometry: geometry(result),
            when: when(result),
            properties: properties(result),
        }
    }
}

impl MultiDayResponse {
    /// Assemble from per-day results; all days share one position.
    pub fn from_results(results: &[EventResult]) -> Self {
        let geometry = results.first().map(geometry).unwrap_or(Geometry {
            kind: "Point",
            coordinates: [0.0, 0.0, 0.0],
        });
        Self {
            copyright: COPYRIGHT,
            license_url: LICENSE_URL,
            kind: "FeatureCollection",
            geometry,
            days: results
                .iter()
                .map(|result| DayEntry {
                    date: result
                        .offset
                        .apply(result.window.midpoint())
                        .format("%Y-%m-%d")
                        .to_string(),
                    when: when(result),
                    properties: properties(result),
                })
                .collect(),
        }
    }
}
