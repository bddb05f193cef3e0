//! Event records produced by one resolution.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::body::CelestialBody;
use super::position::GeoPosition;
use super::time::DisplayOffset;
use super::window::ObservationWindow;

/// A meridian or antimeridian crossing. All fields are null when the
/// crossing does not occur inside the window; that is a valid result, not
/// an error.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct TransitEvent {
    pub instant: Option<DateTime<Utc>>,
    pub altitude_deg: Option<f64>,
    pub distance_km: Option<f64>,
    /// Whether the body is above the horizon predicate at the crossing.
    /// This is the signal that separates polar day from polar night.
    pub visible: Option<bool>,
}

/// A horizon crossing (rise or set).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct RiseSetEvent {
    pub instant: Option<DateTime<Utc>>,
    pub azimuth_deg: Option<f64>,
}

/// Classification of the day when rise and set are both absent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DayState {
    /// At least one horizon crossing occurred in the window.
    Crossing,
    /// Body stayed above the horizon for the whole window.
    PolarDay,
    /// Body stayed below the horizon for the whole window.
    PolarNight,
}

/// Everything one resolution produced, before display assembly.
#[derive(Debug, Clone, PartialEq)]
pub struct EventResult {
    pub body: CelestialBody,
    pub position: GeoPosition,
    pub offset: DisplayOffset,
    /// The window derived from the civil date (pre-widening); reported in
    /// the response `when.interval`.
    pub window: ObservationWindow,
    /// The window the rise/set search actually ran over. Equal to `window`
    /// except for the Sun, where it straddles the meridian transit.
    pub search_window: ObservationWindow,
    pub meridian: TransitEvent,
    pub antimeridian: TransitEvent,
    pub rise: RiseSetEvent,
    pub set: RiseSetEvent,
    pub day_state: DayState,
    /// Lunar phase angle at window start, degrees. Moon only.
    pub moon_phase_deg: Option<f64>,
}
