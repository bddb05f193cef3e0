//! Domain types shared by the engine, the resolution pipeline and the API.

pub mod body;
pub mod events;
pub mod position;
pub mod time;
pub mod window;

pub use body::{BodyFieldNames, CelestialBody, UnsupportedBody};
pub use events::{DayState, EventResult, RiseSetEvent, TransitEvent};
pub use position::{GeoPosition, InvalidPosition};
pub use time::{format_instant, DisplayOffset, InvalidOffset};
pub use window::ObservationWindow;
