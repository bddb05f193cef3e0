//! Lunar phase for a window.

use crate::engine::{Engine, EngineError};
use crate::models::ObservationWindow;

/// Phase angle in degrees at the window start: 0 new, 90 first quarter,
/// 180 full, 270 last quarter. Sampled once per window; the angle moves
/// about half a degree per hour, well under display precision.
pub fn moon_phase(engine: &Engine, window: &ObservationWindow) -> Result<f64, EngineError> {
    engine.moon_phase_deg(window.start)
}
