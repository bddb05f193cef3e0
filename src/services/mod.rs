//! Event resolution pipeline.
//!
//! One resolution flows window -> transits -> rise/set -> phase -> result.
//! Each stage is a free function over the engine so the stages stay
//! independently testable; `assembler` wires them together.

pub mod assembler;
pub mod phase;
pub mod rise_set;
pub mod transit;
pub mod window;

pub use assembler::{resolve_events, resolve_events_range};
pub use window::build_window;
