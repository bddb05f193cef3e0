//! HTTP transport: a thin axum layer over the resolution pipeline.

pub mod dto;
pub mod error;
pub mod handlers;
pub mod router;
pub mod state;
pub mod xml;

pub use error::{ApiError, AppError};
pub use router::create_router;
pub use state::AppState;
