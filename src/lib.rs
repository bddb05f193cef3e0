//! Celestial event service.
//!
//! Computes rise, set, meridian and antimeridian crossings of the Sun and
//! Moon, plus the lunar phase, for an observer position, civil date and
//! display offset. Days are cut at local solar midnight so each civil
//! date's events land in one window; polar days and nights come back as
//! classifications, never as errors.
//!
//! Layering, outermost first:
//!
//! - [`http`] - axum transport (feature `http-server`)
//! - [`api`] - the GeoJSON-flavored response documents
//! - [`services`] - the resolution pipeline
//! - [`engine`] - ephemerides, frames and discrete event search
//! - [`models`] - shared domain types

pub mod api;
pub mod config;
pub mod engine;
pub mod models;
pub mod services;

#[cfg(feature = "http-server")]
pub mod http;
