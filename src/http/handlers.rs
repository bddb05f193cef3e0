//! HTTP handlers for the REST API.
//!
//! Handlers validate, then hand the CPU-bound resolution to a blocking
//! worker thread; the async runtime never runs a search itself.

use axum::{
    extract::{Path, Query, State},
    http::header,
    response::{IntoResponse, Response},
    Json,
};
use tracing::info;

use super::dto::{EventsQuery, HealthResponse, LegacyQuery, OutputFormat, ResolvedQuery};
use super::error::AppError;
use super::state::AppState;
use super::xml;
use crate::api::{EventsResponse, MultiDayResponse};
use crate::models::CelestialBody;
use crate::services::{resolve_events, resolve_events_range};

/// Result type for handlers.
pub type HandlerResult<T> = Result<Json<T>, AppError>;

/// GET /health
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// GET /events/{body}
///
/// All celestial events of one body for one civil date.
pub async fn get_events(
    State(state): State<AppState>,
    Path(body): Path<String>,
    Query(query): Query<EventsQuery>,
) -> HandlerResult<EventsResponse> {
    let body: CelestialBody = body.parse()?;
    let resolved = query.validate()?;
    info!(%body, date = %resolved.date, lat = resolved.position.latitude,
        lon = resolved.position.longitude, "events request");

    let result = run_resolution(&state, move |engine| {
        resolve_events(engine, body, resolved.position, resolved.date, resolved.offset)
    })
    .await?;
    Ok(Json(EventsResponse::from(&result)))
}

/// GET /events/{body}/legacy
///
/// The single-day algorithm repeated over up to 15 consecutive dates,
/// rendered as JSON or as the legacy XML document.
pub async fn get_events_legacy(
    State(state): State<AppState>,
    Path(body): Path<String>,
    Query(query): Query<LegacyQuery>,
) -> Result<Response, AppError> {
    let body: CelestialBody = body.parse()?;
    let (resolved, days, format): (ResolvedQuery, u64, OutputFormat) = query.validate()?;
    info!(%body, date = %resolved.date, days, ?format, "legacy events request");

    let results = run_resolution(&state, move |engine| {
        resolve_events_range(engine, body, resolved.position, resolved.date, days, resolved.offset)
    })
    .await?;
    let doc = MultiDayResponse::from_results(&results);

    match format {
        OutputFormat::Json => Ok(Json(doc).into_response()),
        OutputFormat::Xml => {
            let rendered = xml::render_multi_day(&doc)
                .map_err(|e| AppError::Internal(format!("xml rendering failed: {e}")))?;
            Ok((
                [(header::CONTENT_TYPE, "application/xml; charset=utf-8")],
                rendered,
            )
                .into_response())
        }
    }
}

/// Run a resolution closure on the blocking pool.
async fn run_resolution<T, F>(state: &AppState, resolve: F) -> Result<T, AppError>
where
    T: Send + 'static,
    F: FnOnce(&crate::engine::Engine) -> Result<T, crate::engine::EngineError> + Send + 'static,
{
    let engine = state.engine.clone();
    tokio::task::spawn_blocking(move || resolve(&engine))
        .await
        .map_err(|e| AppError::Internal(format!("resolver task failed: {e}")))?
        .map_err(AppError::from)
}
