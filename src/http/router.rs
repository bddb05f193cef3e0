//! Router configuration for the HTTP API.
//!
//! This module sets up all routes and middleware (CORS, compression,
//! tracing) and creates the axum router ready for serving.

use axum::{routing::get, Router};
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers;
use super::state::AppState;

/// Create the main application router with all routes and middleware.
pub fn create_router(state: AppState) -> Router {
    // Permissive CORS: the documents are public data.
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(handlers::health_check))
        .route("/events/{body}", get(handlers::get_events))
        .route("/events/{body}/legacy", get(handlers::get_events_legacy))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::{Engine, SearchConfig};
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use std::sync::Arc;
    use tower::util::ServiceExt;

    fn app() -> Router {
        let engine = Arc::new(Engine::new(SearchConfig::default()));
        create_router(AppState::new(engine))
    }

    async fn status_of(uri: &str) -> StatusCode {
        let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
        app().oneshot(request).await.unwrap().status()
    }

    #[tokio::test]
    async fn test_health() {
        assert_eq!(status_of("/health").await, StatusCode::OK);
    }

    #[tokio::test]
    async fn test_events_sun_ok() {
        let uri = "/events/sun?date=2022-06-01&lat=59.91&lon=10.75&offset=%2B02:00";
        assert_eq!(status_of(uri).await, StatusCode::OK);
    }

    #[tokio::test]
    async fn test_events_moon_ok() {
        let uri = "/events/moon?date=2022-06-01&lat=59.91&lon=10.75";
        assert_eq!(status_of(uri).await, StatusCode::OK);
    }

    #[tokio::test]
    async fn test_unknown_body_is_bad_request() {
        let uri = "/events/mars?date=2022-06-01&lat=59.91&lon=10.75";
        assert_eq!(status_of(uri).await, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_missing_date_is_bad_request() {
        assert_eq!(
            status_of("/events/sun?lat=59.91&lon=10.75").await,
            StatusCode::BAD_REQUEST
        );
    }

    #[tokio::test]
    async fn test_out_of_range_latitude_is_bad_request() {
        let uri = "/events/sun?date=2022-06-01&lat=91&lon=10";
        assert_eq!(status_of(uri).await, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_out_of_range_year_is_engine_failure() {
        let uri = "/events/sun?date=2150-06-01&lat=59.91&lon=10.75";
        assert_eq!(status_of(uri).await, StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[tokio::test]
    async fn test_legacy_days_and_xml() {
        let ok = "/events/moon/legacy?date=2022-06-01&lat=59.91&lon=10.75&days=3&format=xml";
        assert_eq!(status_of(ok).await, StatusCode::OK);

        let too_many = "/events/moon/legacy?date=2022-06-01&lat=59.91&lon=10.75&days=16";
        assert_eq!(status_of(too_many).await, StatusCode::BAD_REQUEST);
    }
}
