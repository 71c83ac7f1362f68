//! Route table for the API.

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::adapters::http::health::{db_info, health_check, read_root, test_database};
use crate::adapters::http::AppState;

use super::handlers::run_diagnostic;

/// Creates the application router with all endpoints.
///
/// The frontend form is served from another origin, hence the permissive
/// CORS layer.
pub fn api_router(state: AppState) -> Router {
    Router::new()
        .route("/api/v2/diagnostico", post(run_diagnostic))
        .route("/", get(read_root))
        .route("/health", get(health_check))
        .route("/test-db", get(test_database))
        .route("/db-info", get(db_info))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
