//! HTTP route definitions.

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::http::handlers::{batch_predict, not_found, predict};
use crate::http::monitoring;
use crate::state::AppState;

/// Create the API router.
///
/// ## Route Structure
///
/// ```text
/// GET  /               - Service metadata
/// GET  /health         - Health check
/// POST /predict        - Predict one house
/// POST /batch-predict  - Predict a list of houses
/// ```
///
/// Every route accepts cross-origin requests from any origin.
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(monitoring::service_info))
        .route("/health", get(monitoring::health_check))
        .route("/predict", post(predict))
        .route("/batch-predict", post(batch_predict))
        .fallback(not_found)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

#[cfg(test)]
#[path = "routes_tests.rs"]
mod tests;
