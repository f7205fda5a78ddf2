//! Health check and service metadata handlers.

use std::sync::Arc;

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::state::AppState;

/// Health status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    Healthy,
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: HealthStatus,
    pub model_loaded: bool,
}

/// Service metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceInfo {
    pub title: String,
    pub description: String,
    pub version: String,
    pub contact: String,
    pub model_id: String,
    pub uptime_seconds: u64,
    pub endpoints: Vec<String>,
}

const DESCRIPTION: &str = "An API for predicting house prices based on various features. \
Intended for educational purposes only; not for real financial or investment decisions.";

/// Health check.
///
/// GET /health
pub async fn health_check(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: HealthStatus::Healthy,
        model_loaded: state.model.is_loaded(),
    })
}

/// Service metadata.
///
/// GET /
pub async fn service_info(State(state): State<Arc<AppState>>) -> Json<ServiceInfo> {
    Json(ServiceInfo {
        title: "House Price Prediction API".to_string(),
        description: DESCRIPTION.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        contact: env!("CARGO_PKG_AUTHORS").to_string(),
        model_id: state.model.id().to_string(),
        uptime_seconds: state.uptime().as_secs(),
        endpoints: vec![
            "GET /health".to_string(),
            "POST /predict".to_string(),
            "POST /batch-predict".to_string(),
        ],
    })
}
