//! Prediction handlers.

use std::sync::Arc;

use axum::{extract::rejection::JsonRejection, extract::State, http::Uri, Json};
use tracing::{error, info, warn};

use house_price_protocols::{PredictionRequest, PredictionResponse};

use crate::error::ApiError;
use crate::state::AppState;

/// Predict the price of one house.
///
/// POST /predict
pub async fn predict(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<PredictionRequest>, JsonRejection>,
) -> Result<Json<PredictionResponse>, ApiError> {
    let Json(request) = payload.inspect_err(|e| warn!("Rejected predict body: {}", e))?;

    if let Err(e) = request.validate() {
        warn!(field = e.field(), "Prediction request failed validation: {}", e);
        return Err(e.into());
    }

    let response = state.model.predict(&request).await.map_err(|e| {
        error!(model = state.model.id(), "Prediction failed: {}", e);
        ApiError::from(e)
    })?;

    info!(
        price = response.predicted_price,
        location = %request.location,
        "Prediction served"
    );
    Ok(Json(response))
}

/// Predict prices for several houses, in input order.
///
/// POST /batch-predict
pub async fn batch_predict(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<Vec<PredictionRequest>>, JsonRejection>,
) -> Result<Json<Vec<PredictionResponse>>, ApiError> {
    let Json(requests) = payload.inspect_err(|e| warn!("Rejected batch body: {}", e))?;
    info!("Batch prediction request: {} houses", requests.len());

    if let Err(e) = PredictionRequest::validate_all(&requests) {
        warn!(field = e.field(), "Batch request failed validation: {}", e);
        return Err(e.into());
    }

    let responses = state.model.predict_batch(&requests).await.map_err(|e| {
        error!(model = state.model.id(), "Batch prediction failed: {}", e);
        ApiError::from(e)
    })?;

    info!("Batch prediction served: {} results", responses.len());
    Ok(Json(responses))
}

/// Fallback for unmatched routes.
pub async fn not_found(uri: Uri) -> ApiError {
    ApiError::NotFound(uri.path().to_string())
}
