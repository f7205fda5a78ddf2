//! Inference collaborator trait definition.

use async_trait::async_trait;

use crate::error::PredictionError;
use crate::types::{PredictionRequest, PredictionResponse};

/// Maps house features to a price estimate.
///
/// Implementations receive requests that have already passed
/// [`PredictionRequest::validate`].
#[async_trait]
pub trait PriceModel: Send + Sync {
    /// Returns the model ID.
    fn id(&self) -> &str;

    /// Whether the model is ready to serve predictions.
    fn is_loaded(&self) -> bool {
        true
    }

    /// Estimate the price of a single house.
    async fn predict(
        &self,
        request: &PredictionRequest,
    ) -> Result<PredictionResponse, PredictionError>;

    /// Estimate prices for several houses, preserving input order.
    async fn predict_batch(
        &self,
        requests: &[PredictionRequest],
    ) -> Result<Vec<PredictionResponse>, PredictionError> {
        let mut responses = Vec::with_capacity(requests.len());
        for request in requests {
            responses.push(self.predict(request).await?);
        }
        Ok(responses)
    }
}

#[cfg(test)]
#[path = "model_tests.rs"]
mod tests;
