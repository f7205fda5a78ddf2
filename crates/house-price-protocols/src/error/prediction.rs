//! Inference errors.

use thiserror::Error;

use super::ValidationError;

#[derive(Debug, Error)]
pub enum PredictionError {
    #[error("Invalid input: {0}")]
    InvalidInput(#[from] ValidationError),

    #[error("Inference failed: {0}")]
    InferenceFailed(String),
}
