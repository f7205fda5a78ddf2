//! API error types.

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use house_price_protocols::{PredictionError, ValidationError};

/// API error types.
#[derive(Debug, Error)]
pub enum ApiError {
    /// A request field violated its constraint.
    #[error("Validation failed: {0}")]
    Validation(#[from] ValidationError),

    /// The body could not be decoded into the expected shape.
    #[error("Invalid request body: {message}")]
    InvalidBody { status: StatusCode, message: String },

    /// The inference collaborator failed.
    #[error("Prediction failed: {0}")]
    Prediction(PredictionError),

    /// No route matched.
    #[error("Not found: {0}")]
    NotFound(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            Self::InvalidBody { status, .. } => *status,
            Self::Prediction(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Self::Validation(_) => "validation",
            Self::InvalidBody { .. } => "invalid_body",
            Self::Prediction(_) => "inference",
            Self::NotFound(_) => "not_found",
        }
    }
}

impl From<PredictionError> for ApiError {
    fn from(err: PredictionError) -> Self {
        match err {
            PredictionError::InvalidInput(e) => Self::Validation(e),
            other => Self::Prediction(other),
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::InvalidBody {
            status: rejection.status(),
            message: rejection.body_text(),
        }
    }
}

/// JSON body sent with every error response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
    pub kind: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let field = match &self {
            Self::Validation(e) => Some(e.field().to_string()),
            _ => None,
        };
        let body = ErrorBody {
            error: self.to_string(),
            kind: self.kind().to_string(),
            field,
        };
        (self.status(), Json(body)).into_response()
    }
}
