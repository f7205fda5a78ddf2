//! # House Price Protocols
//!
//! Types shared by every layer of the house price predictor.
//! Contains only data definitions and the inference seam - no implementations.
//!
//! ## Core Items
//!
//! - [`PredictionRequest`] - Validated house features sent by clients
//! - [`PredictionResponse`] - Price estimate returned by a model
//! - [`PriceModel`] - Trait for inference collaborators

pub mod error;
pub mod model;
pub mod types;

pub use error::{PredictionError, ValidationError};
pub use model::PriceModel;
pub use types::*;
