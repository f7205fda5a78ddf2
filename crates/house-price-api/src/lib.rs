//! # House Price API
//!
//! REST interface for the house price predictor.
//!
//! ```text
//! GET  /               - Service metadata
//! GET  /health         - Health check
//! POST /predict        - Single prediction
//! POST /batch-predict  - Batch prediction
//! ```
//!
//! Handlers validate request shape and hand the request to the shared
//! [`PriceModel`](house_price_protocols::PriceModel). The model's response
//! is returned unchanged.

pub mod error;
pub mod http;
pub mod server;
pub mod state;

pub use error::ApiError;
pub use http::{
    monitoring::{HealthResponse, HealthStatus, ServiceInfo},
    routes::create_router,
};
pub use server::{ApiConfig, ApiServer};
pub use state::AppState;
