//! HTTP interface module.
//!
//! Provides REST API endpoints for:
//! - Single and batch price prediction
//! - Health checks and service metadata

pub mod handlers;
pub mod monitoring;
pub mod routes;
