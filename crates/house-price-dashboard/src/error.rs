//! Dashboard errors.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum DashboardError {
    #[error("Could not reach API at {url}: {message}")]
    Unreachable { url: String, message: String },

    #[error("Invalid API URL '{url}': {message}")]
    InvalidUrl { url: String, message: String },

    #[error("HTTP client error: {0}")]
    Client(String),
}
