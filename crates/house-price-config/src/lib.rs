//! # House Price Config
//!
//! Configuration management for the API service and dashboard.

mod error;
mod loader;
mod schema;
mod validator;

pub use error::ConfigError;
pub use loader::{API_URL_ENV, ConfigLoader};
pub use schema::*;
pub use validator::{ConfigValidator, ValidationError, ValidationResult, ValidationWarning};
