//! Error types for the prediction protocol.

mod prediction;
mod validation;

pub use prediction::*;
pub use validation::*;
