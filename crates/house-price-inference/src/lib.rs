//! Inference collaborators for the house price predictor.
//!
//! Provides [`LinearPriceModel`], a deterministic model driven by the
//! coefficients in [`ModelConfig`](house_price_config::ModelConfig).

mod linear;

pub use linear::{FEATURE_NAMES, LinearPriceModel};
