//! Linear price model.
//!
//! The price is an additive base value (lot, living area, rooms) scaled by
//! location, condition and age multipliers:
//!
//! ```text
//! base  = base_price + sqft * price_per_sqft
//!       + bedrooms * bedroom_value + bathrooms * bathroom_value
//! age   = max(reference_year - year_built, 0)
//! price = base * location * condition * max(1 - depreciation_rate * age, depreciation_floor)
//! ```
//!
//! Feature importances are signed: additive features report their share of
//! the base value, multiplicative features report `multiplier - 1`.

use std::collections::BTreeMap;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tracing::debug;

use house_price_config::ModelConfig;
use house_price_protocols::{
    Condition, Location, PredictionError, PredictionRequest, PredictionResponse, PriceModel,
};

/// Keys of `features_importance`, in request field order.
pub const FEATURE_NAMES: [&str; 6] = [
    "sqft",
    "bedrooms",
    "bathrooms",
    "location",
    "year_built",
    "condition",
];

/// Deterministic price model built from configured coefficients.
pub struct LinearPriceModel {
    config: ModelConfig,
}

impl LinearPriceModel {
    pub fn new(config: ModelConfig) -> Self {
        Self { config }
    }

    fn location_multiplier(&self, location: Location) -> f64 {
        let m = &self.config.location;
        match location {
            Location::Suburban => m.suburban,
            Location::Rural => m.rural,
            Location::Urban => m.urban,
            Location::Waterfront => m.waterfront,
            Location::Mountain => m.mountain,
        }
    }

    fn condition_multiplier(&self, condition: Condition) -> f64 {
        let m = &self.config.condition;
        match condition {
            Condition::Poor => m.poor,
            Condition::Fair => m.fair,
            Condition::Good => m.good,
            Condition::Excellent => m.excellent,
        }
    }

    fn age_factor(&self, year_built: i32) -> f64 {
        let age = (self.config.reference_year - year_built).max(0) as f64;
        (1.0 - self.config.depreciation_rate * age).max(self.config.depreciation_floor)
    }

    /// Estimate a price, stamping the response with `at`.
    pub fn estimate(
        &self,
        request: &PredictionRequest,
        at: DateTime<Utc>,
    ) -> Result<PredictionResponse, PredictionError> {
        let c = &self.config;
        let sqft_value = request.sqft * c.price_per_sqft;
        let bedroom_value = request.bedrooms as f64 * c.bedroom_value;
        let bathroom_value = request.bathrooms * c.bathroom_value;
        let base = c.base_price + sqft_value + bedroom_value + bathroom_value;

        let location = self.location_multiplier(request.location);
        let condition = self.condition_multiplier(request.condition);
        let age = self.age_factor(request.year_built);

        let price = base * location * condition * age;
        if !price.is_finite() || price <= 0.0 {
            return Err(PredictionError::InferenceFailed(format!(
                "model produced an unusable price: {}",
                price
            )));
        }

        let predicted_price = round_to(price, 2);
        let confidence_interval = [
            round_to(price * (1.0 - c.interval_ratio), 2),
            round_to(price * (1.0 + c.interval_ratio), 2),
        ];

        // Same order as FEATURE_NAMES.
        let weights = [
            sqft_value / base,
            bedroom_value / base,
            bathroom_value / base,
            location - 1.0,
            age - 1.0,
            condition - 1.0,
        ];
        let importance: BTreeMap<String, f64> = FEATURE_NAMES
            .iter()
            .zip(weights)
            .map(|(name, weight)| (name.to_string(), round_to(weight, 4)))
            .collect();

        debug!(
            model = %c.id,
            price = predicted_price,
            location = %request.location,
            condition = %request.condition,
            "Estimated price"
        );

        Ok(PredictionResponse::new(
            predicted_price,
            confidence_interval,
            importance,
            at,
        ))
    }
}

impl Default for LinearPriceModel {
    fn default() -> Self {
        Self::new(ModelConfig::default())
    }
}

#[async_trait]
impl PriceModel for LinearPriceModel {
    fn id(&self) -> &str {
        &self.config.id
    }

    async fn predict(
        &self,
        request: &PredictionRequest,
    ) -> Result<PredictionResponse, PredictionError> {
        self.estimate(request, Utc::now())
    }

    async fn predict_batch(
        &self,
        requests: &[PredictionRequest],
    ) -> Result<Vec<PredictionResponse>, PredictionError> {
        let at = Utc::now();
        requests.iter().map(|r| self.estimate(r, at)).collect()
    }
}

fn round_to(value: f64, decimals: i32) -> f64 {
    let scale = 10f64.powi(decimals);
    (value * scale).round() / scale
}

#[cfg(test)]
#[path = "linear_tests.rs"]
mod tests;
