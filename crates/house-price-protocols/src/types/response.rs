//! Prediction response types.

use std::collections::BTreeMap;

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

/// Price estimate produced by a [`PriceModel`](crate::PriceModel).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionResponse {
    /// Point estimate in dollars.
    pub predicted_price: f64,

    /// `[low, high]` bounds around the estimate.
    pub confidence_interval: [f64; 2],

    /// Signed contribution of each feature, keyed by feature name.
    pub features_importance: BTreeMap<String, f64>,

    /// RFC 3339 UTC timestamp of when the estimate was made.
    pub prediction_time: String,
}

impl PredictionResponse {
    pub fn new(
        predicted_price: f64,
        confidence_interval: [f64; 2],
        features_importance: BTreeMap<String, f64>,
        at: DateTime<Utc>,
    ) -> Self {
        Self {
            predicted_price,
            confidence_interval,
            features_importance,
            prediction_time: at.to_rfc3339_opts(SecondsFormat::Secs, true),
        }
    }
}
