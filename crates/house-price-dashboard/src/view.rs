//! Defensive extraction of prediction responses.
//!
//! The dashboard never trusts the response shape: each known field is read
//! on its own and a missing or mistyped field only removes that part of the
//! page.

use chrono::{DateTime, NaiveDateTime, Utc};
use serde_json::Value;

pub const NON_NUMERIC_PRICE_WARNING: &str =
    "Prediction returned but not numeric. See raw response below.";

/// Renderable pieces of a prediction response.
#[derive(Debug, Clone, PartialEq)]
pub struct PredictionView {
    pub price: Option<f64>,
    pub confidence_interval: Option<(f64, f64)>,
    /// Already formatted for display.
    pub prediction_time: Option<String>,
    /// Sorted by descending absolute weight.
    pub importances: Vec<(String, f64)>,
    pub warnings: Vec<String>,
    /// Pretty-printed response body.
    pub raw: String,
}

impl PredictionView {
    pub fn from_value(value: &Value) -> Self {
        let mut warnings = Vec::new();

        let price = value.get("predicted_price").and_then(Value::as_f64);
        if price.is_none() {
            warnings.push(NON_NUMERIC_PRICE_WARNING.to_string());
        }

        let confidence_interval = value
            .get("confidence_interval")
            .and_then(Value::as_array)
            .and_then(|items| match items.as_slice() {
                [low, high] => Some((low.as_f64()?, high.as_f64()?)),
                _ => None,
            });

        let prediction_time = match value.get("prediction_time") {
            None | Some(Value::Null) => None,
            Some(Value::String(s)) if s.is_empty() => None,
            Some(Value::String(s)) => Some(format_prediction_time(s)),
            Some(other) => Some(other.to_string()),
        };

        let mut importances = Vec::new();
        if let Some(map) = value.get("features_importance").and_then(Value::as_object) {
            for (name, weight) in map {
                match weight.as_f64() {
                    Some(w) => importances.push((name.clone(), w)),
                    None => warnings.push(format!("Feature importance for '{}' is not numeric", name)),
                }
            }
        }
        importances.sort_by(|a, b| b.1.abs().total_cmp(&a.1.abs()));

        let raw = serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string());

        Self {
            price,
            confidence_interval,
            prediction_time,
            importances,
            warnings,
            raw,
        }
    }
}

/// Format a dollar amount as `$1,234.56`.
pub fn format_currency(amount: f64) -> String {
    let fixed = format!("{:.2}", amount.abs());
    let (whole, frac) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, ch) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let sign = if amount < 0.0 && fixed != "0.00" { "-" } else { "" };
    format!("{}${}.{}", sign, grouped, frac)
}

/// Render an ISO 8601 timestamp as `YYYY-MM-DD HH:MM:SS UTC`.
///
/// Timestamps carrying an offset are converted to UTC. Timestamps without
/// one are shown as-is without a zone suffix. Anything unparseable is
/// returned verbatim.
pub fn format_prediction_time(raw: &str) -> String {
    let zoned = DateTime::parse_from_rfc3339(raw)
        .or_else(|_| DateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S%.f%:z"));
    if let Ok(dt) = zoned {
        return dt
            .with_timezone(&Utc)
            .format("%Y-%m-%d %H:%M:%S UTC")
            .to_string();
    }

    NAIVE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
        .map(|dt| dt.format("%Y-%m-%d %H:%M:%S").to_string())
        .unwrap_or_else(|| raw.to_string())
}

const NAIVE_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];

#[cfg(test)]
#[path = "view_tests.rs"]
mod tests;
