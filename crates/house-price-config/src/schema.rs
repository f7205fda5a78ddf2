//! Configuration schema definitions.

use serde::{Deserialize, Serialize};

/// Root configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub dashboard: DashboardConfig,

    #[serde(default)]
    pub model: ModelConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// API server configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_api_port")]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_api_port(),
        }
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_api_port() -> u16 {
    8000
}

/// Dashboard configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_dashboard_port")]
    pub port: u16,

    /// Base URL of the API service the dashboard calls.
    #[serde(default = "default_api_url")]
    pub api_url: String,

    /// Timeout for each prediction call.
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u64,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_dashboard_port(),
            api_url: default_api_url(),
            timeout_seconds: default_timeout(),
        }
    }
}

fn default_dashboard_port() -> u16 {
    8501
}

pub fn default_api_url() -> String {
    "http://localhost:8000".to_string()
}

fn default_timeout() -> u64 {
    20
}

/// Coefficients of the linear price model.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelConfig {
    #[serde(default = "default_model_id")]
    pub id: String,

    /// Value of the lot before any per-feature amounts.
    #[serde(default = "default_base_price")]
    pub base_price: f64,

    #[serde(default = "default_price_per_sqft")]
    pub price_per_sqft: f64,

    #[serde(default = "default_bedroom_value")]
    pub bedroom_value: f64,

    #[serde(default = "default_bathroom_value")]
    pub bathroom_value: f64,

    /// Fraction of value lost per year of age.
    #[serde(default = "default_depreciation_rate")]
    pub depreciation_rate: f64,

    /// Lowest factor age can reduce the price to.
    #[serde(default = "default_depreciation_floor")]
    pub depreciation_floor: f64,

    /// Year age is measured from.
    #[serde(default = "default_reference_year")]
    pub reference_year: i32,

    /// Half-width of the confidence interval as a fraction of the price.
    #[serde(default = "default_interval_ratio")]
    pub interval_ratio: f64,

    #[serde(default)]
    pub location: LocationMultipliers,

    #[serde(default)]
    pub condition: ConditionMultipliers,
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            id: default_model_id(),
            base_price: default_base_price(),
            price_per_sqft: default_price_per_sqft(),
            bedroom_value: default_bedroom_value(),
            bathroom_value: default_bathroom_value(),
            depreciation_rate: default_depreciation_rate(),
            depreciation_floor: default_depreciation_floor(),
            reference_year: default_reference_year(),
            interval_ratio: default_interval_ratio(),
            location: LocationMultipliers::default(),
            condition: ConditionMultipliers::default(),
        }
    }
}

fn default_model_id() -> String {
    "linear-v1".to_string()
}

fn default_base_price() -> f64 {
    50_000.0
}

fn default_price_per_sqft() -> f64 {
    150.0
}

fn default_bedroom_value() -> f64 {
    10_000.0
}

fn default_bathroom_value() -> f64 {
    15_000.0
}

fn default_depreciation_rate() -> f64 {
    0.002
}

fn default_depreciation_floor() -> f64 {
    0.5
}

fn default_reference_year() -> i32 {
    2025
}

fn default_interval_ratio() -> f64 {
    0.1
}

/// Price multiplier per location.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LocationMultipliers {
    pub suburban: f64,
    pub rural: f64,
    pub urban: f64,
    pub waterfront: f64,
    pub mountain: f64,
}

impl Default for LocationMultipliers {
    fn default() -> Self {
        Self {
            suburban: 1.0,
            rural: 0.8,
            urban: 1.25,
            waterfront: 1.6,
            mountain: 0.95,
        }
    }
}

/// Price multiplier per condition.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ConditionMultipliers {
    pub poor: f64,
    pub fair: f64,
    pub good: f64,
    pub excellent: f64,
}

impl Default for ConditionMultipliers {
    fn default() -> Self {
        Self {
            poor: 0.8,
            fair: 0.95,
            good: 1.05,
            excellent: 1.2,
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Directory for rolling log files. `~` is expanded.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dir: Option<String>,

    /// Disable the file layer and log to the console only.
    #[serde(default)]
    pub console_only: bool,
}

#[cfg(test)]
#[path = "schema_tests.rs"]
mod tests;
