//! Configuration validation.

use url::Url;

use crate::schema::Config;

/// Validation result.
#[derive(Debug, Default)]
pub struct ValidationResult {
    pub errors: Vec<ValidationError>,
    pub warnings: Vec<ValidationWarning>,
}

impl ValidationResult {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn add_error(&mut self, error: ValidationError) {
        self.errors.push(error);
    }

    pub fn add_warning(&mut self, warning: ValidationWarning) {
        self.warnings.push(warning);
    }
}

/// A validation error.
#[derive(Debug)]
pub struct ValidationError {
    pub path: String,
    pub message: String,
}

impl ValidationError {
    pub fn new(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            message: message.into(),
        }
    }
}

/// A validation warning.
#[derive(Debug)]
pub struct ValidationWarning {
    pub path: String,
    pub message: String,
}

impl ValidationWarning {
    pub fn new(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            message: message.into(),
        }
    }
}

/// Configuration validator.
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validate the configuration.
    pub fn validate(config: &Config) -> ValidationResult {
        let mut result = ValidationResult::default();

        Self::validate_listener("server", &config.server.host, config.server.port, &mut result);
        Self::validate_listener(
            "dashboard",
            &config.dashboard.host,
            config.dashboard.port,
            &mut result,
        );
        Self::validate_dashboard(config, &mut result);
        Self::validate_model(config, &mut result);

        result
    }

    fn validate_listener(section: &str, host: &str, port: u16, result: &mut ValidationResult) {
        if port == 0 {
            result.add_error(ValidationError::new(
                format!("{}.port", section),
                "Port cannot be 0",
            ));
        }

        if host.is_empty() {
            result.add_error(ValidationError::new(
                format!("{}.host", section),
                "Host cannot be empty",
            ));
        }
    }

    fn validate_dashboard(config: &Config, result: &mut ValidationResult) {
        match Url::parse(&config.dashboard.api_url) {
            Ok(url) if url.scheme() == "http" || url.scheme() == "https" => {}
            Ok(url) => result.add_error(ValidationError::new(
                "dashboard.api_url",
                format!("Unsupported scheme: {}", url.scheme()),
            )),
            Err(e) => result.add_error(ValidationError::new(
                "dashboard.api_url",
                format!("Invalid URL: {}", e),
            )),
        }

        if config.dashboard.timeout_seconds == 0 {
            result.add_error(ValidationError::new(
                "dashboard.timeout_seconds",
                "timeout_seconds must be greater than 0",
            ));
        }

        if config.dashboard.timeout_seconds > 120 {
            result.add_warning(ValidationWarning::new(
                "dashboard.timeout_seconds",
                "timeout_seconds is very high (>120), the form will hang on a stalled API",
            ));
        }
    }

    fn validate_model(config: &Config, result: &mut ValidationResult) {
        let model = &config.model;

        if model.id.is_empty() {
            result.add_error(ValidationError::new("model.id", "Model id cannot be empty"));
        }

        if model.base_price < 0.0 {
            result.add_error(ValidationError::new(
                "model.base_price",
                "base_price cannot be negative",
            ));
        }

        if model.price_per_sqft <= 0.0 {
            result.add_error(ValidationError::new(
                "model.price_per_sqft",
                "price_per_sqft must be greater than 0",
            ));
        }

        if model.bedroom_value < 0.0 || model.bathroom_value < 0.0 {
            result.add_error(ValidationError::new(
                "model",
                "bedroom_value and bathroom_value cannot be negative",
            ));
        }

        if model.depreciation_rate < 0.0 {
            result.add_error(ValidationError::new(
                "model.depreciation_rate",
                "depreciation_rate cannot be negative",
            ));
        }

        if !(0.0..=1.0).contains(&model.depreciation_floor) || model.depreciation_floor == 0.0 {
            result.add_error(ValidationError::new(
                "model.depreciation_floor",
                "depreciation_floor must be in (0, 1]",
            ));
        }

        if !(0.0..1.0).contains(&model.interval_ratio) {
            result.add_error(ValidationError::new(
                "model.interval_ratio",
                "interval_ratio must be in [0, 1)",
            ));
        } else if model.interval_ratio > 0.5 {
            result.add_warning(ValidationWarning::new(
                "model.interval_ratio",
                "interval_ratio is very wide (>0.5)",
            ));
        }

        let multipliers = [
            ("model.location.suburban", model.location.suburban),
            ("model.location.rural", model.location.rural),
            ("model.location.urban", model.location.urban),
            ("model.location.waterfront", model.location.waterfront),
            ("model.location.mountain", model.location.mountain),
            ("model.condition.poor", model.condition.poor),
            ("model.condition.fair", model.condition.fair),
            ("model.condition.good", model.condition.good),
            ("model.condition.excellent", model.condition.excellent),
        ];
        for (path, value) in multipliers {
            if value <= 0.0 {
                result.add_error(ValidationError::new(path, "Multiplier must be greater than 0"));
            }
        }
    }
}

#[cfg(test)]
#[path = "validator_tests.rs"]
mod tests;
