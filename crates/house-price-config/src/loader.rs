//! Configuration loader.

use std::fs;
use std::path::Path;

use regex::Regex;

use crate::error::ConfigError;
use crate::schema::Config;

/// Environment variable that overrides `dashboard.api_url`.
pub const API_URL_ENV: &str = "API_URL";

/// Configuration loader with environment variable substitution.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Config, ConfigError> {
        if !path.exists() {
            return Err(ConfigError::NotFound(path.display().to_string()));
        }
        let content = fs::read_to_string(path)?;
        Self::load_str(&content)
    }

    /// Load configuration from a string.
    pub fn load_str(content: &str) -> Result<Config, ConfigError> {
        let expanded = Self::expand_env_vars(content)?;
        let config: Config = toml::from_str(&expanded)?;
        Ok(config)
    }

    /// Load from `path` when it exists, otherwise start from defaults.
    ///
    /// Environment overrides are applied either way.
    pub fn load_or_default(path: &Path) -> Result<Config, ConfigError> {
        let mut config = match Self::load(path) {
            Ok(config) => config,
            Err(ConfigError::NotFound(_)) => Config::default(),
            Err(e) => return Err(e),
        };
        Self::apply_env_overrides(&mut config);
        Ok(config)
    }

    /// Apply overrides from the process environment.
    pub fn apply_env_overrides(config: &mut Config) {
        if let Ok(api_url) = std::env::var(API_URL_ENV) {
            if !api_url.trim().is_empty() {
                config.dashboard.api_url = api_url;
            }
        }
    }

    /// Expand environment variables in the format `${VAR}`.
    fn expand_env_vars(content: &str) -> Result<String, ConfigError> {
        let re = Regex::new(r"\$\{([^}]+)\}")
            .map_err(|e| ConfigError::InvalidFormat(e.to_string()))?;
        let mut result = content.to_string();

        for cap in re.captures_iter(content) {
            let var_name = &cap[1];
            let var_value = std::env::var(var_name)
                .map_err(|_| ConfigError::EnvVarNotSet(var_name.to_string()))?;
            result = result.replace(&cap[0], &var_value);
        }

        Ok(result)
    }

    /// Expand shell-style paths (e.g., `~/.house-price`).
    pub fn expand_path(path: &str) -> String {
        shellexpand::tilde(path).to_string()
    }
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod tests;
