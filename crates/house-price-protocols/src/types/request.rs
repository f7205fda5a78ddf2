//! Prediction request types.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Earliest accepted construction year.
pub const MIN_YEAR_BUILT: i32 = 1800;

/// Latest accepted construction year.
pub const MAX_YEAR_BUILT: i32 = 2100;

/// Largest accepted living area in square feet.
pub const MAX_SQFT: f64 = 1_000_000.0;

/// Largest accepted bathroom count.
pub const MAX_BATHROOMS: f64 = 100.0;

/// Area a house is located in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Location {
    Suburban,
    Rural,
    Urban,
    Waterfront,
    Mountain,
}

impl Location {
    /// All locations, in the order clients present them.
    pub const ALL: [Location; 5] = [
        Location::Suburban,
        Location::Rural,
        Location::Urban,
        Location::Waterfront,
        Location::Mountain,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Suburban => "Suburban",
            Self::Rural => "Rural",
            Self::Urban => "Urban",
            Self::Waterfront => "Waterfront",
            Self::Mountain => "Mountain",
        }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Overall state of repair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Condition {
    Poor,
    Fair,
    Good,
    Excellent,
}

impl Condition {
    pub const ALL: [Condition; 4] = [
        Condition::Poor,
        Condition::Fair,
        Condition::Good,
        Condition::Excellent,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Poor => "poor",
            Self::Fair => "fair",
            Self::Good => "good",
            Self::Excellent => "excellent",
        }
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// House features submitted for a price estimate.
///
/// `bedrooms` is unsigned, so negative counts are rejected while decoding.
/// The remaining constraints are checked by [`PredictionRequest::validate`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionRequest {
    /// Living area in square feet, in `(0, MAX_SQFT]`.
    pub sqft: f64,

    /// Number of bedrooms.
    pub bedrooms: u32,

    /// Number of bathrooms, at most [`MAX_BATHROOMS`]. Half baths are allowed.
    pub bathrooms: f64,

    pub location: Location,

    /// Construction year, within [`MIN_YEAR_BUILT`]..=[`MAX_YEAR_BUILT`].
    pub year_built: i32,

    pub condition: Condition,
}

impl PredictionRequest {
    /// Check every field constraint, returning the first violation.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if !self.sqft.is_finite() || self.sqft <= 0.0 {
            return Err(ValidationError::NonPositiveSqft(self.sqft));
        }
        if self.sqft > MAX_SQFT {
            return Err(ValidationError::SqftTooLarge {
                value: self.sqft,
                max: MAX_SQFT,
            });
        }

        if !self.bathrooms.is_finite() || self.bathrooms < 0.0 {
            return Err(ValidationError::NegativeBathrooms(self.bathrooms));
        }
        if self.bathrooms > MAX_BATHROOMS {
            return Err(ValidationError::TooManyBathrooms {
                value: self.bathrooms,
                max: MAX_BATHROOMS,
            });
        }

        if !(MIN_YEAR_BUILT..=MAX_YEAR_BUILT).contains(&self.year_built) {
            return Err(ValidationError::YearBuiltOutOfRange {
                value: self.year_built,
                min: MIN_YEAR_BUILT,
                max: MAX_YEAR_BUILT,
            });
        }

        Ok(())
    }

    /// Validate a batch, tagging the first failure with its index.
    pub fn validate_all(requests: &[PredictionRequest]) -> Result<(), ValidationError> {
        for (index, request) in requests.iter().enumerate() {
            request.validate().map_err(|e| e.at_index(index))?;
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "request_tests.rs"]
mod tests;
