//! Dashboard input form.

use serde::{Deserialize, Serialize};

use house_price_protocols::{Condition, Location, PredictionRequest};

pub const SQFT_RANGE: (f64, f64) = (100.0, 20_000.0);
pub const BEDROOMS_RANGE: (i64, i64) = (0, 20);
pub const BATHROOMS_RANGE: (f64, f64) = (0.0, 20.0);
pub const YEAR_BUILT_RANGE: (i64, i64) = (1800, 2100);

/// Raw form submission.
///
/// Integer fields are signed so out-of-range input reaches the bounds check
/// instead of failing to decode.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionForm {
    pub sqft: f64,
    pub bedrooms: i64,
    pub bathrooms: f64,
    pub location: Location,
    pub year_built: i64,
    pub condition: Condition,
}

impl Default for PredictionForm {
    fn default() -> Self {
        Self {
            sqft: 1500.0,
            bedrooms: 3,
            bathrooms: 2.0,
            location: Location::Rural,
            year_built: 2000,
            condition: Condition::Fair,
        }
    }
}

impl PredictionForm {
    /// Check the widget bounds and build the API payload.
    pub fn to_request(&self) -> Result<PredictionRequest, String> {
        check_float("Square Footage", self.sqft, SQFT_RANGE)?;
        check_int("Bedrooms", self.bedrooms, BEDROOMS_RANGE)?;
        check_float("Bathrooms", self.bathrooms, BATHROOMS_RANGE)?;
        check_int("Year Built", self.year_built, YEAR_BUILT_RANGE)?;

        Ok(PredictionRequest {
            sqft: self.sqft,
            bedrooms: self.bedrooms as u32,
            bathrooms: self.bathrooms,
            location: self.location,
            year_built: self.year_built as i32,
            condition: self.condition,
        })
    }
}

fn check_float(label: &str, value: f64, (min, max): (f64, f64)) -> Result<(), String> {
    if value.is_finite() && (min..=max).contains(&value) {
        Ok(())
    } else {
        Err(format!("{} must be between {} and {}, got {}", label, min, max, value))
    }
}

fn check_int(label: &str, value: i64, (min, max): (i64, i64)) -> Result<(), String> {
    if (min..=max).contains(&value) {
        Ok(())
    } else {
        Err(format!("{} must be between {} and {}, got {}", label, min, max, value))
    }
}
