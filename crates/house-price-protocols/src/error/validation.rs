//! Request validation errors.

use thiserror::Error;

/// A field of a [`PredictionRequest`](crate::PredictionRequest) violated its constraint.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("sqft must be a positive number, got {0}")]
    NonPositiveSqft(f64),

    #[error("sqft must be at most {max}, got {value}")]
    SqftTooLarge { value: f64, max: f64 },

    #[error("bathrooms must be a non-negative number, got {0}")]
    NegativeBathrooms(f64),

    #[error("bathrooms must be at most {max}, got {value}")]
    TooManyBathrooms { value: f64, max: f64 },

    #[error("year_built must be between {min} and {max}, got {value}")]
    YearBuiltOutOfRange { value: i32, min: i32, max: i32 },

    #[error("item {index}: {source}")]
    BatchItem {
        index: usize,
        #[source]
        source: Box<ValidationError>,
    },
}

impl ValidationError {
    /// Name of the offending request field.
    pub fn field(&self) -> &'static str {
        match self {
            Self::NonPositiveSqft(_) | Self::SqftTooLarge { .. } => "sqft",
            Self::NegativeBathrooms(_) | Self::TooManyBathrooms { .. } => "bathrooms",
            Self::YearBuiltOutOfRange { .. } => "year_built",
            Self::BatchItem { source, .. } => source.field(),
        }
    }

    /// Wrap this error with the position of the batch element it came from.
    pub fn at_index(self, index: usize) -> Self {
        Self::BatchItem {
            index,
            source: Box::new(self),
        }
    }
}
