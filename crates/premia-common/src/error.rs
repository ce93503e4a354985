//! Error types for Premia
//!
//! Rating failures are plain values returned to the immediate caller; none of
//! them are fatal and none are retried, since every failure is a deterministic
//! function of its input.

use rust_decimal::Decimal;
use thiserror::Error;

/// Result type alias for rating and validation operations
pub type Result<T> = std::result::Result<T, CoverageError>;

/// Coverage rating and validation errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoverageError {
    #[error("Unknown coverage type: {type_id}")]
    UnknownCoverageType { type_id: String },

    #[error("Invalid coverage amount {amount}: must be positive")]
    InvalidAmount { amount: Decimal },

    #[error("Invalid term length {years}: allowed terms are 10, 15, 20, 25 or 30 years")]
    InvalidTermLength { years: u32 },

    #[error("Validation failed: {}", violations.join("; "))]
    ValidationFailed { violations: Vec<String> },

    #[error("Coverage not selected: {type_id}")]
    NotSelected { type_id: String },
}

impl CoverageError {
    pub fn unknown_type(type_id: impl Into<String>) -> Self {
        CoverageError::UnknownCoverageType {
            type_id: type_id.into(),
        }
    }

    /// Rule violations carried by a validation failure (empty for other kinds)
    pub fn violations(&self) -> &[String] {
        match self {
            CoverageError::ValidationFailed { violations } => violations,
            _ => &[],
        }
    }
}

/// Catalog construction errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    #[error("Catalog has no coverage types")]
    Empty,

    #[error("Duplicate coverage type id: {0}")]
    DuplicateId(String),

    #[error("Coverage type id must not be blank")]
    BlankId,

    #[error("Base rate for {id} must be positive, got {rate}")]
    InvalidRate { id: String, rate: Decimal },

    #[error("Coverage bounds for {id} must be positive with min < max, got [{min}, {max}]")]
    InvalidBounds { id: String, min: Decimal, max: Decimal },

    #[error("Premium for {id} overflows at max coverage {max} and rate {rate}")]
    PremiumOverflow { id: String, rate: Decimal, max: Decimal },
}

/// Unified error type for Premia operations
#[derive(Debug, Error)]
pub enum PremiaError {
    // Rating and validation errors
    #[error("Coverage error: {0}")]
    Coverage(#[from] CoverageError),

    // Catalog errors
    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),

    // Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    // Serialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for PremiaError {
    fn from(err: serde_json::Error) -> Self {
        PremiaError::Serialization(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_error_display() {
        let err = CoverageError::unknown_type("pet");
        assert_eq!(err.to_string(), "Unknown coverage type: pet");

        let err = CoverageError::InvalidAmount { amount: dec!(-5) };
        assert!(err.to_string().contains("-5"));
    }

    #[test]
    fn test_validation_failed_lists_violations() {
        let err = CoverageError::ValidationFailed {
            violations: vec!["too short".to_string(), "no digit".to_string()],
        };
        assert_eq!(err.to_string(), "Validation failed: too short; no digit");
        assert_eq!(err.violations().len(), 2);
        assert!(CoverageError::InvalidTermLength { years: 12 }
            .violations()
            .is_empty());
    }

    #[test]
    fn test_unified_error_keeps_kind() {
        let err: PremiaError = CoverageError::InvalidTermLength { years: 12 }.into();
        assert!(matches!(
            err,
            PremiaError::Coverage(CoverageError::InvalidTermLength { years: 12 })
        ));
    }

    #[test]
    fn test_serde_json_error_conversion() {
        let parse_err = serde_json::from_str::<u32>("not json").unwrap_err();
        let err: PremiaError = parse_err.into();
        assert!(matches!(err, PremiaError::Serialization(_)));
    }
}
