//! Validation report returned by the multi-rule validators

use premia_common::{CoverageError, Result};
use serde::{Deserialize, Serialize};

/// Outcome of a validator that can fail several rules at once
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationReport {
    pub is_valid: bool,
    /// One message per failed rule, in rule order
    pub errors: Vec<String>,
}

impl ValidationReport {
    pub fn valid() -> Self {
        Self {
            is_valid: true,
            errors: Vec::new(),
        }
    }

    /// Build a report from failed rules; valid iff there are none
    pub fn from_violations<I, V>(violations: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: ToString,
    {
        let errors: Vec<String> = violations.into_iter().map(|v| v.to_string()).collect();
        Self {
            is_valid: errors.is_empty(),
            errors,
        }
    }

    /// Convert into `Err(ValidationFailed)` when any rule failed
    pub fn into_result(self) -> Result<()> {
        if self.is_valid {
            Ok(())
        } else {
            Err(CoverageError::ValidationFailed {
                violations: self.errors,
            })
        }
    }
}
