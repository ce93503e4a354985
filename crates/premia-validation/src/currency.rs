//! Currency amount validation
//!
//! An amount is valid iff it is numeric, finite, lies within `[min, max]`,
//! and has at most `max_fraction_digits` fractional digits (trailing zeros
//! do not count).

use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;
use rust_decimal::prelude::FromPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::report::ValidationReport;

/// Plain decimal notation: optional sign, digits, optional fraction digits
static AMOUNT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[+-]?[0-9]+(\.[0-9]+)?$").expect("amount pattern compiles"));

/// Inclusive bounds for currency input
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CurrencyBounds {
    pub min: Decimal,
    pub max: Decimal,
    pub max_fraction_digits: u32,
}

impl Default for CurrencyBounds {
    fn default() -> Self {
        Self {
            min: Decimal::ZERO,
            max: Decimal::from(1_000_000_000u64),
            max_fraction_digits: 2,
        }
    }
}

impl CurrencyBounds {
    pub fn new(min: Decimal, max: Decimal) -> Self {
        Self {
            min,
            max,
            ..Self::default()
        }
    }

    fn violations(&self, amount: Decimal) -> Vec<String> {
        let mut violations = Vec::new();
        if amount < self.min {
            violations.push(format!("Amount must be at least {}", self.min));
        }
        if amount > self.max {
            violations.push(format!("Amount must not exceed {}", self.max));
        }
        if amount.normalize().scale() > self.max_fraction_digits {
            violations.push(format!(
                "Amount must have at most {} decimal places",
                self.max_fraction_digits
            ));
        }
        violations
    }
}

/// Validate an already-parsed amount
pub fn validate_currency_amount(amount: Decimal, bounds: &CurrencyBounds) -> ValidationReport {
    ValidationReport::from_violations(bounds.violations(amount))
}

/// Validate a floating point amount, rejecting NaN and infinities
pub fn validate_currency_f64(value: f64, bounds: &CurrencyBounds) -> ValidationReport {
    if !value.is_finite() {
        return ValidationReport::from_violations(["Amount must be a finite number"]);
    }
    match Decimal::from_f64(value) {
        Some(amount) => validate_currency_amount(amount, bounds),
        None => ValidationReport::from_violations(["Amount is out of range"]),
    }
}

/// Validate amount text as entered in a form or request body
pub fn validate_currency(input: &str, bounds: &CurrencyBounds) -> ValidationReport {
    let input = input.trim();
    if !AMOUNT_RE.is_match(input) {
        debug!(input, "Rejected currency input outside plain decimal notation");
        return ValidationReport::from_violations(["Amount must be a valid number"]);
    }
    match Decimal::from_str(input) {
        Ok(amount) => validate_currency_amount(amount, bounds),
        Err(err) => {
            debug!(input, error = %err, "Rejected non-numeric currency input");
            ValidationReport::from_violations(["Amount must be a valid number"])
        }
    }
}
