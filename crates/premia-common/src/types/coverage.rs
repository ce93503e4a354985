//! CoverageType - catalog entry for an insurance product
//!
//! Each coverage type carries:
//! - a base rate: monthly cost per 10,000 of coverage
//! - inclusive minimum/maximum bounds on the requested coverage amount

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::CatalogError;
use crate::{ALLOWED_TERM_YEARS, COVERAGE_UNIT, MONTHS_PER_YEAR};

/// Immutable catalog entry for a coverage type
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CoverageType {
    /// Symbolic key (e.g., "life", "health")
    pub id: String,

    /// Display name for coverage cards
    #[serde(default)]
    pub name: String,

    /// Short description of what the coverage protects
    #[serde(default)]
    pub description: String,

    /// Monthly cost per 10,000 of coverage
    #[serde(alias = "base_rate")]
    pub base_rate: Decimal,

    /// Smallest coverage amount that can be quoted (inclusive)
    #[serde(alias = "min_coverage")]
    pub min_coverage: Decimal,

    /// Largest coverage amount that can be quoted (inclusive)
    #[serde(alias = "max_coverage")]
    pub max_coverage: Decimal,
}

impl CoverageType {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        base_rate: Decimal,
        min_coverage: Decimal,
        max_coverage: Decimal,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: String::new(),
            base_rate,
            min_coverage,
            max_coverage,
        }
    }

    /// Set the description shown alongside the coverage
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Constrain an amount to `[min_coverage, max_coverage]`
    ///
    /// Idempotent: clamping an already clamped amount returns it unchanged.
    #[inline]
    pub fn clamp(&self, amount: Decimal) -> Decimal {
        self.min_coverage.max(amount.min(self.max_coverage))
    }

    /// Whether the amount already lies within the coverage bounds
    #[inline]
    pub fn covers(&self, amount: Decimal) -> bool {
        amount >= self.min_coverage && amount <= self.max_coverage
    }

    /// Monthly rate for an (already clamped) coverage amount
    ///
    /// Formula: `(amount / 10000) * base_rate`
    #[inline]
    pub fn monthly_rate(&self, effective_amount: Decimal) -> Decimal {
        (effective_amount / Decimal::from(COVERAGE_UNIT)) * self.base_rate
    }

    /// Unrounded premium over a term: `monthly_rate * years / 12`
    #[inline]
    pub fn term_cost(&self, monthly_rate: Decimal, term_years: u32) -> Decimal {
        monthly_rate * Decimal::from(term_years) / Decimal::from(MONTHS_PER_YEAR)
    }

    /// Check the entry's own invariants
    pub(crate) fn validate(&self) -> Result<(), CatalogError> {
        if self.id.trim().is_empty() {
            return Err(CatalogError::BlankId);
        }
        if self.base_rate <= Decimal::ZERO {
            return Err(CatalogError::InvalidRate {
                id: self.id.clone(),
                rate: self.base_rate,
            });
        }
        if self.min_coverage <= Decimal::ZERO || self.min_coverage >= self.max_coverage {
            return Err(CatalogError::InvalidBounds {
                id: self.id.clone(),
                min: self.min_coverage,
                max: self.max_coverage,
            });
        }
        if self.max_term_cost().is_none() {
            return Err(CatalogError::PremiumOverflow {
                id: self.id.clone(),
                rate: self.base_rate,
                max: self.max_coverage,
            });
        }
        Ok(())
    }

    /// Unrounded premium at max coverage over the longest term, `None` on overflow
    ///
    /// Rating is monotonic in amount and term, so an entry whose worst case
    /// fits cannot overflow for any in-bounds amount.
    fn max_term_cost(&self) -> Option<Decimal> {
        let longest = ALLOWED_TERM_YEARS.iter().copied().max()?;
        self.max_coverage
            .checked_div(Decimal::from(COVERAGE_UNIT))?
            .checked_mul(self.base_rate)?
            .checked_mul(Decimal::from(longest))?
            .checked_div(Decimal::from(MONTHS_PER_YEAR))
    }
}

impl std::fmt::Display for CoverageType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} ({} per 10k/month, {}-{})",
            self.id, self.base_rate, self.min_coverage, self.max_coverage
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn life() -> CoverageType {
        CoverageType::new("life", "Life", dec!(25), dec!(50000), dec!(5000000))
    }

    #[test]
    fn test_clamp_to_bounds() {
        let coverage = life();
        assert_eq!(coverage.clamp(dec!(10)), dec!(50000));
        assert_eq!(coverage.clamp(dec!(250000)), dec!(250000));
        assert_eq!(coverage.clamp(dec!(9000000)), dec!(5000000));
    }

    #[test]
    fn test_clamp_is_inclusive() {
        let coverage = life();
        assert_eq!(coverage.clamp(dec!(50000)), dec!(50000));
        assert_eq!(coverage.clamp(dec!(5000000)), dec!(5000000));
        assert!(coverage.covers(dec!(50000)));
        assert!(!coverage.covers(dec!(49999.99)));
    }

    #[test]
    fn test_monthly_rate() {
        let coverage = life();
        // (500000 / 10000) * 25 = 1250
        assert_eq!(coverage.monthly_rate(dec!(500000)), dec!(1250));
        // 1250 * 20 / 12 = 2083.33...
        let cost = coverage.term_cost(dec!(1250), 20);
        assert!(cost > dec!(2083.33) && cost < dec!(2083.34));
    }

    #[test]
    fn test_validate_rejects_bad_entries() {
        let mut coverage = life();
        coverage.base_rate = Decimal::ZERO;
        assert!(matches!(
            coverage.validate(),
            Err(CatalogError::InvalidRate { .. })
        ));

        let inverted = CoverageType::new("x", "X", dec!(1), dec!(10), dec!(10));
        assert!(matches!(
            inverted.validate(),
            Err(CatalogError::InvalidBounds { .. })
        ));

        let blank = CoverageType::new("  ", "X", dec!(1), dec!(1), dec!(10));
        assert_eq!(blank.validate(), Err(CatalogError::BlankId));

        assert!(life().validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_overflowing_premium() {
        let huge = CoverageType::new(
            "x",
            "X",
            dec!(100000000000000000000),
            dec!(1),
            dec!(100000000000000000000),
        );
        assert!(matches!(
            huge.validate(),
            Err(CatalogError::PremiumOverflow { .. })
        ));

        // largest standard-shaped entries still pass
        let wide = CoverageType::new("wide", "Wide", dec!(1000), dec!(1), dec!(1000000000000));
        assert!(wide.validate().is_ok());
    }
}
