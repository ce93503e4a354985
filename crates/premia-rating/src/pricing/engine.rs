//! Premium engine
//!
//! Rates a coverage amount over a term against an immutable catalog:
//! - resolves the coverage type (unknown ids are never defaulted)
//! - rejects out-of-set terms and non-positive amounts
//! - clamps the amount into the coverage bounds before rating

use std::sync::Arc;

use premia_common::{
    CoverageCatalog, CoverageError, CoverageSelection, PolicyQuote, PremiumQuote, Result,
    TermLength,
};
use rust_decimal::{Decimal, RoundingStrategy};
use tracing::{debug, instrument, warn};

use super::aggregator;

/// Round half-up to whole currency units
///
/// Premiums are always positive here, so midpoint-away-from-zero is the
/// same as half-up.
pub fn round_premium(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
}

/// Premium engine over a shared, read-only coverage catalog
///
/// Holds no mutable state; clones share the catalog and every call is
/// referentially transparent.
#[derive(Debug, Clone)]
pub struct PremiumEngine {
    catalog: Arc<CoverageCatalog>,
}

impl PremiumEngine {
    pub fn new(catalog: Arc<CoverageCatalog>) -> Self {
        Self { catalog }
    }

    /// Engine over the standard catalog
    pub fn standard() -> Self {
        Self::new(CoverageCatalog::standard())
    }

    pub fn catalog(&self) -> &CoverageCatalog {
        &self.catalog
    }

    /// Clamp a requested amount into the coverage type's bounds
    pub fn clamp(&self, type_id: &str, requested: Decimal) -> Result<Decimal> {
        let coverage = self.catalog.resolve(type_id)?;
        Ok(coverage.clamp(requested))
    }

    /// Rate a coverage and keep the intermediate values
    #[instrument(level = "debug", skip(self))]
    pub fn quote(&self, type_id: &str, amount: Decimal, term_years: u32) -> Result<PremiumQuote> {
        self.rate(type_id, amount, term_years).inspect_err(|err| {
            warn!(type_id, %amount, term_years, error = %err, "Rejected premium calculation");
        })
    }

    /// Annual premium for a coverage over a term
    pub fn calculate(&self, type_id: &str, amount: Decimal, term_years: u32) -> Result<Decimal> {
        self.quote(type_id, amount, term_years)
            .map(|quote| quote.annual_premium)
    }

    pub fn quote_selection(&self, selection: &CoverageSelection) -> Result<PremiumQuote> {
        self.quote(&selection.type_id, selection.amount, selection.term_years)
    }

    /// Total premium across selections, failing on the first invalid one
    pub fn aggregate(&self, selections: &[CoverageSelection]) -> Result<PolicyQuote> {
        aggregator::aggregate(self, selections)
    }

    fn rate(&self, type_id: &str, amount: Decimal, term_years: u32) -> Result<PremiumQuote> {
        let coverage = self.catalog.resolve(type_id)?;
        let term = TermLength::try_from(term_years)?;
        if amount <= Decimal::ZERO {
            return Err(CoverageError::InvalidAmount { amount });
        }

        let effective_amount = coverage.clamp(amount);
        if effective_amount != amount {
            debug!(
                type_id,
                requested = %amount,
                effective = %effective_amount,
                "Clamped coverage amount to bounds"
            );
        }

        let monthly_rate = coverage.monthly_rate(effective_amount);
        let annual_premium = round_premium(coverage.term_cost(monthly_rate, term.years()));

        Ok(PremiumQuote {
            coverage_id: coverage.id.clone(),
            requested_amount: amount,
            effective_amount,
            monthly_rate,
            term,
            annual_premium,
        })
    }
}

impl Default for PremiumEngine {
    fn default() -> Self {
        Self::standard()
    }
}
