//! Coverage basket
//!
//! Tracks the coverages chosen for one policy while it is being assembled:
//! selecting a coverage card creates a selection, amount and term edits
//! mutate it, deselecting discards it, and [`CoverageBasket::quote`] reads
//! the current state through the aggregator.

use premia_common::{
    CoverageError, CoverageSelection, PolicyQuote, Result, TermLength,
};
use premia_validation::{validate_currency_amount, CurrencyBounds};
use rust_decimal::Decimal;
use tracing::debug;

use crate::pricing::PremiumEngine;

/// Ordered set of coverage selections for one policy
#[derive(Debug, Clone)]
pub struct CoverageBasket {
    engine: PremiumEngine,
    default_term: TermLength,
    currency: CurrencyBounds,
    selections: Vec<CoverageSelection>,
}

impl CoverageBasket {
    pub fn new(engine: PremiumEngine) -> Self {
        Self {
            engine,
            default_term: TermLength::default(),
            currency: CurrencyBounds::default(),
            selections: Vec::new(),
        }
    }

    /// Term given to newly selected coverages
    pub fn with_default_term(mut self, term: TermLength) -> Self {
        self.default_term = term;
        self
    }

    /// Bounds applied to amounts entered with [`CoverageBasket::set_amount`]
    pub fn with_currency_bounds(mut self, currency: CurrencyBounds) -> Self {
        self.currency = currency;
        self
    }

    /// Add a coverage at its minimum amount and the default term
    ///
    /// Selecting an already selected coverage leaves it unchanged.
    pub fn select(&mut self, type_id: &str) -> Result<&CoverageSelection> {
        let coverage = self.engine.catalog().resolve(type_id)?;

        let index = match self.index_of(type_id) {
            Some(index) => index,
            None => {
                self.selections.push(CoverageSelection::new(
                    coverage.id.clone(),
                    coverage.min_coverage,
                    self.default_term.years(),
                ));
                debug!(type_id, "Selected coverage");
                self.selections.len() - 1
            }
        };
        Ok(&self.selections[index])
    }

    /// Remove a coverage, returning its last state
    pub fn deselect(&mut self, type_id: &str) -> Result<CoverageSelection> {
        let index = self.selected_index(type_id)?;
        debug!(type_id, "Deselected coverage");
        Ok(self.selections.remove(index))
    }

    /// Set the requested amount, storing it clamped to the coverage bounds
    ///
    /// Non-positive amounts fail with `InvalidAmount`; amounts outside the
    /// currency bounds or with too many decimals fail with `ValidationFailed`.
    pub fn set_amount(&mut self, type_id: &str, amount: Decimal) -> Result<Decimal> {
        let index = self.selected_index(type_id)?;
        if amount <= Decimal::ZERO {
            return Err(CoverageError::InvalidAmount { amount });
        }
        validate_currency_amount(amount, &self.currency).into_result()?;

        let effective = self.engine.clamp(type_id, amount)?;
        self.selections[index].amount = effective;
        Ok(effective)
    }

    /// Change the term; out-of-set terms fail with `InvalidTermLength`
    pub fn set_term(&mut self, type_id: &str, term_years: u32) -> Result<TermLength> {
        let index = self.selected_index(type_id)?;
        let term = TermLength::try_from(term_years)?;
        self.selections[index].term_years = term.years();
        Ok(term)
    }

    pub fn get(&self, type_id: &str) -> Option<&CoverageSelection> {
        self.index_of(type_id).map(|index| &self.selections[index])
    }

    pub fn is_selected(&self, type_id: &str) -> bool {
        self.index_of(type_id).is_some()
    }

    /// Selections in the order they were made
    pub fn selections(&self) -> &[CoverageSelection] {
        &self.selections
    }

    pub fn len(&self) -> usize {
        self.selections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.selections.is_empty()
    }

    /// Policy quote for the current selections
    pub fn quote(&self) -> Result<PolicyQuote> {
        self.engine.aggregate(&self.selections)
    }

    pub fn into_selections(self) -> Vec<CoverageSelection> {
        self.selections
    }

    fn index_of(&self, type_id: &str) -> Option<usize> {
        self.selections
            .iter()
            .position(|selection| selection.type_id == type_id)
    }

    fn selected_index(&self, type_id: &str) -> Result<usize> {
        self.engine.catalog().resolve(type_id)?;
        self.index_of(type_id)
            .ok_or_else(|| CoverageError::NotSelected {
                type_id: type_id.to_string(),
            })
    }
}
