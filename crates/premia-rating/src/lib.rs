//! # Premia Rating
//!
//! Premium calculation, coverage clamping, and policy aggregation.
//!
//! ## Premium Formula
//!
//! ```text
//! effective = clamp(amount, min_coverage, max_coverage)
//! monthly   = (effective / 10000) × base_rate
//! premium   = round_half_up(monthly × term_years / 12)
//! ```
//!
//! Invalid input is rejected before clamping: a non-positive amount fails
//! with `InvalidAmount` and a term outside {10, 15, 20, 25, 30} fails with
//! `InvalidTermLength`. Clamping only corrects in-range input near the
//! coverage bounds.
//!
//! The free functions below rate against the standard catalog. Use
//! [`PremiumEngine`] (or [`RatingConfig::build_engine`]) for a custom one.

pub mod basket;
pub mod config;
pub mod pricing;

use premia_common::{CoverageSelection, PolicyQuote, Result};
use rust_decimal::Decimal;

pub use basket::CoverageBasket;
pub use config::RatingConfig;
pub use pricing::{round_premium, PremiumEngine};

/// Clamp a requested amount to the coverage type's bounds
pub fn clamp(type_id: &str, amount: Decimal) -> Result<Decimal> {
    PremiumEngine::standard().clamp(type_id, amount)
}

/// Premium for one coverage over a term
pub fn calculate(type_id: &str, amount: Decimal, term_years: u32) -> Result<Decimal> {
    PremiumEngine::standard().calculate(type_id, amount, term_years)
}

/// Total premium with a per-coverage breakdown in selection order
pub fn aggregate(selections: &[CoverageSelection]) -> Result<PolicyQuote> {
    PremiumEngine::standard().aggregate(selections)
}
