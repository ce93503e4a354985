//! # Premia Common
//!
//! Shared types, errors, and the coverage catalog for the Premia rating engine.
//!
//! ## Core Types
//!
//! - [`CoverageType`]: catalog entry with base rate and coverage bounds
//! - [`CoverageCatalog`]: immutable lookup table keyed by coverage id
//! - [`CoverageSelection`]: a coverage chosen for a policy (amount + term)
//! - [`TermLength`]: the fixed set of allowed policy terms
//! - [`PremiumQuote`]/[`PolicyQuote`]: derived premium results
//!
//! ## Errors
//!
//! - [`CoverageError`]: recoverable rating and validation failures
//! - [`PremiaError`]: unified error for configuration and serialization

pub mod catalog;
pub mod error;
pub mod types;

// Re-export commonly used types at crate root
pub use catalog::CoverageCatalog;
pub use error::{CatalogError, CoverageError, PremiaError, Result};
pub use types::{
    coverage::CoverageType,
    quote::{PolicyQuote, PremiumQuote, QuoteLine},
    selection::{CoverageSelection, TermLength},
};

/// Premia version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Coverage unit the base rate is quoted against (monthly cost per 10,000)
pub const COVERAGE_UNIT: u32 = 10_000;

/// Months per year, used to annualize the monthly rate over a term
pub const MONTHS_PER_YEAR: u32 = 12;

/// Allowed policy terms in years
pub const ALLOWED_TERM_YEARS: [u32; 5] = [10, 15, 20, 25, 30];

/// Term applied to a newly selected coverage unless configured otherwise
pub const DEFAULT_TERM_YEARS: u32 = 20;
