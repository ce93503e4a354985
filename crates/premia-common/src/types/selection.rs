//! Coverage selections and term lengths
//!
//! A selection is created when a coverage card is chosen, mutated on every
//! amount/term interaction, and read by the aggregator when a policy summary
//! is produced.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::CoverageError;

/// Allowed policy terms
///
/// The term changes the insurance product itself, so out-of-set values are
/// rejected rather than rounded to the nearest allowed term.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub enum TermLength {
    TenYears,
    FifteenYears,
    TwentyYears,
    TwentyFiveYears,
    ThirtyYears,
}

impl TermLength {
    /// All allowed terms, shortest first
    pub const ALL: [TermLength; 5] = [
        TermLength::TenYears,
        TermLength::FifteenYears,
        TermLength::TwentyYears,
        TermLength::TwentyFiveYears,
        TermLength::ThirtyYears,
    ];

    /// Term length in years
    pub fn years(&self) -> u32 {
        match self {
            TermLength::TenYears => 10,
            TermLength::FifteenYears => 15,
            TermLength::TwentyYears => 20,
            TermLength::TwentyFiveYears => 25,
            TermLength::ThirtyYears => 30,
        }
    }

    /// Look up the term for a number of years, if allowed
    pub fn from_years(years: u32) -> Option<Self> {
        Self::ALL.into_iter().find(|term| term.years() == years)
    }
}

impl Default for TermLength {
    fn default() -> Self {
        TermLength::TwentyYears
    }
}

impl TryFrom<u32> for TermLength {
    type Error = CoverageError;

    fn try_from(years: u32) -> Result<Self, Self::Error> {
        Self::from_years(years).ok_or(CoverageError::InvalidTermLength { years })
    }
}

impl From<TermLength> for u32 {
    fn from(term: TermLength) -> Self {
        term.years()
    }
}

impl std::fmt::Display for TermLength {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} years", self.years())
    }
}

/// A coverage chosen for a policy
///
/// Term is kept as raw years so that an out-of-set value coming from a form
/// or request body reaches the calculator and fails there with
/// [`CoverageError::InvalidTermLength`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CoverageSelection {
    /// Catalog coverage type id
    pub type_id: String,

    /// Requested coverage amount in currency units
    pub amount: Decimal,

    /// Term length in years
    pub term_years: u32,
}

impl CoverageSelection {
    pub fn new(type_id: impl Into<String>, amount: Decimal, term_years: u32) -> Self {
        Self {
            type_id: type_id.into(),
            amount,
            term_years,
        }
    }

    /// Resolve the term, failing if it is not an allowed value
    pub fn term(&self) -> Result<TermLength, CoverageError> {
        TermLength::try_from(self.term_years)
    }
}
