//! Premium quotes
//!
//! Quotes are derived values: computed from a selection, owned by the caller,
//! and recomputed from scratch whenever an input changes.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::selection::TermLength;

/// Premium quote for a single coverage
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PremiumQuote {
    /// Coverage type id
    pub coverage_id: String,

    /// Amount the caller asked for
    pub requested_amount: Decimal,

    /// Amount actually rated, after clamping to the coverage bounds
    pub effective_amount: Decimal,

    /// Monthly rate for the effective amount
    pub monthly_rate: Decimal,

    /// Policy term
    pub term: TermLength,

    /// Premium, rounded half-up to whole currency units
    pub annual_premium: Decimal,
}

impl PremiumQuote {
    /// Whether the requested amount was pulled into the coverage bounds
    pub fn was_clamped(&self) -> bool {
        self.requested_amount != self.effective_amount
    }
}

/// One line of a policy breakdown
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteLine {
    pub type_id: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub premium: Decimal,
}

impl From<&PremiumQuote> for QuoteLine {
    fn from(quote: &PremiumQuote) -> Self {
        Self {
            type_id: quote.coverage_id.clone(),
            premium: quote.annual_premium,
        }
    }
}

/// Total premium across a policy's coverages
///
/// Lines keep the order in which the coverages were selected.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PolicyQuote {
    #[serde(with = "rust_decimal::serde::float")]
    pub total: Decimal,
    pub lines: Vec<QuoteLine>,
}

impl PolicyQuote {
    /// Quote for a policy with no coverage selected yet
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Append a coverage line and add its premium to the total
    pub fn push(&mut self, quote: &PremiumQuote) {
        self.total += quote.annual_premium;
        self.lines.push(QuoteLine::from(quote));
    }

    /// Premium for a coverage type, if it is part of this quote
    pub fn premium_for(&self, type_id: &str) -> Option<Decimal> {
        self.lines
            .iter()
            .find(|line| line.type_id == type_id)
            .map(|line| line.premium)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use serde_json::json;

    fn quote(id: &str, requested: Decimal, effective: Decimal, premium: Decimal) -> PremiumQuote {
        PremiumQuote {
            coverage_id: id.to_string(),
            requested_amount: requested,
            effective_amount: effective,
            monthly_rate: dec!(0),
            term: TermLength::TwentyYears,
            annual_premium: premium,
        }
    }

    #[test]
    fn test_was_clamped() {
        assert!(quote("life", dec!(10), dec!(50000), dec!(208)).was_clamped());
        assert!(!quote("life", dec!(500000), dec!(500000), dec!(2083)).was_clamped());
    }

    #[test]
    fn test_policy_quote_accumulates_in_order() {
        let mut policy = PolicyQuote::empty();
        assert!(policy.is_empty());

        policy.push(&quote("life", dec!(500000), dec!(500000), dec!(2083)));
        policy.push(&quote("auto", dec!(20000), dec!(20000), dec!(27)));

        assert_eq!(policy.total, dec!(2110));
        let ids: Vec<&str> = policy.lines.iter().map(|l| l.type_id.as_str()).collect();
        assert_eq!(ids, vec!["life", "auto"]);
        assert_eq!(policy.premium_for("auto"), Some(dec!(27)));
        assert_eq!(policy.premium_for("health"), None);
    }

    #[test]
    fn test_policy_quote_json_shape() {
        let mut policy = PolicyQuote::empty();
        policy.push(&quote("life", dec!(500000), dec!(500000), dec!(2083)));

        let value = serde_json::to_value(&policy).unwrap();
        assert_eq!(value["total"], json!(2083.0));
        assert_eq!(value["lines"][0]["typeId"], json!("life"));
        assert_eq!(value["lines"][0]["premium"], json!(2083.0));
    }
}
