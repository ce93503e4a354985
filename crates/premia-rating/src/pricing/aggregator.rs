//! Policy aggregation
//!
//! Sums premiums across a policy's selections. The first failing selection
//! fails the whole aggregation with its own error, so a displayed total never
//! silently leaves a coverage out.

use premia_common::{CoverageSelection, PolicyQuote, PremiumQuote, Result};
use tracing::debug;

use super::engine::PremiumEngine;

/// Rate every selection, in order, stopping at the first error
pub fn quote_all(
    engine: &PremiumEngine,
    selections: &[CoverageSelection],
) -> Result<Vec<PremiumQuote>> {
    selections
        .iter()
        .map(|selection| engine.quote_selection(selection))
        .collect()
}

/// Policy total with one line per selection, in selection order
///
/// An empty selection list is a valid policy with a zero total.
pub fn aggregate(engine: &PremiumEngine, selections: &[CoverageSelection]) -> Result<PolicyQuote> {
    let mut policy = PolicyQuote::empty();
    for quote in quote_all(engine, selections)? {
        policy.push(&quote);
    }

    debug!(
        coverages = policy.lines.len(),
        total = %policy.total,
        "Aggregated policy premium"
    );
    Ok(policy)
}
