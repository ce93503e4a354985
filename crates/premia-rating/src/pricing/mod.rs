//! Pricing module
//!
//! - [`engine`]: clamp and premium calculation against a coverage catalog
//! - [`aggregator`]: fail-fast policy totals with ordered line items

pub mod aggregator;
pub mod engine;

pub use aggregator::{aggregate, quote_all};
pub use engine::{round_premium, PremiumEngine};
