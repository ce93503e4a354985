//! Environment overrides for the rating configuration
//!
//! Kept in its own test binary so the variables it sets cannot leak into
//! other configuration tests.

use premia_common::TermLength;
use premia_rating::RatingConfig;
use rust_decimal_macros::dec;

#[test]
fn environment_overrides_defaults() {
    std::env::set_var("PREMIA_DEFAULT_TERM_YEARS", "15");
    std::env::set_var("PREMIA_CURRENCY__MAX", "750000");

    let cfg = RatingConfig::load_from(None).unwrap();

    std::env::remove_var("PREMIA_DEFAULT_TERM_YEARS");
    std::env::remove_var("PREMIA_CURRENCY__MAX");

    assert_eq!(cfg.default_term().unwrap(), TermLength::FifteenYears);
    assert_eq!(cfg.currency.max, dec!(750000));
    assert_eq!(cfg.currency.min, dec!(0));
}
