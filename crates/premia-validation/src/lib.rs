//! # Premia Validation
//!
//! Stateless validators that gate external input before a coverage selection
//! is built. One rule set, shared by request handlers and form layers:
//!
//! - [`password`]: strength rules, reporting every unmet rule
//! - [`contact`]: email syntax and phone normalization
//! - [`currency`]: numeric amounts within configurable bounds
//! - [`date`]: calendar dates and policy date ranges
//! - [`identifier`]: 24-character hexadecimal document ids

pub mod contact;
pub mod currency;
pub mod date;
pub mod identifier;
pub mod password;
pub mod report;

pub use contact::{is_valid_email, is_valid_phone, normalize_phone};
pub use currency::{validate_currency, validate_currency_amount, validate_currency_f64, CurrencyBounds};
pub use date::{is_valid_date, parse_date, validate_date_range};
pub use identifier::is_valid_object_id;
pub use password::{check_password, validate_password, PasswordRule};
pub use report::ValidationReport;
