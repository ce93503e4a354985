//! Date input
//!
//! Accepts calendar dates (`YYYY-MM-DD`) and RFC 3339 timestamps; timestamps
//! are reduced to their calendar date in the offset they were written in.

use chrono::{DateTime, NaiveDate};

use crate::report::ValidationReport;

pub fn parse_date(input: &str) -> Option<NaiveDate> {
    let input = input.trim();
    NaiveDate::parse_from_str(input, "%Y-%m-%d")
        .ok()
        .or_else(|| {
            DateTime::parse_from_rfc3339(input)
                .ok()
                .map(|timestamp| timestamp.date_naive())
        })
}

pub fn is_valid_date(input: &str) -> bool {
    parse_date(input).is_some()
}

/// Policy period check: both ends parse and the end is after the start
pub fn validate_date_range(start: &str, end: &str) -> ValidationReport {
    let mut violations = Vec::new();
    let start_date = parse_date(start);
    let end_date = parse_date(end);

    if start_date.is_none() {
        violations.push("Start date must be a valid date");
    }
    if end_date.is_none() {
        violations.push("End date must be a valid date");
    }
    if let (Some(start_date), Some(end_date)) = (start_date, end_date) {
        if end_date <= start_date {
            violations.push("End date must be after start date");
        }
    }

    ValidationReport::from_violations(violations)
}
