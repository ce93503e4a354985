//! Email and phone checks
//!
//! The email check is syntactic and permissive: one `@`, a non-empty local
//! part, and a domain containing a dot. It is not RFC 5322 validation.

use std::sync::LazyLock;

use regex::Regex;

/// Minimum digit count for a phone number after normalization
pub const MIN_PHONE_DIGITS: usize = 10;

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^@]+@[^@]*\.[^@]*$").expect("email pattern compiles"));

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

/// Strip everything but ASCII digits
pub fn normalize_phone(phone: &str) -> String {
    phone.chars().filter(|c| c.is_ascii_digit()).collect()
}

/// Valid iff the normalized number has at least 10 digits
pub fn is_valid_phone(phone: &str) -> bool {
    normalize_phone(phone).len() >= MIN_PHONE_DIGITS
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_emails() {
        assert!(is_valid_email("jane@example.com"));
        assert!(is_valid_email("j.doe+policy@mail.example.co.uk"));
    }

    #[test]
    fn test_invalid_emails() {
        assert!(!is_valid_email(""));
        assert!(!is_valid_email("jane.example.com"));
        assert!(!is_valid_email("@example.com"));
        assert!(!is_valid_email("jane@"));
        assert!(!is_valid_email("jane@localhost"));
        assert!(!is_valid_email("jane@doe@example.com"));
    }

    #[test]
    fn test_normalize_phone() {
        assert_eq!(normalize_phone("+1 (555) 123-4567"), "15551234567");
        assert_eq!(normalize_phone("no digits"), "");
    }

    #[test]
    fn test_phone_digit_count() {
        assert!(is_valid_phone("(555) 123-4567"));
        assert!(is_valid_phone("+44 20 7946 0958"));
        assert!(!is_valid_phone("555-1234"));
        assert!(!is_valid_phone("123-456-789"));
    }
}
