//! Password strength rules
//!
//! A password is strong iff it is at least 8 characters long and contains a
//! lowercase letter, an uppercase letter, a digit, and one of `@$!%*?&`.

use crate::report::ValidationReport;

/// Minimum password length in characters
pub const MIN_PASSWORD_LENGTH: usize = 8;

/// Special characters accepted by the strength rules
pub const SPECIAL_CHARACTERS: &[char] = &['@', '$', '!', '%', '*', '?', '&'];

/// Individual password strength rule
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PasswordRule {
    MinLength,
    Lowercase,
    Uppercase,
    Digit,
    SpecialCharacter,
}

impl PasswordRule {
    pub const ALL: [PasswordRule; 5] = [
        PasswordRule::MinLength,
        PasswordRule::Lowercase,
        PasswordRule::Uppercase,
        PasswordRule::Digit,
        PasswordRule::SpecialCharacter,
    ];

    /// Whether the password satisfies this rule
    pub fn is_met_by(&self, password: &str) -> bool {
        match self {
            PasswordRule::MinLength => password.chars().count() >= MIN_PASSWORD_LENGTH,
            PasswordRule::Lowercase => password.chars().any(|c| c.is_ascii_lowercase()),
            PasswordRule::Uppercase => password.chars().any(|c| c.is_ascii_uppercase()),
            PasswordRule::Digit => password.chars().any(|c| c.is_ascii_digit()),
            PasswordRule::SpecialCharacter => password.contains(SPECIAL_CHARACTERS),
        }
    }
}

impl std::fmt::Display for PasswordRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PasswordRule::MinLength => write!(
                f,
                "Password must be at least {} characters long",
                MIN_PASSWORD_LENGTH
            ),
            PasswordRule::Lowercase => write!(f, "Password must contain a lowercase letter"),
            PasswordRule::Uppercase => write!(f, "Password must contain an uppercase letter"),
            PasswordRule::Digit => write!(f, "Password must contain a number"),
            PasswordRule::SpecialCharacter => write!(
                f,
                "Password must contain a special character (@$!%*?&)"
            ),
        }
    }
}

/// Rules the password fails, in rule order
pub fn check_password(password: &str) -> Vec<PasswordRule> {
    PasswordRule::ALL
        .into_iter()
        .filter(|rule| !rule.is_met_by(password))
        .collect()
}

/// Strength report with one message per unmet rule
pub fn validate_password(password: &str) -> ValidationReport {
    ValidationReport::from_violations(check_password(password))
}
