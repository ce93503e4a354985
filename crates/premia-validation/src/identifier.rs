//! Document identifier format
//!
//! Reference ids are 24 hexadecimal characters. Checking the shape up front
//! keeps malformed foreign keys away from any lookup.

use std::sync::LazyLock;

use regex::Regex;

static OBJECT_ID_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9a-fA-F]{24}$").expect("object id pattern compiles"));

pub fn is_valid_object_id(id: &str) -> bool {
    OBJECT_ID_RE.is_match(id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_valid_ids() {
        assert!(is_valid_object_id("507f1f77bcf86cd799439011"));
        assert!(is_valid_object_id("507F1F77BCF86CD799439011"));
    }

    #[test]
    fn test_invalid_ids() {
        assert!(!is_valid_object_id("507f1f77bcf86cd79943901"));
        assert!(!is_valid_object_id("507f1f77bcf86cd7994390111"));
        assert!(!is_valid_object_id("507f1f77bcf86cd79943901g"));
        assert!(!is_valid_object_id(" 507f1f77bcf86cd799439011"));
        assert!(!is_valid_object_id(""));
    }

    proptest! {
        #[test]
        fn any_24_hex_chars_pass(id in "[0-9a-f]{24}") {
            prop_assert!(is_valid_object_id(&id));
        }

        #[test]
        fn other_lengths_fail(id in "[0-9a-f]{0,23}|[0-9a-f]{25,40}") {
            prop_assert!(!is_valid_object_id(&id));
        }
    }
}
