//! Field validators for operator-entered form input
//!
//! Only the phone number carries a strict wire format; every other field
//! (names, addresses, INN, company type) accepts free text, matching the
//! contract subscribers and companies are recorded under.

use regex::Regex;
use std::sync::OnceLock;

static PHONE_PATTERN: OnceLock<Regex> = OnceLock::new();

/// Validate a phone number against the fixed `+7(DDD)DDD DD-DD` format.
///
/// The literal characters `+7( ) -` are required in exactly those positions;
/// any deviation (wrong digit count, missing symbols, surrounding whitespace)
/// is rejected.
pub fn is_valid_phone(text: &str) -> bool {
    let pattern = PHONE_PATTERN
        .get_or_init(|| Regex::new(r"^\+7\(\d{3}\)\d{3} \d{2}-\d{2}$").expect("phone pattern"));
    pattern.is_match(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_well_formed_phones() {
        assert!(is_valid_phone("+7(999)999 99-99"));
        assert!(is_valid_phone("+7(111)222 33-44"));
        assert!(is_valid_phone("+7(000)000 00-00"));
    }

    #[test]
    fn test_rejects_bare_digits() {
        assert!(!is_valid_phone("89991234567"));
        assert!(!is_valid_phone("+79991234567"));
    }

    #[test]
    fn test_rejects_wrong_grouping() {
        assert!(!is_valid_phone("+7(999)99999-99"));
        assert!(!is_valid_phone("+7(999)999 999-9"));
        assert!(!is_valid_phone("+7(99)999 99-99"));
        assert!(!is_valid_phone("+7(999)999-99-99"));
    }

    #[test]
    fn test_rejects_missing_symbols() {
        assert!(!is_valid_phone("7(999)999 99-99"));
        assert!(!is_valid_phone("+7 999 999 99-99"));
        assert!(!is_valid_phone("+8(999)999 99-99"));
    }

    #[test]
    fn test_rejects_extra_whitespace() {
        assert!(!is_valid_phone(" +7(999)999 99-99"));
        assert!(!is_valid_phone("+7(999)999 99-99 "));
        assert!(!is_valid_phone("+7(999) 999 99-99"));
    }

    #[test]
    fn test_rejects_empty_and_garbage() {
        assert!(!is_valid_phone(""));
        assert!(!is_valid_phone("phone"));
        assert!(!is_valid_phone("+7(abc)def gh-ij"));
    }
}
