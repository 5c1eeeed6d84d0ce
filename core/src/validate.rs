//! Input validation for postal codes and state codes.
//!
//! Runs before any request is built. No accent stripping happens here; that
//! is reserved for the free-text city and street fields.

use crate::error::ValidationError;
use crate::types::{PostalCode, StateCode};

/// The 26 states plus the federal district.
pub const VALID_STATES: [&str; 27] = [
    "AC", "AL", "AP", "AM", "BA", "CE", "DF", "ES", "GO", "MA", "MT", "MS", "MG", "PA", "PB",
    "PR", "PE", "PI", "RJ", "RN", "RS", "RO", "RR", "SC", "SP", "SE", "TO",
];

/// Strip `-`, `.` and surrounding whitespace, then require exactly 8 ASCII digits.
pub fn validate_postal_code(raw: &str) -> Result<PostalCode, ValidationError> {
    let cleaned: String = raw.chars().filter(|c| *c != '-' && *c != '.').collect();
    let cleaned = cleaned.trim();
    if cleaned.len() == 8 && cleaned.bytes().all(|b| b.is_ascii_digit()) {
        Ok(PostalCode(cleaned.to_string()))
    } else {
        Err(ValidationError::InvalidFormat)
    }
}

/// Trim and uppercase, then require membership in `VALID_STATES`.
pub fn validate_state_code(raw: &str) -> Result<StateCode, ValidationError> {
    let code = raw.trim().to_uppercase();
    if VALID_STATES.contains(&code.as_str()) {
        Ok(StateCode(code))
    } else {
        Err(ValidationError::InvalidState(code))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn accepts_formatted_postal_code() {
        assert_eq!(validate_postal_code("01310-100").unwrap().as_str(), "01310100");
        assert_eq!(validate_postal_code("01.310-100").unwrap().as_str(), "01310100");
        assert_eq!(validate_postal_code("  01310100 \n").unwrap().as_str(), "01310100");
    }

    #[test]
    fn rejects_wrong_length() {
        assert_eq!(validate_postal_code("1234567"), Err(ValidationError::InvalidFormat));
        assert_eq!(validate_postal_code("123456789"), Err(ValidationError::InvalidFormat));
        assert_eq!(validate_postal_code(""), Err(ValidationError::InvalidFormat));
    }

    #[test]
    fn rejects_non_digits() {
        assert_eq!(validate_postal_code("0131A100"), Err(ValidationError::InvalidFormat));
        assert_eq!(validate_postal_code("0131 0100"), Err(ValidationError::InvalidFormat));
        // Full-width digits are numeric but not ASCII.
        assert_eq!(validate_postal_code("０１３１０１００"), Err(ValidationError::InvalidFormat));
    }

    #[test]
    fn state_code_is_case_insensitive_and_trimmed() {
        assert_eq!(validate_state_code("sp").unwrap().as_str(), "SP");
        assert_eq!(validate_state_code(" Rj ").unwrap().as_str(), "RJ");
        assert_eq!(validate_state_code("df").unwrap().as_str(), "DF");
    }

    #[test]
    fn rejects_unknown_state() {
        assert_eq!(
            validate_state_code("xx"),
            Err(ValidationError::InvalidState("XX".to_string()))
        );
        assert!(validate_state_code("").is_err());
        assert!(validate_state_code("SPX").is_err());
    }

    #[test]
    fn every_listed_state_is_accepted() {
        for uf in VALID_STATES {
            assert_eq!(validate_state_code(&uf.to_lowercase()).unwrap().as_str(), uf);
        }
    }

    proptest! {
        #[test]
        fn prop_separators_are_ignored(
            digits in "[0-9]{8}",
            seps in proptest::collection::vec(prop_oneof![Just(""), Just("-"), Just(".")], 9),
        ) {
            let mut raw = String::new();
            for (i, d) in digits.chars().enumerate() {
                raw.push_str(seps[i]);
                raw.push(d);
            }
            raw.push_str(seps[8]);
            let code = validate_postal_code(&raw).unwrap();
            prop_assert_eq!(code.as_str(), digits.as_str());
        }

        #[test]
        fn prop_short_codes_rejected(digits in "[0-9]{0,7}") {
            prop_assert_eq!(validate_postal_code(&digits), Err(ValidationError::InvalidFormat));
        }

        #[test]
        fn prop_two_letters_accepted_iff_listed(code in "[a-zA-Z]{2}") {
            let listed = VALID_STATES.contains(&code.to_uppercase().as_str());
            prop_assert_eq!(validate_state_code(&code).is_ok(), listed);
        }
    }
}
