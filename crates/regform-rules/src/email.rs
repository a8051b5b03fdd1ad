//! Email validation

use once_cell::sync::Lazy;
use regex::Regex;

pub const EMAIL_INVALID: &str = "Please enter a valid email address (e.g., user@domain.com).";

/// local@domain.tld with a 2 to 6 letter TLD
static EMAIL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[a-zA-Z0-9._-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,6}$").unwrap()
});

/// Checks the raw value against the email pattern
///
/// The value is not trimmed; surrounding whitespace fails the match.
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_PATTERN.is_match(email)
}

pub fn validate_email(value: &str) -> Result<(), String> {
    if is_valid_email(value) {
        Ok(())
    } else {
        Err(EMAIL_INVALID.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("user@domain.com")]
    #[case("test.user@example.co.uk")]
    #[case("user_name@example-domain.com")]
    #[case("a-b@sub.domain.museum")]
    fn test_valid_emails(#[case] email: &str) {
        assert!(is_valid_email(email));
    }

    #[rstest]
    #[case("")]
    #[case("bad@")]
    #[case("@example.com")]
    #[case("user@example")]
    #[case("user+tag@example.com")]
    #[case("user@example.c")]
    #[case("user@example.toolongtld")]
    #[case("user@example.c0m")]
    #[case(" user@example.com")]
    #[case("user@@example.com")]
    fn test_invalid_emails(#[case] email: &str) {
        assert!(!is_valid_email(email));
    }

    #[test]
    fn test_validate_email_message() {
        assert_eq!(validate_email("bad@"), Err(EMAIL_INVALID.to_string()));
        assert_eq!(validate_email("user@domain.com"), Ok(()));
    }
}
