//! Age validation

pub const MINIMUM_AGE: i64 = 18;

pub const AGE_TOO_YOUNG: &str = "You must be 18 years or older to register.";

/// Parses the leading integer of a value
///
/// Leading whitespace and a single sign are accepted, then as many ASCII
/// digits as follow; anything after the digits is ignored. Returns `None`
/// when no digit is present. Magnitudes beyond `i64` saturate.
pub fn parse_leading_int(value: &str) -> Option<i64> {
    let rest = value.trim_start();
    let (negative, rest) = match rest.as_bytes().first() {
        Some(b'-') => (true, &rest[1..]),
        Some(b'+') => (false, &rest[1..]),
        _ => (false, rest),
    };

    let digits_end = rest
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(rest.len());
    let digits = &rest[..digits_end];
    if digits.is_empty() {
        return None;
    }

    let magnitude = digits.parse::<i64>().unwrap_or(i64::MAX);
    Some(if negative { -magnitude } else { magnitude })
}

/// Age must parse as an integer of at least [`MINIMUM_AGE`]
pub fn validate_age(value: &str) -> Result<(), String> {
    match parse_leading_int(value) {
        Some(age) if age >= MINIMUM_AGE => Ok(()),
        _ => Err(AGE_TOO_YOUNG.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_leading_int() {
        assert_eq!(parse_leading_int("18"), Some(18));
        assert_eq!(parse_leading_int("  42"), Some(42));
        assert_eq!(parse_leading_int("+7"), Some(7));
        assert_eq!(parse_leading_int("-3"), Some(-3));
        assert_eq!(parse_leading_int("21years"), Some(21));
        assert_eq!(parse_leading_int("18.9"), Some(18));
        assert_eq!(parse_leading_int("abc"), None);
        assert_eq!(parse_leading_int(""), None);
        assert_eq!(parse_leading_int("-"), None);
        assert_eq!(parse_leading_int("99999999999999999999999"), Some(i64::MAX));
    }

    #[test]
    fn test_age_threshold() {
        assert!(validate_age("18").is_ok());
        assert!(validate_age("65").is_ok());
        assert_eq!(validate_age("17"), Err(AGE_TOO_YOUNG.to_string()));
        assert_eq!(validate_age("abc"), Err(AGE_TOO_YOUNG.to_string()));
        assert_eq!(validate_age(""), Err(AGE_TOO_YOUNG.to_string()));
        assert_eq!(validate_age("-20"), Err(AGE_TOO_YOUNG.to_string()));
    }
}
