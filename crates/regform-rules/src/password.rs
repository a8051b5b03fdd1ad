//! Password validation
//!
//! Sub-rules are checked in priority order and only the first failure is
//! reported: length, uppercase, digit, special character.

pub const PASSWORD_MIN_LENGTH: usize = 8;

pub const PASSWORD_TOO_SHORT: &str = "Password must be at least 8 characters long.";
pub const PASSWORD_NO_UPPERCASE: &str = "Password requires at least one uppercase letter.";
pub const PASSWORD_NO_DIGIT: &str = "Password requires at least one number.";
pub const PASSWORD_NO_SPECIAL: &str = "Password requires at least one special character.";

/// Anything that is neither an ASCII letter/digit nor whitespace
fn is_special(c: char) -> bool {
    !c.is_ascii_alphanumeric() && !c.is_whitespace()
}

pub fn validate_password(password: &str) -> Result<(), String> {
    if password.chars().count() < PASSWORD_MIN_LENGTH {
        return Err(PASSWORD_TOO_SHORT.to_string());
    }
    if !password.chars().any(|c| c.is_ascii_uppercase()) {
        return Err(PASSWORD_NO_UPPERCASE.to_string());
    }
    if !password.chars().any(|c| c.is_ascii_digit()) {
        return Err(PASSWORD_NO_DIGIT.to_string());
    }
    if !password.chars().any(is_special) {
        return Err(PASSWORD_NO_SPECIAL.to_string());
    }

    Ok(())
}
