//! Full name validation

pub const NAME_EMPTY: &str = "Full Name cannot be empty.";
pub const NAME_TOO_SHORT: &str = "Full Name must contain at least two words (First and Last).";

/// Full name must hold at least two whitespace-separated words
pub fn validate_full_name(value: &str) -> Result<(), String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(NAME_EMPTY.to_string());
    }

    if trimmed.split_whitespace().count() < 2 {
        return Err(NAME_TOO_SHORT.to_string());
    }

    Ok(())
}
