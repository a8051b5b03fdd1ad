//! regform rules
//!
//! Field registry and the pure rule evaluator for the registration form.
//! Shared by the submission coordinator, the CLI and the WASM bindings so
//! every surface reports the same messages.

pub mod age;
pub mod email;
pub mod field;
pub mod name;
pub mod password;

pub use age::*;
pub use email::*;
pub use field::*;
pub use name::*;
pub use password::*;

/// Message returned when the confirmation does not match the password
pub const CONFIRM_MISMATCH: &str = "Confirmation password must exactly match the password.";

/// Confirmation must be exactly the password value, byte for byte
pub fn validate_confirm_password(value: &str, password: &str) -> Result<(), String> {
    if value == password {
        Ok(())
    } else {
        Err(CONFIRM_MISMATCH.to_string())
    }
}

/// Evaluates a single field
///
/// Returns an empty string when the value satisfies the field's rule,
/// otherwise the error message. `password` is only consulted for
/// [`FieldId::ConfirmPassword`].
///
/// # Example
/// ```
/// use regform_rules::{evaluate, FieldId};
/// assert!(evaluate(FieldId::FullName, "Jane Doe", "").is_empty());
/// assert!(!evaluate(FieldId::Age, "17", "").is_empty());
/// ```
pub fn evaluate(field: FieldId, value: &str, password: &str) -> String {
    let result = match field {
        FieldId::FullName => validate_full_name(value),
        FieldId::Email => validate_email(value),
        FieldId::Password => validate_password(value),
        FieldId::ConfirmPassword => validate_confirm_password(value, password),
        FieldId::Age => validate_age(value),
    };

    match result {
        Ok(()) => String::new(),
        Err(message) => {
            tracing::debug!(field = field.id(), %message, "field rejected");
            message
        }
    }
}

/// Evaluates a field by its form id (`fullName`, `email`, ...)
///
/// Ids outside the registry have no rule and are reported as valid.
pub fn evaluate_named(id: &str, value: &str, password: &str) -> String {
    match FieldId::from_id(id) {
        Some(field) => evaluate(field, value, password),
        None => String::new(),
    }
}
