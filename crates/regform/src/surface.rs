// File: src/surface.rs
// Purpose: Collaborator traits for the form host (DOM, terminal, tests)

use crate::outcome::Notice;
use regform_rules::FieldId;

/// The form as seen by the handlers
///
/// Implementations own the live values and every visual concern; the
/// handlers only read values through [`crate::FormSnapshot::capture`] and
/// issue presentation requests.
pub trait FormSurface {
    /// Current value of a field
    fn value(&self, field: FieldId) -> String;

    /// Display label of a field, used in the consolidated failure notice
    fn label(&self, field: FieldId) -> String {
        field.default_label().to_string()
    }

    /// Show (`Some`) or clear (`None`) the inline error of a field
    fn display_field_error(&mut self, field: FieldId, message: Option<&str>);

    /// Move input focus to a field
    fn focus(&mut self, field: FieldId);

    /// Clear every field value
    fn reset(&mut self);

    /// Present a notification to the user
    fn notify(&mut self, notice: &Notice);
}

/// A submission event whose default action can be suppressed
pub trait SubmitEvent {
    fn prevent_default(&mut self);
}

/// Submission event with no default action of its own
///
/// Used by hosts that never submit natively (CLI, tests); records whether
/// suppression was requested.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Submission {
    pub default_prevented: bool,
}

impl SubmitEvent for Submission {
    fn prevent_default(&mut self) {
        self.default_prevented = true;
    }
}
