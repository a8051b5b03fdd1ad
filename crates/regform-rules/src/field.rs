//! Field registry

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identity of a validated form input
///
/// Declaration order is the registry order: submission evaluates and
/// reports fields in exactly this sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FieldId {
    FullName,
    Email,
    Password,
    ConfirmPassword,
    Age,
}

impl FieldId {
    /// Every registered field, in declared order
    pub const ALL: [FieldId; 5] = [
        FieldId::FullName,
        FieldId::Email,
        FieldId::Password,
        FieldId::ConfirmPassword,
        FieldId::Age,
    ];

    /// Form element id of the field
    pub fn id(self) -> &'static str {
        match self {
            FieldId::FullName => "fullName",
            FieldId::Email => "email",
            FieldId::Password => "password",
            FieldId::ConfirmPassword => "confirmPassword",
            FieldId::Age => "age",
        }
    }

    /// Placeholder text used when the form does not supply its own label
    pub fn default_label(self) -> &'static str {
        match self {
            FieldId::FullName => "Full Name",
            FieldId::Email => "Email Address",
            FieldId::Password => "Password",
            FieldId::ConfirmPassword => "Confirm Password",
            FieldId::Age => "Age",
        }
    }

    /// Looks up a field by its form element id (case-sensitive)
    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|field| field.id() == id)
    }
}

impl fmt::Display for FieldId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}
