// File: src/outcome.rs
// Purpose: Aggregated submission result and user notifications

use regform_rules::FieldId;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A field that failed its rule
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    pub field: FieldId,
    pub label: String,
    pub message: String,
}

impl FieldError {
    /// Line used in the consolidated failure notice
    pub fn line(&self) -> String {
        format!("- {}: {}", self.label, self.message)
    }
}

/// Result of one submission attempt
///
/// `errors` follows registry order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormOutcome {
    pub valid: bool,
    pub errors: Vec<FieldError>,
}

impl FormOutcome {
    pub fn from_errors(errors: Vec<FieldError>) -> Self {
        Self {
            valid: errors.is_empty(),
            errors,
        }
    }

    pub fn first_invalid(&self) -> Option<FieldId> {
        self.errors.first().map(|e| e.field)
    }

    pub fn lines(&self) -> Vec<String> {
        self.errors.iter().map(FieldError::line).collect()
    }
}

/// Notification handed to the form host
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    Success(String),
    Failure { header: String, lines: Vec<String> },
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Notice::Success(message) => f.write_str(message),
            Notice::Failure { header, lines } => {
                write!(f, "{}\n\n{}", header, lines.join("\n"))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn error(field: FieldId, message: &str) -> FieldError {
        FieldError {
            field,
            label: field.default_label().to_string(),
            message: message.to_string(),
        }
    }

    #[test]
    fn test_outcome_validity() {
        assert!(FormOutcome::from_errors(vec![]).valid);

        let outcome = FormOutcome::from_errors(vec![error(FieldId::Email, "bad"), error(FieldId::Age, "young")]);
        assert!(!outcome.valid);
        assert_eq!(outcome.first_invalid(), Some(FieldId::Email));
        assert_eq!(outcome.lines(), ["- Email Address: bad", "- Age: young"]);
    }

    #[test]
    fn test_failure_notice_text() {
        let notice = Notice::Failure {
            header: "FAILED".to_string(),
            lines: vec!["- A: one".to_string(), "- B: two".to_string()],
        };
        assert_eq!(notice.to_string(), "FAILED\n\n- A: one\n- B: two");
        assert_eq!(Notice::Success("ok".to_string()).to_string(), "ok");
    }
}
