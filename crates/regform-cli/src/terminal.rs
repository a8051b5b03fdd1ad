// Terminal form host: values come from the command line, presentation goes to stdout

use colored::Colorize;
use regform::{FieldId, FormSurface, LabelConfig, Notice};
use std::collections::HashMap;

pub struct TerminalForm {
    values: HashMap<FieldId, String>,
    labels: LabelConfig,
    focused: Option<FieldId>,
}

impl TerminalForm {
    pub fn new(values: HashMap<FieldId, String>, labels: LabelConfig) -> Self {
        Self {
            values,
            labels,
            focused: None,
        }
    }

    pub fn focused(&self) -> Option<FieldId> {
        self.focused
    }
}

impl FormSurface for TerminalForm {
    fn value(&self, field: FieldId) -> String {
        self.values.get(&field).cloned().unwrap_or_default()
    }

    fn label(&self, field: FieldId) -> String {
        self.labels.label(field).to_string()
    }

    fn display_field_error(&mut self, field: FieldId, message: Option<&str>) {
        match message {
            Some(message) => println!("  {} {}: {}", "✗".red(), self.label(field), message.red()),
            None => println!("  {} {}", "✓".green(), self.label(field)),
        }
    }

    fn focus(&mut self, field: FieldId) {
        println!("  {} {}", "→".yellow(), field.id().yellow());
        self.focused = Some(field);
    }

    fn reset(&mut self) {
        self.values.clear();
        println!("{}", "Form cleared".dimmed());
    }

    fn notify(&mut self, notice: &Notice) {
        println!();
        match notice {
            Notice::Success(message) => println!("{}", message.green().bold()),
            Notice::Failure { header, lines } => {
                println!("{}", header.red().bold());
                println!();
                for line in lines {
                    println!("{}", line);
                }
            }
        }
        println!();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use regform::{submit, MessageConfig, Submission};

    fn form(values: &[(FieldId, &str)]) -> TerminalForm {
        let values = values.iter().map(|(f, v)| (*f, v.to_string())).collect();
        TerminalForm::new(values, LabelConfig::default())
    }

    #[test]
    fn test_missing_values_read_empty() {
        let form = form(&[(FieldId::Email, "user@domain.com")]);
        assert_eq!(form.value(FieldId::Email), "user@domain.com");
        assert_eq!(form.value(FieldId::Age), "");
        assert_eq!(form.label(FieldId::Age), "Age");
    }

    #[test]
    fn test_submit_focuses_first_invalid() {
        let mut form = form(&[(FieldId::FullName, "Jane Doe")]);
        assert!(!submit(&mut Submission::default(), &mut form, &MessageConfig::default()));
        assert_eq!(form.focused(), Some(FieldId::Email));
        assert_eq!(form.value(FieldId::FullName), "Jane Doe");
    }

    #[test]
    fn test_submit_success_clears_values() {
        let mut form = form(&[
            (FieldId::FullName, "Jane Doe"),
            (FieldId::Email, "user@domain.com"),
            (FieldId::Password, "Passw0rd!"),
            (FieldId::ConfirmPassword, "Passw0rd!"),
            (FieldId::Age, "30"),
        ]);
        assert!(submit(&mut Submission::default(), &mut form, &MessageConfig::default()));
        assert_eq!(form.focused(), None);
        assert_eq!(form.value(FieldId::FullName), "");
    }
}
