//! In-memory form host that records every presentation request

#![allow(dead_code)]

use regform::{FieldId, FormSurface, Notice};
use std::collections::HashMap;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Display(FieldId, Option<String>),
    Focus(FieldId),
    Reset,
    Notify(Notice),
}

#[derive(Debug, Default)]
pub struct RecordingForm {
    pub values: HashMap<FieldId, String>,
    pub labels: HashMap<FieldId, String>,
    pub actions: Vec<Action>,
}

impl RecordingForm {
    pub fn with_values(values: &[(FieldId, &str)]) -> Self {
        Self {
            values: values.iter().map(|(f, v)| (*f, v.to_string())).collect(),
            ..Self::default()
        }
    }

    pub fn valid() -> Self {
        Self::with_values(&[
            (FieldId::FullName, "Jane Doe"),
            (FieldId::Email, "user@domain.com"),
            (FieldId::Password, "Passw0rd!"),
            (FieldId::ConfirmPassword, "Passw0rd!"),
            (FieldId::Age, "18"),
        ])
    }

    pub fn set(&mut self, field: FieldId, value: &str) -> &mut Self {
        self.values.insert(field, value.to_string());
        self
    }

    pub fn notices(&self) -> Vec<&Notice> {
        self.actions
            .iter()
            .filter_map(|a| match a {
                Action::Notify(n) => Some(n),
                _ => None,
            })
            .collect()
    }

    pub fn focused(&self) -> Vec<FieldId> {
        self.actions
            .iter()
            .filter_map(|a| match a {
                Action::Focus(f) => Some(*f),
                _ => None,
            })
            .collect()
    }

    pub fn displays(&self) -> Vec<(FieldId, Option<String>)> {
        self.actions
            .iter()
            .filter_map(|a| match a {
                Action::Display(f, m) => Some((*f, m.clone())),
                _ => None,
            })
            .collect()
    }

    pub fn was_reset(&self) -> bool {
        self.actions.contains(&Action::Reset)
    }
}

impl FormSurface for RecordingForm {
    fn value(&self, field: FieldId) -> String {
        self.values.get(&field).cloned().unwrap_or_default()
    }

    fn label(&self, field: FieldId) -> String {
        self.labels
            .get(&field)
            .cloned()
            .unwrap_or_else(|| field.default_label().to_string())
    }

    fn display_field_error(&mut self, field: FieldId, message: Option<&str>) {
        self.actions
            .push(Action::Display(field, message.map(str::to_string)));
    }

    fn focus(&mut self, field: FieldId) {
        self.actions.push(Action::Focus(field));
    }

    fn reset(&mut self) {
        self.values.clear();
        self.actions.push(Action::Reset);
    }

    fn notify(&mut self, notice: &Notice) {
        self.actions.push(Action::Notify(notice.clone()));
    }
}
