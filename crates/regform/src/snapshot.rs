// File: src/snapshot.rs
// Purpose: Immutable capture of the form's values and labels

use crate::config::LabelConfig;
use crate::surface::FormSurface;
use regform_rules::{evaluate, FieldId};
use std::collections::HashMap;

/// One registered field as read at capture time
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    pub id: FieldId,
    pub value: String,
    pub label: String,
}

/// Values of every registered field, in registry order
///
/// Captured fresh for each handler invocation and never cached.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormSnapshot {
    fields: Vec<Field>,
}

impl FormSnapshot {
    /// Reads every registered field from the form
    pub fn capture<F: FormSurface + ?Sized>(form: &F) -> Self {
        let fields = FieldId::ALL
            .into_iter()
            .map(|id| Field {
                id,
                value: form.value(id),
                label: form.label(id),
            })
            .collect();
        Self { fields }
    }

    /// Builds a snapshot from loose values; absent fields read as empty
    pub fn from_values(values: &HashMap<FieldId, String>, labels: &LabelConfig) -> Self {
        let fields = FieldId::ALL
            .into_iter()
            .map(|id| Field {
                id,
                value: values.get(&id).cloned().unwrap_or_default(),
                label: labels.label(id).to_string(),
            })
            .collect();
        Self { fields }
    }

    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    pub fn field(&self, id: FieldId) -> &Field {
        // fields are stored in registry order, which is declaration order
        &self.fields[id as usize]
    }

    pub fn value(&self, id: FieldId) -> &str {
        &self.field(id).value
    }

    /// Runs the field's rule against the captured values
    pub fn evaluate(&self, id: FieldId) -> String {
        evaluate(id, self.value(id), self.value(FieldId::Password))
    }
}
