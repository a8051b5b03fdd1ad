// File: src/submit.rs
// Purpose: Submission handler - validate every field and report once

use crate::config::MessageConfig;
use crate::outcome::{FieldError, FormOutcome, Notice};
use crate::snapshot::FormSnapshot;
use crate::surface::{FormSurface, SubmitEvent};
use tracing::{debug, info};

/// Evaluates every field of a snapshot in registry order
pub fn validate(snapshot: &FormSnapshot) -> FormOutcome {
    let errors = snapshot
        .fields()
        .iter()
        .filter_map(|field| {
            let message = snapshot.evaluate(field.id);
            if message.is_empty() {
                None
            } else {
                Some(FieldError {
                    field: field.id,
                    label: field.label.clone(),
                    message,
                })
            }
        })
        .collect();

    FormOutcome::from_errors(errors)
}

/// Handles a submission attempt
///
/// The event's default action is always suppressed. Every field's inline
/// error is refreshed. On success the form is told to reset after the
/// success notice; on failure a single consolidated notice lists every
/// invalid field and focus moves to the first of them.
///
/// Returns whether the form was valid.
pub fn submit<E, F>(event: &mut E, form: &mut F, messages: &MessageConfig) -> bool
where
    E: SubmitEvent + ?Sized,
    F: FormSurface + ?Sized,
{
    event.prevent_default();

    let snapshot = FormSnapshot::capture(&*form);
    let outcome = validate(&snapshot);

    for field in snapshot.fields() {
        let error = outcome.errors.iter().find(|e| e.field == field.id);
        form.display_field_error(field.id, error.map(|e| e.message.as_str()));
    }

    if outcome.valid {
        info!("registration accepted");
        form.notify(&Notice::Success(messages.success.clone()));
        form.reset();
    } else {
        info!(invalid = outcome.errors.len(), "registration rejected");
        form.notify(&Notice::Failure {
            header: messages.failure_header.clone(),
            lines: outcome.lines(),
        });
        if let Some(first) = outcome.first_invalid() {
            debug!(field = first.id(), "focusing first invalid field");
            form.focus(first);
        }
    }

    outcome.valid
}
