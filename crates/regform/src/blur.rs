// File: src/blur.rs
// Purpose: Live feedback when a field loses focus

use crate::snapshot::FormSnapshot;
use crate::surface::FormSurface;
use regform_rules::FieldId;

/// Re-validates a single field and updates only its inline error
///
/// Returns the rule result (empty when valid).
pub fn blur<F: FormSurface + ?Sized>(field: FieldId, form: &mut F) -> String {
    let snapshot = FormSnapshot::capture(&*form);
    let message = snapshot.evaluate(field);

    let shown = if message.is_empty() { None } else { Some(message.as_str()) };
    form.display_field_error(field, shown);

    message
}
