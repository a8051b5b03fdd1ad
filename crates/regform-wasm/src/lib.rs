//! regform WASM
//!
//! WebAssembly bindings for the registration form rules.
//! The page keeps its own listeners and DOM updates; these exports give it
//! the same verdicts the native handlers compute.

use regform::{validate, FieldId, FormSnapshot, LabelConfig};
use serde::Deserialize;
use std::collections::HashMap;
use wasm_bindgen::prelude::*;

/// Set panic hook for better error messages in the browser
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// Form values posted from JavaScript, keyed by element id
#[derive(Deserialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct FormValues {
    #[serde(default)]
    pub full_name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
    #[serde(default)]
    pub confirm_password: Option<String>,
    #[serde(default)]
    pub age: Option<String>,

    /// Placeholder labels, keyed by element id
    #[serde(default)]
    pub labels: HashMap<String, String>,
}

impl FormValues {
    fn snapshot(self) -> Result<FormSnapshot, String> {
        let mut labels = LabelConfig::default();
        for (id, label) in self.labels {
            let field = FieldId::from_id(&id).ok_or_else(|| format!("Unknown field: {}", id))?;
            labels.set(field, label);
        }

        let values: HashMap<FieldId, String> = [
            (FieldId::FullName, self.full_name),
            (FieldId::Email, self.email),
            (FieldId::Password, self.password),
            (FieldId::ConfirmPassword, self.confirm_password),
            (FieldId::Age, self.age),
        ]
        .into_iter()
        .filter_map(|(id, value)| value.map(|v| (id, v)))
        .collect();

        Ok(FormSnapshot::from_values(&values, &labels))
    }
}

/// Validate a single field, as on blur
///
/// # Returns
/// Empty string when valid, otherwise the error message. Unknown field ids
/// are reported as valid.
///
/// # Example (JavaScript)
/// ```javascript
/// const error = validateField('confirmPassword', confirm.value, password.value);
/// ```
#[wasm_bindgen(js_name = validateField)]
pub fn validate_field(field_id: &str, value: &str, password: &str) -> String {
    regform::evaluate_named(field_id, value, password)
}

/// Validate the whole form, as on submit
///
/// # Returns
/// `{ valid, errors: [{ field, label, message }] }` with errors in form order
///
/// # Example (JavaScript)
/// ```javascript
/// const outcome = validateForm({
///     fullName: 'Jane Doe',
///     email: 'user@domain.com',
///     password: 'Passw0rd!',
///     confirmPassword: 'Passw0rd!',
///     age: '18',
///     labels: { fullName: 'Full Name' }
/// });
/// ```
#[wasm_bindgen(js_name = validateForm)]
pub fn validate_form(values: JsValue) -> Result<JsValue, JsValue> {
    let values: FormValues = serde_wasm_bindgen::from_value(values)
        .map_err(|e| JsValue::from_str(&format!("Failed to parse form values: {}", e)))?;
    let snapshot = values.snapshot().map_err(|e| JsValue::from_str(&e))?;

    let outcome = validate(&snapshot);
    if !outcome.valid {
        web_sys::console::debug_1(&JsValue::from_str(&format!(
            "regform: {} invalid field(s)",
            outcome.errors.len()
        )));
    }

    Ok(serde_wasm_bindgen::to_value(&outcome)?)
}

/// Element ids of the validated fields, in form order
#[wasm_bindgen(js_name = fieldIds)]
pub fn field_ids() -> Vec<String> {
    FieldId::ALL.iter().map(|f| f.id().to_string()).collect()
}
