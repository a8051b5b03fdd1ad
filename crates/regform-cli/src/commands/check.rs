use anyhow::Result;
use regform::{blur, Config, FieldId};
use std::collections::HashMap;

use super::parse_field;
use crate::terminal::TerminalForm;

/// Runs live feedback for one field; `password` backs the confirmation check
pub fn execute(field: &str, value: &str, password: &str, config: &Config) -> Result<bool> {
    let field = parse_field(field)?;

    let mut values = HashMap::new();
    values.insert(FieldId::Password, password.to_string());
    values.insert(field, value.to_string());

    let mut form = TerminalForm::new(values, config.labels.clone());
    Ok(blur(field, &mut form).is_empty())
}
