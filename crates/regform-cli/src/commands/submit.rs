use anyhow::{Context, Result};
use clap::Args;
use regform::{submit, validate, Config, FieldId, FormSnapshot, Submission};
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

use super::parse_field;
use crate::terminal::TerminalForm;

/// Field values for a submission; flags override values read from `--input`
#[derive(Args, Debug, Default)]
pub struct FormArgs {
    /// JSON object of field values keyed by field id
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    #[arg(long)]
    pub full_name: Option<String>,

    #[arg(long)]
    pub email: Option<String>,

    #[arg(long)]
    pub password: Option<String>,

    #[arg(long)]
    pub confirm_password: Option<String>,

    #[arg(long)]
    pub age: Option<String>,
}

impl FormArgs {
    pub fn values(self) -> Result<HashMap<FieldId, String>> {
        let mut values = match &self.input {
            Some(path) => read_values(path)?,
            None => HashMap::new(),
        };

        let overrides = [
            (FieldId::FullName, self.full_name),
            (FieldId::Email, self.email),
            (FieldId::Password, self.password),
            (FieldId::ConfirmPassword, self.confirm_password),
            (FieldId::Age, self.age),
        ];
        for (field, value) in overrides {
            if let Some(value) = value {
                values.insert(field, value);
            }
        }

        Ok(values)
    }
}

fn read_values(path: &Path) -> Result<HashMap<FieldId, String>> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read form values: {:?}", path))?;
    parse_values(&content).with_context(|| format!("Failed to parse form values: {:?}", path))
}

fn parse_values(content: &str) -> Result<HashMap<FieldId, String>> {
    let raw: HashMap<String, String> = serde_json::from_str(content)?;
    raw.into_iter()
        .map(|(id, value)| Ok((parse_field(&id)?, value)))
        .collect()
}

pub fn execute(args: FormArgs, json: bool, config: &Config) -> Result<bool> {
    let values = args.values()?;
    debug!(fields = values.len(), "form values loaded");

    let mut form = TerminalForm::new(values, config.labels.clone());

    if json {
        let outcome = validate(&FormSnapshot::capture(&form));
        println!("{}", serde_json::to_string_pretty(&outcome)?);
        return Ok(outcome.valid);
    }

    Ok(submit(&mut Submission::default(), &mut form, &config.messages))
}
