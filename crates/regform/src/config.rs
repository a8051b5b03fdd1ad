// File: src/config.rs
// Purpose: Configuration parsing from regform.toml

use anyhow::{Context, Result};
use regform_rules::FieldId;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Form configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub labels: LabelConfig,

    #[serde(default)]
    pub messages: MessageConfig,
}

/// Display labels (placeholder text) shown in the consolidated failure notice
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LabelConfig {
    #[serde(default = "default_full_name_label")]
    pub full_name: String,

    #[serde(default = "default_email_label")]
    pub email: String,

    #[serde(default = "default_password_label")]
    pub password: String,

    #[serde(default = "default_confirm_password_label")]
    pub confirm_password: String,

    #[serde(default = "default_age_label")]
    pub age: String,
}

/// Notification texts
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageConfig {
    #[serde(default = "default_success")]
    pub success: String,

    /// First line of the failure notice, followed by one line per invalid field
    #[serde(default = "default_failure_header")]
    pub failure_header: String,
}

fn default_full_name_label() -> String {
    FieldId::FullName.default_label().to_string()
}

fn default_email_label() -> String {
    FieldId::Email.default_label().to_string()
}

fn default_password_label() -> String {
    FieldId::Password.default_label().to_string()
}

fn default_confirm_password_label() -> String {
    FieldId::ConfirmPassword.default_label().to_string()
}

fn default_age_label() -> String {
    FieldId::Age.default_label().to_string()
}

fn default_success() -> String {
    "SUCCESS! Registration Complete. Welcome aboard!".to_string()
}

fn default_failure_header() -> String {
    "REGISTRATION FAILED. Please correct the following issues:".to_string()
}

impl Default for LabelConfig {
    fn default() -> Self {
        Self {
            full_name: default_full_name_label(),
            email: default_email_label(),
            password: default_password_label(),
            confirm_password: default_confirm_password_label(),
            age: default_age_label(),
        }
    }
}

impl Default for MessageConfig {
    fn default() -> Self {
        Self {
            success: default_success(),
            failure_header: default_failure_header(),
        }
    }
}

impl LabelConfig {
    pub fn label(&self, field: FieldId) -> &str {
        match field {
            FieldId::FullName => &self.full_name,
            FieldId::Email => &self.email,
            FieldId::Password => &self.password,
            FieldId::ConfirmPassword => &self.confirm_password,
            FieldId::Age => &self.age,
        }
    }

    pub fn set(&mut self, field: FieldId, label: impl Into<String>) {
        let slot = match field {
            FieldId::FullName => &mut self.full_name,
            FieldId::Email => &mut self.email,
            FieldId::Password => &mut self.password,
            FieldId::ConfirmPassword => &mut self.confirm_password,
            FieldId::Age => &mut self.age,
        };
        *slot = label.into();
    }
}

impl Config {
    /// Load configuration from a TOML file
    ///
    /// A missing or empty file yields the defaults.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;

        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {:?}", path))?;

        Ok(config)
    }

    /// Load configuration from default path (./regform.toml)
    pub fn load_default() -> Result<Self> {
        Self::load("regform.toml")
    }
}
