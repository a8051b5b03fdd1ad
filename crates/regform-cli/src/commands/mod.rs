pub mod check;
pub mod fields;
pub mod submit;

use anyhow::{anyhow, Result};
use regform::FieldId;

/// Resolves a field id given on the command line
pub fn parse_field(id: &str) -> Result<FieldId> {
    FieldId::from_id(id).ok_or_else(|| {
        let known: Vec<&str> = FieldId::ALL.iter().map(|f| f.id()).collect();
        anyhow!("Unknown field '{}' (expected one of: {})", id, known.join(", "))
    })
}
