//! Template config schemas.
//!
//! A schema describes which fields the config-entry UI offers for a template.
//! The renderer never enforces it: whatever keys a website's config carries are
//! substituted as-is.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Kind of input a config field expects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldType {
    Text,
    Textarea,
    Color,
    Image,
    Number,
    Url,
    Email,
}

/// Descriptor of a single config field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldDescriptor {
    #[serde(rename = "type")]
    pub field_type: FieldType,
    #[serde(default)]
    pub label: String,
    #[serde(default, alias = "default", skip_serializing_if = "Option::is_none")]
    pub default_value: Option<serde_json::Value>,
    #[serde(default)]
    pub required: bool,
}

/// Field key to descriptor. Keys are unique within a template.
pub type ConfigSchema = BTreeMap<String, FieldDescriptor>;

/// Maximum length of a template display name.
pub const MAX_TEMPLATE_NAME_LENGTH: usize = 200;

/// Validate the required top-level fields of a template creation request.
pub fn validate_template_fields(
    name: &str,
    description: &str,
    category: &str,
) -> Result<(), CoreError> {
    let missing: Vec<&str> = [
        ("name", name),
        ("description", description),
        ("category", category),
    ]
    .into_iter()
    .filter(|(_, value)| value.trim().is_empty())
    .map(|(field, _)| field)
    .collect();

    if !missing.is_empty() {
        return Err(CoreError::Validation(format!(
            "Missing required fields: {}",
            missing.join(", ")
        )));
    }
    if name.len() > MAX_TEMPLATE_NAME_LENGTH {
        return Err(CoreError::Validation(format!(
            "Template name exceeds maximum length of {MAX_TEMPLATE_NAME_LENGTH} characters (got {})",
            name.len()
        )));
    }
    Ok(())
}
