//! Template documents.

use serde::{Deserialize, Serialize};
use sitekit_core::schema::ConfigSchema;
use sitekit_core::types::Timestamp;
use sqlx::types::Json;
use sqlx::FromRow;

/// A row from the `templates` table.
///
/// `id` is the slug derived from the name at creation time and never changes.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Template {
    pub id: String,
    pub name: String,
    pub description: String,
    pub category: String,
    pub thumbnail: String,
    pub features: Json<Vec<String>>,
    pub html_template: String,
    pub css_template: String,
    pub config_schema: Json<ConfigSchema>,
    pub is_active: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a template. The id is derived from `name`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTemplate {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub category: String,
    pub thumbnail: Option<String>,
    pub features: Option<Vec<String>>,
    pub html_template: Option<String>,
    pub css_template: Option<String>,
    pub config_schema: Option<ConfigSchema>,
}

/// DTO for partially updating a template. `id` and `created_at` are not
/// updatable.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTemplate {
    pub name: Option<String>,
    pub description: Option<String>,
    pub category: Option<String>,
    pub thumbnail: Option<String>,
    pub features: Option<Vec<String>>,
    pub html_template: Option<String>,
    pub css_template: Option<String>,
    pub config_schema: Option<ConfigSchema>,
    pub is_active: Option<bool>,
}
