//! Website instances.

use serde::Serialize;
use sitekit_core::render::WebsiteData;
use sitekit_core::types::{Config, Timestamp};
use sqlx::types::Json;
use sqlx::FromRow;

/// A row from the `websites` table.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Website {
    pub id: String,
    pub user_id: String,
    pub title: String,
    pub description: String,
    pub template: String,
    pub config: Json<Config>,
    pub is_published: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Website {
    /// The render inputs stored on this instance.
    pub fn to_website_data(&self) -> WebsiteData {
        WebsiteData {
            title: self.title.clone(),
            description: self.description.clone(),
            template: self.template.clone(),
            config: self.config.0.clone(),
        }
    }

    /// Ownership is an exact match on the opaque user id.
    pub fn is_owned_by(&self, user_id: &str) -> bool {
        self.user_id == user_id
    }
}
