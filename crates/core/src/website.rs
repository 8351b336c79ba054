//! Validation for website render and update requests.

use serde::Deserialize;

use crate::error::CoreError;
use crate::render::WebsiteData;
use crate::types::Config;

/// Body of a preview or create request, before validation.
///
/// Every field is optional on the wire so a missing field surfaces as a
/// validation error rather than a deserialization failure.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub template: Option<String>,
    pub config: Option<Config>,
}

impl RenderRequest {
    /// Check the required fields and fill in the optional ones.
    ///
    /// `title` and `template` must be present and non-empty; `description`
    /// defaults to an empty string and `config` to an empty map.
    pub fn into_website_data(self) -> Result<WebsiteData, CoreError> {
        let (Some(title), Some(template)) = (non_blank(self.title), non_blank(self.template))
        else {
            return Err(CoreError::Validation(
                "Missing required fields: title or template".into(),
            ));
        };
        Ok(WebsiteData {
            title,
            description: self.description.unwrap_or_default(),
            template,
            config: self.config.unwrap_or_default(),
        })
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.is_empty())
}

/// Partial update of a website. Absent fields keep their stored value.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WebsitePatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub template: Option<String>,
    pub config: Option<Config>,
    pub is_published: Option<bool>,
}

impl WebsitePatch {
    /// Reject updates that would blank a required field.
    pub fn validate(&self) -> Result<(), CoreError> {
        if matches!(self.title.as_deref(), Some("")) {
            return Err(CoreError::Validation("title must not be empty".into()));
        }
        if matches!(self.template.as_deref(), Some("")) {
            return Err(CoreError::Validation("template must not be empty".into()));
        }
        Ok(())
    }

}
