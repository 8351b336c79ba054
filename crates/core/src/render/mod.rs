//! Website rendering.
//!
//! - [`substitute`] -- the `{{key}}` placeholder engine.
//! - [`resolve`] -- template lookup and custom-vs-generic rendering.
//! - [`fallback`] -- the generic, kind-agnostic fallback page.
//! - [`builtin`] -- the per-kind built-in template library.
//!
//! [`generate_website_html`] ties them together and is the only entry point
//! callers need; it always returns a complete document.

pub mod builtin;
pub mod escape;
pub mod fallback;
pub mod fields;
pub mod resolve;
pub mod substitute;

use serde::{Deserialize, Serialize};

pub use resolve::{resolve_template, ResolveError, TemplateMarkup, TemplateSource};

use crate::types::Config;

/// The inputs of a render: what the user typed plus the chosen template.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WebsiteData {
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub template: String,
    #[serde(default)]
    pub config: Config,
}

impl WebsiteData {
    /// The substitution data: `{title, description, ...config}`.
    ///
    /// Config keys are applied last, so a config `title` shadows the
    /// top-level one.
    pub fn render_data(&self) -> Config {
        let mut data = Config::new();
        data.insert("title".into(), self.title.clone().into());
        data.insert("description".into(), self.description.clone().into());
        for (key, value) in &self.config {
            data.insert(key.clone(), value.clone());
        }
        data
    }
}

/// Render a website to a complete HTML document.
///
/// Tries the stored template first. On any resolution failure (unknown id,
/// store error) it falls back to the built-in library, using
/// `site.template` as the kind selector. Never fails.
pub async fn generate_website_html(source: &dyn TemplateSource, site: &WebsiteData) -> String {
    match resolve_template(source, &site.template, site).await {
        Ok(html) => html,
        Err(ResolveError::NotFound { template_id }) => {
            tracing::debug!(%template_id, "Template not stored, using built-in generator");
            builtin::generate(&site.template, &site.title, &site.description, &site.config)
        }
        Err(err @ ResolveError::Unavailable(_)) => {
            tracing::warn!(
                template_id = %site.template,
                error = %err,
                "Template resolution failed, using built-in generator",
            );
            builtin::generate(&site.template, &site.title, &site.description, &site.config)
        }
    }
}
