//! Template resolution: one store lookup, then custom or generic rendering.

use async_trait::async_trait;

use super::fallback::render_generic_fallback;
use super::substitute::render_custom;
use super::WebsiteData;
use crate::error::CoreError;

/// The markup half of a stored template document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TemplateMarkup {
    pub html_template: String,
    pub css_template: String,
}

/// Read access to stored templates, keyed by template id.
#[async_trait]
pub trait TemplateSource: Send + Sync {
    /// Fetch the markup of a template.
    ///
    /// Returns `Ok(None)` when no document exists for `template_id`.
    async fn fetch_markup(&self, template_id: &str) -> Result<Option<TemplateMarkup>, CoreError>;
}

/// Why resolution did not produce a document.
#[derive(Debug, thiserror::Error)]
pub enum ResolveError {
    #[error("Template '{template_id}' not found")]
    NotFound { template_id: String },

    #[error("Template source unavailable: {0}")]
    Unavailable(#[source] CoreError),
}

/// Resolve `template_id` through `source` and render `site` with it.
///
/// A template with non-blank `html_template` renders through the placeholder
/// engine with `{title, description, ...config}` (config keys win). A template
/// without custom markup renders the generic fallback page, whatever its id.
pub async fn resolve_template(
    source: &dyn TemplateSource,
    template_id: &str,
    site: &WebsiteData,
) -> Result<String, ResolveError> {
    let markup = source
        .fetch_markup(template_id)
        .await
        .map_err(ResolveError::Unavailable)?
        .ok_or_else(|| ResolveError::NotFound {
            template_id: template_id.to_string(),
        })?;

    if markup.html_template.trim().is_empty() {
        return Ok(render_generic_fallback(site));
    }

    Ok(render_custom(
        &markup.html_template,
        &markup.css_template,
        &site.render_data(),
    ))
}
