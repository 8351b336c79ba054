//! Template lookups for the renderer, backed by the `templates` table.

use async_trait::async_trait;
use sitekit_core::error::CoreError;
use sitekit_core::render::{TemplateMarkup, TemplateSource};

use crate::repositories::TemplateRepo;
use crate::DbPool;

/// [`TemplateSource`] reading from Postgres.
///
/// Inactive templates still resolve: deactivation only hides a template from
/// the catalog, it does not break websites already using it.
#[derive(Clone)]
pub struct PgTemplateSource {
    pool: DbPool,
}

impl PgTemplateSource {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TemplateSource for PgTemplateSource {
    async fn fetch_markup(&self, template_id: &str) -> Result<Option<TemplateMarkup>, CoreError> {
        let row = TemplateRepo::find_markup(&self.pool, template_id)
            .await
            .map_err(|e| CoreError::Dependency(format!("template store: {e}")))?;
        Ok(row.map(|(html_template, css_template)| TemplateMarkup {
            html_template,
            css_template,
        }))
    }
}
