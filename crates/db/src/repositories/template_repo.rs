//! Repository for the `templates` table.

use sqlx::types::Json;
use sqlx::PgPool;

use crate::models::template::{CreateTemplate, Template, UpdateTemplate};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "\
    id, name, description, category, thumbnail, features, \
    html_template, css_template, config_schema, is_active, \
    created_at, updated_at";

/// Provides CRUD operations for templates.
pub struct TemplateRepo;

impl TemplateRepo {
    /// List active templates, oldest first.
    pub async fn list_active(pool: &PgPool) -> Result<Vec<Template>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM templates WHERE is_active = true ORDER BY created_at ASC, id ASC"
        );
        sqlx::query_as::<_, Template>(&query).fetch_all(pool).await
    }

    /// List every template, newest first.
    pub async fn list_all(pool: &PgPool) -> Result<Vec<Template>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM templates ORDER BY created_at DESC, id ASC");
        sqlx::query_as::<_, Template>(&query).fetch_all(pool).await
    }

    /// Find a template by id, active or not.
    pub async fn find_by_id(pool: &PgPool, id: &str) -> Result<Option<Template>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM templates WHERE id = $1");
        sqlx::query_as::<_, Template>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Fetch only the markup columns of a template.
    pub async fn find_markup(
        pool: &PgPool,
        id: &str,
    ) -> Result<Option<(String, String)>, sqlx::Error> {
        sqlx::query_as::<_, (String, String)>(
            "SELECT html_template, css_template FROM templates WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(pool)
        .await
    }

    pub async fn exists(pool: &PgPool, id: &str) -> Result<bool, sqlx::Error> {
        sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM templates WHERE id = $1)")
            .bind(id)
            .fetch_one(pool)
            .await
    }

    /// Insert a template under an already-derived id.
    ///
    /// A duplicate id surfaces as a unique violation (`23505`).
    pub async fn create(
        pool: &PgPool,
        id: &str,
        dto: &CreateTemplate,
    ) -> Result<Template, sqlx::Error> {
        let query = format!(
            "INSERT INTO templates \
                 (id, name, description, category, thumbnail, features, \
                  html_template, css_template, config_schema) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Template>(&query)
            .bind(id)
            .bind(&dto.name)
            .bind(&dto.description)
            .bind(&dto.category)
            .bind(dto.thumbnail.as_deref().unwrap_or_default())
            .bind(Json(dto.features.clone().unwrap_or_default()))
            .bind(dto.html_template.as_deref().unwrap_or_default())
            .bind(dto.css_template.as_deref().unwrap_or_default())
            .bind(Json(dto.config_schema.clone().unwrap_or_default()))
            .fetch_one(pool)
            .await
    }

    /// Partially update a template.
    ///
    /// Uses `COALESCE` so only provided fields are changed.
    pub async fn update(
        pool: &PgPool,
        id: &str,
        dto: &UpdateTemplate,
    ) -> Result<Option<Template>, sqlx::Error> {
        let query = format!(
            "UPDATE templates SET \
                 name = COALESCE($2, name), \
                 description = COALESCE($3, description), \
                 category = COALESCE($4, category), \
                 thumbnail = COALESCE($5, thumbnail), \
                 features = COALESCE($6, features), \
                 html_template = COALESCE($7, html_template), \
                 css_template = COALESCE($8, css_template), \
                 config_schema = COALESCE($9, config_schema), \
                 is_active = COALESCE($10, is_active) \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Template>(&query)
            .bind(id)
            .bind(&dto.name)
            .bind(&dto.description)
            .bind(&dto.category)
            .bind(&dto.thumbnail)
            .bind(dto.features.clone().map(Json))
            .bind(&dto.html_template)
            .bind(&dto.css_template)
            .bind(dto.config_schema.clone().map(Json))
            .bind(dto.is_active)
            .fetch_optional(pool)
            .await
    }

    /// Flip `is_active`. Returns the new value, or `None` if the template
    /// does not exist.
    pub async fn toggle_active(pool: &PgPool, id: &str) -> Result<Option<bool>, sqlx::Error> {
        sqlx::query_scalar::<_, bool>(
            "UPDATE templates SET is_active = NOT is_active WHERE id = $1 RETURNING is_active",
        )
        .bind(id)
        .fetch_optional(pool)
        .await
    }

    /// Whether any website still uses this template.
    pub async fn is_referenced_by_website(pool: &PgPool, id: &str) -> Result<bool, sqlx::Error> {
        sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM websites WHERE template = $1)")
            .bind(id)
            .fetch_one(pool)
            .await
    }

    /// Delete a template by id.
    ///
    /// Returns `true` if a row was deleted.
    pub async fn delete(pool: &PgPool, id: &str) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM templates WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
