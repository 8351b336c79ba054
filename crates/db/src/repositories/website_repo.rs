//! Repository for the `websites` table.

use sitekit_core::render::WebsiteData;
use sitekit_core::website::WebsitePatch;
use sqlx::types::Json;
use sqlx::PgPool;

use crate::models::website::Website;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "\
    id, user_id, title, description, template, config, \
    is_published, created_at, updated_at";

/// Provides CRUD operations for websites.
pub struct WebsiteRepo;

impl WebsiteRepo {
    /// Insert a new, unpublished website owned by `user_id`.
    pub async fn create(
        pool: &PgPool,
        user_id: &str,
        site: &WebsiteData,
    ) -> Result<Website, sqlx::Error> {
        let query = format!(
            "INSERT INTO websites (id, user_id, title, description, template, config) \
             VALUES ($1, $2, $3, $4, $5, $6) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Website>(&query)
            .bind(uuid::Uuid::new_v4().to_string())
            .bind(user_id)
            .bind(&site.title)
            .bind(&site.description)
            .bind(&site.template)
            .bind(Json(&site.config))
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: &str) -> Result<Option<Website>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM websites WHERE id = $1");
        sqlx::query_as::<_, Website>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List a user's websites, newest first.
    pub async fn list_by_user(pool: &PgPool, user_id: &str) -> Result<Vec<Website>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM websites WHERE user_id = $1 ORDER BY created_at DESC, id ASC"
        );
        sqlx::query_as::<_, Website>(&query)
            .bind(user_id)
            .fetch_all(pool)
            .await
    }

    /// Partially update a website.
    ///
    /// Uses `COALESCE` so only provided fields are changed. `updated_at` is
    /// refreshed by trigger.
    pub async fn update(
        pool: &PgPool,
        id: &str,
        patch: &WebsitePatch,
    ) -> Result<Option<Website>, sqlx::Error> {
        let query = format!(
            "UPDATE websites SET \
                 title = COALESCE($2, title), \
                 description = COALESCE($3, description), \
                 template = COALESCE($4, template), \
                 config = COALESCE($5, config), \
                 is_published = COALESCE($6, is_published) \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Website>(&query)
            .bind(id)
            .bind(&patch.title)
            .bind(&patch.description)
            .bind(&patch.template)
            .bind(patch.config.as_ref().map(Json))
            .bind(patch.is_published)
            .fetch_optional(pool)
            .await
    }

    /// Delete a website by id.
    ///
    /// Returns `true` if a row was deleted.
    pub async fn delete(pool: &PgPool, id: &str) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM websites WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
