//! Repository for the `user_roles` table.
//!
//! Users live with the external identity provider; this table only records
//! which opaque user ids hold which role.

use sitekit_core::roles::ROLE_ADMIN;
use sqlx::PgPool;

pub struct UserRoleRepo;

impl UserRoleRepo {
    pub async fn is_admin(pool: &PgPool, user_id: &str) -> Result<bool, sqlx::Error> {
        Self::has_role(pool, user_id, ROLE_ADMIN).await
    }

    pub async fn has_role(pool: &PgPool, user_id: &str, role: &str) -> Result<bool, sqlx::Error> {
        sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM user_roles WHERE user_id = $1 AND role = $2)",
        )
        .bind(user_id)
        .bind(role)
        .fetch_one(pool)
        .await
    }

    /// Grant a role. Granting an already-held role is a no-op.
    pub async fn grant(pool: &PgPool, user_id: &str, role: &str) -> Result<(), sqlx::Error> {
        sqlx::query(
            "INSERT INTO user_roles (user_id, role) VALUES ($1, $2) \
             ON CONFLICT (user_id, role) DO NOTHING",
        )
        .bind(user_id)
        .bind(role)
        .execute(pool)
        .await?;
        Ok(())
    }
}
