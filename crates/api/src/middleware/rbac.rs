//! Role-based access control extractors.
//!
//! Tokens carry no role claim; roles are looked up in `user_roles` on each
//! request that needs one.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use sitekit_core::error::CoreError;
use sitekit_db::models::website::Website;
use sitekit_db::repositories::UserRoleRepo;

use super::auth::AuthUser;
use crate::error::AppError;
use crate::state::AppState;

/// Requires the `admin` role. Rejects with 403 Forbidden otherwise.
///
/// ```ignore
/// async fn admin_only(RequireAdmin(user): RequireAdmin) -> AppResult<Json<()>> {
///     Ok(Json(()))
/// }
/// ```
pub struct RequireAdmin(pub AuthUser);

impl FromRequestParts<AppState> for RequireAdmin {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let user = AuthUser::from_request_parts(parts, state).await?;
        if !UserRoleRepo::is_admin(&state.pool, &user.user_id).await? {
            return Err(AppError::Core(CoreError::Forbidden(
                "Admin role required".into(),
            )));
        }
        Ok(RequireAdmin(user))
    }
}

/// Check whether `user` may modify `website`.
///
/// Owners always may; anyone else needs the `admin` role.
pub async fn ensure_owner_or_admin(
    state: &AppState,
    user: &AuthUser,
    website: &Website,
) -> Result<(), AppError> {
    if website.is_owned_by(&user.user_id)
        || UserRoleRepo::is_admin(&state.pool, &user.user_id).await?
    {
        return Ok(());
    }
    Err(AppError::Core(CoreError::Forbidden(
        "Only the owner or an admin may modify this website".into(),
    )))
}
