//! Public template catalog.

use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::Json;
use sitekit_core::error::CoreError;
use sitekit_db::repositories::TemplateRepo;

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/templates
///
/// Active templates only.
pub async fn list_templates(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let templates = TemplateRepo::list_active(&state.pool).await?;
    tracing::debug!(count = templates.len(), "Listed active templates");
    Ok(Json(DataResponse { data: templates }))
}

/// GET /api/v1/templates/{id}
///
/// Inactive templates are still returned so existing websites can show them.
pub async fn get_template(
    State(state): State<AppState>,
    Path(template_id): Path<String>,
) -> AppResult<impl IntoResponse> {
    let template = TemplateRepo::find_by_id(&state.pool, &template_id)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::not_found("Template", &template_id)))?;
    Ok(Json(DataResponse { data: template }))
}
