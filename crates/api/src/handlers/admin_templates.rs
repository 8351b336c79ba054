//! Admin template management.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::Serialize;
use sitekit_core::blob::{cleanup_blobs, is_blob_url};
use sitekit_core::error::CoreError;
use sitekit_core::schema::{validate_template_fields, MAX_TEMPLATE_NAME_LENGTH};
use sitekit_core::slug::derive_template_id;
use sitekit_db::models::template::{CreateTemplate, UpdateTemplate};
use sitekit_db::repositories::TemplateRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::rbac::RequireAdmin;
use crate::response::DataResponse;
use crate::state::AppState;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ToggledTemplate {
    pub id: String,
    pub is_active: bool,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeletedTemplate {
    pub id: String,
    pub images_deleted: usize,
}

/// GET /api/v1/admin/templates
///
/// Every template, active or not, newest first.
pub async fn list_all_templates(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let templates = TemplateRepo::list_all(&state.pool).await?;
    Ok(Json(DataResponse { data: templates }))
}

/// POST /api/v1/admin/templates
///
/// The id is the slug of the name; a name whose slug is taken is a conflict.
pub async fn create_template(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Json(input): Json<CreateTemplate>,
) -> AppResult<impl IntoResponse> {
    validate_template_fields(&input.name, &input.description, &input.category)?;
    let template_id = derive_template_id(&input.name)?;

    if TemplateRepo::exists(&state.pool, &template_id).await? {
        return Err(AppError::Core(CoreError::Conflict(format!(
            "Template ID '{template_id}' already exists"
        ))));
    }

    let template = TemplateRepo::create(&state.pool, &template_id, &input).await?;

    tracing::info!(
        template_id = %template.id,
        user_id = %admin.user_id,
        "Template created",
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: template })))
}

/// PUT /api/v1/admin/templates/{id}
///
/// Partial update. The id and creation time never change.
pub async fn update_template(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Path(template_id): Path<String>,
    Json(input): Json<UpdateTemplate>,
) -> AppResult<impl IntoResponse> {
    if let Some(name) = &input.name {
        if name.trim().is_empty() {
            return Err(AppError::Core(CoreError::Validation(
                "name must not be empty".into(),
            )));
        }
        if name.len() > MAX_TEMPLATE_NAME_LENGTH {
            return Err(AppError::Core(CoreError::Validation(format!(
                "Template name exceeds maximum length of {MAX_TEMPLATE_NAME_LENGTH} characters"
            ))));
        }
    }

    let template = TemplateRepo::update(&state.pool, &template_id, &input)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::not_found("Template", &template_id)))?;

    tracing::info!(
        template_id = %template_id,
        user_id = %admin.user_id,
        "Template updated",
    );

    Ok(Json(DataResponse { data: template }))
}

/// PATCH /api/v1/admin/templates/{id}/toggle
pub async fn toggle_template(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Path(template_id): Path<String>,
) -> AppResult<impl IntoResponse> {
    let is_active = TemplateRepo::toggle_active(&state.pool, &template_id)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::not_found("Template", &template_id)))?;

    tracing::info!(
        template_id = %template_id,
        user_id = %admin.user_id,
        is_active,
        "Template status toggled",
    );

    Ok(Json(DataResponse {
        data: ToggledTemplate {
            id: template_id,
            is_active,
        },
    }))
}

/// DELETE /api/v1/admin/templates/{id}
///
/// Refuses while any website still uses the template. The thumbnail is
/// released after the record is gone.
pub async fn delete_template(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Path(template_id): Path<String>,
) -> AppResult<impl IntoResponse> {
    let template = TemplateRepo::find_by_id(&state.pool, &template_id)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::not_found("Template", &template_id)))?;

    if TemplateRepo::is_referenced_by_website(&state.pool, &template_id).await? {
        return Err(AppError::Core(CoreError::Conflict(
            "Cannot delete template: it is being used by websites".into(),
        )));
    }

    if !TemplateRepo::delete(&state.pool, &template_id).await? {
        return Err(AppError::Core(CoreError::not_found("Template", template_id)));
    }

    let store = state.blob_store.as_ref();
    let thumbnails: Vec<String> = Some(template.thumbnail)
        .filter(|url| is_blob_url(url, store.public_base_url()))
        .into_iter()
        .collect();
    let cleanup = cleanup_blobs(store, &thumbnails).await;

    tracing::info!(
        template_id = %template_id,
        user_id = %admin.user_id,
        images_deleted = cleanup.deleted,
        "Template deleted",
    );

    Ok(Json(DataResponse {
        data: DeletedTemplate {
            id: template_id,
            images_deleted: cleanup.deleted,
        },
    }))
}
