//! Handlers for website preview, CRUD and rendering.

use axum::extract::{Path, State};
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::Json;
use serde::Serialize;
use sitekit_core::blob::{cleanup_config_blobs, CleanupSummary};
use sitekit_core::error::CoreError;
use sitekit_core::render::generate_website_html;
use sitekit_core::website::{RenderRequest, WebsitePatch};
use sitekit_db::models::website::Website;
use sitekit_db::repositories::WebsiteRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::middleware::rbac::ensure_owner_or_admin;
use crate::response::DataResponse;
use crate::state::AppState;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PreviewResponse {
    pub preview_html: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderedWebsite {
    pub website: Website,
    pub preview_html: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeletedWebsite {
    pub id: String,
    pub images_deleted: usize,
    pub images_failed: usize,
}

impl DeletedWebsite {
    fn new(id: String, cleanup: CleanupSummary) -> Self {
        Self {
            id,
            images_deleted: cleanup.deleted,
            images_failed: cleanup.failed,
        }
    }
}

async fn find_website(state: &AppState, id: &str) -> AppResult<Website> {
    WebsiteRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::not_found("Website", id)))
}

/// POST /api/v1/websites/preview
///
/// Render without persisting anything. Public.
pub async fn preview_website(
    State(state): State<AppState>,
    Json(input): Json<RenderRequest>,
) -> AppResult<impl IntoResponse> {
    let site = input.into_website_data()?;
    tracing::debug!(template = %site.template, "Rendering preview");

    let preview_html = generate_website_html(state.templates.as_ref(), &site).await;

    Ok(Json(DataResponse {
        data: PreviewResponse { preview_html },
    }))
}

/// POST /api/v1/websites
///
/// Create a website for the caller and render it once.
pub async fn create_website(
    user: AuthUser,
    State(state): State<AppState>,
    Json(input): Json<RenderRequest>,
) -> AppResult<impl IntoResponse> {
    let site = input.into_website_data()?;
    let website = WebsiteRepo::create(&state.pool, &user.user_id, &site).await?;

    tracing::info!(
        website_id = %website.id,
        user_id = %user.user_id,
        template = %website.template,
        "Website created",
    );

    let preview_html = generate_website_html(state.templates.as_ref(), &site).await;

    Ok((
        StatusCode::CREATED,
        Json(DataResponse {
            data: RenderedWebsite {
                website,
                preview_html,
            },
        }),
    ))
}

/// GET /api/v1/websites/mine
///
/// The caller's websites, newest first.
pub async fn list_my_websites(
    user: AuthUser,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let websites = WebsiteRepo::list_by_user(&state.pool, &user.user_id).await?;
    Ok(Json(DataResponse { data: websites }))
}

/// GET /api/v1/websites/{id}
pub async fn get_website(
    State(state): State<AppState>,
    Path(website_id): Path<String>,
) -> AppResult<impl IntoResponse> {
    let website = find_website(&state, &website_id).await?;
    Ok(Json(DataResponse { data: website }))
}

/// GET /api/v1/websites/{id}/html
///
/// Render a stored website as a standalone document.
pub async fn render_website(
    State(state): State<AppState>,
    Path(website_id): Path<String>,
) -> AppResult<impl IntoResponse> {
    let website = find_website(&state, &website_id).await?;
    let html = generate_website_html(state.templates.as_ref(), &website.to_website_data()).await;

    Ok((
        [(header::CONTENT_TYPE, "text/html; charset=utf-8")],
        html,
    ))
}

/// PUT /api/v1/websites/{id}
///
/// Merge the given fields into the stored website and re-render it. Only the
/// owner or an admin may update.
pub async fn update_website(
    user: AuthUser,
    State(state): State<AppState>,
    Path(website_id): Path<String>,
    Json(patch): Json<WebsitePatch>,
) -> AppResult<impl IntoResponse> {
    patch.validate()?;
    let existing = find_website(&state, &website_id).await?;
    ensure_owner_or_admin(&state, &user, &existing).await?;

    let website = WebsiteRepo::update(&state.pool, &website_id, &patch)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::not_found("Website", &website_id)))?;

    tracing::info!(
        website_id = %website.id,
        user_id = %user.user_id,
        "Website updated",
    );

    let preview_html =
        generate_website_html(state.templates.as_ref(), &website.to_website_data()).await;

    Ok(Json(DataResponse {
        data: RenderedWebsite {
            website,
            preview_html,
        },
    }))
}

/// DELETE /api/v1/websites/{id}
///
/// Delete the record, then release the images its config references. Image
/// cleanup is best effort and never fails the request.
pub async fn delete_website(
    user: AuthUser,
    State(state): State<AppState>,
    Path(website_id): Path<String>,
) -> AppResult<impl IntoResponse> {
    let existing = find_website(&state, &website_id).await?;
    ensure_owner_or_admin(&state, &user, &existing).await?;

    if !WebsiteRepo::delete(&state.pool, &website_id).await? {
        return Err(AppError::Core(CoreError::not_found("Website", website_id)));
    }

    let cleanup = cleanup_config_blobs(state.blob_store.as_ref(), &existing.config.0).await;

    tracing::info!(
        website_id = %website_id,
        user_id = %user.user_id,
        images_deleted = cleanup.deleted,
        images_failed = cleanup.failed,
        "Website deleted",
    );

    Ok(Json(DataResponse {
        data: DeletedWebsite::new(website_id, cleanup),
    }))
}
