//! Serving stored media.

use axum::body::Body;
use axum::extract::{Path, State};
use axum::http::{header, StatusCode};
use axum::response::Response;
use sitekit_core::error::CoreError;

use crate::error::{AppError, AppResult};
use crate::media::{blob_path, content_type_for};
use crate::state::AppState;

/// GET /media/{version}/{*path}
///
/// `path` is `<blob_id>.<ext>`. The version segment is ignored.
pub async fn serve_media(
    State(state): State<AppState>,
    Path((_version, path)): Path<(String, String)>,
) -> AppResult<Response> {
    let not_found = || AppError::Core(CoreError::not_found("Media", path.clone()));

    let (blob_id, ext) = path.rsplit_once('.').ok_or_else(not_found)?;
    let content_type = content_type_for(ext).ok_or_else(not_found)?;
    let file_path = blob_path(&state.config.media.root, blob_id).ok_or_else(not_found)?;

    let bytes = match tokio::fs::read(&file_path).await {
        Ok(bytes) => bytes,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Err(not_found()),
        Err(e) => return Err(AppError::InternalError(e.to_string())),
    };

    Response::builder()
        .status(StatusCode::OK)
        .header(header::CONTENT_TYPE, content_type)
        .header(header::CONTENT_LENGTH, bytes.len().to_string())
        .header(header::CACHE_CONTROL, "public, max-age=31536000, immutable")
        .body(Body::from(bytes))
        .map_err(|e| AppError::InternalError(e.to_string()))
}
