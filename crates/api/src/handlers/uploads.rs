//! Image upload and deletion.

use std::io::Cursor;

use axum::extract::{Multipart, Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use image::{ImageFormat, ImageReader};
use serde::Serialize;
use sitekit_core::error::CoreError;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadedImage {
    pub url: String,
    pub public_id: String,
    pub format: &'static str,
    pub width: u32,
    pub height: u32,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeletedImage {
    pub public_id: String,
    pub deleted: bool,
}

/// Accepted formats and the extension each is stored under.
fn stored_extension(format: ImageFormat) -> Option<&'static str> {
    match format {
        ImageFormat::Png => Some("png"),
        ImageFormat::Jpeg => Some("jpg"),
        ImageFormat::WebP => Some("webp"),
        ImageFormat::Gif => Some("gif"),
        _ => None,
    }
}

/// POST /api/v1/uploads/image
///
/// Accepts a multipart form with a required `image` field. The format is
/// sniffed from the bytes, not taken from the client's content type.
pub async fn upload_image(
    user: AuthUser,
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> AppResult<impl IntoResponse> {
    let mut data: Option<Vec<u8>> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(e.to_string()))?
    {
        if field.name() == Some("image") {
            let bytes = field
                .bytes()
                .await
                .map_err(|e| AppError::BadRequest(e.to_string()))?;
            data = Some(bytes.to_vec());
        }
    }

    let data = data.ok_or_else(|| AppError::BadRequest("No file was uploaded".into()))?;

    let max = state.config.media.max_upload_bytes;
    if data.len() > max {
        return Err(AppError::BadRequest(format!(
            "Image exceeds the {max} byte upload limit"
        )));
    }

    let ext = image::guess_format(&data)
        .ok()
        .and_then(stored_extension)
        .ok_or_else(|| AppError::BadRequest("Only image files are accepted".into()))?;

    let (width, height) = ImageReader::new(Cursor::new(&data))
        .with_guessed_format()
        .map_err(|e| AppError::BadRequest(e.to_string()))?
        .into_dimensions()
        .map_err(|e| AppError::BadRequest(format!("Unreadable image: {e}")))?;

    let stored = state.blob_store.put(data, ext).await?;

    tracing::info!(
        blob_id = %stored.blob_id,
        user_id = %user.user_id,
        width,
        height,
        "Image uploaded",
    );

    Ok((
        StatusCode::CREATED,
        Json(DataResponse {
            data: UploadedImage {
                url: stored.url,
                public_id: stored.blob_id,
                format: ext,
                width,
                height,
            },
        }),
    ))
}

/// DELETE /api/v1/uploads/image/{publicId}
///
/// Ids contain `/`, so clients send them with `,` in its place.
pub async fn delete_image(
    user: AuthUser,
    State(state): State<AppState>,
    Path(encoded_id): Path<String>,
) -> AppResult<impl IntoResponse> {
    let public_id = encoded_id.replace(',', "/");

    let deleted = state.blob_store.delete(&public_id).await?;
    if !deleted {
        return Err(AppError::Core(CoreError::not_found("Image", public_id)));
    }

    tracing::info!(blob_id = %public_id, user_id = %user.user_id, "Image deleted");

    Ok(Json(DataResponse {
        data: DeletedImage {
            public_id,
            deleted,
        },
    }))
}
