use axum::extract::DefaultBodyLimit;
use axum::routing::{delete, post};
use axum::Router;

use crate::handlers::uploads;
use crate::state::AppState;

/// Room for multipart boundaries and headers on top of the file itself.
const MULTIPART_OVERHEAD_BYTES: usize = 64 * 1024;

/// Upload routes mounted at `/uploads`.
///
/// ```text
/// POST   /image              -> upload_image
/// DELETE /image/{publicId}   -> delete_image
/// ```
pub fn router(max_upload_bytes: usize) -> Router<AppState> {
    Router::new()
        .route(
            "/image",
            post(uploads::upload_image)
                .layer(DefaultBodyLimit::max(max_upload_bytes + MULTIPART_OVERHEAD_BYTES)),
        )
        .route("/image/{public_id}", delete(uploads::delete_image))
}
