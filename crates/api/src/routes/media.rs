use axum::routing::get;
use axum::Router;

use crate::handlers::media;
use crate::state::AppState;

/// Stored media, mounted at the root (NOT under `/api/v1`).
///
/// ```text
/// GET /media/{version}/{*path}  -> serve_media
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/media/{version}/{*path}", get(media::serve_media))
}
