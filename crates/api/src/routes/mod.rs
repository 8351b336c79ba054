pub mod admin;
pub mod health;
pub mod media;
pub mod templates;
pub mod uploads;
pub mod websites;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /websites/preview                    render without saving (public)
/// /websites                            create (auth)
/// /websites/mine                       caller's websites (auth)
/// /websites/{id}                       get, update, delete
/// /websites/{id}/html                  rendered document
///
/// /templates                           active catalog (public)
/// /templates/{id}                      get (public)
///
/// /admin/templates                     list all, create (admin only)
/// /admin/templates/{id}                update, delete (admin only)
/// /admin/templates/{id}/toggle         flip active status (admin only)
///
/// /uploads/image                       upload (auth)
/// /uploads/image/{publicId}            delete (auth)
/// ```
pub fn api_routes(max_upload_bytes: usize) -> Router<AppState> {
    Router::new()
        .nest("/websites", websites::router())
        .nest("/templates", templates::router())
        .nest("/admin/templates", admin::templates_router())
        .nest("/uploads", uploads::router(max_upload_bytes))
}
