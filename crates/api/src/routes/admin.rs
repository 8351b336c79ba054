use axum::routing::{get, patch, put};
use axum::Router;

use crate::handlers::admin_templates;
use crate::state::AppState;

/// Admin template routes mounted at `/admin/templates`.
///
/// ```text
/// GET    /              -> list_all_templates
/// POST   /              -> create_template
/// PUT    /{id}          -> update_template
/// DELETE /{id}          -> delete_template
/// PATCH  /{id}/toggle   -> toggle_template
/// ```
pub fn templates_router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(admin_templates::list_all_templates).post(admin_templates::create_template),
        )
        .route(
            "/{id}",
            put(admin_templates::update_template).delete(admin_templates::delete_template),
        )
        .route("/{id}/toggle", patch(admin_templates::toggle_template))
}
