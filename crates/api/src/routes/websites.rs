use axum::routing::{get, post};
use axum::Router;

use crate::handlers::websites;
use crate::state::AppState;

/// Website routes mounted at `/websites`.
///
/// ```text
/// POST   /            -> create_website
/// POST   /preview     -> preview_website
/// GET    /mine        -> list_my_websites
/// GET    /{id}        -> get_website
/// PUT    /{id}        -> update_website
/// DELETE /{id}        -> delete_website
/// GET    /{id}/html   -> render_website
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(websites::create_website))
        .route("/preview", post(websites::preview_website))
        .route("/mine", get(websites::list_my_websites))
        .route(
            "/{id}",
            get(websites::get_website)
                .put(websites::update_website)
                .delete(websites::delete_website),
        )
        .route("/{id}/html", get(websites::render_website))
}
