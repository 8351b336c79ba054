use axum::extract::State;
use axum::{routing::get, Json, Router};
use serde::Serialize;

use crate::media::media_root_writable;
use crate::state::AppState;

/// GET /health payload.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthStatus {
    /// `ok` when every dependency is usable, `degraded` otherwise.
    pub status: &'static str,
    pub version: &'static str,
    pub db_healthy: bool,
    /// Whether uploads can currently be stored.
    pub media_writable: bool,
}

async fn health(State(state): State<AppState>) -> Json<HealthStatus> {
    let (db, media) = tokio::join!(
        sitekit_db::health_check(&state.pool),
        media_root_writable(&state.config.media.root),
    );
    let db_healthy = db.is_ok();

    Json(HealthStatus {
        status: if db_healthy && media { "ok" } else { "degraded" },
        version: env!("CARGO_PKG_VERSION"),
        db_healthy,
        media_writable: media,
    })
}

/// Root-level health route, mounted outside `/api/v1`.
pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health))
}
