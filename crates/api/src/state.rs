use std::sync::Arc;

use sitekit_core::blob::BlobStore;
use sitekit_core::render::TemplateSource;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: sitekit_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Template lookups used by the renderer.
    pub templates: Arc<dyn TemplateSource>,
    /// Where uploaded images are stored and released.
    pub blob_store: Arc<dyn BlobStore>,
}
