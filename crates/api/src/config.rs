use std::path::PathBuf;

use crate::auth::jwt::JwtConfig;

/// Default upload size limit (5 MiB).
pub const DEFAULT_MAX_UPLOAD_BYTES: usize = 5 * 1024 * 1024;

/// Server configuration loaded from environment variables.
///
/// All fields have sensible defaults suitable for local development.
/// In production, override via environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// User ids granted the `admin` role at startup (`ADMIN_USER_IDS`).
    pub admin_user_ids: Vec<String>,
    /// Local image storage.
    pub media: MediaConfig,
    /// JWT verification settings.
    pub jwt: JwtConfig,
}

/// Where uploaded images live and how they are addressed.
#[derive(Debug, Clone)]
pub struct MediaConfig {
    /// Directory blobs are written to.
    pub root: PathBuf,
    /// Public URL prefix of `/media`, without a trailing slash.
    pub public_url: String,
    /// Largest accepted upload in bytes.
    pub max_upload_bytes: usize,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default                         |
    /// |------------------------|---------------------------------|
    /// | `HOST`                 | `0.0.0.0`                       |
    /// | `PORT`                 | `3000`                          |
    /// | `CORS_ORIGINS`         | `http://localhost:5173`         |
    /// | `REQUEST_TIMEOUT_SECS` | `30`                            |
    /// | `ADMIN_USER_IDS`       | (none)                          |
    /// | `MEDIA_ROOT`           | `storage/media`                 |
    /// | `MEDIA_PUBLIC_URL`     | `http://localhost:3000/media`   |
    /// | `MAX_UPLOAD_BYTES`     | `5242880`                       |
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "3000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let cors_origins = comma_list(
            &std::env::var("CORS_ORIGINS").unwrap_or_else(|_| "http://localhost:5173".into()),
        );

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let admin_user_ids = comma_list(&std::env::var("ADMIN_USER_IDS").unwrap_or_default());

        let media = MediaConfig::from_env();
        let jwt = JwtConfig::from_env();

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            admin_user_ids,
            media,
            jwt,
        }
    }
}

impl MediaConfig {
    pub fn from_env() -> Self {
        let root = std::env::var("MEDIA_ROOT").unwrap_or_else(|_| "storage/media".into());

        let public_url = std::env::var("MEDIA_PUBLIC_URL")
            .unwrap_or_else(|_| "http://localhost:3000/media".into())
            .trim_end_matches('/')
            .to_string();

        let max_upload_bytes: usize = std::env::var("MAX_UPLOAD_BYTES")
            .map(|v| v.parse().expect("MAX_UPLOAD_BYTES must be a valid usize"))
            .unwrap_or(DEFAULT_MAX_UPLOAD_BYTES);

        Self {
            root: PathBuf::from(root),
            public_url,
            max_upload_bytes,
        }
    }
}

/// Split a comma-separated env value, dropping blank entries.
fn comma_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}
