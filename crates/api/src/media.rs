//! Local-disk blob store.
//!
//! Blobs are written to `<root>/<blob_id>` and published as
//! `<public_url>/v<unix-seconds>/<blob_id>.<ext>`. The version segment only
//! busts caches; the file on disk is found from the blob id alone.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use sitekit_core::blob::{BlobStore, StoredBlob};
use sitekit_core::error::CoreError;
use uuid::Uuid;

/// Folder every upload is placed under.
pub const UPLOAD_FOLDER: &str = "website-builder";

/// [`BlobStore`] backed by a directory on the local filesystem.
#[derive(Debug, Clone)]
pub struct LocalBlobStore {
    root: PathBuf,
    public_url: String,
}

impl LocalBlobStore {
    pub fn new(root: impl Into<PathBuf>, public_url: impl Into<String>) -> Self {
        Self {
            root: root.into(),
            public_url: public_url.into().trim_end_matches('/').to_string(),
        }
    }
}

#[async_trait]
impl BlobStore for LocalBlobStore {
    async fn put(&self, bytes: Vec<u8>, ext: &str) -> Result<StoredBlob, CoreError> {
        let blob_id = format!("{UPLOAD_FOLDER}/{}", Uuid::new_v4());
        let path = blob_path(&self.root, &blob_id)
            .ok_or_else(|| CoreError::Internal(format!("Invalid generated blob id {blob_id}")))?;

        if let Some(parent) = path.parent() {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|e| CoreError::Dependency(format!("media storage: {e}")))?;
        }
        tokio::fs::write(&path, &bytes)
            .await
            .map_err(|e| CoreError::Dependency(format!("media storage: {e}")))?;

        let version = chrono::Utc::now().timestamp();
        let url = format!("{}/v{version}/{blob_id}.{ext}", self.public_url);
        tracing::debug!(blob_id = %blob_id, size = bytes.len(), "Stored blob");

        Ok(StoredBlob { url, blob_id })
    }

    async fn delete(&self, blob_id: &str) -> Result<bool, CoreError> {
        let path = blob_path(&self.root, blob_id)
            .ok_or_else(|| CoreError::Validation(format!("Invalid blob id '{blob_id}'")))?;

        match tokio::fs::remove_file(&path).await {
            Ok(()) => {
                tracing::debug!(blob_id = %blob_id, "Deleted blob");
                Ok(true)
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(false),
            Err(e) => Err(CoreError::Dependency(format!("media storage: {e}"))),
        }
    }

    fn public_base_url(&self) -> &str {
        &self.public_url
    }
}

/// Map a blob id to its file under `root`.
///
/// Returns `None` for ids that could escape `root`: every `/`-separated
/// segment must be non-empty and made of ASCII letters, digits, `-` or `_`.
pub fn blob_path(root: &Path, blob_id: &str) -> Option<PathBuf> {
    let mut path = root.to_path_buf();
    for segment in blob_id.split('/') {
        let valid = !segment.is_empty()
            && segment
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
        if !valid {
            return None;
        }
        path.push(segment);
    }
    Some(path)
}

/// Whether new blobs can be written under `root`.
///
/// Creates the directory if needed and round-trips a marker file.
pub async fn media_root_writable(root: &Path) -> bool {
    let marker = root.join(".health");
    if tokio::fs::create_dir_all(root).await.is_err() {
        return false;
    }
    if tokio::fs::write(&marker, b"ok").await.is_err() {
        return false;
    }
    tokio::fs::remove_file(&marker).await.is_ok()
}

/// MIME type served for a stored image extension.
pub fn content_type_for(ext: &str) -> Option<&'static str> {
    match ext.to_ascii_lowercase().as_str() {
        "png" => Some("image/png"),
        "jpg" | "jpeg" => Some("image/jpeg"),
        "webp" => Some("image/webp"),
        "gif" => Some("image/gif"),
        _ => None,
    }
}
