//! Blob store seam and the image-cleanup path.
//!
//! Stored blobs are addressed by URLs of the form
//! `<public_base>/v<version>/<blob_id>.<ext>`. Cleanup recovers the blob id
//! from such a URL, so anything that does not follow the convention is never
//! handed to the store.

use std::collections::HashSet;
use std::sync::LazyLock;

use async_trait::async_trait;
use futures::future::join_all;
use regex::Regex;
use serde::Serialize;
use serde_json::Value;

use crate::error::CoreError;
use crate::types::Config;

static BLOB_ID_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"/v\d+/(.+)\.\w+$").expect("valid regex"));

/// Result of a successful [`BlobStore::put`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredBlob {
    pub url: String,
    pub blob_id: String,
}

#[async_trait]
pub trait BlobStore: Send + Sync {
    /// Store `bytes` and return its public URL and identifier.
    async fn put(&self, bytes: Vec<u8>, ext: &str) -> Result<StoredBlob, CoreError>;

    /// Delete a blob. `Ok(false)` means the store had nothing under that id.
    async fn delete(&self, blob_id: &str) -> Result<bool, CoreError>;

    /// Prefix shared by every URL this store issues.
    fn public_base_url(&self) -> &str;
}

/// Recover the blob id from a URL following the `/v<version>/<id>.<ext>`
/// convention.
pub fn extract_blob_id(url: &str) -> Option<String> {
    BLOB_ID_RE
        .captures(url)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
}

/// Collect every distinct blob URL issued under `base_url` found anywhere in
/// `config`, in first-seen order.
pub fn find_blob_urls(config: &Config, base_url: &str) -> Vec<String> {
    let mut found = Vec::new();
    let mut seen = HashSet::new();
    let mut stack: Vec<&Value> = config.values().rev().collect();

    while let Some(value) = stack.pop() {
        match value {
            Value::String(s) => {
                if is_blob_url(s, base_url) && seen.insert(s.as_str()) {
                    found.push(s.clone());
                }
            }
            Value::Array(items) => stack.extend(items.iter().rev()),
            Value::Object(map) => stack.extend(map.values().rev()),
            Value::Null | Value::Bool(_) | Value::Number(_) => {}
        }
    }

    found
}

/// Whether `candidate` was issued under `base_url` and carries a recoverable
/// blob id.
pub fn is_blob_url(candidate: &str, base_url: &str) -> bool {
    match candidate.strip_prefix(base_url) {
        Some(rest) => extract_blob_id(rest).is_some(),
        None => false,
    }
}

/// Aggregate outcome of a best-effort cleanup.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CleanupSummary {
    pub deleted: usize,
    pub failed: usize,
    pub total: usize,
}

/// Delete every blob referenced by `urls` concurrently.
///
/// Never fails: each URL that cannot be mapped to an id, or whose delete
/// errors or reports nothing removed, counts towards `failed`.
pub async fn cleanup_blobs(store: &dyn BlobStore, urls: &[String]) -> CleanupSummary {
    let base_url = store.public_base_url();
    let outcomes = join_all(urls.iter().map(|url| async move {
        let rest = url.strip_prefix(base_url).unwrap_or(url);
        let Some(blob_id) = extract_blob_id(rest) else {
            tracing::warn!(url = %url, "Cannot extract blob id from URL");
            return false;
        };
        match store.delete(&blob_id).await {
            Ok(true) => true,
            Ok(false) => {
                tracing::warn!(blob_id = %blob_id, "Blob not found during cleanup");
                false
            }
            Err(e) => {
                tracing::warn!(blob_id = %blob_id, error = %e, "Blob delete failed");
                false
            }
        }
    }))
    .await;

    let deleted = outcomes.iter().filter(|ok| **ok).count();
    CleanupSummary {
        deleted,
        failed: outcomes.len() - deleted,
        total: outcomes.len(),
    }
}

/// Release every blob referenced from a website's config.
pub async fn cleanup_config_blobs(store: &dyn BlobStore, config: &Config) -> CleanupSummary {
    let urls = find_blob_urls(config, store.public_base_url());
    let summary = cleanup_blobs(store, &urls).await;
    tracing::info!(
        deleted = summary.deleted,
        failed = summary.failed,
        total = summary.total,
        "Cleaned up website images"
    );
    summary
}
