//! Template id derivation.
//!
//! A template's id is generated once from its display name at creation time
//! and never changes afterwards.

use crate::error::CoreError;

/// Derive a template id from its display name.
///
/// The name is lower-cased, every run of characters outside `[a-z0-9]` is
/// collapsed into a single `-`, and leading/trailing hyphens are trimmed.
///
/// # Examples
///
/// ```
/// use sitekit_core::slug::template_id_from_name;
///
/// assert_eq!(template_id_from_name("Landing Page"), "landing-page");
/// assert_eq!(template_id_from_name("  My -- Shop!! "), "my-shop");
/// ```
pub fn template_id_from_name(name: &str) -> String {
    let lowered = name.to_lowercase();
    let mut id = String::with_capacity(lowered.len());
    let mut pending_hyphen = false;

    for ch in lowered.chars() {
        if ch.is_ascii_lowercase() || ch.is_ascii_digit() {
            if pending_hyphen && !id.is_empty() {
                id.push('-');
            }
            pending_hyphen = false;
            id.push(ch);
        } else {
            pending_hyphen = true;
        }
    }

    id
}

/// Derive a template id and reject names that produce an empty one.
pub fn derive_template_id(name: &str) -> Result<String, CoreError> {
    let id = template_id_from_name(name);
    if id.is_empty() {
        return Err(CoreError::Validation(format!(
            "Template name '{name}' must contain at least one ASCII letter or digit"
        )));
    }
    Ok(id)
}
