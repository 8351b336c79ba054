//! Built-in template library.
//!
//! One self-contained generator per canonical template kind. Each reads its
//! own whitelist of config keys with explicit defaults and builds a complete
//! document. Unknown kinds get a minimal branded placeholder page.
//!
//! Free text is HTML-escaped; URLs and colors are inserted raw apart from
//! quote-safety.

mod blog;
mod business_card;
mod landing_page;
mod placeholder;
mod portfolio;

use crate::render::escape::escape_html;
use crate::types::Config;

/// The canonical template kinds that have a dedicated generator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemplateKind {
    Portfolio,
    LandingPage,
    Blog,
    BusinessCard,
}

impl TemplateKind {
    /// Parse a template id into a canonical kind.
    pub fn from_id(id: &str) -> Option<Self> {
        match id {
            "portfolio" => Some(Self::Portfolio),
            "landing-page" => Some(Self::LandingPage),
            "blog" => Some(Self::Blog),
            "business-card" => Some(Self::BusinessCard),
            _ => None,
        }
    }
}

/// Generate the built-in document for `kind`.
///
/// Unknown kinds route to the catch-all placeholder page.
pub fn generate(kind: &str, title: &str, description: &str, config: &Config) -> String {
    match TemplateKind::from_id(kind) {
        Some(kind) => generate_kind(kind, title, description, config),
        None => placeholder::render(title, description, config),
    }
}

fn generate_kind(kind: TemplateKind, title: &str, description: &str, config: &Config) -> String {
    match kind {
        TemplateKind::Portfolio => portfolio::render(title, description, config),
        TemplateKind::LandingPage => landing_page::render(title, description, config),
        TemplateKind::Blog => blog::render(title, description, config),
        TemplateKind::BusinessCard => business_card::render(title, description, config),
    }
}

/// Wrap a generator's style sheet and body in the shared document shell.
fn document(title: &str, description: &str, style: &str, body: &str) -> String {
    format!(
        r#"
<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8">
  <meta name="viewport" content="width=device-width, initial-scale=1.0">
  <title>{title}</title>
  <meta name="description" content="{description}">
  <style>{style}  </style>
</head>
<body>{body}</body>
</html>"#,
        title = escape_html(title),
        description = escape_html(description),
    )
}
