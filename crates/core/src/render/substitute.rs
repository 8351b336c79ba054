//! Flat `{{key}}` placeholder substitution.
//!
//! Matching is literal and global: every occurrence of a key's placeholder is
//! replaced in one scan, and replaced values are never rescanned within the
//! same pass. Whatever is left unresolved after the final pass is stripped.

use std::sync::LazyLock;

use regex::{Captures, Regex};
use serde_json::Value;

use super::escape::escape_html;
use crate::types::Config;

/// Reserved placeholder that receives the rendered CSS template.
pub const CSS_PLACEHOLDER: &str = "{{css}}";

/// `{{key}}` where the key is the shortest run (newlines included) that is
/// closed by `}}`. Single braces may appear inside the key.
static PLACEHOLDER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)\{\{(.*?)\}\}").expect("valid regex"));

/// Anything that still looks like a placeholder after substitution.
static LEFTOVER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)\{\{.*?\}\}").expect("valid regex"));

/// Where a substituted value ends up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Context {
    /// HTML markup: scalars are HTML-escaped.
    Html,
    /// A CSS template: scalars are inserted raw.
    Css,
}

/// Render a single config value for insertion.
///
/// - `null` becomes the empty string.
/// - Lists and maps become their JSON serialization (never escaped).
/// - Scalars become their text form, HTML-escaped in [`Context::Html`].
pub fn render_value(value: &Value, context: Context) -> String {
    match value {
        Value::Null => String::new(),
        Value::Array(_) | Value::Object(_) => serde_json::to_string(value).unwrap_or_default(),
        Value::String(s) => match context {
            Context::Html => escape_html(s),
            Context::Css => s.clone(),
        },
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
    }
}

/// Replace every placeholder whose key is present in `data`.
///
/// Placeholders for absent keys are left in place for a later pass.
pub fn fill_placeholders(template: &str, data: &Config, context: Context) -> String {
    PLACEHOLDER_RE
        .replace_all(template, |caps: &Captures<'_>| {
            resolve_token(&caps[0], data, context)
        })
        .into_owned()
}

/// Resolve one matched `{{...}}` token.
///
/// When the whole key is unknown, a later `{{` inside the token may still
/// open a known placeholder, as in `{{{a}}}` or `{{x{{a}}`. The text before
/// that opener is kept as is.
fn resolve_token(token: &str, data: &Config, context: Context) -> String {
    let bytes = token.as_bytes();
    let key_end = token.len() - 2;
    for start in 0..=key_end - 2 {
        if !bytes[start..].starts_with(b"{{") {
            continue;
        }
        if let Some(value) = data.get(&token[start + 2..key_end]) {
            return format!("{}{}", &token[..start], render_value(value, context));
        }
    }
    token.to_string()
}

/// Remove every remaining `{{...}}` token.
///
/// Repeats until no token is left, since removing one can join the braces
/// around it into a new token.
pub fn strip_unresolved(text: &str) -> String {
    let mut current = text.to_string();
    while LEFTOVER_RE.is_match(&current) {
        current = LEFTOVER_RE.replace_all(&current, "").into_owned();
    }
    current
}

/// Substitute `data` into an HTML template and strip anything unresolved.
pub fn substitute(template: &str, data: &Config) -> String {
    strip_unresolved(&fill_placeholders(template, data, Context::Html))
}

/// Render a custom HTML/CSS template pair.
///
/// 1. Substitute `data` into the CSS (raw values).
/// 2. Inject the rendered CSS at every [`CSS_PLACEHOLDER`].
/// 3. Substitute `data` into the resulting HTML (escaped values).
/// 4. Strip whatever is still unresolved.
pub fn render_custom(html_template: &str, css_template: &str, data: &Config) -> String {
    let css = fill_placeholders(css_template, data, Context::Css);
    let html = html_template.replace(CSS_PLACEHOLDER, &css);
    substitute(&html, data)
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn data(value: Value) -> Config {
        value.as_object().cloned().unwrap()
    }

    #[test]
    fn every_occurrence_replaced() {
        let out = substitute("{{name}} and {{name}}", &data(json!({ "name": "Ann" })));
        assert_eq!(out, "Ann and Ann");
    }

    #[test]
    fn scalars_escaped_in_html() {
        let out = substitute(
            "<p>{{name}}</p>",
            &data(json!({ "name": "<script>alert(1)</script>" })),
        );
        assert_eq!(out, "<p>&lt;script&gt;alert(1)&lt;/script&gt;</p>");
        assert!(!out.contains("<script>"));
    }

    #[test]
    fn numbers_and_bools_stringified() {
        let out = substitute("{{n}}/{{b}}", &data(json!({ "n": 42, "b": false })));
        assert_eq!(out, "42/false");
    }

    #[test]
    fn null_becomes_empty() {
        let out = substitute("[{{x}}]", &data(json!({ "x": null })));
        assert_eq!(out, "[]");
    }

    #[test]
    fn structured_values_become_json() {
        let out = substitute(
            "{{style}}|{{items}}",
            &data(json!({ "style": { "color": "red" }, "items": [1, "a"] })),
        );
        assert_eq!(out, r#"{"color":"red"}|[1,"a"]"#);
    }

    #[test]
    fn absent_keys_stripped() {
        let out = substitute("<h1>{{title}}</h1>{{missing}}", &data(json!({ "title": "Hi" })));
        assert_eq!(out, "<h1>Hi</h1>");
    }

    #[test]
    fn key_with_spaces_is_literal() {
        let out = substitute("{{ title }}", &data(json!({ "title": "Hi" })));
        assert_eq!(out, "");
    }

    #[test]
    fn triple_braces_resolve_inner_key() {
        let out = substitute("{{{a}}}", &data(json!({ "a": "x" })));
        assert_eq!(out, "{x}");
    }

    #[test]
    fn no_leaked_placeholders_after_nested_strip() {
        // Stripping the inner token joins the outer braces into a new one.
        let out = substitute("{{a{{b}}c}}", &Config::new());
        assert!(!LEFTOVER_RE.is_match(&out), "leaked: {out}");
    }

    #[test]
    fn key_with_single_brace_is_stripped_when_absent() {
        let out = substitute("x{{a}b}}y", &Config::new());
        assert_eq!(out, "xy");
    }

    #[test]
    fn key_with_single_brace_is_substituted() {
        let out = substitute("x{{a}b}}y", &data(json!({ "a}b": "!" })));
        assert_eq!(out, "x!y");
    }

    #[test]
    fn known_key_inside_unknown_token_resolves() {
        let out = fill_placeholders("{{x{{a}}-", &data(json!({ "a": "1" })), Context::Html);
        assert_eq!(out, "{{x1-");
        assert_eq!(substitute("{{x{{a}}}}", &data(json!({ "a": "1" }))), "");
    }

    #[test]
    fn value_that_looks_like_placeholder_is_stripped() {
        let out = substitute("<p>{{bio}}</p>", &data(json!({ "bio": "{{title}}" })));
        assert_eq!(out, "<p></p>");
    }

    #[test]
    fn multiline_leftover_stripped() {
        let out = substitute("a{{x\ny}}b", &Config::new());
        assert_eq!(out, "ab");
    }

    #[test]
    fn unterminated_placeholder_left_alone() {
        let out = substitute("a {{b", &Config::new());
        assert_eq!(out, "a {{b");
    }

    #[test]
    fn css_values_not_escaped() {
        let out = fill_placeholders(
            "a::after{content:'{{mark}}'}",
            &data(json!({ "mark": "<>" })),
            Context::Css,
        );
        assert_eq!(out, "a::after{content:'<>'}");
    }

    #[test]
    fn custom_render_css_then_html() {
        let out = render_custom(
            "<h1>{{title}}</h1>{{css}}",
            "h1{color:{{color}}}",
            &data(json!({ "title": "Hi", "color": "red" })),
        );
        assert_eq!(out, "<h1>Hi</h1>h1{color:red}");
    }

    #[test]
    fn css_placeholder_without_css_template_removed() {
        let out = render_custom("<style>{{css}}</style>", "", &Config::new());
        assert_eq!(out, "<style></style>");
    }

    #[test]
    fn css_unresolved_placeholders_stripped_after_injection() {
        let out = render_custom(
            "<style>{{css}}</style>",
            "body{background:{{bg}}}",
            &Config::new(),
        );
        assert_eq!(out, "<style>body{background:}</style>");
    }

    #[test]
    fn deterministic_for_identical_inputs() {
        let d = data(json!({ "a": { "z": 1, "b": 2 }, "t": "x" }));
        let first = render_custom("{{a}}{{t}}{{css}}", "{{a}}", &d);
        let second = render_custom("{{a}}{{t}}{{css}}", "{{a}}", &d);
        assert_eq!(first, second);
    }
}
