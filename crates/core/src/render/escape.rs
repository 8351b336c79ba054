//! Escaping helpers shared by the placeholder engine and the built-in library.

/// Escape the five HTML-sensitive characters (`&`, `<`, `>`, `"`, `'`).
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#039;"),
            other => out.push(other),
        }
    }
    out
}

/// Make a value safe to place inside a double-quoted attribute.
///
/// Only the quote is neutralised; URLs and colors are otherwise inserted raw.
pub fn quote_safe(value: &str) -> String {
    value.replace('"', "&quot;")
}

/// Make a URL safe to place inside a single-quoted CSS `url('...')`.
pub fn css_url_safe(value: &str) -> String {
    value.replace('\'', "%27").replace('"', "%22")
}
