//! Generic fallback page for templates that carry no custom markup.
//!
//! Kind-agnostic: it only reads `title`, `description` and a handful of
//! common config keys, each with a hardcoded default.

use super::escape::{escape_html, quote_safe};
use super::fields::{non_empty, text_or};
use super::WebsiteData;

const DEFAULT_BACKGROUND: &str = "#f5f7fa";
const DEFAULT_TEXT: &str = "#333";
const DEFAULT_PRIMARY: &str = "#667eea";

/// Render the generic fallback document for `site`.
pub fn render_generic_fallback(site: &WebsiteData) -> String {
    let config = &site.config;
    let background = text_or(config, "backgroundColor", DEFAULT_BACKGROUND);
    let text_color = text_or(config, "textColor", DEFAULT_TEXT);
    let primary = text_or(config, "primaryColor", DEFAULT_PRIMARY);
    let logo_url = non_empty(config, "logoUrl");
    let hero_title = non_empty(config, "heroTitle").unwrap_or_else(|| site.title.clone());
    let hero_description =
        non_empty(config, "heroDescription").unwrap_or_else(|| site.description.clone());

    let logo_style = if logo_url.is_some() {
        r#"
      .logo {
        max-width: 150px;
        margin-bottom: 30px;
      }
    "#
    } else {
        ""
    };
    let logo_img = logo_url
        .map(|url| format!(r#"<img src="{}" alt="Logo" class="logo">"#, escape_html(&url)))
        .unwrap_or_default();

    format!(
        r#"
<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8">
  <meta name="viewport" content="width=device-width, initial-scale=1.0">
  <title>{title}</title>
  <meta name="description" content="{description}">
  <style>
    * {{ margin: 0; padding: 0; box-sizing: border-box; }}
    body {{
      font-family: 'Segoe UI', Tahoma, Geneva, Verdana, sans-serif;
      background: {background};
      color: {text_color};
      padding: 40px 20px;
      min-height: 100vh;
      display: flex;
      align-items: center;
      justify-content: center;
    }}
    .container {{
      max-width: 800px;
      background: white;
      padding: 60px;
      border-radius: 10px;
      box-shadow: 0 4px 20px rgba(0,0,0,0.1);
      text-align: center;
    }}
    h1 {{
      color: {primary};
      font-size: 3rem;
      margin-bottom: 20px;
    }}
    p {{
      font-size: 1.2rem;
      line-height: 1.8;
      color: #666;
    }}
    {logo_style}
  </style>
</head>
<body>
  <div class="container">
    {logo_img}
    <h1>{hero_title}</h1>
    <p>{hero_description}</p>
  </div>
</body>
</html>"#,
        title = escape_html(&site.title),
        description = escape_html(&site.description),
        background = quote_safe(&background),
        text_color = quote_safe(&text_color),
        primary = quote_safe(&primary),
        hero_title = escape_html(&hero_title),
        hero_description = escape_html(&hero_description),
    )
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn site(config: serde_json::Value) -> WebsiteData {
        WebsiteData {
            title: "My <Site>".to_string(),
            description: "All about me".to_string(),
            template: "whatever".to_string(),
            config: config.as_object().cloned().unwrap(),
        }
    }

    #[test]
    fn defaults_applied() {
        let html = render_generic_fallback(&site(json!({})));
        assert!(html.contains("background: #f5f7fa;"));
        assert!(html.contains("color: #333;"));
        assert!(html.contains("color: #667eea;"));
        assert!(!html.contains("class=\"logo\""));
    }

    #[test]
    fn title_escaped_everywhere() {
        let html = render_generic_fallback(&site(json!({})));
        assert!(html.contains("<title>My &lt;Site&gt;</title>"));
        assert!(html.contains("<h1>My &lt;Site&gt;</h1>"));
        assert!(!html.contains("<Site>"));
    }

    #[test]
    fn hero_keys_override_title_and_description() {
        let html = render_generic_fallback(&site(json!({
            "heroTitle": "Hello",
            "heroDescription": "World",
            "primaryColor": "#123456"
        })));
        assert!(html.contains("<h1>Hello</h1>"));
        assert!(html.contains("<p>World</p>"));
        assert!(html.contains("color: #123456;"));
        // The page title still comes from the website itself.
        assert!(html.contains("<title>My &lt;Site&gt;</title>"));
    }

    #[test]
    fn logo_rendered_when_present() {
        let html = render_generic_fallback(&site(json!({ "logoUrl": "https://cdn.test/logo.png" })));
        assert!(html.contains(r#"<img src="https://cdn.test/logo.png" alt="Logo" class="logo">"#));
        assert!(html.contains(".logo {"));
    }

    #[test]
    fn empty_hero_title_falls_back_to_title() {
        let html = render_generic_fallback(&site(json!({ "heroTitle": "" })));
        assert!(html.contains("<h1>My &lt;Site&gt;</h1>"));
    }
}
