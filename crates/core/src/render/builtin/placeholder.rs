use super::document;
use crate::render::escape::escape_html;
use crate::types::Config;

const STYLE: &str = r#"
    * { margin: 0; padding: 0; box-sizing: border-box; }
    body {
      font-family: 'Segoe UI', Arial, sans-serif;
      display: flex;
      justify-content: center;
      align-items: center;
      min-height: 100vh;
      background: linear-gradient(135deg, #667eea 0%, #764ba2 100%);
      color: white;
      text-align: center;
      padding: 20px;
    }
    .container { max-width: 600px; animation: fadeIn 0.8s ease; }
    @keyframes fadeIn {
      from { opacity: 0; transform: translateY(30px); }
      to { opacity: 1; transform: translateY(0); }
    }
    h1 { font-size: 3.5rem; margin-bottom: 20px; text-shadow: 2px 2px 4px rgba(0,0,0,0.2); }
    p { font-size: 1.3rem; line-height: 1.8; opacity: 0.95; }

    @media (max-width: 600px) {
      h1 { font-size: 2.5rem; }
      p { font-size: 1.1rem; }
    }
"#;

/// Catch-all page for unknown kinds. Config is ignored.
pub(super) fn render(title: &str, description: &str, _config: &Config) -> String {
    let body = format!(
        r#"
  <div class="container">
    <h1>{}</h1>
    <p>{}</p>
  </div>
"#,
        escape_html(title),
        escape_html(description),
    );
    document(title, description, STYLE, &body)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn branded_gradient() {
        let html = render("Hi", "There", &Config::new());
        assert!(html.contains("linear-gradient(135deg, #667eea 0%, #764ba2 100%)"));
        assert!(html.contains("<h1>Hi</h1>"));
    }
}
