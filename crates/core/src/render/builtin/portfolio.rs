use super::document;
use crate::render::escape::{css_url_safe, escape_html, quote_safe};
use crate::render::fields::{item_text, list, non_empty, text_or};
use crate::types::Config;

const PLACEHOLDER_PROJECTS: [(&str, &str); 3] = [
    ("Project 1", "Add your project here"),
    ("Project 2", "Describe your project"),
    ("Project 3", "Showcase the work you have done"),
];

pub(super) fn render(title: &str, description: &str, config: &Config) -> String {
    let background_color = quote_safe(&text_or(config, "backgroundColor", "#ffffff"));
    let text_color = quote_safe(&text_or(config, "textColor", "#333333"));
    let primary_color = quote_safe(&text_or(config, "primaryColor", "#007bff"));
    let hero_text = escape_html(&text_or(config, "heroText", "Welcome to my portfolio"));
    let about_text = escape_html(&text_or(config, "aboutText", "About me section"));
    let background_image = non_empty(config, "backgroundImage").map(|url| css_url_safe(&url));

    let body_background = match &background_image {
        Some(url) => format!(
            r#"
      background-image: url('{url}');
      background-size: cover;
      background-attachment: fixed;
      background-position: center;"#
        ),
        None => String::new(),
    };
    let header_overlay = if background_image.is_some() {
        "backdrop-filter: blur(5px); background: linear-gradient(135deg, rgba(0, 123, 255, 0.9), rgba(0, 86, 179, 0.9));"
    } else {
        ""
    };
    let section_background = if background_image.is_some() {
        "rgba(255, 255, 255, 0.95)"
    } else {
        "transparent"
    };

    let style = format!(
        r#"
    * {{ margin: 0; padding: 0; box-sizing: border-box; }}
    body {{
      font-family: 'Segoe UI', Tahoma, Geneva, Verdana, sans-serif;
      background-color: {background_color};
      color: {text_color};
      line-height: 1.6;{body_background}
    }}
    .container {{ max-width: 1200px; margin: 0 auto; padding: 0 20px; }}

    header {{
      background: linear-gradient(135deg, {primary_color}, #0056b3);
      color: white;
      padding: 80px 0;
      text-align: center;
      {header_overlay}
    }}
    .logo {{
      max-width: 150px;
      max-height: 150px;
      margin-bottom: 20px;
      border-radius: 10px;
      object-fit: contain;
    }}
    header h1 {{ font-size: 3rem; margin-bottom: 10px; text-shadow: 2px 2px 4px rgba(0,0,0,0.2); }}
    header p {{ font-size: 1.2rem; opacity: 0.9; }}

    section {{
      padding: 60px 0;
      background: {section_background};
      margin: 20px 0;
      border-radius: 10px;
    }}
    section h2 {{
      font-size: 2.5rem;
      margin-bottom: 30px;
      text-align: center;
      color: {primary_color};
    }}

    .about-content {{
      max-width: 800px;
      margin: 0 auto;
      text-align: center;
      font-size: 1.1rem;
      padding: 20px;
    }}

    .projects-grid {{
      display: grid;
      grid-template-columns: repeat(auto-fit, minmax(300px, 1fr));
      gap: 30px;
      margin-top: 40px;
    }}
    .project-card {{
      background: #f8f9fa;
      border-radius: 10px;
      padding: 30px;
      box-shadow: 0 4px 6px rgba(0,0,0,0.1);
      transition: transform 0.3s, box-shadow 0.3s;
    }}
    .project-card:hover {{ transform: translateY(-5px); box-shadow: 0 8px 16px rgba(0,0,0,0.15); }}
    .project-card h3 {{ color: {primary_color}; margin-bottom: 10px; font-size: 1.5rem; }}

    footer {{
      background: #2c3e50;
      color: white;
      text-align: center;
      padding: 30px 0;
      margin-top: 60px;
    }}

    @media (max-width: 768px) {{
      header h1 {{ font-size: 2rem; }}
      section h2 {{ font-size: 2rem; }}
      .projects-grid {{ grid-template-columns: 1fr; }}
    }}
"#
    );

    let logo = match non_empty(config, "logo") {
        Some(url) => format!(r#"<img src="{}" alt="Logo" class="logo">"#, quote_safe(&url)),
        None => String::new(),
    };

    let projects = list(config, "projects");
    let cards: String = if projects.is_empty() {
        PLACEHOLDER_PROJECTS
            .iter()
            .map(|(name, text)| project_card(name, text))
            .collect()
    } else {
        projects
            .iter()
            .map(|project| {
                let name = item_text(project, "name").unwrap_or_else(|| "Project".into());
                let text = item_text(project, "description")
                    .unwrap_or_else(|| "Project description".into());
                project_card(&escape_html(&name), &escape_html(&text))
            })
            .collect()
    };

    let safe_title = escape_html(title);
    let body = format!(
        r#"
  <header>
    <div class="container">
      {logo}
      <h1>{safe_title}</h1>
      <p>{hero_text}</p>
    </div>
  </header>

  <section id="about">
    <div class="container">
      <h2>About me</h2>
      <div class="about-content">
        <p>{about_text}</p>
      </div>
    </div>
  </section>

  <section id="projects">
    <div class="container">
      <h2>Projects</h2>
      <div class="projects-grid">{cards}
      </div>
    </div>
  </section>

  <footer>
    <div class="container">
      <p>&copy; 2025 {safe_title}. Created with Mini Website Builder.</p>
    </div>
  </footer>
"#
    );

    document(title, description, &style, &body)
}

/// Both arguments must already be escaped.
fn project_card(name: &str, text: &str) -> String {
    format!(
        r#"
        <div class="project-card">
          <h3>{name}</h3>
          <p>{text}</p>
        </div>"#
    )
}
