use super::document;
use crate::render::escape::{escape_html, quote_safe};
use crate::render::fields::{item_text, list, non_empty, text_or};
use crate::types::Config;

const DEFAULT_FEATURES: [(&str, &str, &str); 3] = [
    ("⚡", "Fast", "Build a website in minutes with a simple interface"),
    ("🎨", "Easy to customize", "Change colors and content to suit your taste"),
    ("📱", "Responsive", "Works smoothly on every device and screen"),
];

pub(super) fn render(title: &str, description: &str, config: &Config) -> String {
    let background_color = quote_safe(&text_or(config, "backgroundColor", "#ffffff"));
    let primary_color = quote_safe(&text_or(config, "primaryColor", "#ff6b6b"));
    let cta_text = escape_html(&text_or(config, "ctaText", "Get started"));
    let cta_link = quote_safe(&text_or(config, "ctaLink", "#"));

    let style = format!(
        r#"
    * {{ margin: 0; padding: 0; box-sizing: border-box; }}
    body {{
      font-family: 'Segoe UI', Tahoma, Geneva, Verdana, sans-serif;
      background-color: {background_color};
      color: #333;
    }}
    .container {{ max-width: 1200px; margin: 0 auto; padding: 0 20px; }}

    .hero {{
      background: linear-gradient(135deg, {primary_color}, #ee5a6f);
      color: white;
      padding: 100px 0;
      text-align: center;
      min-height: 100vh;
      display: flex;
      align-items: center;
      justify-content: center;
    }}
    .hero-content {{ max-width: 800px; }}
    .hero-image {{
      max-width: 400px;
      width: 100%;
      margin-bottom: 30px;
      border-radius: 20px;
      box-shadow: 0 10px 40px rgba(0,0,0,0.2);
      object-fit: cover;
    }}
    .hero h1 {{ font-size: 3.5rem; margin-bottom: 20px; text-shadow: 2px 2px 4px rgba(0,0,0,0.2); }}
    .hero p {{ font-size: 1.3rem; margin-bottom: 30px; opacity: 0.95; line-height: 1.8; }}
    .cta-button {{
      display: inline-block;
      background: white;
      color: {primary_color};
      padding: 18px 50px;
      border-radius: 50px;
      text-decoration: none;
      font-size: 1.2rem;
      font-weight: bold;
      transition: all 0.3s;
      box-shadow: 0 4px 15px rgba(0,0,0,0.2);
    }}
    .cta-button:hover {{ transform: translateY(-3px); box-shadow: 0 6px 20px rgba(0,0,0,0.3); }}

    .features {{ padding: 100px 0; background: #f8f9fa; }}
    .features h2 {{
      text-align: center;
      font-size: 2.5rem;
      margin-bottom: 60px;
      color: {primary_color};
    }}
    .features-grid {{
      display: grid;
      grid-template-columns: repeat(auto-fit, minmax(280px, 1fr));
      gap: 40px;
    }}
    .feature-item {{
      text-align: center;
      padding: 40px 30px;
      background: white;
      border-radius: 15px;
      box-shadow: 0 4px 6px rgba(0,0,0,0.1);
      transition: all 0.3s;
    }}
    .feature-item:hover {{ transform: translateY(-10px); box-shadow: 0 10px 25px rgba(0,0,0,0.15); }}
    .feature-icon {{ font-size: 3.5rem; margin-bottom: 20px; }}
    .feature-item h3 {{ color: {primary_color}; margin-bottom: 15px; font-size: 1.5rem; }}
    .feature-item p {{ color: #666; line-height: 1.6; }}

    @media (max-width: 768px) {{
      .hero h1 {{ font-size: 2.5rem; }}
      .hero p {{ font-size: 1.1rem; }}
      .hero-image {{ max-width: 300px; }}
      .features h2 {{ font-size: 2rem; }}
    }}
"#
    );

    let hero_image = match non_empty(config, "heroImage") {
        Some(url) => format!(r#"<img src="{}" alt="Hero" class="hero-image">"#, quote_safe(&url)),
        None => String::new(),
    };

    let features = list(config, "features");
    let items: String = if features.is_empty() {
        DEFAULT_FEATURES
            .iter()
            .map(|(icon, heading, text)| feature_item(icon, heading, text))
            .collect()
    } else {
        features
            .iter()
            .map(|feature| {
                let heading = item_text(feature, "title").unwrap_or_else(|| "Feature".into());
                let text = item_text(feature, "description")
                    .unwrap_or_else(|| "Feature description".into());
                feature_item("✨", &escape_html(&heading), &escape_html(&text))
            })
            .collect()
    };

    let body = format!(
        r#"
  <div class="hero">
    <div class="container">
      <div class="hero-content">
        {hero_image}
        <h1>{title}</h1>
        <p>{description}</p>
        <a href="{cta_link}" class="cta-button">{cta_text}</a>
      </div>
    </div>
  </div>

  <section class="features">
    <div class="container">
      <h2>Key features</h2>
      <div class="features-grid">{items}
      </div>
    </div>
  </section>
"#,
        title = escape_html(title),
        description = escape_html(description),
    );

    document(title, description, &style, &body)
}

fn feature_item(icon: &str, heading: &str, text: &str) -> String {
    format!(
        r#"
        <div class="feature-item">
          <div class="feature-icon">{icon}</div>
          <h3>{heading}</h3>
          <p>{text}</p>
        </div>"#
    )
}
