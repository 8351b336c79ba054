use super::document;
use crate::render::escape::{escape_html, quote_safe};
use crate::render::fields::{item_text, list, text_or};
use crate::types::Config;

pub(super) fn render(title: &str, description: &str, config: &Config) -> String {
    let primary_color = quote_safe(&text_or(config, "primaryColor", "#2ecc71"));

    let style = format!(
        r#"
    * {{ margin: 0; padding: 0; box-sizing: border-box; }}
    body {{
      font-family: Georgia, 'Times New Roman', serif;
      background: #f4f4f4;
      color: #333;
      line-height: 1.8;
    }}
    .container {{ max-width: 900px; margin: 0 auto; padding: 0 20px; }}

    header {{
      background: {primary_color};
      color: white;
      padding: 60px 0;
      text-align: center;
      box-shadow: 0 2px 10px rgba(0,0,0,0.1);
    }}
    header h1 {{ font-size: 3rem; margin-bottom: 10px; text-shadow: 2px 2px 4px rgba(0,0,0,0.1); }}
    header p {{ font-size: 1.2rem; margin-top: 10px; opacity: 0.95; }}

    main {{ padding: 60px 0; min-height: 60vh; }}

    .post {{
      background: white;
      padding: 40px;
      margin-bottom: 30px;
      border-radius: 10px;
      box-shadow: 0 2px 8px rgba(0,0,0,0.1);
      transition: all 0.3s;
    }}
    .post:hover {{ box-shadow: 0 5px 20px rgba(0,0,0,0.15); transform: translateY(-2px); }}
    .post h2 {{
      color: {primary_color};
      margin-bottom: 15px;
      font-size: 2rem;
      line-height: 1.4;
    }}
    .post-meta {{
      color: #888;
      font-size: 0.95rem;
      margin-bottom: 20px;
      font-family: 'Segoe UI', Arial, sans-serif;
    }}
    .post-content {{ font-size: 1.1rem; color: #444; line-height: 1.8; }}
    .post-content p {{ margin-bottom: 15px; }}

    footer {{
      background: #2c3e50;
      color: white;
      text-align: center;
      padding: 30px 0;
      margin-top: 40px;
    }}

    @media (max-width: 768px) {{
      header h1 {{ font-size: 2rem; }}
      .post {{ padding: 30px 20px; }}
      .post h2 {{ font-size: 1.5rem; }}
    }}
"#
    );

    let posts = list(config, "posts");
    let articles: String = if posts.is_empty() {
        default_posts()
    } else {
        posts
            .iter()
            .map(|post| {
                let heading = item_text(post, "title").unwrap_or_else(|| "Post title".into());
                let excerpt = item_text(post, "excerpt")
                    .or_else(|| item_text(post, "content"))
                    .unwrap_or_else(|| "Post content...".into());
                let meta = match item_text(post, "date") {
                    Some(date) => format!(
                        r#"
          <div class="post-meta">📅 Published {}</div>"#,
                        escape_html(&date)
                    ),
                    None => String::new(),
                };
                format!(
                    r#"
        <article class="post">
          <h2>{}</h2>{meta}
          <div class="post-content">
            <p>{}</p>
          </div>
        </article>"#,
                    escape_html(&heading),
                    escape_html(&excerpt),
                )
            })
            .collect()
    };

    let safe_title = escape_html(title);
    let body = format!(
        r#"
  <header>
    <div class="container">
      <h1>{safe_title}</h1>
      <p>{description}</p>
    </div>
  </header>

  <main>
    <div class="container">{articles}
    </div>
  </main>

  <footer>
    <div class="container">
      <p>&copy; 2025 {safe_title}. All rights reserved.</p>
    </div>
  </footer>
"#,
        description = escape_html(description),
    );

    document(title, description, &style, &body)
}

fn default_posts() -> String {
    r#"
        <article class="post">
          <h2>Welcome to my blog</h2>
          <div class="post-content">
            <p>This is the first post on my blog. I will share my thoughts, knowledge and experience here.</p>
            <p>Come back often to read the latest posts!</p>
          </div>
        </article>
        <article class="post">
          <h2>How do I start blogging?</h2>
          <div class="post-content">
            <p>Blogging is a great way to share knowledge and connect with people. You can add your own posts here.</p>
          </div>
        </article>"#
        .to_string()
}
