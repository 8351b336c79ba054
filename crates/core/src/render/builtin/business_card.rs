use super::document;
use crate::render::escape::{escape_html, quote_safe};
use crate::render::fields::{non_empty, text_or};
use crate::types::Config;

pub(super) fn render(title: &str, description: &str, config: &Config) -> String {
    let name = text_or(config, "name", title);
    let job_title = text_or(config, "jobTitle", description);
    let background_color = quote_safe(&text_or(config, "backgroundColor", "#1a1a2e"));
    let text_color = quote_safe(&text_or(config, "textColor", "#ffffff"));
    let accent_color = quote_safe(&text_or(config, "accentColor", "#0f3460"));

    let style = format!(
        r#"
    * {{ margin: 0; padding: 0; box-sizing: border-box; }}
    body {{
      font-family: 'Arial', sans-serif;
      background: {background_color};
      color: {text_color};
      display: flex;
      justify-content: center;
      align-items: center;
      min-height: 100vh;
      padding: 20px;
    }}
    .card {{
      background: {accent_color};
      max-width: 500px;
      width: 100%;
      padding: 60px 40px;
      border-radius: 20px;
      box-shadow: 0 20px 60px rgba(0,0,0,0.5);
      text-align: center;
      animation: fadeIn 0.6s ease;
    }}
    @keyframes fadeIn {{
      from {{ opacity: 0; transform: translateY(20px); }}
      to {{ opacity: 1; transform: translateY(0); }}
    }}
    .avatar-container {{
      width: 150px;
      height: 150px;
      background: {background_color};
      border-radius: 50%;
      margin: 0 auto 25px;
      display: flex;
      align-items: center;
      justify-content: center;
      font-size: 4rem;
      overflow: hidden;
      box-shadow: 0 5px 15px rgba(0,0,0,0.3);
    }}
    .avatar-container img {{ width: 100%; height: 100%; object-fit: cover; }}
    h1 {{ font-size: 2.5rem; margin-bottom: 10px; color: {text_color}; }}
    .job-title {{ font-size: 1.3rem; opacity: 0.85; margin-bottom: 35px; color: {text_color}; }}
    .contact-info {{ text-align: left; margin-top: 30px; }}
    .contact-item {{
      padding: 15px 0;
      border-bottom: 1px solid rgba(255,255,255,0.1);
      display: flex;
      align-items: center;
      gap: 15px;
      transition: all 0.3s;
    }}
    .contact-item:hover {{ padding-left: 10px; background: rgba(255,255,255,0.05); border-radius: 5px; }}
    .contact-item:last-child {{ border-bottom: none; }}
    .contact-item .icon {{ font-size: 1.3rem; opacity: 0.8; min-width: 25px; }}
    .contact-item .text {{ flex: 1; }}
    .contact-item strong {{ opacity: 0.7; display: block; font-size: 0.85rem; margin-bottom: 3px; }}
    .contact-item a {{ color: {text_color}; text-decoration: none; }}
    .contact-item a:hover {{ text-decoration: underline; }}

    @media (max-width: 600px) {{
      .card {{ padding: 40px 30px; }}
      h1 {{ font-size: 2rem; }}
      .avatar-container {{ width: 120px; height: 120px; }}
    }}
"#
    );

    let safe_name = escape_html(&name);
    let avatar = match non_empty(config, "avatar") {
        Some(url) => format!(r#"<img src="{}" alt="{safe_name}">"#, quote_safe(&url)),
        None => "👤".to_string(),
    };

    let mut contacts = String::new();
    if let Some(phone) = non_empty(config, "phone") {
        let link = format!(
            r#"<a href="tel:{}">{}</a>"#,
            quote_safe(&phone),
            escape_html(&phone)
        );
        contacts.push_str(&contact_item("📞", "Phone", &link));
    }
    if let Some(email) = non_empty(config, "email") {
        let link = format!(
            r#"<a href="mailto:{}">{}</a>"#,
            quote_safe(&email),
            escape_html(&email)
        );
        contacts.push_str(&contact_item("📧", "Email", &link));
    }
    if let Some(address) = non_empty(config, "address") {
        contacts.push_str(&contact_item("📍", "Address", &escape_html(&address)));
    }
    if let Some(website) = non_empty(config, "website") {
        let link = format!(
            r#"<a href="{}" target="_blank">{}</a>"#,
            quote_safe(&website),
            escape_html(&website)
        );
        contacts.push_str(&contact_item("🌐", "Website", &link));
    }

    let body = format!(
        r#"
  <div class="card">
    <div class="avatar-container">
      {avatar}
    </div>
    <h1>{safe_name}</h1>
    <div class="job-title">{job_title}</div>

    <div class="contact-info">{contacts}
    </div>
  </div>
"#,
        job_title = escape_html(&job_title),
    );

    document(title, description, &style, &body)
}

/// `content` is inserted as markup and must already be escaped.
fn contact_item(icon: &str, label: &str, content: &str) -> String {
    format!(
        r#"
      <div class="contact-item">
        <span class="icon">{icon}</span>
        <div class="text">
          <strong>{label}</strong>
          {content}
        </div>
      </div>"#
    )
}
