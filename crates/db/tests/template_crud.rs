//! Integration tests for the template repository and template source.

use assert_matches::assert_matches;
use sitekit_core::render::TemplateSource;
use sitekit_core::schema::FieldType;
use sitekit_db::models::template::{CreateTemplate, UpdateTemplate};
use sitekit_db::repositories::TemplateRepo;
use sitekit_db::PgTemplateSource;
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn new_template(name: &str) -> CreateTemplate {
    CreateTemplate {
        name: name.to_string(),
        description: "A test template".to_string(),
        category: "test".to_string(),
        html_template: Some("<h1>{{title}}</h1>{{css}}".to_string()),
        css_template: Some("h1{color:{{color}}}".to_string()),
        ..Default::default()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn test_create_and_find(pool: PgPool) {
    let created = TemplateRepo::create(&pool, "spring-sale", &new_template("Spring Sale"))
        .await
        .unwrap();
    assert_eq!(created.id, "spring-sale");
    assert!(created.is_active);
    assert_eq!(created.thumbnail, "");
    assert!(created.features.0.is_empty());

    let found = TemplateRepo::find_by_id(&pool, "spring-sale")
        .await
        .unwrap()
        .unwrap();
    assert_eq!(found.name, "Spring Sale");
    assert!(TemplateRepo::exists(&pool, "spring-sale").await.unwrap());
    assert!(!TemplateRepo::exists(&pool, "nope").await.unwrap());
}

#[sqlx::test(migrations = "./migrations")]
async fn test_duplicate_id_is_unique_violation(pool: PgPool) {
    let dto = new_template("Dup");
    TemplateRepo::create(&pool, "dup", &dto).await.unwrap();
    let err = TemplateRepo::create(&pool, "dup", &dto).await.unwrap_err();
    assert_matches!(err, sqlx::Error::Database(ref db) if db.code().as_deref() == Some("23505"));
}

#[sqlx::test(migrations = "./migrations")]
async fn test_seeded_schema_decodes(pool: PgPool) {
    let portfolio = TemplateRepo::find_by_id(&pool, "portfolio")
        .await
        .unwrap()
        .unwrap();
    let schema = &portfolio.config_schema.0;
    assert_eq!(schema["logo"].field_type, FieldType::Image);
    assert_eq!(
        schema["primaryColor"].default_value,
        Some(serde_json::json!("#007bff"))
    );
    assert_eq!(portfolio.features.0.len(), 4);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_partial_update_keeps_other_fields(pool: PgPool) {
    TemplateRepo::create(&pool, "t1", &new_template("T1")).await.unwrap();

    let update = UpdateTemplate {
        description: Some("Changed".to_string()),
        ..Default::default()
    };
    let updated = TemplateRepo::update(&pool, "t1", &update)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(updated.description, "Changed");
    assert_eq!(updated.name, "T1");
    assert_eq!(updated.html_template, "<h1>{{title}}</h1>{{css}}");
    assert!(updated.updated_at >= updated.created_at);

    let missing = TemplateRepo::update(&pool, "ghost", &update).await.unwrap();
    assert!(missing.is_none());
}

#[sqlx::test(migrations = "./migrations")]
async fn test_toggle_hides_from_catalog(pool: PgPool) {
    assert_eq!(TemplateRepo::list_active(&pool).await.unwrap().len(), 4);

    assert_eq!(
        TemplateRepo::toggle_active(&pool, "blog").await.unwrap(),
        Some(false)
    );
    let active = TemplateRepo::list_active(&pool).await.unwrap();
    assert_eq!(active.len(), 3);
    assert!(active.iter().all(|t| t.id != "blog"));
    assert_eq!(TemplateRepo::list_all(&pool).await.unwrap().len(), 4);

    assert_eq!(
        TemplateRepo::toggle_active(&pool, "blog").await.unwrap(),
        Some(true)
    );
    assert_eq!(TemplateRepo::toggle_active(&pool, "ghost").await.unwrap(), None);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_reference_check_and_delete(pool: PgPool) {
    sqlx::query(
        "INSERT INTO websites (id, user_id, title, template) VALUES ('w1', 'u1', 'Site', 'blog')",
    )
    .execute(&pool)
    .await
    .unwrap();

    assert!(TemplateRepo::is_referenced_by_website(&pool, "blog").await.unwrap());
    assert!(!TemplateRepo::is_referenced_by_website(&pool, "portfolio").await.unwrap());

    assert!(TemplateRepo::delete(&pool, "portfolio").await.unwrap());
    assert!(!TemplateRepo::delete(&pool, "portfolio").await.unwrap());
}

#[sqlx::test(migrations = "./migrations")]
async fn test_source_returns_markup_or_none(pool: PgPool) {
    TemplateRepo::create(&pool, "custom-one", &new_template("Custom One"))
        .await
        .unwrap();
    TemplateRepo::toggle_active(&pool, "custom-one").await.unwrap();

    let source = PgTemplateSource::new(pool.clone());
    // Inactive templates still resolve.
    let markup = source.fetch_markup("custom-one").await.unwrap().unwrap();
    assert_eq!(markup.css_template, "h1{color:{{color}}}");

    assert!(source.fetch_markup("ghost").await.unwrap().is_none());
}
