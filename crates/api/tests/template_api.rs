mod common;

use axum::http::StatusCode;
use common::{
    body_json, delete_auth, get, get_auth, patch_auth, post_json_auth, put_json_auth,
};
use serde_json::json;
use sitekit_db::repositories::UserRoleRepo;
use sqlx::PgPool;

const ADMIN: &str = "admin-1";

async fn admin_app(pool: PgPool) -> axum::Router {
    UserRoleRepo::grant(&pool, ADMIN, "admin").await.unwrap();
    common::build_test_app(pool)
}

fn new_template(name: &str) -> serde_json::Value {
    json!({
        "name": name,
        "description": "Things for sale",
        "category": "business",
        "features": ["Catalog"],
        "configSchema": {
            "accent": { "type": "color", "label": "Accent", "default": "#123456" }
        }
    })
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_catalog_lists_seeded_templates(pool: PgPool) {
    let app = common::build_test_app(pool);

    let response = get(app.clone(), "/api/v1/templates").await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    let ids: Vec<&str> = json["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|t| t["id"].as_str().unwrap())
        .collect();
    assert_eq!(ids, vec!["blog", "business-card", "landing-page", "portfolio"]);

    let response = get(app, "/api/v1/templates/blog").await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"]["configSchema"]["primaryColor"]["defaultValue"], "#2ecc71");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_missing_template_is_404(pool: PgPool) {
    let app = common::build_test_app(pool);

    let response = get(app, "/api/v1/templates/nope").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(response).await["error"], "Template with id nope not found");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_admin_routes_require_admin_role(pool: PgPool) {
    let app = common::build_test_app(pool);

    let response = get_auth(app.clone(), "/api/v1/admin/templates", "regular").await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
    assert_eq!(body_json(response).await["error"], "Admin role required");

    let response = get(app, "/api/v1/admin/templates").await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_create_derives_slug_and_rejects_duplicates(pool: PgPool) {
    let app = admin_app(pool).await;

    let response =
        post_json_auth(app.clone(), "/api/v1/admin/templates", new_template("My Shop!"), ADMIN).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert_eq!(json["data"]["id"], "my-shop");
    assert_eq!(json["data"]["isActive"], true);
    assert_eq!(json["data"]["features"], json!(["Catalog"]));

    let response =
        post_json_auth(app, "/api/v1/admin/templates", new_template("my shop"), ADMIN).await;
    assert_eq!(response.status(), StatusCode::CONFLICT);
    assert_eq!(
        body_json(response).await["error"],
        "Template ID 'my-shop' already exists"
    );
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_create_requires_name_description_category(pool: PgPool) {
    let app = admin_app(pool).await;

    let response = post_json_auth(
        app,
        "/api/v1/admin/templates",
        json!({ "name": "Shop" }),
        ADMIN,
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        body_json(response).await["error"],
        "Missing required fields: description, category"
    );
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_update_keeps_id_and_merges_fields(pool: PgPool) {
    let app = admin_app(pool).await;

    post_json_auth(app.clone(), "/api/v1/admin/templates", new_template("Shop"), ADMIN).await;

    let response = put_json_auth(
        app.clone(),
        "/api/v1/admin/templates/shop",
        json!({ "name": "Renamed Shop" }),
        ADMIN,
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"]["id"], "shop");
    assert_eq!(json["data"]["name"], "Renamed Shop");
    assert_eq!(json["data"]["category"], "business");

    let response = put_json_auth(
        app,
        "/api/v1/admin/templates/ghost",
        json!({ "name": "Ghost" }),
        ADMIN,
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_toggle_hides_template_from_catalog(pool: PgPool) {
    let app = admin_app(pool).await;

    let response = patch_auth(app.clone(), "/api/v1/admin/templates/blog/toggle", ADMIN).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"], json!({ "id": "blog", "isActive": false }));

    let response = get(app.clone(), "/api/v1/templates").await;
    let json = body_json(response).await;
    assert_eq!(json["data"].as_array().unwrap().len(), 3);

    let response = get_auth(app, "/api/v1/admin/templates", ADMIN).await;
    let json = body_json(response).await;
    assert_eq!(json["data"].as_array().unwrap().len(), 4);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_delete_refuses_referenced_template(pool: PgPool) {
    let app = admin_app(pool).await;

    let response = post_json_auth(
        app.clone(),
        "/api/v1/websites",
        json!({ "title": "Mine", "template": "blog" }),
        "user-1",
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let response = delete_auth(app.clone(), "/api/v1/admin/templates/blog", ADMIN).await;
    assert_eq!(response.status(), StatusCode::CONFLICT);

    let response = delete_auth(app.clone(), "/api/v1/admin/templates/portfolio", ADMIN).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"]["id"], "portfolio");
    assert_eq!(json["data"]["imagesDeleted"], 0);

    let response = delete_auth(app, "/api/v1/admin/templates/portfolio", ADMIN).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_inactive_template_still_renders_by_id(pool: PgPool) {
    let app = admin_app(pool).await;

    let mut body = new_template("Retired Shop");
    body["htmlTemplate"] = json!("<section>{{title}} / {{tagline}}</section>");
    let response = post_json_auth(app.clone(), "/api/v1/admin/templates", body, ADMIN).await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let response =
        patch_auth(app.clone(), "/api/v1/admin/templates/retired-shop/toggle", ADMIN).await;
    assert_eq!(body_json(response).await["data"]["isActive"], false);

    let response = post_json_auth(
        app.clone(),
        "/api/v1/websites",
        json!({ "title": "Closing", "template": "retired-shop", "config": { "tagline": "last call" } }),
        "user-1",
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert_eq!(json["data"]["previewHtml"], "<section>Closing / last call</section>");

    let id = json["data"]["website"]["id"].as_str().unwrap();
    let response = get(app, &format!("/api/v1/websites/{id}/html")).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        common::body_text(response).await,
        "<section>Closing / last call</section>"
    );
}
