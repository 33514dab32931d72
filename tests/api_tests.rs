//! Endpoint-level tests for the HTTP API

use std::sync::Arc;

use actix_web::{App, test, web};
use serde_json::json;
use tempfile::TempDir;

use leadgate::api::services::helpers::json_error_handler;
use leadgate::api::services::{AppStartTime, api_routes, health_routes};
use leadgate::config::WebhookConfig;
use leadgate::services::{SubmissionService, WebhookNotifier};
use leadgate::storage::SeaOrmStorage;

struct TestContext {
    _temp_dir: TempDir,
    storage: Arc<SeaOrmStorage>,
    service: Arc<SubmissionService>,
}

async fn setup() -> TestContext {
    let temp_dir = TempDir::new().unwrap();
    let db_path = temp_dir.path().join("test.db");
    let url = format!("sqlite://{}", db_path.display());
    let storage = Arc::new(SeaOrmStorage::new(&url).await.unwrap());

    let notifier = Arc::new(WebhookNotifier::new(WebhookConfig {
        url: None,
        timeout_secs: 5,
    }));
    let service = Arc::new(SubmissionService::new(storage.clone(), notifier));

    TestContext {
        _temp_dir: temp_dir,
        storage,
        service,
    }
}

macro_rules! init_app {
    ($ctx:expr) => {
        test::init_service(
            App::new()
                .app_data(web::Data::new($ctx.storage.clone()))
                .app_data(web::Data::new($ctx.service.clone()))
                .app_data(web::Data::new(AppStartTime {
                    start_datetime: chrono::Utc::now(),
                }))
                .app_data(web::JsonConfig::default().error_handler(json_error_handler))
                .service(api_routes())
                .service(health_routes()),
        )
        .await
    };
}

#[actix_rt::test]
async fn test_post_leads_returns_created_inquiry() {
    let ctx = setup().await;
    let app = init_app!(ctx);

    let req = test::TestRequest::post()
        .uri("/api/leads")
        .set_json(json!({
            "name": "Jane Doe",
            "phone": "07700900000",
            "postcode": "SW1A 1AA"
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), 201);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert!(body["id"].is_i64());
    assert!(body["createdAt"].is_string());
    assert_eq!(body["name"], "Jane Doe");
    assert_eq!(body["phone"], "07700900000");
    assert_eq!(body["postcode"], "SW1A 1AA");
}

#[actix_rt::test]
async fn test_post_inquiries_missing_name_returns_field_errors() {
    let ctx = setup().await;
    let app = init_app!(ctx);

    let req = test::TestRequest::post()
        .uri("/api/inquiries")
        .set_json(json!({
            "phone": "07700900000",
            "postcode": "SW1A 1AA"
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), 400);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert!(body["message"].is_string());
    let errors = body["errors"].as_array().unwrap();
    assert!(!errors.is_empty());
    assert_eq!(errors[0]["field"], "name");

    assert_eq!(ctx.storage.count_inquiries().await.unwrap(), 0);
}

#[actix_rt::test]
async fn test_inquiry_and_lead_routes_are_aliases() {
    let ctx = setup().await;
    let app = init_app!(ctx);

    let payload = json!({
        "name": "Jane Doe",
        "phone": "07700900000",
        "postcode": "SW1A 1AA"
    });

    let mut ids = Vec::new();
    for path in ["/api/inquiries", "/api/leads"] {
        let req = test::TestRequest::post()
            .uri(path)
            .set_json(payload.clone())
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 201, "unexpected status for {}", path);
        let body: serde_json::Value = test::read_body_json(resp).await;
        ids.push(body["id"].as_i64().unwrap());
    }

    // No dedup across the alias routes either
    assert_ne!(ids[0], ids[1]);
    assert_eq!(ctx.storage.count_inquiries().await.unwrap(), 2);
}

#[actix_rt::test]
async fn test_optional_fields_are_echoed() {
    let ctx = setup().await;
    let app = init_app!(ctx);

    let req = test::TestRequest::post()
        .uri("/api/inquiries")
        .set_json(json!({
            "name": "Jane Doe",
            "phone": "07700900000",
            "postcode": "SW1A 1AA",
            "email": "jane@example.com",
            "selectedModel": "unsure",
            "message": "Old combi keeps cutting out",
            "ref": "FB-023",
            "epc": "9921-1234",
            "source": "facebook"
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), 201);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["email"], "jane@example.com");
    assert_eq!(body["selectedModel"], "unsure");
    assert_eq!(body["notes"], "Old combi keeps cutting out");
    assert_eq!(body["ref"], "FB-023");
    assert_eq!(body["epc"], "9921-1234");
    assert_eq!(body["source"], "facebook");
}

#[actix_rt::test]
async fn test_invalid_selected_model_is_rejected() {
    let ctx = setup().await;
    let app = init_app!(ctx);

    let req = test::TestRequest::post()
        .uri("/api/inquiries")
        .set_json(json!({
            "name": "Jane Doe",
            "phone": "07700900000",
            "postcode": "SW1A 1AA",
            "selectedModel": "9000"
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), 400);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["errors"][0]["field"], "selectedModel");
}

#[actix_rt::test]
async fn test_malformed_json_body_returns_400() {
    let ctx = setup().await;
    let app = init_app!(ctx);

    let req = test::TestRequest::post()
        .uri("/api/inquiries")
        .insert_header(("Content-Type", "application/json"))
        .set_payload("{not json")
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), 400);
}

#[actix_rt::test]
async fn test_post_visit_records_page_and_meta() {
    let ctx = setup().await;
    let app = init_app!(ctx);

    let req = test::TestRequest::post()
        .uri("/api/visits")
        .insert_header(("User-Agent", "Mozilla/5.0 (test)"))
        .insert_header(("X-Forwarded-For", "203.0.113.9"))
        .set_json(json!({"page": "v2", "ref": "FB-023"}))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), 201);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["ok"], true);

    assert_eq!(ctx.storage.count_visits().await.unwrap(), 1);
}

#[actix_rt::test]
async fn test_post_visit_without_page_returns_400() {
    let ctx = setup().await;
    let app = init_app!(ctx);

    let req = test::TestRequest::post()
        .uri("/api/visits")
        .set_json(json!({"ref": "FB-023"}))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), 400);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["errors"][0]["field"], "page");
    assert_eq!(ctx.storage.count_visits().await.unwrap(), 0);
}

#[actix_rt::test]
async fn test_health_reports_healthy_storage() {
    let ctx = setup().await;
    let app = init_app!(ctx);

    let req = test::TestRequest::get().uri("/health").to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), 200);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["storage"]["backend"], "sqlite");
    assert_eq!(body["storage"]["inquiries"], 0);
}

#[actix_rt::test]
async fn test_health_liveness() {
    let ctx = setup().await;
    let app = init_app!(ctx);

    let req = test::TestRequest::get().uri("/health/live").to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), 204);
}
