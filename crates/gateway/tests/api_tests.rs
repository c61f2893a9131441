//! HTTP tests driving the router against an in-memory SQLite database.

use std::time::Duration;

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use tower::ServiceExt;

use common::{DatabaseConfig, JwtConfig};
use gateway_lib::routes::create_router;
use gateway_lib::state::AppState;
use placement_service_lib::config::PlacementServiceConfig;
use placement_service_lib::infra::Database;
use placement_service_lib::Services;

async fn app() -> Router {
    let config = PlacementServiceConfig {
        database: DatabaseConfig {
            url: "sqlite::memory:".to_string(),
            max_connections: 1,
            min_connections: 1,
        },
        jwt: JwtConfig {
            secret: "gateway-test-secret-key-at-least-32-chars".to_string(),
            expiration_hours: 1,
        },
        transaction_timeout: Duration::from_secs(10),
    };
    let database = Database::connect(&config.database)
        .await
        .expect("in-memory database");
    let services = Services::new(&database, &config);
    create_router(AppState::new(services, database))
}

async fn send(
    app: &Router,
    method: &str,
    uri: &str,
    body: Option<Value>,
    token: Option<&str>,
) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
    }
    let request = match body {
        Some(body) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, json)
}

fn acme_care() -> Value {
    json!({
        "organization_name": "Acme Care",
        "branches": [{ "city": "Springfield" }],
        "login": { "userID": "acme@x.com", "password": "Secret123" }
    })
}

#[tokio::test]
async fn test_health_pings_database() {
    let app = app().await;

    let (status, body) = send(&app, "GET", "/health", None, None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["services"]["database"]["status"], "healthy");
}

#[tokio::test]
async fn test_create_facility_returns_aggregate() {
    let app = app().await;

    let (status, body) = send(&app, "POST", "/facilities", Some(acme_care()), None).await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["success"], true);
    assert_eq!(body["message"], "Facility created successfully");
    assert_eq!(body["data"]["organization_name"], "Acme Care");
    assert_eq!(body["data"]["branches"].as_array().map(Vec::len), Some(1));
    assert_eq!(body["data"]["branches"][0]["city"], "Springfield");
    assert_eq!(body["data"]["account"]["userID"], "acme@x.com");
    assert_eq!(body["data"]["account"]["role"], "Facility");

    let raw = body.to_string();
    assert!(!raw.contains("Secret123"));
    assert!(!raw.contains("argon2"));
}

#[tokio::test]
async fn test_duplicate_login_is_409() {
    let app = app().await;
    send(&app, "POST", "/facilities", Some(acme_care()), None).await;

    let (status, body) = send(&app, "POST", "/facilities", Some(acme_care()), None).await;

    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["success"], false);
    assert_eq!(body["code"], "CONFLICT");
    assert_eq!(body["message"], "userID 'acme@x.com' already exists");
}

#[tokio::test]
async fn test_invalid_payloads_are_400() {
    let app = app().await;

    let (status, body) = send(
        &app,
        "POST",
        "/placement-executives",
        Some(json!({ "first_name": "Dana", "regions": [{ "region": "North" }] })),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "VALIDATION_ERROR");
    assert_eq!(body["message"], "joining_date is required");

    let (status, body) = send(&app, "POST", "/facilities", Some(json!({})), None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "organization_name is required");
}

#[tokio::test]
async fn test_deleted_student_is_404() {
    let app = app().await;
    let (status, created) = send(
        &app,
        "POST",
        "/students",
        Some(json!({
            "first_name": "Sam",
            "addresses": [{ "address_type": "home" }],
            "login": { "userID": "sam.lee", "password": "Secret123" }
        })),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    let id = created["data"]["student_id"].as_i64().expect("student id");

    let (status, _) = send(&app, "DELETE", &format!("/students/{}", id), None, None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, body) = send(&app, "GET", &format!("/students/{}", id), None, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], "NOT_FOUND");

    let (status, _) = send(
        &app,
        "DELETE",
        &format!("/students/{}/permanent", id),
        None,
        None,
    )
    .await;
    assert_eq!(status, StatusCode::NO_CONTENT);
}

#[tokio::test]
async fn test_list_carries_pagination_meta() {
    let app = app().await;
    for name in ["Alpha", "Bravo", "Charlie"] {
        send(
            &app,
            "POST",
            "/facilities",
            Some(json!({ "organization_name": name })),
            None,
        )
        .await;
    }

    let (status, body) = send(&app, "GET", "/facilities?page=2&per_page=2", None, None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"].as_array().map(Vec::len), Some(1));
    assert_eq!(body["data"][0]["organization_name"], "Charlie");
    assert_eq!(body["meta"]["total"], 3);
    assert_eq!(body["meta"]["total_pages"], 2);
}

#[tokio::test]
async fn test_update_changes_root_fields() {
    let app = app().await;
    let (_, created) = send(&app, "POST", "/facilities", Some(acme_care()), None).await;
    let id = created["data"]["facility_id"].as_i64().expect("facility id");

    let (status, body) = send(
        &app,
        "PUT",
        &format!("/facilities/{}", id),
        Some(json!({ "city": "Shelbyville" })),
        None,
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["city"], "Shelbyville");
    assert_eq!(body["data"]["organization_name"], "Acme Care");

    let (status, body) = send(
        &app,
        "PUT",
        &format!("/facilities/{}", id),
        Some(json!({ "email": null })),
        None,
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert!(body["data"]["email"].is_null());
    assert_eq!(body["data"]["city"], "Shelbyville");
}

#[tokio::test]
async fn test_login_and_me() {
    let app = app().await;
    send(&app, "POST", "/facilities", Some(acme_care()), None).await;

    let (status, token) = send(
        &app,
        "POST",
        "/auth/login",
        Some(json!({ "userID": "acme@x.com", "password": "Secret123" })),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(token["token_type"], "Bearer");
    let access_token = token["access_token"].as_str().expect("token");

    let (status, me) = send(&app, "GET", "/auth/me", None, Some(access_token)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(me["data"]["userID"], "acme@x.com");
    assert_eq!(me["data"]["role"], "Facility");
}

#[tokio::test]
async fn test_me_requires_token() {
    let app = app().await;

    let (status, _) = send(&app, "GET", "/auth/me", None, None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let (status, _) = send(&app, "GET", "/auth/me", None, Some("not-a-jwt")).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_wrong_password_is_401() {
    let app = app().await;
    send(&app, "POST", "/facilities", Some(acme_care()), None).await;

    let (status, body) = send(
        &app,
        "POST",
        "/auth/login",
        Some(json!({ "userID": "acme@x.com", "password": "NotTheSecret" })),
        None,
    )
    .await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["code"], "INVALID_CREDENTIALS");
}

#[tokio::test]
async fn test_roles_listed() {
    let app = app().await;

    let (status, body) = send(&app, "GET", "/roles", None, None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"].as_array().map(Vec::len), Some(4));
    assert_eq!(body["data"][1]["name"], "Facility");
}
