//! Shared test helpers for API integration tests.
//!
//! Each test builds its own app over a fresh in-memory SQLite database
//! with all migrations applied, then drives the real router.
#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use sea_orm::ConnectOptions;
use tower::ServiceExt;

use employee_api::api::{create_router, AppState};
use employee_api::infra::Database;

/// Build the full app router backed by a fresh in-memory SQLite database.
///
/// A single pooled connection keeps the in-memory database alive for the
/// whole test.
pub async fn setup_app() -> Router {
    let mut options = ConnectOptions::new("sqlite::memory:".to_owned());
    options.max_connections(1).sqlx_logging(false);

    let connection = sea_orm::Database::connect(options)
        .await
        .expect("failed to open in-memory database");

    let database = Arc::new(Database::from_connection(connection));
    database
        .run_migrations()
        .await
        .expect("failed to run migrations");

    create_router(AppState::from_config(database))
}

/// Send a request with an optional JSON body and return status + JSON body.
///
/// Non-JSON bodies (e.g. extractor rejections) come back as `Value::Null`.
pub async fn send_json(
    app: &Router,
    method: &str,
    uri: &str,
    body: Option<&serde_json::Value>,
) -> (StatusCode, serde_json::Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => {
            builder = builder.header("content-type", "application/json");
            builder
                .body(Body::from(serde_json::to_vec(json).unwrap()))
                .unwrap()
        }
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let body_bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json = serde_json::from_slice(&body_bytes).unwrap_or(serde_json::Value::Null);

    (status, json)
}

/// Send a POST request with a JSON body.
pub async fn post_json(
    app: &Router,
    uri: &str,
    body: &serde_json::Value,
) -> (StatusCode, serde_json::Value) {
    send_json(app, "POST", uri, Some(body)).await
}

/// Send a PUT request with a JSON body.
pub async fn put_json(
    app: &Router,
    uri: &str,
    body: &serde_json::Value,
) -> (StatusCode, serde_json::Value) {
    send_json(app, "PUT", uri, Some(body)).await
}

/// Send a GET request.
pub async fn get_json(app: &Router, uri: &str) -> (StatusCode, serde_json::Value) {
    send_json(app, "GET", uri, None).await
}

/// Send a DELETE request.
pub async fn delete_json(app: &Router, uri: &str) -> (StatusCode, serde_json::Value) {
    send_json(app, "DELETE", uri, None).await
}

/// A valid employee creation body.
pub fn employee_body() -> serde_json::Value {
    serde_json::json!({
        "firstName": "Jane",
        "lastName": "Doe",
        "email": "jane@x.com",
        "birthDate": "1990-05-10",
        "position": "Engineer",
        "salary": 90000
    })
}

/// A valid address creation body.
pub fn address_body() -> serde_json::Value {
    serde_json::json!({
        "city": "Metropolis",
        "postCode": "12345",
        "street": "Main",
        "number": 42
    })
}

/// Create an employee and return its id.
pub async fn create_employee(app: &Router, email: &str) -> i64 {
    let mut body = employee_body();
    body["email"] = serde_json::Value::String(email.to_string());
    let (status, json) = post_json(app, "/employees", &body).await;
    assert_eq!(status, StatusCode::OK);
    json["id"].as_i64().expect("employee id")
}
