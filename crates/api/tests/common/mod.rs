//! Shared helpers for HTTP-level integration tests.
//!
//! Requests go straight to the router via `tower::ServiceExt::oneshot`, no
//! TCP listener involved. Every test gets its own database from
//! `#[sqlx::test]`.

#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Method, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use sqlx::PgPool;

use sportoase_api::auth::jwt::{generate_access_token, JwtConfig};
use sportoase_api::config::ServerConfig;
use sportoase_api::router::build_app_router;
use sportoase_api::services::calendar::NoopCalendar;
use sportoase_api::state::AppState;
use sportoase_core::booking::BookingPolicy;
use sportoase_core::roles::{ROLE_ADMIN, ROLE_TEACHER};
use sportoase_core::types::DbId;

/// Build a test `ServerConfig` with safe defaults and a fixed JWT secret.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        jwt: JwtConfig {
            secret: "integration-test-secret".to_string(),
            access_token_expiry_mins: 60,
        },
        booking: BookingPolicy::default(),
    }
}

/// Build the full application router with all middleware layers, using the
/// given database pool.
///
/// Mirrors production wiring via [`build_app_router`]: calendar sync is the
/// no-op implementation, email is disabled.
pub fn build_test_app(pool: PgPool) -> Router {
    let config = test_config();

    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
        calendar: Arc::new(NoopCalendar),
        mailer: None,
    };

    build_app_router(state, &config)
}

/// Insert a user row and return its id together with a valid access token.
pub async fn seed_user(pool: &PgPool, username: &str, role: &str) -> (DbId, String) {
    let id: DbId = sqlx::query_scalar(
        "INSERT INTO users (username, full_name, role) VALUES ($1, $2, $3) RETURNING id",
    )
    .bind(username)
    .bind(format!("Test {username}"))
    .bind(role)
    .fetch_one(pool)
    .await
    .expect("Failed to seed user");

    let token = generate_access_token(id, username, role, &test_config().jwt)
        .expect("Failed to generate test token");

    (id, token)
}

/// Seed a teacher account.
pub async fn seed_teacher(pool: &PgPool) -> (DbId, String) {
    seed_user(pool, "t.mueller", ROLE_TEACHER).await
}

/// Seed an admin account.
pub async fn seed_admin(pool: &PgPool) -> (DbId, String) {
    seed_user(pool, "admin", ROLE_ADMIN).await
}

/// A Monday two week windows ahead of today. Far enough in the future that
/// every period on it passes the advance-notice guard regardless of when the
/// test suite runs.
pub fn future_monday() -> chrono::NaiveDate {
    sportoase_core::week::school_week_start(chrono::Local::now().date_naive(), 2)
}

/// Send a request and return the raw response.
pub async fn send(
    app: Router,
    method: Method,
    uri: &str,
    token: Option<&str>,
    body: Option<serde_json::Value>,
) -> Response<Body> {
    use tower::ServiceExt;

    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header("Authorization", format!("Bearer {token}"));
    }

    let request = match body {
        Some(json) => builder
            .header("Content-Type", "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    app.oneshot(request).await.unwrap()
}

/// GET without authentication.
pub async fn get(app: Router, uri: &str) -> Response<Body> {
    send(app, Method::GET, uri, None, None).await
}

/// GET with a Bearer token.
pub async fn get_auth(app: Router, uri: &str, token: &str) -> Response<Body> {
    send(app, Method::GET, uri, Some(token), None).await
}

/// POST a JSON body with a Bearer token.
pub async fn post_json(
    app: Router,
    uri: &str,
    token: &str,
    body: serde_json::Value,
) -> Response<Body> {
    send(app, Method::POST, uri, Some(token), Some(body)).await
}

/// POST without a body, with a Bearer token.
pub async fn post_auth(app: Router, uri: &str, token: &str) -> Response<Body> {
    send(app, Method::POST, uri, Some(token), None).await
}

/// PATCH a JSON body with a Bearer token.
pub async fn patch_json(
    app: Router,
    uri: &str,
    token: &str,
    body: serde_json::Value,
) -> Response<Body> {
    send(app, Method::PATCH, uri, Some(token), Some(body)).await
}

/// PUT a JSON body with a Bearer token.
pub async fn put_json(
    app: Router,
    uri: &str,
    token: &str,
    body: serde_json::Value,
) -> Response<Body> {
    send(app, Method::PUT, uri, Some(token), Some(body)).await
}

/// DELETE with a Bearer token.
pub async fn delete_auth(app: Router, uri: &str, token: &str) -> Response<Body> {
    send(app, Method::DELETE, uri, Some(token), None).await
}

/// Collect the response body and parse it as JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("Failed to read response body")
        .to_bytes();
    serde_json::from_slice(&bytes).expect("Response body is not valid JSON")
}
