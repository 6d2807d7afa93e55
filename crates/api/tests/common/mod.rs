#![allow(dead_code)]

use axum::body::Body;
use axum::http::header::{AUTHORIZATION, CONTENT_TYPE};
use axum::http::{Method, Request, StatusCode};
use axum::response::Response;
use http_body_util::BodyExt;
use sqlx::PgPool;
use tower::ServiceExt;

use gorello_api::auth::jwt::JwtConfig;
use gorello_api::config::{LogFormat, ServerConfig};
use gorello_api::router::{build_app_router, App};
use gorello_api::state::AppState;

/// Password used for every account registered through [`register_user`].
pub const TEST_PASSWORD: &str = "correct-horse-battery";

/// Build a test `ServerConfig` with safe defaults.
///
/// Uses `http://localhost:3000` as CORS origin (matching the dev default),
/// a 30-second request timeout, and a fixed JWT secret.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        database_url: String::new(),
        db_max_connections: 5,
        cors_origins: vec!["http://localhost:3000".to_string()],
        request_timeout_secs: 30,
        log_format: LogFormat::Pretty,
        jwt: JwtConfig {
            secret: "integration-test-secret".to_string(),
            expiry_mins: 60,
        },
    }
}

/// Build the full application with all middleware layers, using the given
/// database pool.
pub fn build_test_app(pool: PgPool) -> App {
    build_app_router(AppState::new(pool, test_config()))
}

/// Send a single request through the app.
pub async fn send(app: App, request: Request<Body>) -> Response {
    app.oneshot(request).await.unwrap()
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// Collect a response body as UTF-8 text.
pub async fn body_text(response: Response) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}

fn json_request(
    method: Method,
    uri: &str,
    token: Option<&str>,
    body: Option<serde_json::Value>,
) -> Request<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header(AUTHORIZATION, format!("Bearer {token}"));
    }
    match body {
        Some(body) => builder
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    }
}

pub async fn get(app: App, uri: &str) -> Response {
    send(app, json_request(Method::GET, uri, None, None)).await
}

pub async fn get_auth(app: App, uri: &str, token: &str) -> Response {
    send(app, json_request(Method::GET, uri, Some(token), None)).await
}

pub async fn post_json(app: App, uri: &str, body: serde_json::Value) -> Response {
    send(app, json_request(Method::POST, uri, None, Some(body))).await
}

pub async fn post_json_auth(app: App, uri: &str, token: &str, body: serde_json::Value) -> Response {
    send(app, json_request(Method::POST, uri, Some(token), Some(body))).await
}

pub async fn put_json_auth(app: App, uri: &str, token: &str, body: serde_json::Value) -> Response {
    send(app, json_request(Method::PUT, uri, Some(token), Some(body))).await
}

pub async fn delete_auth(app: App, uri: &str, token: &str) -> Response {
    send(app, json_request(Method::DELETE, uri, Some(token), None)).await
}

/// Register `username` (email `<username>@example.com`) through the API.
pub async fn register_user(pool: &PgPool, username: &str) -> serde_json::Value {
    let body = serde_json::json!({
        "username": username,
        "email": format!("{username}@example.com"),
        "password": TEST_PASSWORD,
    });
    let response = post_json(build_test_app(pool.clone()), "/auth/signup", body).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    body_json(response).await
}

/// Log `username` in through the API and return the bearer token.
pub async fn login(pool: &PgPool, username: &str) -> String {
    let body = serde_json::json!({ "username": username, "password": TEST_PASSWORD });
    let response = post_json(build_test_app(pool.clone()), "/auth/login", body).await;
    assert_eq!(response.status(), StatusCode::OK);
    body_json(response).await["token"]
        .as_str()
        .unwrap()
        .to_string()
}

/// Register and log in, returning the bearer token.
pub async fn register_and_login(pool: &PgPool, username: &str) -> String {
    register_user(pool, username).await;
    login(pool, username).await
}

/// Create a workspace as the token's user and return its id.
pub async fn create_workspace(pool: &PgPool, token: &str, name: &str) -> i64 {
    let body = serde_json::json!({ "name": name, "description": format!("{name} workspace") });
    let response = post_json_auth(build_test_app(pool.clone()), "/workspaces", token, body).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    body_json(response).await["workspace"]["id"].as_i64().unwrap()
}
