#![allow(dead_code)]

use std::path::PathBuf;
use std::sync::{Arc, OnceLock};
use std::time::Duration;

use argon2::password_hash::{rand_core::OsRng, PasswordHasher, SaltString};
use argon2::{Algorithm, Argon2, Params, Version};
use axum::body::Body;
use axum::http::{header, Method, Request, Response, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use kaylari_api::build_app;
use kaylari_api::config::AppConfig;
use kaylari_api::state::AppState;
use kaylari_core::auth::issue_token;
use kaylari_core::storage::{KeyValueStorage, MemoryStorage};
use kaylari_core::{ContentStore, SequentialIdGenerator, DEFAULT_STORAGE_KEY};
use serde_json::Value;
use tower::ServiceExt;

pub const ADMIN_PASSWORD: &str = "kaylari2024";
pub const JWT_SECRET: &str = "test-secret";

/// Low-cost Argon2 hash of [`ADMIN_PASSWORD`]; verification reads the cost
/// parameters from the hash itself, so tests stay fast.
fn admin_password_hash() -> String {
    static HASH: OnceLock<String> = OnceLock::new();
    HASH.get_or_init(|| {
        let params = Params::new(8, 1, 1, None).unwrap();
        let salt = SaltString::generate(&mut OsRng);
        Argon2::new(Algorithm::Argon2id, Version::V0x13, params)
            .hash_password(ADMIN_PASSWORD.as_bytes(), &salt)
            .unwrap()
            .to_string()
    })
    .clone()
}

pub fn test_config() -> AppConfig {
    AppConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        content_dir: PathBuf::from("unused"),
        storage_key: DEFAULT_STORAGE_KEY.to_string(),
        admin_password_hash: admin_password_hash(),
        jwt_secret: JWT_SECRET.to_string(),
        session_ttl_secs: 3600,
        event_bus_capacity: 64,
        max_body_bytes: 64 * 1024,
    }
}

pub struct TestApp {
    pub router: Router,
    pub state: AppState,
    pub storage: MemoryStorage,
}

/// Build the full application over in-memory storage seeded with defaults.
pub fn build_test_app() -> TestApp {
    build_test_app_over(MemoryStorage::new())
}

pub fn build_test_app_over(storage: MemoryStorage) -> TestApp {
    let (router, state) = build_router_over(Arc::new(storage.clone()));
    TestApp {
        router,
        state,
        storage,
    }
}

/// Build the application over any storage backend.
pub fn build_router_over(storage: Arc<dyn KeyValueStorage>) -> (Router, AppState) {
    let store = ContentStore::open(storage, DEFAULT_STORAGE_KEY)
        .unwrap()
        .with_id_generator(Arc::new(SequentialIdGenerator::new("t-")));
    let state = AppState::new(store, test_config());
    (build_app(state.clone()), state)
}

pub fn admin_token() -> String {
    issue_token(JWT_SECRET, Duration::from_secs(3600)).unwrap()
}

pub async fn send(app: &Router, req: Request<Body>) -> Response<Body> {
    app.clone().oneshot(req).await.unwrap()
}

pub async fn get(app: &Router, uri: &str) -> Response<Body> {
    let req = Request::builder().uri(uri).body(Body::empty()).unwrap();
    send(app, req).await
}

pub async fn json_request(
    app: &Router,
    method: Method,
    uri: &str,
    body: Value,
    token: Option<&str>,
) -> Response<Body> {
    raw_json_request(app, method, uri, body.to_string(), token).await
}

/// Send `body` as-is with a JSON content type, for malformed payloads.
pub async fn raw_json_request(
    app: &Router,
    method: Method,
    uri: &str,
    body: impl Into<String>,
    token: Option<&str>,
) -> Response<Body> {
    let mut builder = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json");
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
    }
    send(app, builder.body(Body::from(body.into())).unwrap()).await
}

pub async fn delete(app: &Router, uri: &str, token: Option<&str>) -> Response<Body> {
    let mut builder = Request::builder().method(Method::DELETE).uri(uri);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
    }
    send(app, builder.body(Body::empty()).unwrap()).await
}

pub async fn body_json(response: Response<Body>) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

pub fn assert_status(response: &Response<Body>, expected: StatusCode) {
    assert_eq!(response.status(), expected, "unexpected status");
}
