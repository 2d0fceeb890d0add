//! Shared mock backend for integration tests.

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use api_smoke::SmokeConfig;
use axum::body::Body;
use axum::extract::State;
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post, put};
use axum::{Json, Router};
use serde_json::Value;
use tokio::net::TcpListener;

/// How the mock API answers. `healthy()` is the happy path for every check.
#[derive(Debug, Clone)]
pub struct Behavior {
    pub health_status: u16,
    pub health_delay: Duration,
    pub cors_on_options: bool,
    pub cors_on_get: bool,
    pub security_headers: bool,
    pub rate_limit_headers: bool,
    pub oauth_status: u16,
    pub oauth_delay: Duration,
    pub storage_status: u16,
    pub login_status: u16,
    pub groups_status: u16,
    pub location_status: u16,
    pub socket_status: u16,
}

impl Behavior {
    pub fn healthy() -> Self {
        Self {
            health_status: 200,
            health_delay: Duration::ZERO,
            cors_on_options: true,
            cors_on_get: true,
            security_headers: true,
            rate_limit_headers: true,
            oauth_status: 302,
            oauth_delay: Duration::ZERO,
            storage_status: 403,
            login_status: 400,
            groups_status: 401,
            location_status: 401,
            socket_status: 400,
        }
    }
}

type Shared = State<Arc<Behavior>>;

fn status(code: u16) -> StatusCode {
    StatusCode::from_u16(code).unwrap()
}

async fn health(State(b): Shared) -> Response {
    tokio::time::sleep(b.health_delay).await;

    let mut builder = axum::http::Response::builder()
        .status(b.health_status)
        .header("content-type", "application/json");
    if b.cors_on_get {
        builder = builder.header("access-control-allow-origin", "*");
    }
    if b.security_headers {
        builder = builder
            .header("strict-transport-security", "max-age=31536000")
            .header("x-content-type-options", "nosniff");
    }
    if b.rate_limit_headers {
        builder = builder
            .header("RateLimit-Limit", "100")
            .header("RateLimit-Remaining", "99");
    }
    builder
        .body(Body::from(r#"{"status":"ok","uptime":42.5}"#))
        .unwrap()
}

async fn preflight(State(b): Shared) -> Response {
    let mut builder = axum::http::Response::builder().status(204);
    if b.cors_on_options {
        builder = builder.header("access-control-allow-origin", "*");
    }
    builder.body(Body::empty()).unwrap()
}

async fn socket_io(State(b): Shared) -> impl IntoResponse {
    (
        status(b.socket_status),
        Json(serde_json::json!({"code": 0, "message": "Transport unknown"})),
    )
}

async fn spotify_auth(State(b): Shared) -> Response {
    tokio::time::sleep(b.oauth_delay).await;
    axum::http::Response::builder()
        .status(b.oauth_status)
        .header("location", "https://accounts.spotify.invalid/authorize")
        .body(Body::empty())
        .unwrap()
}

async fn youtube_auth() -> StatusCode {
    StatusCode::UNAUTHORIZED
}

async fn storage(State(b): Shared) -> StatusCode {
    status(b.storage_status)
}

async fn login(State(b): Shared) -> StatusCode {
    status(b.login_status)
}

async fn groups(State(b): Shared) -> Response {
    (status(b.groups_status), Json(serde_json::json!([]))).into_response()
}

async fn location_update(State(b): Shared) -> StatusCode {
    status(b.location_status)
}

async fn plain_text() -> &'static str {
    "OK"
}

async fn me(headers: HeaderMap) -> StatusCode {
    match headers.get("authorization").and_then(|v| v.to_str().ok()) {
        Some("Bearer secret-token") => StatusCode::OK,
        _ => StatusCode::UNAUTHORIZED,
    }
}

async fn profile(Json(body): Json<Value>) -> Json<Value> {
    Json(body)
}

pub fn router(behavior: Behavior) -> Router {
    Router::new()
        .route("/api/health", get(health).options(preflight))
        .route("/socket.io/", get(socket_io))
        .route("/api/music/spotify/auth", get(spotify_auth))
        .route("/api/music/youtube/auth", get(youtube_auth))
        .route("/storage", get(storage))
        .route("/api/auth/login", post(login))
        .route("/api/groups", get(groups))
        .route("/api/location/update", post(location_update))
        .route("/api/plain", get(plain_text))
        .route("/api/me", get(me))
        .route("/api/profile", put(profile))
        .with_state(Arc::new(behavior))
}

/// Serve the mock API on an ephemeral port.
pub async fn spawn_mock_api(behavior: Behavior) -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router(behavior)).await.unwrap();
    });
    addr
}

/// An address with nothing listening on it.
#[allow(dead_code)]
pub async fn closed_addr() -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    addr
}

/// Configuration pointing every target at `addr`.
pub fn config_for(addr: SocketAddr) -> SmokeConfig {
    let mut config = SmokeConfig::default();
    config.target.base_url = format!("http://{}/api", addr);
    config.target.storage_url = format!("http://{}/storage", addr);
    config.target.timeout_secs = 2;
    config.target.system_proxy = false;
    config.output.color = false;
    config
}
