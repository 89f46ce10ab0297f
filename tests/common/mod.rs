#![allow(dead_code)]

use axum::body::Body;
use axum::http::{Method, Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tokio::sync::OnceCell;
use tower::ServiceExt;

use notification_contract::config::AppConfig;
use notification_contract::AppState;

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

pub const TEST_BATCH_MAX_ITEMS: usize = 3;
pub const TEST_BODY_LIMIT_BYTES: usize = 4096;

// ---------------------------------------------------------------------------
// TestApp — shared, lazily initialized once per test binary
// ---------------------------------------------------------------------------

pub struct TestApp {
    router: Router,
    pub state: AppState,
}

pub struct TestResponse {
    pub status: StatusCode,
    body_bytes: bytes::Bytes,
}

impl TestResponse {
    pub fn json(&self) -> Value {
        serde_json::from_slice(&self.body_bytes).unwrap_or(Value::Null)
    }

    pub fn error_message(&self) -> String {
        self.json()["error"].as_str().unwrap_or("").to_string()
    }
}

static TEST_APP: OnceCell<TestApp> = OnceCell::const_new();

/// Get (or lazily create) the shared TestApp instance.
pub async fn app() -> &'static TestApp {
    TEST_APP
        .get_or_init(|| async { TestApp::setup() })
        .await
}

impl TestApp {
    fn setup() -> Self {
        // ---- Build AppState via AppConfig (same code path as production) ----
        std::env::set_var("HTTP_ADDR", "127.0.0.1:0");
        std::env::set_var("BATCH_MAX_ITEMS", TEST_BATCH_MAX_ITEMS.to_string());
        std::env::set_var("BODY_LIMIT_BYTES", TEST_BODY_LIMIT_BYTES.to_string());

        let config = AppConfig::from_env().expect("failed to build AppConfig");

        let state = AppState {
            body_limit_bytes: config.body_limit_bytes,
            batch_max_items: config.batch_max_items,
        };

        let router = notification_contract::http::router(state.clone());

        TestApp { router, state }
    }

    // ------------------------------------------------------------------
    // Low-level request helper
    // ------------------------------------------------------------------
    pub async fn request(&self, method: Method, path: &str, body: Option<String>) -> TestResponse {
        let builder = Request::builder()
            .method(method)
            .uri(path)
            .header("host", "localhost");

        let request = if let Some(body) = body {
            builder
                .header("content-type", "application/json")
                .body(Body::from(body))
                .unwrap()
        } else {
            builder.body(Body::empty()).unwrap()
        };

        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("oneshot failed");

        let status = response.status();
        let body_bytes = response
            .into_body()
            .collect()
            .await
            .expect("failed to collect body")
            .to_bytes();

        TestResponse { status, body_bytes }
    }

    // ------------------------------------------------------------------
    // Convenience HTTP helpers
    // ------------------------------------------------------------------
    pub async fn get(&self, path: &str) -> TestResponse {
        self.request(Method::GET, path, None).await
    }

    pub async fn post_json(&self, path: &str, body: Value) -> TestResponse {
        self.request(Method::POST, path, Some(serde_json::to_string(&body).unwrap()))
            .await
    }

    /// POST a raw body, for payloads that are not valid JSON.
    pub async fn post_raw(&self, path: &str, body: impl Into<String>) -> TestResponse {
        self.request(Method::POST, path, Some(body.into())).await
    }
}

// ---------------------------------------------------------------------------
// Fixtures
// ---------------------------------------------------------------------------

pub fn minimal_notification() -> Value {
    json!({
        "id": "n1",
        "title": "Reminder",
        "description": "Service due",
        "timestamp": "2024-01-01T00:00:00Z",
        "type": "service",
        "read": false
    })
}

pub fn maximal_notification() -> Value {
    let mut value = minimal_notification();
    value["vehicle"] = json!({
        "make": "Toyota",
        "model": "Corolla",
        "plateNumber": "ABC123",
        "garage": "Main St"
    });
    value["garage"] = json!({
        "name": "Main St Garage",
        "address": "123 Main St"
    });
    value
}
