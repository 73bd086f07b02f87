//! Common test utilities for driving the router in-process.
//!
//! Each fixture owns a fresh record store, so tests never see each
//! other's creates or deletes.

#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{HeaderMap, Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

use honeyrae_core::{Config, InMemoryRecordStore, RecordStore};
use honeyrae_server::{api::create_router, state::AppState};

/// Test fixture wrapping a router and the store behind it.
pub struct TestFixture {
    /// The Axum router for testing
    pub router: Router,
    /// The store the router reads and writes
    pub store: Arc<InMemoryRecordStore>,
}

/// Response from a test request
#[derive(Debug)]
pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    /// Raw body length, to tell an empty body from JSON `null`
    pub body_len: usize,
    pub body: Value,
}

impl TestFixture {
    /// Create a fixture over the built-in seed data.
    pub fn new() -> Self {
        Self::with_store(InMemoryRecordStore::seeded())
    }

    /// Create a fixture over a custom store.
    pub fn with_store(store: InMemoryRecordStore) -> Self {
        let store = Arc::new(store);
        let state = Arc::new(AppState::new(
            Config::default(),
            Arc::clone(&store) as Arc<dyn RecordStore>,
        ));

        Self {
            router: create_router(state),
            store,
        }
    }

    /// Number of service tickets currently stored.
    pub fn ticket_count(&self) -> usize {
        self.store.counts().unwrap().service_tickets
    }

    /// Send a GET request to the test server.
    pub async fn get(&self, path: &str) -> TestResponse {
        self.request("GET", path, None).await
    }

    /// Send a POST request with JSON body.
    pub async fn post(&self, path: &str, body: Value) -> TestResponse {
        self.request("POST", path, Some(body)).await
    }

    /// Send a DELETE request.
    pub async fn delete(&self, path: &str) -> TestResponse {
        self.request("DELETE", path, None).await
    }

    /// Send a POST request with raw string body (for testing malformed JSON).
    pub async fn post_raw(&self, path: &str, body: &str) -> TestResponse {
        let request = Request::builder()
            .method("POST")
            .uri(path)
            .header("Content-Type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap();
        self.send(request).await
    }

    /// Send a request to the test server.
    async fn request(&self, method: &str, path: &str, body: Option<Value>) -> TestResponse {
        let mut request_builder = Request::builder().method(method).uri(path);

        let body = if let Some(json_body) = body {
            request_builder = request_builder.header("Content-Type", "application/json");
            Body::from(serde_json::to_vec(&json_body).unwrap())
        } else {
            Body::empty()
        };

        self.send(request_builder.body(body).unwrap()).await
    }

    async fn send(&self, request: Request<Body>) -> TestResponse {
        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("Failed to send request");

        let status = response.status();
        let headers = response.headers().clone();
        let body_bytes = response
            .into_body()
            .collect()
            .await
            .expect("Failed to collect body")
            .to_bytes();

        let body: Value = if body_bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&body_bytes).unwrap_or(Value::Null)
        };

        TestResponse {
            status,
            headers,
            body_len: body_bytes.len(),
            body,
        }
    }
}

/// Helper to assert a response has expected status.
macro_rules! assert_status {
    ($response:expr, $status:expr) => {
        assert_eq!(
            $response.status, $status,
            "Expected status {:?}, got {:?}. Body: {}",
            $status,
            $response.status,
            serde_json::to_string_pretty(&$response.body).unwrap_or_default()
        );
    };
}
