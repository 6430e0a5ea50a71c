//! Shared test helpers for integration tests.

#![allow(dead_code)]

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use serde_json::Value;
use tokio::sync::watch;
use tower::ServiceExt;

use nestor_core::config::{AppConfig, AuthConfig};
use nestor_database::Stores;

/// Test application backed by a fresh in-memory store.
pub struct TestApp {
    /// The Axum router for making test requests
    pub router: Router,
    /// Observes the shutdown flag
    pub shutdown: watch::Receiver<bool>,
}

impl TestApp {
    /// Create a new test application
    pub async fn new() -> Self {
        let config = AppConfig {
            auth: AuthConfig {
                hash_memory_kib: 8,
                hash_iterations: 1,
                hash_parallelism: 1,
                ..AuthConfig::default()
            },
            ..AppConfig::default()
        };

        let (tx, rx) = watch::channel(false);
        let state = nestor_api::build_state(config, Stores::memory(), Arc::new(tx))
            .expect("Failed to build state");

        Self {
            router: nestor_api::build_app(state),
            shutdown: rx,
        }
    }

    /// Register a user, asserting success
    pub async fn register(&self, username: &str, password: &str) {
        let response = self
            .request(
                "POST",
                "/users/",
                Some(serde_json::json!({ "username": username, "password": password })),
                None,
            )
            .await;
        assert_eq!(
            response.status,
            StatusCode::OK,
            "Registration failed: {:?}",
            response.body
        );
    }

    /// Login and return the bearer token
    pub async fn login(&self, username: &str, password: &str) -> String {
        let response = self
            .request(
                "POST",
                "/tokens/",
                Some(serde_json::json!({ "username": username, "password": password })),
                None,
            )
            .await;

        assert_eq!(
            response.status,
            StatusCode::OK,
            "Login failed: {:?}",
            response.body
        );

        response
            .body
            .get("token")
            .and_then(|v| v.as_str())
            .expect("No token in login response")
            .to_string()
    }

    /// Register and login in one step
    pub async fn signup(&self, username: &str) -> String {
        self.register(username, "password123").await;
        self.login(username, "password123").await
    }

    /// Create a collection and return its id
    pub async fn create_collection(&self, token: &str, name: &str) -> String {
        let response = self
            .request(
                "POST",
                "/collections/",
                Some(serde_json::json!({ "name": name })),
                Some(token),
            )
            .await;
        assert_eq!(
            response.status,
            StatusCode::OK,
            "Collection creation failed: {:?}",
            response.body
        );
        response.body["collection"]["id"]
            .as_str()
            .expect("No collection id")
            .to_string()
    }

    /// Make an HTTP request to the test app
    pub async fn request(
        &self,
        method: &str,
        path: &str,
        body: Option<Value>,
        token: Option<&str>,
    ) -> TestResponse {
        let body_str = body
            .map(|b| serde_json::to_string(&b).expect("Failed to serialize body"))
            .unwrap_or_default();

        let mut req = Request::builder()
            .method(method)
            .uri(path)
            .header("Content-Type", "application/json");

        if let Some(token) = token {
            req = req.header("Authorization", format!("Bearer {token}"));
        }

        let req = req
            .body(Body::from(body_str))
            .expect("Failed to build request");

        let response = self
            .router
            .clone()
            .oneshot(req)
            .await
            .expect("Failed to send request");

        let status = response.status();
        let body_bytes = axum::body::to_bytes(response.into_body(), 1024 * 1024)
            .await
            .expect("Failed to read body");

        let body: Value = serde_json::from_slice(&body_bytes).unwrap_or(Value::Null);

        TestResponse { status, body }
    }
}

/// Response from a test request
#[derive(Debug)]
pub struct TestResponse {
    /// HTTP status code
    pub status: StatusCode,
    /// Parsed JSON body
    pub body: Value,
}

impl TestResponse {
    /// Assert a failure with the given status and code
    pub fn assert_error(&self, status: StatusCode, code: &str) {
        assert_eq!(self.status, status, "Unexpected body: {:?}", self.body);
        assert_eq!(self.body["success"], Value::Bool(false));
        assert_eq!(self.body["code"], code);
    }
}
