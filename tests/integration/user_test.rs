//! Integration tests for registration.

mod helpers;

use axum::http::StatusCode;

#[tokio::test]
async fn test_register_success() {
    let app = helpers::TestApp::new().await;

    let response = app
        .request(
            "POST",
            "/users/",
            Some(serde_json::json!({ "username": "alice", "password": "pw1" })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body, serde_json::json!({ "success": true }));
}

#[tokio::test]
async fn test_register_duplicate() {
    let app = helpers::TestApp::new().await;
    app.register("alice", "pw1").await;

    let response = app
        .request(
            "POST",
            "/users/",
            Some(serde_json::json!({ "username": "alice", "password": "other" })),
            None,
        )
        .await;

    response.assert_error(StatusCode::CONFLICT, "DUPLICATE_USERNAME");
    assert_eq!(
        response.body["error"],
        "The username 'alice' is already in use."
    );
}

#[tokio::test]
async fn test_register_is_case_sensitive() {
    let app = helpers::TestApp::new().await;
    app.register("alice", "pw1").await;
    app.register("Alice", "pw1").await;
}

#[tokio::test]
async fn test_register_incomplete() {
    let app = helpers::TestApp::new().await;

    for body in [
        serde_json::json!({ "username": "alice", "password": "" }),
        serde_json::json!({ "username": "", "password": "pw1" }),
        serde_json::json!({ "username": "alice" }),
        serde_json::json!({}),
    ] {
        let response = app.request("POST", "/users/", Some(body), None).await;
        response.assert_error(StatusCode::BAD_REQUEST, "INCOMPLETE_INPUT");
        assert_eq!(response.body["error"], "Incomplete form submission.");
    }
}

#[tokio::test]
async fn test_health() {
    let app = helpers::TestApp::new().await;
    let response = app.request("GET", "/health", None, None).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["status"], "ok");
    assert_eq!(response.body["database"], "memory");
    assert!(!*app.shutdown.borrow());
}
