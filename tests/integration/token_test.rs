//! Integration tests for login and token listing.

mod helpers;

use axum::http::StatusCode;

#[tokio::test]
async fn test_login_success() {
    let app = helpers::TestApp::new().await;
    app.register("alice", "pw1").await;

    let token = app.login("alice", "pw1").await;
    assert_eq!(token.chars().count(), 20);
}

#[tokio::test]
async fn test_login_invalid_password() {
    let app = helpers::TestApp::new().await;
    app.register("alice", "pw1").await;

    let response = app
        .request(
            "POST",
            "/tokens/",
            Some(serde_json::json!({ "username": "alice", "password": "wrong" })),
            None,
        )
        .await;

    response.assert_error(StatusCode::FORBIDDEN, "INVALID_CREDENTIALS");
    assert_eq!(
        response.body["error"],
        "Incorrect username/password combination."
    );
}

#[tokio::test]
async fn test_login_nonexistent_user() {
    let app = helpers::TestApp::new().await;

    let response = app
        .request(
            "POST",
            "/tokens/",
            Some(serde_json::json!({ "username": "nobody", "password": "pw1" })),
            None,
        )
        .await;

    response.assert_error(StatusCode::NOT_FOUND, "USER_NOT_FOUND");
}

#[tokio::test]
async fn test_list_tokens() {
    let app = helpers::TestApp::new().await;
    app.register("alice", "pw1").await;
    let first = app.login("alice", "pw1").await;
    let second = app.login("alice", "pw1").await;
    assert_ne!(first, second);

    let response = app.request("GET", "/tokens/", None, Some(&second)).await;
    assert_eq!(response.status, StatusCode::OK);

    let tokens = response.body["tokens"].as_array().expect("tokens array");
    let strings: Vec<_> = tokens.iter().map(|t| t["token"].as_str().unwrap()).collect();
    assert_eq!(strings, vec![first.as_str(), second.as_str()]);
    assert!(tokens[0].get("timestamp").is_some());
    assert!(tokens[0].get("user_id").is_none());
}

#[tokio::test]
async fn test_token_in_query_parameter() {
    let app = helpers::TestApp::new().await;
    app.register("alice", "pw1").await;
    let token = app.login("alice", "pw1").await;

    // Base alphabet plus symbols that need percent-encoding.
    let encoded: String = token
        .bytes()
        .map(|b| format!("%{b:02X}"))
        .collect();
    let response = app
        .request("GET", &format!("/tokens/?token={encoded}"), None, None)
        .await;
    assert_eq!(response.status, StatusCode::OK, "{:?}", response.body);
}

#[tokio::test]
async fn test_missing_and_unknown_token() {
    let app = helpers::TestApp::new().await;

    let response = app.request("GET", "/tokens/", None, None).await;
    response.assert_error(StatusCode::FORBIDDEN, "MISSING_TOKEN");
    assert_eq!(
        response.body["error"],
        "Failed to authenticate with a token."
    );

    let response = app
        .request("GET", "/tokens/", None, Some("NEVER-ISSUED"))
        .await;
    response.assert_error(StatusCode::NOT_FOUND, "TOKEN_NOT_FOUND");
}
