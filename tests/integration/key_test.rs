//! Integration tests for keys, including the full register-to-key flow.

mod helpers;

use axum::http::StatusCode;

fn key_body(collection: &str, name: &str, value: &str) -> serde_json::Value {
    serde_json::json!({ "collection": collection, "name": name, "key": value })
}

#[tokio::test]
async fn test_full_flow() {
    let app = helpers::TestApp::new().await;

    app.register("alice", "pw1").await;
    let token = app.login("alice", "pw1").await;
    let first = app.create_collection(&token, "first").await;
    let second = app.create_collection(&token, "second").await;

    let response = app
        .request(
            "POST",
            "/keys/",
            Some(key_body(&first, "api_key", "s3cr3t")),
            Some(&token),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK, "{:?}", response.body);
    assert_eq!(response.body["key"]["name"], "api_key");
    assert_eq!(response.body["key"]["key"], "s3cr3t");
    assert_eq!(response.body["key"]["collection_id"], first.as_str());
    assert!(response.body["key"].get("timestamp").is_some());

    // Key names are unique across all of a user's collections.
    let response = app
        .request(
            "POST",
            "/keys/",
            Some(key_body(&second, "api_key", "other")),
            Some(&token),
        )
        .await;
    response.assert_error(StatusCode::CONFLICT, "DUPLICATE_KEY_NAME");
    assert_eq!(response.body["error"], "A key named 'api_key' already exists.");

    let response = app.request("GET", "/keys/", None, Some(&token)).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["keys"].as_array().map(Vec::len), Some(1));

    let response = app
        .request("GET", &format!("/keys/?collection={second}"), None, Some(&token))
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["keys"], serde_json::json!([]));
}

#[tokio::test]
async fn test_foreign_collection_forbidden() {
    let app = helpers::TestApp::new().await;
    let alice = app.signup("alice").await;
    let bob = app.signup("bob").await;
    let bobs = app.create_collection(&bob, "bobs").await;

    let response = app
        .request(
            "POST",
            "/keys/",
            Some(key_body(&bobs, "stolen", "v")),
            Some(&alice),
        )
        .await;
    response.assert_error(StatusCode::FORBIDDEN, "FORBIDDEN");
    assert_eq!(
        response.body["error"],
        "You aren't authorized to access this collection."
    );

    let response = app
        .request("GET", &format!("/keys/?collection={bobs}"), None, Some(&alice))
        .await;
    response.assert_error(StatusCode::FORBIDDEN, "FORBIDDEN");
}

#[tokio::test]
async fn test_unknown_collection() {
    let app = helpers::TestApp::new().await;
    let token = app.signup("alice").await;

    for collection in ["not-a-uuid", "00000000-0000-0000-0000-000000000000"] {
        let response = app
            .request(
                "POST",
                "/keys/",
                Some(key_body(collection, "k", "v")),
                Some(&token),
            )
            .await;
        response.assert_error(StatusCode::NOT_FOUND, "COLLECTION_NOT_FOUND");
        assert_eq!(response.body["error"], "Collection not found.");
    }
}

#[tokio::test]
async fn test_incomplete_key() {
    let app = helpers::TestApp::new().await;
    let token = app.signup("alice").await;
    let first = app.create_collection(&token, "first").await;

    for body in [
        key_body(&first, "", "v"),
        key_body(&first, "k", ""),
        key_body("", "k", "v"),
        serde_json::json!({ "collection": first }),
    ] {
        let response = app.request("POST", "/keys/", Some(body), Some(&token)).await;
        response.assert_error(StatusCode::BAD_REQUEST, "INCOMPLETE_INPUT");
    }
}
