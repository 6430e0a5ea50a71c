//! Integration tests for collections.

mod helpers;

use axum::http::StatusCode;

#[tokio::test]
async fn test_create_and_list_collections() {
    let app = helpers::TestApp::new().await;
    let token = app.signup("alice").await;

    let response = app
        .request(
            "POST",
            "/collections/",
            Some(serde_json::json!({ "name": "first" })),
            Some(&token),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["collection"]["name"], "first");
    assert!(response.body["collection"].get("user_id").is_none());

    app.create_collection(&token, "second").await;

    let response = app.request("GET", "/collections/", None, Some(&token)).await;
    assert_eq!(response.status, StatusCode::OK);
    let names: Vec<_> = response.body["collections"]
        .as_array()
        .expect("collections array")
        .iter()
        .map(|c| c["name"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(names, vec!["first", "second"]);
}

#[tokio::test]
async fn test_duplicate_collection_name() {
    let app = helpers::TestApp::new().await;
    let alice = app.signup("alice").await;
    let bob = app.signup("bob").await;

    app.create_collection(&alice, "first").await;
    // Names are scoped to the owner.
    app.create_collection(&bob, "first").await;

    let response = app
        .request(
            "POST",
            "/collections/",
            Some(serde_json::json!({ "name": "first" })),
            Some(&alice),
        )
        .await;
    response.assert_error(StatusCode::CONFLICT, "DUPLICATE_COLLECTION_NAME");
    assert_eq!(
        response.body["error"],
        "A collection named 'first' already exists."
    );
}

#[tokio::test]
async fn test_collections_are_private() {
    let app = helpers::TestApp::new().await;
    let alice = app.signup("alice").await;
    let bob = app.signup("bob").await;
    app.create_collection(&alice, "first").await;

    let response = app.request("GET", "/collections/", None, Some(&bob)).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["collections"], serde_json::json!([]));
}

#[tokio::test]
async fn test_collection_requires_token_and_name() {
    let app = helpers::TestApp::new().await;
    let token = app.signup("alice").await;

    let response = app
        .request(
            "POST",
            "/collections/",
            Some(serde_json::json!({ "name": "first" })),
            None,
        )
        .await;
    response.assert_error(StatusCode::FORBIDDEN, "MISSING_TOKEN");

    let response = app
        .request(
            "POST",
            "/collections/",
            Some(serde_json::json!({ "name": "" })),
            Some(&token),
        )
        .await;
    response.assert_error(StatusCode::BAD_REQUEST, "INCOMPLETE_INPUT");
}
