mod common;

use common::{spawn_app, store_settings};
use httpmock::prelude::*;
use portfolio_api::core::DocumentStore;
use portfolio_api::RestDocumentStore;
use serde_json::{json, Value};

fn contact_body() -> Value {
    json!({
        "name": "Jo",
        "email": "jo@x.com",
        "message": "Hello there, this is long enough."
    })
}

#[tokio::test]
async fn test_contact_is_stored_when_store_is_ready() {
    let server = MockServer::start_async().await;
    let insert_mock = server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/portfolio/collections/message/documents")
                .body_contains("jo@x.com")
                .body_contains("created_at");
            then.status(201)
                .header("Content-Type", "application/json")
                .json_body(json!({"inserted_id": "65f1c0ffee"}));
        })
        .await;

    let base = spawn_app(store_settings(&server.base_url())).await;
    let response = reqwest::Client::new()
        .post(format!("{}/api/contact", base))
        .json(&contact_body())
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), 200);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body, json!({"status": "ok", "stored_id": "65f1c0ffee"}));
    insert_mock.assert_async().await;
}

#[tokio::test]
async fn test_store_failure_does_not_fail_contact() {
    let server = MockServer::start_async().await;
    let insert_mock = server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/portfolio/collections/message/documents");
            then.status(503);
        })
        .await;

    let base = spawn_app(store_settings(&server.base_url())).await;
    let response = reqwest::Client::new()
        .post(format!("{}/api/contact", base))
        .json(&contact_body())
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), 200);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body, json!({"status": "ok", "stored_id": null}));
    insert_mock.assert_async().await;
}

#[tokio::test]
async fn test_invalid_contact_never_reaches_store() {
    let server = MockServer::start_async().await;
    let insert_mock = server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/portfolio/collections/message/documents");
            then.status(201).json_body(json!({"inserted_id": "x"}));
        })
        .await;

    let base = spawn_app(store_settings(&server.base_url())).await;
    let response = reqwest::Client::new()
        .post(format!("{}/api/contact", base))
        .json(&json!({"name": "A", "email": "not-an-email", "message": "short"}))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), 422);
    assert_eq!(insert_mock.hits_async().await, 0);
}

#[tokio::test]
async fn test_status_with_working_store() {
    let server = MockServer::start_async().await;
    let names: Vec<String> = (1..=12).map(|i| format!("collection_{}", i)).collect();
    let list_mock = server
        .mock_async(|when, then| {
            when.method(GET).path("/portfolio/collections");
            then.status(200).json_body(json!({ "collections": names }));
        })
        .await;

    let base = spawn_app(store_settings(&server.base_url())).await;
    let status: Value = reqwest::get(format!("{}/test", base))
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    assert_eq!(status["database"], "✅ Connected & Working");
    assert_eq!(status["connection_status"], "Connected");
    assert_eq!(status["database_url"], "✅ Set");
    assert_eq!(status["database_name"], "✅ Set");
    let collections = status["collections"].as_array().unwrap();
    assert_eq!(collections.len(), 10);
    assert_eq!(collections[0], "collection_1");
    list_mock.assert_async().await;
}

#[tokio::test]
async fn test_status_with_failing_store_truncates_error() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/portfolio/collections");
            then.status(500);
        })
        .await;

    let base = spawn_app(store_settings(&server.base_url())).await;
    let status: Value = reqwest::get(format!("{}/test", base))
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    let database = status["database"].as_str().unwrap();
    let prefix = "⚠️  Connected but Error: ";
    assert!(database.starts_with(prefix), "unexpected: {}", database);
    assert!(database[prefix.len()..].chars().count() <= 50);
    assert_eq!(status["connection_status"], "Connected");
    assert_eq!(status["collections"], json!([]));
}

#[tokio::test]
async fn test_rest_store_accepts_id_aliases() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/portfolio/collections/notes/documents");
            then.status(200).json_body(json!({"_id": "abc"}));
        })
        .await;

    let store = RestDocumentStore::new(
        url::Url::parse(&server.base_url()).unwrap(),
        "portfolio".to_string(),
    );
    let id = store
        .create_document("notes", json!({"text": "hi"}))
        .await
        .unwrap();
    assert_eq!(id, "abc");
    assert_eq!(store.name(), "portfolio");
}

#[tokio::test]
async fn test_rest_store_rejects_unexpected_body() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/portfolio/collections");
            then.status(200).json_body(json!({"unexpected": true}));
        })
        .await;

    let store = RestDocumentStore::new(
        url::Url::parse(&server.base_url()).unwrap(),
        "portfolio".to_string(),
    );
    assert!(store.list_collection_names().await.is_err());
}
