//! API integration tests
//!
//! Each test starts its own server on an ephemeral port with a freshly seeded
//! inventory and talks to it with reqwest.

use book_inventory::{api, AppConfig, AppState};
use reqwest::{Client, StatusCode};
use serde_json::{json, Value};

async fn start_server_with(config: AppConfig) -> String {
    let app = api::create_router(AppState::from_config(&config));
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}")
}

async fn start_server() -> String {
    start_server_with(AppConfig::default()).await
}

async fn list_ids(client: &Client, base: &str) -> Vec<String> {
    let body: Value = client
        .get(format!("{base}/books"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    body.as_array()
        .unwrap()
        .iter()
        .map(|b| b["id"].as_str().unwrap().to_string())
        .collect()
}

#[tokio::test]
async fn test_health_check() {
    let base = start_server().await;
    let response = Client::new().get(format!("{base}/health")).send().await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["books"], 3);
}

#[tokio::test]
async fn test_list_seed_books() {
    let base = start_server().await;
    let response = Client::new().get(format!("{base}/books")).send().await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = response.json().await.unwrap();
    assert_eq!(
        body,
        json!([
            {"id": "1", "title": "In Search of Lost Time", "author": "Marcel Proust", "quantity": 2},
            {"id": "2", "title": "The Great Gatsby", "author": "F. Scott Fitzgerald", "quantity": 5},
            {"id": "3", "title": "War and Peace", "author": "Leo Tolstoy", "quantity": 6}
        ])
    );
}

#[tokio::test]
async fn test_empty_inventory_without_seed() {
    let mut config = AppConfig::default();
    config.inventory.seed_on_startup = false;
    let base = start_server_with(config).await;

    let ids = list_ids(&Client::new(), &base).await;
    assert!(ids.is_empty());
}

#[tokio::test]
async fn test_get_book() {
    let base = start_server().await;
    let response = Client::new().get(format!("{base}/books/3")).send().await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["title"], "War and Peace");
}

#[tokio::test]
async fn test_get_missing_book() {
    let base = start_server().await;
    let response = Client::new().get(format!("{base}/books/99")).send().await.unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["message"], "Book not found");
    assert_eq!(body["error"], "NoSuchBook");
}

#[tokio::test]
async fn test_checkout_until_unavailable() {
    let base = start_server().await;
    let client = Client::new();
    let url = format!("{base}/books/1/checkout");

    let response = client.post(&url).send().await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["quantity"], 1);

    let response = client.post(&url).send().await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["quantity"], 0);

    let response = client.post(&url).send().await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["message"], "Book not available");

    let response = client.get(format!("{base}/books/1")).send().await.unwrap();
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["quantity"], 0);
}

#[tokio::test]
async fn test_checkout_missing_book() {
    let base = start_server().await;
    let response = Client::new()
        .post(format!("{base}/books/99/checkout"))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["message"], "Book not found");
}

#[tokio::test]
async fn test_delete_book_twice() {
    let base = start_server().await;
    let client = Client::new();

    let response = client.delete(format!("{base}/books/2")).send().await.unwrap();
    assert_eq!(response.status(), StatusCode::NO_CONTENT);
    assert!(response.bytes().await.unwrap().is_empty());

    let response = client.delete(format!("{base}/books/2")).send().await.unwrap();
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    assert_eq!(list_ids(&client, &base).await, vec!["1", "3"]);
}

#[tokio::test]
async fn test_create_book_appends() {
    let base = start_server().await;
    let client = Client::new();
    let book = json!({"id": "4", "title": "X", "author": "Y", "quantity": 1});

    let response = client
        .post(format!("{base}/books"))
        .json(&book)
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body, book);

    assert_eq!(list_ids(&client, &base).await, vec!["1", "2", "3", "4"]);
}

#[tokio::test]
async fn test_create_duplicate_id_keeps_both() {
    let base = start_server().await;
    let client = Client::new();

    let response = client
        .post(format!("{base}/books"))
        .json(&json!({"id": "1", "title": "Duplicate", "author": "Z", "quantity": 9}))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    assert_eq!(list_ids(&client, &base).await, vec!["1", "2", "3", "1"]);

    let body: Value = client
        .get(format!("{base}/books/1"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(body["title"], "In Search of Lost Time");
}

#[tokio::test]
async fn test_create_duplicate_id_rejected_when_configured() {
    let mut config = AppConfig::default();
    config.inventory.reject_duplicate_ids = true;
    let base = start_server_with(config).await;
    let client = Client::new();

    let response = client
        .post(format!("{base}/books"))
        .json(&json!({"id": "1", "title": "Duplicate", "author": "Z", "quantity": 9}))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CONFLICT);
    assert_eq!(list_ids(&client, &base).await.len(), 3);
}

#[tokio::test]
async fn test_create_malformed_body() {
    let base = start_server().await;
    let client = Client::new();

    let response = client
        .post(format!("{base}/books"))
        .header("content-type", "application/json")
        .body("{not json")
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["error"], "BadValue");

    let response = client
        .post(format!("{base}/books"))
        .json(&json!({"id": "5", "quantity": "many"}))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    assert_eq!(list_ids(&client, &base).await.len(), 3);
}

#[tokio::test]
async fn test_create_without_content_type() {
    let base = start_server().await;
    let client = Client::new();

    let response = client
        .post(format!("{base}/books"))
        .body(r#"{"id":"5","title":"Ulysses","author":"James Joyce","quantity":2}"#)
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["title"], "Ulysses");

    assert_eq!(list_ids(&client, &base).await, vec!["1", "2", "3", "5"]);
}

#[tokio::test]
async fn test_update_without_content_type() {
    let base = start_server().await;
    let client = Client::new();

    let response = client
        .put(format!("{base}/books/3"))
        .body(r#"{"quantity":1}"#)
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["quantity"], 1);
    assert_eq!(body["title"], "War and Peace");
}

#[tokio::test]
async fn test_null_bodies() {
    let base = start_server().await;
    let client = Client::new();

    let response = client
        .put(format!("{base}/books/2"))
        .header("content-type", "application/json")
        .body("null")
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = response.json().await.unwrap();
    assert_eq!(
        body,
        json!({"id": "2", "title": "The Great Gatsby", "author": "F. Scott Fitzgerald", "quantity": 5})
    );

    let response = client
        .post(format!("{base}/books"))
        .header("content-type", "application/json")
        .body("null")
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body, json!({"id": "", "title": "", "author": "", "quantity": 0}));
    assert_eq!(list_ids(&client, &base).await.len(), 4);
}

#[tokio::test]
async fn test_partial_update() {
    let base = start_server().await;
    let client = Client::new();

    let response = client
        .put(format!("{base}/books/2"))
        .json(&json!({"quantity": 12}))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = response.json().await.unwrap();
    assert_eq!(
        body,
        json!({"id": "2", "title": "The Great Gatsby", "author": "F. Scott Fitzgerald", "quantity": 12})
    );

    let stored: Value = client
        .get(format!("{base}/books/2"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(stored, body);
}

#[tokio::test]
async fn test_update_missing_book() {
    let base = start_server().await;
    let response = Client::new()
        .put(format!("{base}/books/99"))
        .json(&json!({"title": "Nope"}))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["message"], "Book not found");
}

#[tokio::test]
async fn test_update_malformed_body() {
    let base = start_server().await;
    let response = Client::new()
        .put(format!("{base}/books/1"))
        .header("content-type", "application/json")
        .body("[1, 2")
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_update_cannot_change_id() {
    let base = start_server().await;
    let client = Client::new();

    let response = client
        .put(format!("{base}/books/1"))
        .json(&json!({"id": "100", "title": "Renamed"}))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    assert_eq!(list_ids(&client, &base).await, vec!["1", "2", "3"]);
    let body: Value = client
        .get(format!("{base}/books/1"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(body["title"], "In Search of Lost Time");
}

#[tokio::test]
async fn test_openapi_document() {
    let base = start_server().await;
    let response = Client::new()
        .get(format!("{base}/api-docs/openapi.json"))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = response.json().await.unwrap();
    assert!(body["paths"]["/books/{id}/checkout"].is_object());
}
