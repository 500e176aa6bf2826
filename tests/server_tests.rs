//! Server tests over a real socket

use reqwest::Client;
use serde_json::{json, Value};

use bookshelf_api::{api, AppState};

/// Serve the app on an ephemeral port and return its base URL
async fn spawn_server() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind");
    let addr = listener.local_addr().unwrap();
    let app = api::create_router(AppState::new());

    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    format!("http://{}", addr)
}

#[tokio::test]
async fn test_create_and_fetch_over_http() {
    let base_url = spawn_server().await;
    let client = Client::new();

    let response = client
        .post(format!("{}/books", base_url))
        .json(&json!({
            "name": "Test Book",
            "year": 2010,
            "author": "John Doe",
            "summary": "Lorem ipsum",
            "publisher": "Dicoding",
            "pageCount": 100,
            "readPage": 25,
            "reading": false
        }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 201);
    let body: Value = response.json().await.expect("Failed to parse response");
    let book_id = body["data"]["bookId"].as_str().expect("No book ID").to_string();

    let response = client
        .get(format!("{}/books/{}", base_url, book_id))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());
    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["data"]["book"]["publisher"], "Dicoding");
    assert_eq!(body["data"]["book"]["finished"], false);
}

#[tokio::test]
async fn test_cors_allows_any_origin() {
    let base_url = spawn_server().await;
    let client = Client::new();

    let response = client
        .get(format!("{}/books", base_url))
        .header("Origin", "http://example.com")
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());
    assert_eq!(
        response
            .headers()
            .get("access-control-allow-origin")
            .and_then(|v| v.to_str().ok()),
        Some("*")
    );
}

#[tokio::test]
async fn test_openapi_document_is_served() {
    let base_url = spawn_server().await;

    let response = Client::new()
        .get(format!("{}/api-docs/openapi.json", base_url))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());
    let body: Value = response.json().await.expect("Failed to parse response");
    assert!(body["paths"]["/books/{id}"].is_object());
}
