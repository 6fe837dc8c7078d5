//! API integration tests
//!
//! These run against a live server (e.g. `docker compose up`).

use reqwest::Client;
use serde_json::{json, Value};

const BASE_URL: &str = "http://localhost:8080";

/// Helper to create a book and return its id
async fn create_book(client: &Client, body: Value) -> i64 {
    let response = client
        .post(format!("{}/books", BASE_URL))
        .json(&body)
        .send()
        .await
        .expect("Failed to send create request");

    assert_eq!(response.status(), 201);

    let body: Value = response.json().await.expect("Failed to parse response");
    body["id"].as_i64().expect("No book ID in response")
}

#[tokio::test]
#[ignore] // Run with: cargo test -- --ignored
async fn test_health_check() {
    let client = Client::new();

    let response = client
        .get(format!("{}/health", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["status"], "healthy");
}

#[tokio::test]
#[ignore]
async fn test_readiness_check() {
    let client = Client::new();

    let response = client
        .get(format!("{}/ready", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["status"], "ready");
}

#[tokio::test]
#[ignore]
async fn test_create_then_get_returns_equal_record() {
    let client = Client::new();

    let id = create_book(
        &client,
        json!({
            "title": "The Left Hand of Darkness",
            "author": "Ursula K. Le Guin",
            "published_year": 1969,
            "genre": "Science Fiction",
            "description": "An envoy on the planet Gethen"
        }),
    )
    .await;

    let response = client
        .get(format!("{}/books/{}", BASE_URL, id))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["id"].as_i64(), Some(id));
    assert_eq!(body["title"], "The Left Hand of Darkness");
    assert_eq!(body["author"], "Ursula K. Le Guin");
    assert_eq!(body["published_year"], 1969);
    assert_eq!(body["genre"], "Science Fiction");
    assert_eq!(body["description"], "An envoy on the planet Gethen");

    // Cleanup
    let _ = client
        .delete(format!("{}/books/{}", BASE_URL, id))
        .send()
        .await;
}

#[tokio::test]
#[ignore]
async fn test_create_get_delete_scenario() {
    let client = Client::new();

    let id = create_book(&client, json!({"title": "Dune", "author": "Herbert"})).await;

    // GET returns the same record
    let response = client
        .get(format!("{}/books/{}", BASE_URL, id))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["id"].as_i64(), Some(id));
    assert_eq!(body["title"], "Dune");
    assert_eq!(body["author"], "Herbert");

    // DELETE answers with a confirmation message
    let response = client
        .delete(format!("{}/books/{}", BASE_URL, id))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 200);

    let body: Value = response.json().await.expect("Failed to parse response");
    assert!(body["message"].is_string());

    // The record is gone
    let response = client
        .get(format!("{}/books/{}", BASE_URL, id))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 404);
}

#[tokio::test]
#[ignore]
async fn test_update_replaces_all_fields() {
    let client = Client::new();

    let id = create_book(
        &client,
        json!({
            "title": "Draft Title",
            "author": "Draft Author",
            "published_year": 2000,
            "genre": "Draft"
        }),
    )
    .await;

    let response = client
        .put(format!("{}/books/{}", BASE_URL, id))
        .json(&json!({
            "title": "Final Title",
            "author": "Final Author"
        }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 200);

    // GET reflects exactly the replacement fields; the ones omitted from the
    // replacement payload are cleared
    let response = client
        .get(format!("{}/books/{}", BASE_URL, id))
        .send()
        .await
        .expect("Failed to send request");

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["title"], "Final Title");
    assert_eq!(body["author"], "Final Author");
    assert!(body["published_year"].is_null());
    assert!(body["genre"].is_null());

    // Cleanup
    let _ = client
        .delete(format!("{}/books/{}", BASE_URL, id))
        .send()
        .await;
}

#[tokio::test]
#[ignore]
async fn test_update_missing_book_returns_404() {
    let client = Client::new();

    let response = client
        .put(format!("{}/books/999999999", BASE_URL))
        .json(&json!({"title": "Ghost", "author": "Nobody"}))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 404);
}

#[tokio::test]
#[ignore]
async fn test_delete_missing_book_returns_404() {
    let client = Client::new();

    let response = client
        .delete(format!("{}/books/999999999", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 404);
}

#[tokio::test]
#[ignore]
async fn test_create_missing_title_is_rejected() {
    let client = Client::new();

    let count_before = list_count(&client).await;

    let response = client
        .post(format!("{}/books", BASE_URL))
        .json(&json!({"author": "Herbert"}))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 422);

    // No row was stored
    assert_eq!(list_count(&client).await, count_before);
}

#[tokio::test]
#[ignore]
async fn test_create_empty_title_is_rejected() {
    let client = Client::new();

    let response = client
        .post(format!("{}/books", BASE_URL))
        .json(&json!({"title": "  ", "author": "Herbert"}))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 422);

    let body: Value = response.json().await.expect("Failed to parse response");
    assert!(body["message"]
        .as_str()
        .expect("No message in response")
        .contains("title"));
}

#[tokio::test]
#[ignore]
async fn test_list_reflects_creates_and_deletes() {
    let client = Client::new();

    let count_before = list_count(&client).await;

    let mut ids = Vec::new();
    for i in 0..3 {
        let id = create_book(
            &client,
            json!({"title": format!("List Test {}", i), "author": "Tester"}),
        )
        .await;
        ids.push(id);
    }

    assert_eq!(list_count(&client).await, count_before + 3);

    let response = client
        .delete(format!("{}/books/{}", BASE_URL, ids[0]))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 200);

    assert_eq!(list_count(&client).await, count_before + 2);

    // Cleanup
    for id in &ids[1..] {
        let _ = client
            .delete(format!("{}/books/{}", BASE_URL, id))
            .send()
            .await;
    }
}

async fn list_count(client: &Client) -> usize {
    let response = client
        .get(format!("{}/books", BASE_URL))
        .send()
        .await
        .expect("Failed to send list request");

    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    body.as_array().expect("List response is not an array").len()
}
