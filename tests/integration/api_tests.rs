//! API integration tests

use axum::{
    body::{to_bytes, Body},
    http::{Method, Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use tower::ServiceExt;

use digital_library::{api::create_router, AppState};

/// Helper to build a router over a fresh, empty catalog
fn app() -> Router {
    create_router(AppState::new())
}

/// Helper to send one request and decode the JSON reply
async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => builder
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .expect("Failed to build request"),
        None => builder.body(Body::empty()).expect("Failed to build request"),
    };

    let response = app.clone().oneshot(request).await.expect("Failed to send request");
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("Failed to read body");
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, body)
}

async fn add_book(app: &Router, title: &str, author: &str, id: &str, copies: i64) {
    let (status, _) = send(
        app,
        Method::POST,
        "/api/v1/records",
        Some(json!({
            "title": title,
            "author": author,
            "id": id,
            "total_copies": copies
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
}

#[tokio::test]
async fn test_health_check() {
    let app = app();
    let (status, body) = send(&app, Method::GET, "/api/v1/health", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["records"], 0);
    assert_eq!(body["loans"], 0);
}

#[tokio::test]
async fn test_ready_reports_counts() {
    let app = app();
    add_book(&app, "Dune", "Herbert", "B1", 2).await;
    add_book(&app, "Emma", "Austen", "B2", 1).await;
    send(
        &app,
        Method::POST,
        "/api/v1/loans",
        Some(json!({ "user": "alice", "id": "B1" })),
    )
    .await;

    let (status, body) = send(&app, Method::GET, "/api/v1/ready", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ready");
    assert_eq!(body["records"], 2);
    assert_eq!(body["loans"], 1);
}

#[tokio::test]
async fn test_create_record_rejects_copy_overflow() {
    let app = app();
    let (status, _) = send(
        &app,
        Method::POST,
        "/api/v1/records",
        Some(json!({ "title": "Twin", "author": "A", "id": "T1", "total_copies": i64::MAX })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_empty_id_can_be_added_and_borrowed() {
    let app = app();
    add_book(&app, "Dune", "Herbert", "", 1).await;

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/v1/loans",
        Some(json!({ "user": "alice", "id": "" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "borrowed");
}

#[tokio::test]
async fn test_list_empty_catalog() {
    let app = app();
    let (status, body) = send(&app, Method::GET, "/api/v1/records", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total"], 0);
    assert!(body["records"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_create_record() {
    let app = app();
    let (status, body) = send(
        &app,
        Method::POST,
        "/api/v1/records",
        Some(json!({ "title": "Dune", "author": "Herbert", "id": "B1", "total_copies": 2 })),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["message"], "Book added successfully!");
    assert_eq!(body["record"]["available_copies"], 2);
}

#[tokio::test]
async fn test_create_record_rejects_zero_copies() {
    let app = app();
    let (status, body) = send(
        &app,
        Method::POST,
        "/api/v1/records",
        Some(json!({ "title": "Dune", "author": "Herbert", "id": "B1", "total_copies": 0 })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "BadValue");

    let (_, body) = send(&app, Method::GET, "/api/v1/records", None).await;
    assert_eq!(body["total"], 0);
}

#[tokio::test]
async fn test_list_keeps_insertion_order() {
    let app = app();
    add_book(&app, "Emma", "Austen", "B2", 1).await;
    add_book(&app, "Dune", "Herbert", "B1", 1).await;
    add_book(&app, "Emma", "Austen", "B2", 3).await;

    let (_, body) = send(&app, Method::GET, "/api/v1/records", None).await;
    let copies: Vec<i64> = body["records"]
        .as_array()
        .unwrap()
        .iter()
        .map(|r| r["total_copies"].as_i64().unwrap())
        .collect();
    assert_eq!(body["total"], 3);
    assert_eq!(copies, vec![1, 1, 3]);
}

#[tokio::test]
async fn test_search_by_title_and_author() {
    let app = app();
    add_book(&app, "Dune", "Frank Herbert", "B1", 1).await;
    add_book(&app, "Emma", "Jane Austen", "B2", 1).await;

    let (status, body) = send(&app, Method::GET, "/api/v1/records/search?title=DUNE", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total"], 1);
    assert_eq!(body["records"][0]["id"], "B1");

    let (_, body) = send(&app, Method::GET, "/api/v1/records/search?author=austen", None).await;
    assert_eq!(body["records"][0]["id"], "B2");

    let (_, body) = send(&app, Method::GET, "/api/v1/records/search?title=", None).await;
    assert_eq!(body["total"], 2);

    let (status, body) = send(&app, Method::GET, "/api/v1/records/search?title=zzz", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total"], 0);
}

#[tokio::test]
async fn test_search_requires_one_field() {
    let app = app();
    let (status, _) = send(&app, Method::GET, "/api/v1/records/search", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = send(&app, Method::GET, "/api/v1/records/search?title=a&author=b", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_borrow_and_return_flow() {
    let app = app();
    add_book(&app, "Dune", "Herbert", "B1", 1).await;

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/v1/loans",
        Some(json!({ "user": "alice", "id": "B1" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "borrowed");

    let (_, body) = send(&app, Method::GET, "/api/v1/records", None).await;
    assert_eq!(body["records"][0]["available_copies"], 0);

    let (_, body) = send(&app, Method::GET, "/api/v1/loans", None).await;
    assert_eq!(body, json!([{ "user": "alice", "title": "Dune" }]));

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/v1/loans",
        Some(json!({ "user": "bob", "id": "B1" })),
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["message"], "Book not available.");

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/v1/loans/return",
        Some(json!({ "user": "alice" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "returned");

    let (_, body) = send(&app, Method::GET, "/api/v1/records", None).await;
    assert_eq!(body["records"][0]["available_copies"], 1);

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/v1/loans/return",
        Some(json!({ "user": "alice" })),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "No borrowed book found.");
}

#[tokio::test]
async fn test_borrow_unknown_id() {
    let app = app();
    let (status, body) = send(
        &app,
        Method::POST,
        "/api/v1/loans",
        Some(json!({ "user": "alice", "id": "NOPE" })),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Invalid Book ID.");
    assert_eq!(body["error"], "NoSuchItem");
}

#[tokio::test]
async fn test_borrow_requires_user() {
    let app = app();
    add_book(&app, "Dune", "Herbert", "B1", 1).await;

    let (status, _) = send(
        &app,
        Method::POST,
        "/api/v1/loans",
        Some(json!({ "user": "", "id": "B1" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (_, body) = send(&app, Method::GET, "/api/v1/records", None).await;
    assert_eq!(body["records"][0]["available_copies"], 1);
}
