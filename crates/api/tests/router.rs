use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt;

use api::{AppState, routes::router};
use storage::repository::Storage;
use tracker_core::time::fixed_clock;

fn test_router() -> Router {
    router(AppState::new(fixed_clock(), Storage::in_memory()))
}

async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(value) => {
            builder = builder.header(header::CONTENT_TYPE, "application/json");
            Body::from(value.to_string())
        }
        None => Body::empty(),
    };

    let response = app
        .clone()
        .oneshot(builder.body(body).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, value)
}

#[tokio::test]
async fn health_answers_ok() {
    let app = test_router();
    let (status, body) = send(&app, "GET", "/api/v1/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn creates_and_lists_topics() {
    let app = test_router();

    let (status, created) = send(
        &app,
        "POST",
        "/api/v1/topics",
        Some(json!({"name": "Math", "type": "study"})),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["name"], "Math");
    assert_eq!(created["type"], "study");
    assert_eq!(created["id"], "1");

    let (status, listed) = send(&app, "GET", "/api/v1/topics", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(listed.as_array().unwrap().len(), 1);
    assert_eq!(listed[0]["name"], "Math");
}

#[tokio::test]
async fn rejects_blank_topic_name() {
    let app = test_router();

    let (status, body) = send(
        &app,
        "POST",
        "/api/v1/topics",
        Some(json!({"name": "   ", "type": "study"})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn records_sessions_and_reports_progress() {
    let app = test_router();

    let (_, a) = send(
        &app,
        "POST",
        "/api/v1/topics",
        Some(json!({"name": "A", "type": "study"})),
    )
    .await;
    let (_, b) = send(
        &app,
        "POST",
        "/api/v1/topics",
        Some(json!({"name": "B", "type": "work"})),
    )
    .await;

    let (status, session) = send(
        &app,
        "POST",
        "/api/v1/sessions",
        Some(json!({"topicId": a["id"], "durationSeconds": 120})),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(session["topicId"], a["id"]);
    assert_eq!(session["durationSeconds"], 120);
    assert!(session["completedAt"].is_string());

    let (status, _) = send(
        &app,
        "POST",
        "/api/v1/sessions",
        Some(json!({"topicId": b["id"], "durationSeconds": 600})),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, progress) = send(&app, "GET", "/api/v1/progress", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        progress,
        json!([
            {"topicName": "B", "totalMinutes": 10},
            {"topicName": "A", "totalMinutes": 2}
        ])
    );
}

#[tokio::test]
async fn empty_store_reports_empty_progress() {
    let app = test_router();
    let (status, progress) = send(&app, "GET", "/api/v1/progress", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(progress, json!([]));
}

#[tokio::test]
async fn rejects_session_for_unknown_topic() {
    let app = test_router();

    let (status, body) = send(
        &app,
        "POST",
        "/api/v1/sessions",
        Some(json!({"topicId": "9999", "durationSeconds": 600})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "topic not found");

    let (_, progress) = send(&app, "GET", "/api/v1/progress", None).await;
    assert_eq!(progress, json!([]));
}

#[tokio::test]
async fn rejects_malformed_topic_id() {
    let app = test_router();

    let (status, body) = send(
        &app,
        "POST",
        "/api/v1/sessions",
        Some(json!({"topicId": "not-an-id", "durationSeconds": 600})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "malformed topic id");
}

#[tokio::test]
async fn rejects_zero_duration_session() {
    let app = test_router();

    let (_, topic) = send(
        &app,
        "POST",
        "/api/v1/topics",
        Some(json!({"name": "Math", "type": "study"})),
    )
    .await;

    let (status, body) = send(
        &app,
        "POST",
        "/api/v1/sessions",
        Some(json!({"topicId": topic["id"], "durationSeconds": 0})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "duration must be positive");
}

#[tokio::test]
async fn cleanup_resets_both_collections() {
    let app = test_router();

    let (_, topic) = send(
        &app,
        "POST",
        "/api/v1/topics",
        Some(json!({"name": "Math", "type": "study"})),
    )
    .await;
    send(
        &app,
        "POST",
        "/api/v1/sessions",
        Some(json!({"topicId": topic["id"], "durationSeconds": 300})),
    )
    .await;

    let (status, _) = send(&app, "POST", "/api/v1/cleanup", None).await;
    assert_eq!(status, StatusCode::OK);

    let (_, topics) = send(&app, "GET", "/api/v1/topics", None).await;
    let (_, progress) = send(&app, "GET", "/api/v1/progress", None).await;
    assert_eq!(topics, json!([]));
    assert_eq!(progress, json!([]));
}
