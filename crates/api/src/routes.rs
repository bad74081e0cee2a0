use axum::extract::State;
use axum::http::StatusCode;
use axum::response::Json;
use axum::routing::{get, post};
use axum::Router;
use serde::Deserialize;
use serde_json::json;

use tracker_core::model::{ProgressEntry, Session, Topic};

use crate::AppState;
use crate::error::ApiError;

/// Builds the full route table under `/api/v1`, with permissive CORS for the
/// development front end.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/api/v1/health", get(health))
        .route("/api/v1/topics", get(list_topics).post(create_topic))
        .route("/api/v1/sessions", post(create_session))
        .route("/api/v1/progress", get(get_progress))
        .route("/api/v1/cleanup", post(cleanup))
        .layer(tower_http::cors::CorsLayer::permissive())
        .with_state(state)
}

async fn health() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

#[derive(Debug, Deserialize)]
struct CreateTopicRequest {
    #[serde(default)]
    name: String,
    #[serde(default, rename = "type")]
    kind: String,
}

async fn create_topic(
    State(state): State<AppState>,
    Json(req): Json<CreateTopicRequest>,
) -> Result<(StatusCode, Json<Topic>), ApiError> {
    let topic = state.topics.create_topic(req.name, req.kind).await?;
    Ok((StatusCode::CREATED, Json(topic)))
}

async fn list_topics(State(state): State<AppState>) -> Result<Json<Vec<Topic>>, ApiError> {
    let topics = state.topics.list_topics().await?;
    Ok(Json(topics))
}

#[derive(Debug, Deserialize)]
struct CreateSessionRequest {
    #[serde(default, rename = "topicId")]
    topic_id: String,
    #[serde(default, rename = "durationSeconds")]
    duration_seconds: i64,
}

async fn create_session(
    State(state): State<AppState>,
    Json(req): Json<CreateSessionRequest>,
) -> Result<(StatusCode, Json<Session>), ApiError> {
    let session = state
        .sessions
        .record_session(&req.topic_id, req.duration_seconds)
        .await?;
    Ok((StatusCode::CREATED, Json(session)))
}

async fn get_progress(
    State(state): State<AppState>,
) -> Result<Json<Vec<ProgressEntry>>, ApiError> {
    let entries = state.progress.get_progress().await?;
    Ok(Json(entries))
}

/// Development-only reset: clears both collections. Sessions go first so the
/// topic foreign key never dangles mid-wipe.
async fn cleanup(State(state): State<AppState>) -> Result<Json<serde_json::Value>, ApiError> {
    state.storage.sessions.delete_all_sessions().await?;
    state.storage.topics.delete_all_topics().await?;
    Ok(Json(json!({ "message": "database cleared" })))
}
