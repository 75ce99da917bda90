use crate::config::PipelineConfig;
use crate::error::VibeError;
use crate::pipeline::run_with_config;
use crate::render::Rendering;
use crate::sessions::SessionStore;
use crate::sources;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use serde::Deserialize;
use tracing::{error, info};

#[derive(Debug, Deserialize)]
pub struct AnalyzeRequest {
    #[serde(default)]
    text: String,
}

#[derive(Debug, Deserialize)]
pub struct SearchRequest {
    #[serde(default)]
    title: String,
}

#[derive(Clone)]
pub struct AppState {
    pub sessions: SessionStore,
    pub config: PipelineConfig,
}

impl AppState {
    pub fn new(config: PipelineConfig) -> Self {
        Self {
            sessions: SessionStore::new(config),
            config,
        }
    }
}

pub fn routes(state: AppState) -> Router {
    Router::new()
        .route("/", get(root))
        .route("/texts", get(list_texts))
        .route("/texts/:title", get(get_text))
        .route("/analyze", post(analyze))
        .route("/sessions", post(create_session))
        .route("/sessions/:id", get(get_session).delete(delete_session))
        .route("/sessions/:id/text", post(submit_text))
        .route("/sessions/:id/search", post(search))
        .with_state(state)
}

fn error_response(err: VibeError) -> (StatusCode, Json<serde_json::Value>) {
    let status = match &err {
        VibeError::SessionNotFound(_) => StatusCode::NOT_FOUND,
        VibeError::EmptyText => StatusCode::UNPROCESSABLE_ENTITY,
        VibeError::InvalidTopK { .. } => StatusCode::BAD_REQUEST,
        VibeError::UnknownTheme(_) => {
            error!("Internal invariant violated: {}", err);
            StatusCode::INTERNAL_SERVER_ERROR
        }
    };
    (status, Json(serde_json::json!({ "error": err.to_string() })))
}

async fn root() -> impl IntoResponse {
    Json(serde_json::json!({
        "name": "Word Cloud Vibes",
        "version": env!("CARGO_PKG_VERSION"),
        "description": "Word frequency ranking with keyword-driven themes"
    }))
}

async fn list_texts() -> impl IntoResponse {
    Json(serde_json::json!({ "titles": sources::titles() }))
}

async fn get_text(Path(title): Path<String>) -> impl IntoResponse {
    let found = sources::find(&title).is_some();
    Json(serde_json::json!({
        "title": title,
        "text": sources::lookup(&title),
        "found": found
    }))
}

async fn analyze(
    State(state): State<AppState>,
    Json(req): Json<AnalyzeRequest>,
) -> (StatusCode, Json<serde_json::Value>) {
    if req.text.is_empty() {
        return error_response(VibeError::EmptyText);
    }

    match run_with_config(&req.text, &state.config) {
        Ok(output) => (
            StatusCode::OK,
            Json(serde_json::json!(Rendering::new(output))),
        ),
        Err(e) => error_response(e),
    }
}

async fn create_session(State(state): State<AppState>) -> (StatusCode, Json<serde_json::Value>) {
    let session_id = state.sessions.create();
    (
        StatusCode::CREATED,
        Json(serde_json::json!({ "sessionId": session_id })),
    )
}

async fn get_session(
    State(state): State<AppState>,
    Path(session_id): Path<String>,
) -> (StatusCode, Json<serde_json::Value>) {
    match state.sessions.view(&session_id) {
        Ok(view) => (StatusCode::OK, Json(serde_json::json!(view))),
        Err(e) => error_response(e),
    }
}

async fn delete_session(
    State(state): State<AppState>,
    Path(session_id): Path<String>,
) -> (StatusCode, Json<serde_json::Value>) {
    if state.sessions.remove(&session_id) {
        (
            StatusCode::OK,
            Json(serde_json::json!({ "status": "deleted", "sessionId": session_id })),
        )
    } else {
        error_response(VibeError::SessionNotFound(session_id))
    }
}

fn submit_and_view(
    state: &AppState,
    session_id: &str,
    text: &str,
) -> (StatusCode, Json<serde_json::Value>) {
    match state.sessions.submit_and_view(session_id, text) {
        Ok(view) => (StatusCode::OK, Json(serde_json::json!(view))),
        Err(e) => error_response(e),
    }
}

async fn submit_text(
    State(state): State<AppState>,
    Path(session_id): Path<String>,
    Json(req): Json<AnalyzeRequest>,
) -> (StatusCode, Json<serde_json::Value>) {
    submit_and_view(&state, &session_id, &req.text)
}

async fn search(
    State(state): State<AppState>,
    Path(session_id): Path<String>,
    Json(req): Json<SearchRequest>,
) -> (StatusCode, Json<serde_json::Value>) {
    let text = sources::lookup(&req.title);
    info!("Session {} loading text for '{}'", session_id, req.title);
    submit_and_view(&state, &session_id, text)
}
