use axum::body::{to_bytes, Body};
use axum::http::{Method, Request, StatusCode};
use axum::Router;
use serde_json::Value;
use tower::ServiceExt;
use wordcloud_vibes::api::{routes, AppState};
use wordcloud_vibes::config::PipelineConfig;

fn app() -> Router {
    routes(AppState::new(PipelineConfig::default()))
}

async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, json)
}

#[tokio::test]
async fn test_root_and_texts() {
    let app = app();

    let (status, body) = send(&app, Method::GET, "/", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["name"], "Word Cloud Vibes");

    let (_, body) = send(&app, Method::GET, "/texts", None).await;
    assert_eq!(body["titles"], serde_json::json!(["Frankenstein", "Dracula"]));

    let (_, body) = send(&app, Method::GET, "/texts/Dracula", None).await;
    assert_eq!(body["found"], true);

    let (_, body) = send(&app, Method::GET, "/texts/Carmilla", None).await;
    assert_eq!(body["found"], false);
    assert_eq!(
        body["text"],
        "No text found for this query. Try 'Frankenstein' or 'Dracula'."
    );
}

#[tokio::test]
async fn test_analyze() {
    let app = app();

    let (status, body) = send(
        &app,
        Method::POST,
        "/analyze",
        Some(serde_json::json!({ "text": "The ghost wandered." })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["output"]["themeId"], "haunted");
    assert_eq!(body["cloud"]["list"][0]["text"], "ghost");
    assert_eq!(body["page"]["backgroundColor"], "#2e2e2e");

    let (status, body) = send(
        &app,
        Method::POST,
        "/analyze",
        Some(serde_json::json!({ "text": "" })),
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn test_session_lifecycle() {
    let app = app();

    let (status, body) = send(&app, Method::POST, "/sessions", None).await;
    assert_eq!(status, StatusCode::CREATED);
    let session_id = body["sessionId"].as_str().unwrap().to_string();
    let session_uri = format!("/sessions/{}", session_id);

    // Fresh session: no output, default page style
    let (status, body) = send(&app, Method::GET, &session_uri, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["sessionId"], session_id.as_str());
    assert!(body["output"].is_null());
    assert!(body["ran"].is_null());
    assert_eq!(body["page"]["fontFamily"], "Arial, sans-serif");

    // Loading a known title runs the pipeline
    let (status, body) = send(
        &app,
        Method::POST,
        &format!("{}/search", session_uri),
        Some(serde_json::json!({ "title": "Dracula" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["ran"], true);
    assert_eq!(body["output"]["themeId"], "haunted");
    assert_eq!(body["page"]["fontFamily"], "'Creepster', cursive");

    // Empty text leaves the previous output in place
    let (_, body) = send(
        &app,
        Method::POST,
        &format!("{}/text", session_uri),
        Some(serde_json::json!({ "text": "" })),
    )
    .await;
    assert_eq!(body["ran"], false);
    assert_eq!(body["output"]["themeId"], "haunted");

    // New text replaces it
    let (_, body) = send(
        &app,
        Method::POST,
        &format!("{}/text", session_uri),
        Some(serde_json::json!({ "text": "It is a bright sunny day." })),
    )
    .await;
    assert_eq!(body["ran"], true);
    assert_eq!(body["output"]["themeId"], "default");
    assert_eq!(body["output"]["rankedList"].as_array().unwrap().len(), 3);

    let (status, _) = send(&app, Method::DELETE, &session_uri, None).await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = send(&app, Method::GET, &session_uri, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn test_unknown_title_in_session_uses_fallback() {
    let app = app();
    let (_, body) = send(&app, Method::POST, "/sessions", None).await;
    let session_id = body["sessionId"].as_str().unwrap().to_string();

    let (status, body) = send(
        &app,
        Method::POST,
        &format!("/sessions/{}/search", session_id),
        Some(serde_json::json!({ "title": "Carmilla" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["output"]["themeId"], "default");
    assert_eq!(body["output"]["rankedList"][0]["word"], "no");
}

#[tokio::test]
async fn test_sessions_are_isolated() {
    let app = app();
    let (_, first) = send(&app, Method::POST, "/sessions", None).await;
    let (_, second) = send(&app, Method::POST, "/sessions", None).await;
    let first = first["sessionId"].as_str().unwrap().to_string();
    let second = second["sessionId"].as_str().unwrap().to_string();

    send(
        &app,
        Method::POST,
        &format!("/sessions/{}/text", first),
        Some(serde_json::json!({ "text": "spooky spooky" })),
    )
    .await;

    let (_, body) = send(&app, Method::GET, &format!("/sessions/{}", second), None).await;
    assert!(body["output"].is_null());
}

#[tokio::test]
async fn test_missing_session_is_not_found() {
    let app = app();
    let (status, _) = send(
        &app,
        Method::POST,
        "/sessions/nope/text",
        Some(serde_json::json!({ "text": "ghost" })),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = send(&app, Method::DELETE, "/sessions/nope", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
