//! Chatbot endpoints.
//!
//! - POST /api/chatbot/chat - Classify a message and return its canned reply
//! - GET /api/chatbot/status - Index introspection
//! - POST /api/chatbot/initialize - Rebuild the index from the corpus source
//!
//! Chat always answers 200 once the message is valid; `data.success` tells a
//! real match from the contact-us fallback.

use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    routing::{get, post},
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use chatbot_core::{ChatStatus, MatchResult};

use crate::error::{ApiError, ApiResult};
use crate::state::AppState;

/// Message returned for a missing, non-string or blank `message`.
pub const INVALID_MESSAGE: &str = "Message is required and must be a non-empty string";

// ============================================================================
// Request/Response Types
// ============================================================================

/// Request body for POST /api/chatbot/chat.
///
/// `message` is kept as raw JSON so that a missing or non-string value can
/// be answered with 400 instead of a deserialization rejection.
#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    #[serde(default)]
    pub message: Option<Value>,
}

/// Success envelope carrying a payload.
#[derive(Debug, Serialize)]
pub struct DataResponse<T> {
    pub success: bool,
    pub data: T,
}

impl<T> DataResponse<T> {
    fn new(data: T) -> Self {
        Self {
            success: true,
            data,
        }
    }
}

/// Envelope carrying only a message.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub success: bool,
    pub message: String,
}

/// Payload of GET /api/chatbot/status.
#[derive(Debug, Serialize)]
pub struct StatusData {
    #[serde(flatten)]
    pub status: ChatStatus,
    pub timestamp: DateTime<Utc>,
}

// ============================================================================
// Helper Functions
// ============================================================================

/// Pulls a trimmed, non-empty message out of the request body.
fn extract_message(payload: Result<Json<ChatRequest>, JsonRejection>) -> ApiResult<String> {
    let Json(request) = payload.map_err(|rejection| {
        tracing::debug!(error = %rejection, "Rejected chat body");
        ApiError::BadRequest(INVALID_MESSAGE.to_string())
    })?;

    match request.message {
        Some(Value::String(message)) if !message.trim().is_empty() => {
            Ok(message.trim().to_string())
        }
        _ => Err(ApiError::BadRequest(INVALID_MESSAGE.to_string())),
    }
}

// ============================================================================
// Route Handlers
// ============================================================================

/// POST /api/chatbot/chat - Classify a chat message.
///
/// # Response
///
/// - 200 OK: `{ "success": true, "data": { "intent", "response", "confidence", "success" } }`
/// - 400 Bad Request: `{ "success": false, "message": "..." }`
async fn chat(
    State(state): State<AppState>,
    payload: Result<Json<ChatRequest>, JsonRejection>,
) -> ApiResult<Json<DataResponse<MatchResult>>> {
    let message = extract_message(payload)?;

    tracing::info!(message = %message, "Chat request");

    let result = state.chat().process_message(&message);

    tracing::info!(
        intent = %result.intent,
        confidence = result.confidence,
        success = result.success,
        "Chat response"
    );

    Ok(Json(DataResponse::new(result)))
}

/// GET /api/chatbot/status - Report index state.
async fn status(State(state): State<AppState>) -> Json<DataResponse<StatusData>> {
    Json(DataResponse::new(StatusData {
        status: state.chat().status(),
        timestamp: Utc::now(),
    }))
}

/// POST /api/chatbot/initialize - Rebuild and publish the index.
///
/// The rebuild may read a corpus file, so it runs on the blocking pool.
///
/// # Response
///
/// - 200 OK: `{ "success": true, "message": "Chatbot initialized successfully" }`
/// - 500 Internal Server Error: `{ "success": false, "message": "Failed to initialize chatbot" }`
async fn initialize(State(state): State<AppState>) -> ApiResult<Json<MessageResponse>> {
    let expose = state.config().expose_error_details;
    let chat = Arc::clone(state.chat());

    let summary = tokio::task::spawn_blocking(move || chat.initialize())
        .await
        .map_err(|e| ApiError::internal(e, expose))?
        .map_err(|e| ApiError::initialization_failed(&e, expose))?;

    tracing::debug!(
        vocabulary_size = summary.vocabulary_size,
        training_documents = summary.training_documents,
        "Initialize endpoint completed"
    );

    Ok(Json(MessageResponse {
        success: true,
        message: "Chatbot initialized successfully".to_string(),
    }))
}

/// Build chatbot routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/api/chatbot/chat", post(chat))
        .route("/api/chatbot/status", get(status))
        .route("/api/chatbot/initialize", post(initialize))
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{Body, to_bytes};
    use axum::http::{Request, StatusCode, header};
    use chatbot_intent::{ChatService, CorpusSource};
    use std::io::Write;
    use tower::ServiceExt;

    use crate::config::ServerConfig;
    use crate::routes::build_router;

    fn initialized_state() -> AppState {
        let state = AppState::new(ServerConfig::default());
        state.chat().initialize().unwrap();
        state
    }

    async fn send(state: &AppState, request: Request<Body>) -> (StatusCode, Value) {
        let response = build_router(state.clone()).oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let json = serde_json::from_slice(&bytes).unwrap();
        (status, json)
    }

    fn post_json(uri: &str, body: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    fn get(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    fn post_empty(uri: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .body(Body::empty())
            .unwrap()
    }

    #[test]
    fn test_extract_message_trims() {
        let payload = Ok(Json(ChatRequest {
            message: Some(Value::String("  hello  ".into())),
        }));
        assert_eq!(extract_message(payload).unwrap(), "hello");
    }

    #[test]
    fn test_extract_message_rejects_non_string() {
        let payload = Ok(Json(ChatRequest {
            message: Some(Value::from(42)),
        }));
        assert!(matches!(extract_message(payload), Err(ApiError::BadRequest(_))));
    }

    #[tokio::test]
    async fn test_chat_donation() {
        let state = initialized_state();
        let (status, body) = send(
            &state,
            post_json("/api/chatbot/chat", r#"{"message":"How can I donate?"}"#),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["success"], true);
        assert_eq!(body["data"]["intent"], "donation");
        assert_eq!(body["data"]["success"], true);
        assert!(body["data"]["confidence"].as_f64().unwrap() > 0.0);
        assert!(
            body["data"]["response"]
                .as_str()
                .unwrap()
                .contains("Mobile Money")
        );
        assert!(body["data"].get("error").is_none());
    }

    #[tokio::test]
    async fn test_chat_ceo() {
        let state = initialized_state();
        let (_, body) = send(
            &state,
            post_json("/api/chatbot/chat", r#"{"message":"Who is the CEO?"}"#),
        )
        .await;
        assert_eq!(body["data"]["intent"], "leadership");
    }

    #[tokio::test]
    async fn test_chat_rejects_empty_and_blank() {
        let state = initialized_state();
        for body in [
            r#"{"message":""}"#,
            r#"{"message":"   "}"#,
            r#"{}"#,
            r#"{"message":null}"#,
            r#"{"message":42}"#,
            r#"{"message":["hi"]}"#,
            "not json",
        ] {
            let (status, json) = send(&state, post_json("/api/chatbot/chat", body)).await;
            assert_eq!(status, StatusCode::BAD_REQUEST, "body: {body}");
            assert_eq!(json["success"], false);
            assert_eq!(json["message"], INVALID_MESSAGE);
        }
    }

    #[tokio::test]
    async fn test_chat_before_initialize_returns_fallback() {
        let state = AppState::new(ServerConfig::default());
        let (status, body) = send(
            &state,
            post_json("/api/chatbot/chat", r#"{"message":"How can I donate?"}"#),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["success"], true);
        assert_eq!(body["data"]["success"], false);
        assert_eq!(body["data"]["intent"], "error");
        assert_eq!(body["data"]["confidence"], 0.0);
        assert_eq!(body["data"]["error"], "Chatbot not initialized");
    }

    #[tokio::test]
    async fn test_status_reports_index() {
        let state = initialized_state();
        let (status, body) = send(&state, get("/api/chatbot/status")).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["success"], true);
        let data = &body["data"];
        assert_eq!(data["initialized"], true);
        assert!(data["vocabularySize"].as_u64().unwrap() > 0);
        assert_eq!(data["trainingDocuments"], 156);
        assert_eq!(data["availableIntents"].as_array().unwrap().len(), 14);
        assert!(data["timestamp"].is_string());
    }

    #[tokio::test]
    async fn test_status_before_initialize() {
        let state = AppState::new(ServerConfig::default());
        let (status, body) = send(&state, get("/api/chatbot/status")).await;

        assert_eq!(status, StatusCode::OK);
        let data = &body["data"];
        assert_eq!(data["initialized"], false);
        assert_eq!(data["vocabularySize"], 0);
        assert_eq!(data["trainingDocuments"], 156);
        assert_eq!(data["availableIntents"].as_array().unwrap().len(), 14);
    }

    #[tokio::test]
    async fn test_initialize_endpoint() {
        let state = AppState::new(ServerConfig::default());
        let (status, body) = send(&state, post_empty("/api/chatbot/initialize")).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["success"], true);
        assert_eq!(body["message"], "Chatbot initialized successfully");

        let (_, body) = send(&state, get("/api/chatbot/status")).await;
        assert_eq!(body["data"]["initialized"], true);
    }

    #[tokio::test]
    async fn test_initialize_failure_returns_500() {
        let config = ServerConfig {
            corpus_path: Some("/no/such/corpus.json".into()),
            ..ServerConfig::default()
        };
        let state = AppState::new(config);
        let (status, body) = send(&state, post_empty("/api/chatbot/initialize")).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["success"], false);
        assert_eq!(body["message"], "Failed to initialize chatbot");
        assert!(body.get("error").is_none());
    }

    #[tokio::test]
    async fn test_initialize_failure_exposes_detail_in_development() {
        let config = ServerConfig {
            corpus_path: Some("/no/such/corpus.json".into()),
            expose_error_details: true,
            ..ServerConfig::default()
        };
        let state = AppState::new(config);
        let (_, body) = send(&state, post_empty("/api/chatbot/initialize")).await;

        assert!(
            body["error"]
                .as_str()
                .unwrap()
                .contains("/no/such/corpus.json")
        );
    }

    #[tokio::test]
    async fn test_reinitialize_picks_up_corpus_changes() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"documents":[{{"text":"How can I donate?","intent":"donation"}}],
               "responses":{{"donation":"Give","general":"Hi"}}}}"#
        )
        .unwrap();

        let chat = ChatService::new(CorpusSource::File(file.path().to_path_buf()));
        let state = AppState::with_service(ServerConfig::default(), chat);

        send(&state, post_empty("/api/chatbot/initialize")).await;
        let (_, before) = send(&state, get("/api/chatbot/status")).await;

        std::fs::write(
            file.path(),
            r#"{"documents":[
                {"text":"How can I donate?","intent":"donation"},
                {"text":"Where is your office located?","intent":"location"}],
               "responses":{"donation":"Give","location":"Bungoma","general":"Hi"}}"#,
        )
        .unwrap();

        let (status, _) = send(&state, post_empty("/api/chatbot/initialize")).await;
        assert_eq!(status, StatusCode::OK);
        let (_, after) = send(&state, get("/api/chatbot/status")).await;

        assert_ne!(
            before["data"]["vocabularySize"],
            after["data"]["vocabularySize"]
        );
        assert_eq!(after["data"]["trainingDocuments"], 2);
    }

    #[test]
    fn test_status_data_serialization() {
        let data = StatusData {
            status: ChatStatus {
                initialized: false,
                vocabulary_size: 0,
                training_documents: 0,
                available_intents: vec![],
            },
            timestamp: Utc::now(),
        };
        let json = serde_json::to_value(&data).unwrap();
        assert_eq!(json["initialized"], false);
        assert_eq!(json["vocabularySize"], 0);
        assert!(json["timestamp"].is_string());
    }
}
