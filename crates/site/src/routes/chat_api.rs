//! Chat widget JSON API.
//!
//! The widget drives the conversation through these endpoints. Opening is
//! idempotent per session: if the session already references a live
//! conversation it is resumed instead of reseeded.

use axum::Json;
use axum::extract::State;
use serde::{Deserialize, Serialize};
use tower_sessions::Session;
use tracing::instrument;
use uuid::Uuid;

use crate::engine::PageContext;
use crate::error::AppError;
use crate::middleware::OptionalUser;
use crate::models::{ChatMessage, session_keys};
use crate::state::AppState;

use super::session_language;

/// Open request body.
#[derive(Debug, Deserialize)]
pub struct OpenRequest {
    #[serde(default)]
    pub page: PageContext,
}

/// Open response body.
#[derive(Debug, Serialize)]
pub struct OpenResponse {
    pub conversation_id: Uuid,
    pub messages: Vec<ChatMessage>,
}

/// Send request body.
#[derive(Debug, Deserialize)]
pub struct SendRequest {
    pub conversation_id: Uuid,
    pub text: String,
}

/// Transcript response body.
#[derive(Debug, Serialize)]
pub struct TranscriptResponse {
    pub messages: Vec<ChatMessage>,
}

/// Minimize request body.
#[derive(Debug, Deserialize)]
pub struct MinimizeRequest {
    pub conversation_id: Uuid,
    pub minimized: bool,
}

/// Close request body.
#[derive(Debug, Deserialize)]
pub struct CloseRequest {
    pub conversation_id: Uuid,
}

/// Open (or resume) the session's conversation.
#[instrument(skip_all)]
pub async fn open(
    State(state): State<AppState>,
    OptionalUser(user): OptionalUser,
    session: Session,
    Json(request): Json<OpenRequest>,
) -> Result<Json<OpenResponse>, AppError> {
    let language = session_language(&session).await;

    // Resume the live conversation this session already opened, if any.
    if let Ok(Some(existing)) = session.get::<Uuid>(session_keys::CONVERSATION).await
        && let Ok(messages) = state.chat().transcript(existing).await
    {
        return Ok(Json(OpenResponse {
            conversation_id: existing,
            messages,
        }));
    }

    let role = user.as_ref().map(|u| u.role).unwrap_or_default();
    let name = user.as_ref().map(|u| u.name.as_str());
    let (conversation_id, messages) = state.chat().open(role, name, request.page, language).await;

    session
        .insert(session_keys::CONVERSATION, conversation_id)
        .await
        .map_err(|e| AppError::Internal(e.to_string()))?;

    Ok(Json(OpenResponse {
        conversation_id,
        messages,
    }))
}

/// Submit one message and return the updated transcript.
#[instrument(skip_all, fields(conversation_id = %request.conversation_id))]
pub async fn send(
    State(state): State<AppState>,
    session: Session,
    Json(request): Json<SendRequest>,
) -> Result<Json<TranscriptResponse>, AppError> {
    let language = session_language(&session).await;
    let messages = state
        .chat()
        .submit(request.conversation_id, &request.text, language)
        .await?;
    Ok(Json(TranscriptResponse { messages }))
}

/// Record the widget's minimized flag.
#[instrument(skip_all, fields(conversation_id = %request.conversation_id))]
pub async fn minimize(
    State(state): State<AppState>,
    Json(request): Json<MinimizeRequest>,
) -> Result<Json<serde_json::Value>, AppError> {
    state
        .chat()
        .set_minimized(request.conversation_id, request.minimized)
        .await?;
    Ok(Json(serde_json::json!({ "ok": true })))
}

/// Close and discard the conversation.
#[instrument(skip_all, fields(conversation_id = %request.conversation_id))]
pub async fn close(
    State(state): State<AppState>,
    session: Session,
    Json(request): Json<CloseRequest>,
) -> Result<Json<serde_json::Value>, AppError> {
    state.chat().close(request.conversation_id);
    let _ = session.remove::<Uuid>(session_keys::CONVERSATION).await;
    Ok(Json(serde_json::json!({ "ok": true })))
}
