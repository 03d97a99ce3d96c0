//! Unified error handling.
//!
//! Provides a unified `AppError` type mapped to HTTP responses. All route
//! handlers should return `Result<T, AppError>`.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::services::auth::AuthError;
use crate::services::chat::ChatError;
use crate::services::messages::MessageStoreError;
use crate::storage::StorageError;

/// Application-level error type for the site.
#[derive(Debug, Error)]
pub enum AppError {
    /// Authentication operation failed.
    #[error("Auth error: {0}")]
    Auth(#[from] AuthError),

    /// Contact message store operation failed.
    #[error("Message store error: {0}")]
    Messages(#[from] MessageStoreError),

    /// Chat conversation operation failed.
    #[error("Chat error: {0}")]
    Chat(#[from] ChatError),

    /// Local storage operation failed.
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    /// Form input failed validation.
    #[error("Validation failed: {0}")]
    Validation(String),

    /// Resource not found.
    #[error("Not found: {0}")]
    NotFound(String),

    /// User is not authenticated or lacks the required role.
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// Bad request from client.
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// Internal server error.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        if matches!(self, Self::Storage(_) | Self::Internal(_)) {
            tracing::error!(error = %self, "Request error");
        }

        let status = match &self {
            Self::Storage(_) | Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::Auth(err) => match err {
                AuthError::AuthenticationFailed => StatusCode::UNAUTHORIZED,
                AuthError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
            },
            Self::Messages(err) => match err {
                MessageStoreError::UnknownMessage(_) => StatusCode::NOT_FOUND,
                MessageStoreError::InvalidTransition { .. } => StatusCode::UNPROCESSABLE_ENTITY,
                MessageStoreError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
            },
            Self::Chat(err) => match err {
                ChatError::UnknownConversation(_) => StatusCode::NOT_FOUND,
                ChatError::ConversationClosed(_) => StatusCode::GONE,
            },
            Self::Validation(_) | Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Unauthorized(_) => StatusCode::UNAUTHORIZED,
        };

        // Don't expose internal error details to clients
        let message = match &self {
            Self::Storage(_) | Self::Internal(_) => "Internal server error".to_owned(),
            Self::Auth(err) => match err {
                AuthError::AuthenticationFailed => "Invalid credentials".to_owned(),
                AuthError::Storage(_) => "Internal server error".to_owned(),
            },
            Self::Messages(MessageStoreError::Storage(_)) => "Internal server error".to_owned(),
            _ => self.to_string(),
        };

        (status, message).into_response()
    }
}

/// Result type alias for `AppError`.
pub type Result<T> = std::result::Result<T, AppError>;
