//! Language switcher route handler.

use axum::Form;
use axum::extract::State;
use axum::response::{IntoResponse, Redirect, Response};
use serde::Deserialize;
use tower_sessions::Session;
use tracing::instrument;

use aidconnect_core::Language;

use crate::models::session_keys;
use crate::state::AppState;
use crate::storage::keys;

/// Language form data.
#[derive(Debug, Deserialize)]
pub struct LanguageForm {
    pub language: String,
    /// Page to return to after switching.
    #[serde(default)]
    pub next: Option<String>,
}

/// Switch the session's display language.
///
/// Unknown codes are ignored and the user is sent back unchanged. A
/// successful switch also records a persisted flag so the picker is not
/// reshown on the next visit.
#[instrument(skip_all, fields(language = %form.language))]
pub async fn switch(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<LanguageForm>,
) -> Response {
    let next = form.next.as_deref().unwrap_or("/").to_owned();
    // Only same-site paths are followed.
    let next = if next.starts_with('/') && !next.starts_with("//") {
        next
    } else {
        "/".to_owned()
    };

    let Ok(language) = form.language.parse::<Language>() else {
        return Redirect::to(&next).into_response();
    };

    if let Err(e) = session.insert(session_keys::LANGUAGE, language).await {
        tracing::error!("Failed to store language in session: {}", e);
    }
    if let Err(e) = state.store().set(keys::LANGUAGE_CHOSEN, &language) {
        tracing::warn!("Failed to persist language choice: {}", e);
    }

    Redirect::to(&next).into_response()
}
