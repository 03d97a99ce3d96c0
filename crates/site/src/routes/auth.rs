//! Authentication route handlers.
//!
//! Handles login, registration, and logout against the mock session
//! service. Failures redirect back with an `?error=` query parameter the
//! page turns into a message.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::{Query, State},
    response::{IntoResponse, Redirect, Response},
};
use serde::Deserialize;
use tower_sessions::Session;
use tracing::instrument;

use aidconnect_core::{Email, Language, Role};

use crate::filters;
use crate::middleware::{OptionalUser, clear_current_user, set_current_user};
use crate::models::CurrentUser;
use crate::state::AppState;

use super::session_language;

// =============================================================================
// Form Types
// =============================================================================

/// Login form data.
#[derive(Debug, Deserialize)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
    pub role: String,
}

/// Registration form data.
#[derive(Debug, Deserialize)]
pub struct RegisterForm {
    pub name: String,
    pub email: String,
    pub password: String,
    pub role: String,
}

/// Query parameters for error display.
#[derive(Debug, Deserialize)]
pub struct MessageQuery {
    pub error: Option<String>,
}

// =============================================================================
// Templates
// =============================================================================

/// Login page template.
#[derive(Template, WebTemplate)]
#[template(path = "auth/login.html")]
pub struct LoginTemplate {
    pub user: Option<CurrentUser>,
    pub language: Language,
    pub error: Option<String>,
}

/// Register page template.
#[derive(Template, WebTemplate)]
#[template(path = "auth/register.html")]
pub struct RegisterTemplate {
    pub user: Option<CurrentUser>,
    pub language: Language,
    pub error: Option<String>,
}

// =============================================================================
// Routes
// =============================================================================

/// Display the login page.
#[instrument(skip_all)]
pub async fn login_page(
    OptionalUser(user): OptionalUser,
    session: Session,
    Query(query): Query<MessageQuery>,
) -> impl IntoResponse {
    LoginTemplate {
        user,
        language: session_language(&session).await,
        error: query.error,
    }
}

/// Handle login form submission.
#[instrument(skip_all, fields(role = %form.role))]
pub async fn login(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<LoginForm>,
) -> Response {
    let Ok(role) = form.role.parse::<Role>() else {
        return Redirect::to("/auth/login?error=role").into_response();
    };
    if role == Role::Visitor {
        return Redirect::to("/auth/login?error=role").into_response();
    }

    match state.auth().login(form.email.trim(), &form.password, role).await {
        Ok(user) => {
            if let Err(e) = set_current_user(&session, &user).await {
                tracing::error!("Failed to set session: {}", e);
                return Redirect::to("/auth/login?error=session").into_response();
            }
            redirect_for_role(user.role).into_response()
        }
        Err(e) => {
            tracing::warn!("Login failed: {}", e);
            Redirect::to("/auth/login?error=credentials").into_response()
        }
    }
}

/// Display the registration page.
#[instrument(skip_all)]
pub async fn register_page(
    OptionalUser(user): OptionalUser,
    session: Session,
    Query(query): Query<MessageQuery>,
) -> impl IntoResponse {
    RegisterTemplate {
        user,
        language: session_language(&session).await,
        error: query.error,
    }
}

/// Handle registration form submission.
///
/// Registration always succeeds for a well-formed email and signs the
/// user straight in.
#[instrument(skip_all, fields(role = %form.role))]
pub async fn register(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<RegisterForm>,
) -> Response {
    let Ok(role) = form.role.parse::<Role>() else {
        return Redirect::to("/auth/register?error=role").into_response();
    };
    if role == Role::Visitor {
        return Redirect::to("/auth/register?error=role").into_response();
    }

    let name = form.name.trim().to_owned();
    if name.is_empty() {
        return Redirect::to("/auth/register?error=name").into_response();
    }
    let Ok(email) = Email::parse(form.email.trim()) else {
        return Redirect::to("/auth/register?error=email").into_response();
    };

    match state.auth().register(email, &form.password, name, role).await {
        Ok(user) => {
            if let Err(e) = set_current_user(&session, &user).await {
                tracing::error!("Failed to set session: {}", e);
                return Redirect::to("/auth/register?error=session").into_response();
            }
            redirect_for_role(user.role).into_response()
        }
        Err(e) => {
            tracing::warn!("Registration failed: {}", e);
            Redirect::to("/auth/register?error=failed").into_response()
        }
    }
}

/// Handle logout: clears the session and the persisted identity.
#[instrument(skip_all)]
pub async fn logout(State(state): State<AppState>, session: Session) -> Response {
    if let Err(e) = clear_current_user(&session).await {
        tracing::error!("Failed to clear session: {}", e);
    }
    if let Err(e) = state.auth().logout() {
        tracing::error!("Failed to clear persisted identity: {}", e);
    }
    Redirect::to("/").into_response()
}

/// Where a fresh login lands.
fn redirect_for_role(role: Role) -> Redirect {
    match role {
        Role::Staff => Redirect::to("/staff/dashboard"),
        Role::Donor => Redirect::to("/donor/dashboard"),
        Role::Visitor => Redirect::to("/"),
    }
}
