//! HTTP route handlers for the site.
//!
//! # Route Structure
//!
//! ```text
//! GET  /                       - Home page
//! GET  /health                 - Health check
//!
//! # Pages
//! GET  /about                  - About / mission page
//! GET  /impact                 - Impact statistics
//! GET  /volunteer              - Volunteer page
//! GET  /careers                - Job openings
//! GET  /news                   - News listing
//! GET  /chatbot                - Full-page assistant
//!
//! # Programs
//! GET  /programs               - Program listing
//! GET  /programs/{id}          - Program detail
//!
//! # Donations
//! GET  /donate                 - Donation form
//! POST /donate                 - Submit donation (mock)
//!
//! # Contact
//! GET  /contact                - Contact form
//! POST /contact                - Submit contact message
//!
//! # Auth
//! GET  /auth/login             - Login page
//! POST /auth/login             - Login action
//! GET  /auth/register          - Register page
//! POST /auth/register          - Register action
//! POST /auth/logout            - Logout action
//!
//! # Dashboards (role-gated)
//! GET  /staff/dashboard        - Staff inbox and stats
//! POST /staff/messages/{id}/status - Advance a message status
//! GET  /donor/dashboard        - Donor history and certificates
//!
//! # Language
//! POST /language               - Switch display language
//!
//! # Chat API (JSON)
//! POST /api/chat/open          - Open a conversation (seeds welcome)
//! POST /api/chat/send          - Submit a message, returns transcript
//! POST /api/chat/minimize      - Toggle minimized flag
//! POST /api/chat/close         - Close and discard the conversation
//! ```

pub mod auth;
pub mod chat_api;
pub mod contact;
pub mod dashboard;
pub mod donate;
pub mod home;
pub mod language;
pub mod pages;
pub mod programs;

use axum::{
    Router,
    routing::{get, post},
};
use tower_sessions::Session;

use aidconnect_core::Language;

use crate::models::session_keys;
use crate::state::AppState;

/// The session's chosen display language, defaulting to English.
pub(crate) async fn session_language(session: &Session) -> Language {
    session
        .get::<Language>(session_keys::LANGUAGE)
        .await
        .ok()
        .flatten()
        .unwrap_or_default()
}

/// Create the auth routes router.
pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/login", get(auth::login_page).post(auth::login))
        .route("/register", get(auth::register_page).post(auth::register))
        .route("/logout", post(auth::logout))
}

/// Create the dashboard routes router.
pub fn dashboard_routes() -> Router<AppState> {
    Router::new()
        .route("/staff/dashboard", get(dashboard::staff_dashboard))
        .route(
            "/staff/messages/{id}/status",
            post(dashboard::update_message_status),
        )
        .route("/donor/dashboard", get(dashboard::donor_dashboard))
}

/// Create the chat API routes router.
pub fn chat_api_routes() -> Router<AppState> {
    Router::new()
        .route("/open", post(chat_api::open))
        .route("/send", post(chat_api::send))
        .route("/minimize", post(chat_api::minimize))
        .route("/close", post(chat_api::close))
}

/// Create all routes for the site.
pub fn routes() -> Router<AppState> {
    Router::new()
        // Home page
        .route("/", get(home::home))
        // Static pages
        .route("/about", get(pages::about))
        .route("/impact", get(pages::impact))
        .route("/volunteer", get(pages::volunteer))
        .route("/careers", get(pages::careers))
        .route("/news", get(pages::news))
        .route("/chatbot", get(pages::chatbot))
        // Programs
        .route("/programs", get(programs::index))
        .route("/programs/{id}", get(programs::show))
        // Donations
        .route("/donate", get(donate::donate_page).post(donate::submit))
        // Contact
        .route("/contact", get(contact::contact_page).post(contact::submit))
        // Language switcher
        .route("/language", post(language::switch))
        // Auth routes
        .nest("/auth", auth_routes())
        // Dashboards
        .merge(dashboard_routes())
        // Chat API
        .nest("/api/chat", chat_api_routes())
        .fallback(pages::not_found)
}
