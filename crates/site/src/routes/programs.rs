//! Program listing and detail route handlers.

use askama::Template;
use askama_web::WebTemplate;
use axum::extract::Path;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use tower_sessions::Session;
use tracing::instrument;

use aidconnect_core::Language;

use crate::content::{self, Program};
use crate::filters;
use crate::middleware::OptionalUser;
use crate::models::CurrentUser;

use super::pages::NotFoundTemplate;
use super::session_language;

/// Program listing template.
#[derive(Template, WebTemplate)]
#[template(path = "programs/index.html")]
pub struct ProgramsTemplate {
    pub user: Option<CurrentUser>,
    pub language: Language,
    pub programs: &'static [Program],
}

/// Program detail template.
#[derive(Template, WebTemplate)]
#[template(path = "programs/show.html")]
pub struct ProgramTemplate {
    pub user: Option<CurrentUser>,
    pub language: Language,
    pub program: &'static Program,
}

/// Display the program listing.
#[instrument(skip_all)]
pub async fn index(OptionalUser(user): OptionalUser, session: Session) -> impl IntoResponse {
    ProgramsTemplate {
        user,
        language: session_language(&session).await,
        programs: content::PROGRAMS,
    }
}

/// Display one program by slug. Unknown slugs get the 404 page.
#[instrument(skip_all, fields(program = %id))]
pub async fn show(
    OptionalUser(user): OptionalUser,
    session: Session,
    Path(id): Path<String>,
) -> Response {
    let language = session_language(&session).await;
    match content::program_by_id(&id) {
        Some(program) => ProgramTemplate {
            user,
            language,
            program,
        }
        .into_response(),
        None => (StatusCode::NOT_FOUND, NotFoundTemplate { user, language }).into_response(),
    }
}
