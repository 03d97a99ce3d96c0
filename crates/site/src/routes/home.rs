//! Home page route handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::response::IntoResponse;
use tower_sessions::Session;
use tracing::instrument;

use aidconnect_core::Language;

use crate::content::{self, ImpactStats, NewsItem, OrgInfo, Program};
use crate::filters;
use crate::middleware::OptionalUser;
use crate::models::CurrentUser;

use super::session_language;

/// Home page template.
#[derive(Template, WebTemplate)]
#[template(path = "home.html")]
pub struct HomeTemplate {
    pub user: Option<CurrentUser>,
    pub language: Language,
    pub org: &'static OrgInfo,
    pub programs: &'static [Program],
    pub impact: &'static ImpactStats,
    pub news: &'static [NewsItem],
}

/// Display the home page.
#[instrument(skip_all)]
pub async fn home(OptionalUser(user): OptionalUser, session: Session) -> impl IntoResponse {
    HomeTemplate {
        user,
        language: session_language(&session).await,
        org: &content::ORG,
        programs: content::PROGRAMS,
        impact: &content::IMPACT,
        news: content::NEWS,
    }
}
