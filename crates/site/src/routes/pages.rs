//! Static content page route handlers.
//!
//! Serves the about, impact, volunteer, careers, and news pages from the
//! fixed content tables.

use askama::Template;
use askama_web::WebTemplate;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use tower_sessions::Session;
use tracing::instrument;

use aidconnect_core::Language;

use crate::content::{self, ImpactStats, JobOpening, NewsItem, OrgInfo};
use crate::filters;
use crate::middleware::OptionalUser;
use crate::models::CurrentUser;

use super::session_language;

/// About page template.
#[derive(Template, WebTemplate)]
#[template(path = "about.html")]
pub struct AboutTemplate {
    pub user: Option<CurrentUser>,
    pub language: Language,
    pub org: &'static OrgInfo,
}

/// Impact page template.
#[derive(Template, WebTemplate)]
#[template(path = "impact.html")]
pub struct ImpactTemplate {
    pub user: Option<CurrentUser>,
    pub language: Language,
    pub impact: &'static ImpactStats,
}

/// Volunteer page template.
#[derive(Template, WebTemplate)]
#[template(path = "volunteer.html")]
pub struct VolunteerTemplate {
    pub user: Option<CurrentUser>,
    pub language: Language,
    pub org: &'static OrgInfo,
    pub roles: &'static [&'static str],
}

/// Careers page template.
#[derive(Template, WebTemplate)]
#[template(path = "careers.html")]
pub struct CareersTemplate {
    pub user: Option<CurrentUser>,
    pub language: Language,
    pub jobs: &'static [JobOpening],
}

/// News page template.
#[derive(Template, WebTemplate)]
#[template(path = "news.html")]
pub struct NewsTemplate {
    pub user: Option<CurrentUser>,
    pub language: Language,
    pub news: &'static [NewsItem],
}

/// Full-page assistant template.
#[derive(Template, WebTemplate)]
#[template(path = "chatbot.html")]
pub struct ChatbotTemplate {
    pub user: Option<CurrentUser>,
    pub language: Language,
}

/// Not-found page template.
#[derive(Template, WebTemplate)]
#[template(path = "not_found.html")]
pub struct NotFoundTemplate {
    pub user: Option<CurrentUser>,
    pub language: Language,
}

/// Display the about page.
#[instrument(skip_all)]
pub async fn about(OptionalUser(user): OptionalUser, session: Session) -> impl IntoResponse {
    AboutTemplate {
        user,
        language: session_language(&session).await,
        org: &content::ORG,
    }
}

/// Display the impact page.
#[instrument(skip_all)]
pub async fn impact(OptionalUser(user): OptionalUser, session: Session) -> impl IntoResponse {
    ImpactTemplate {
        user,
        language: session_language(&session).await,
        impact: &content::IMPACT,
    }
}

/// Display the volunteer page.
#[instrument(skip_all)]
pub async fn volunteer(OptionalUser(user): OptionalUser, session: Session) -> impl IntoResponse {
    VolunteerTemplate {
        user,
        language: session_language(&session).await,
        org: &content::ORG,
        roles: content::VOLUNTEER_ROLES,
    }
}

/// Display the careers page.
#[instrument(skip_all)]
pub async fn careers(OptionalUser(user): OptionalUser, session: Session) -> impl IntoResponse {
    CareersTemplate {
        user,
        language: session_language(&session).await,
        jobs: content::JOBS,
    }
}

/// Display the news page.
#[instrument(skip_all)]
pub async fn news(OptionalUser(user): OptionalUser, session: Session) -> impl IntoResponse {
    NewsTemplate {
        user,
        language: session_language(&session).await,
        news: content::NEWS,
    }
}

/// Display the full-page assistant.
#[instrument(skip_all)]
pub async fn chatbot(OptionalUser(user): OptionalUser, session: Session) -> impl IntoResponse {
    ChatbotTemplate {
        user,
        language: session_language(&session).await,
    }
}

/// Render the 404 page for unknown paths.
#[instrument(skip_all)]
pub async fn not_found(OptionalUser(user): OptionalUser, session: Session) -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        NotFoundTemplate {
            user,
            language: session_language(&session).await,
        },
    )
}
