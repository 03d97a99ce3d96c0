//! Contact form route handlers.

use askama::Template;
use askama_web::WebTemplate;
use axum::Form;
use axum::extract::State;
use axum::response::{IntoResponse, Response};
use serde::Deserialize;
use tower_sessions::Session;
use tracing::instrument;

use aidconnect_core::{Email, Language, Role};

use crate::content::{self, OrgInfo};
use crate::error::AppError;
use crate::filters;
use crate::middleware::OptionalUser;
use crate::models::{CurrentUser, NewContactMessage};
use crate::state::AppState;

use super::session_language;

/// Contact form data.
#[derive(Debug, Deserialize)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub body: String,
}

/// Contact page template.
#[derive(Template, WebTemplate)]
#[template(path = "contact.html")]
pub struct ContactTemplate {
    pub user: Option<CurrentUser>,
    pub language: Language,
    pub org: &'static OrgInfo,
    pub error: Option<String>,
    pub sent: bool,
    pub form: ContactFormValues,
}

/// Entered values preserved across a failed validation.
#[derive(Debug, Default)]
pub struct ContactFormValues {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub body: String,
}

/// Display the contact form.
#[instrument(skip_all)]
pub async fn contact_page(OptionalUser(user): OptionalUser, session: Session) -> impl IntoResponse {
    ContactTemplate {
        user,
        language: session_language(&session).await,
        org: &content::ORG,
        error: None,
        sent: false,
        form: ContactFormValues::default(),
    }
}

/// Handle a contact form submission.
///
/// All four fields are required after trimming and the email must parse.
/// A failed validation re-renders the form with the entered values; a
/// successful one stores the message and renders the confirmation.
#[instrument(skip_all)]
pub async fn submit(
    State(state): State<AppState>,
    OptionalUser(user): OptionalUser,
    session: Session,
    Form(form): Form<ContactForm>,
) -> Result<Response, AppError> {
    let language = session_language(&session).await;

    let name = form.name.trim().to_owned();
    let email_raw = form.email.trim().to_owned();
    let subject = form.subject.trim().to_owned();
    let body = form.body.trim().to_owned();

    let rejected = |user: Option<CurrentUser>, error: String| {
        ContactTemplate {
            user,
            language,
            org: &content::ORG,
            error: Some(error),
            sent: false,
            form: ContactFormValues {
                name: name.clone(),
                email: email_raw.clone(),
                subject: subject.clone(),
                body: body.clone(),
            },
        }
        .into_response()
    };

    if name.is_empty() || email_raw.is_empty() || subject.is_empty() || body.is_empty() {
        return Ok(rejected(user, "All fields are required.".to_owned()));
    }
    let Ok(email) = Email::parse(&email_raw) else {
        return Ok(rejected(user, "Please enter a valid email address.".to_owned()));
    };

    // A signed-in staff member submitting the public form is recorded as a
    // visitor; the form is for outside correspondence.
    let sender_role = user.as_ref().map(|u| {
        if u.role == Role::Donor {
            Role::Donor
        } else {
            Role::Visitor
        }
    });
    let sender_id = user.as_ref().map(|u| u.id.clone());

    state.pacing().submit_delay().await;
    state.messages().save(NewContactMessage {
        name,
        email,
        subject,
        body,
        sender_role,
        sender_id,
    })?;

    Ok(ContactTemplate {
        user,
        language,
        org: &content::ORG,
        error: None,
        sent: true,
        form: ContactFormValues::default(),
    }
    .into_response())
}
