//! Donation form route handlers.
//!
//! Donations are a mock flow: the form validates the amount against the
//! minimum and renders an acknowledgment with a generated reference. No
//! payment is taken and nothing is persisted.

use askama::Template;
use askama_web::WebTemplate;
use axum::Form;
use axum::extract::State;
use axum::response::{IntoResponse, Response};
use rust_decimal::Decimal;
use serde::Deserialize;
use tower_sessions::Session;
use tracing::instrument;

use aidconnect_core::{Language, Rupees};

use crate::content::{self, DonationTerms, Program};
use crate::filters;
use crate::middleware::OptionalUser;
use crate::models::CurrentUser;
use crate::state::AppState;

use super::session_language;

/// Donation form data.
#[derive(Debug, Deserialize)]
pub struct DonateForm {
    pub amount: String,
    /// Optional program slug preselected from a program page.
    #[serde(default)]
    pub program: Option<String>,
}

/// Donation form template.
#[derive(Template, WebTemplate)]
#[template(path = "donate/form.html")]
pub struct DonateTemplate {
    pub user: Option<CurrentUser>,
    pub language: Language,
    pub terms: &'static DonationTerms,
    pub programs: &'static [Program],
    pub error: Option<String>,
    pub amount: String,
}

/// Donation acknowledgment template.
#[derive(Template, WebTemplate)]
#[template(path = "donate/thanks.html")]
pub struct DonateThanksTemplate {
    pub user: Option<CurrentUser>,
    pub language: Language,
    pub amount: Rupees,
    pub program: Option<&'static Program>,
    pub reference: String,
}

/// Display the donation form.
#[instrument(skip_all)]
pub async fn donate_page(OptionalUser(user): OptionalUser, session: Session) -> impl IntoResponse {
    DonateTemplate {
        user,
        language: session_language(&session).await,
        terms: &content::DONATION,
        programs: content::PROGRAMS,
        error: None,
        amount: String::new(),
    }
}

/// Handle a donation submission.
///
/// Unparseable or below-minimum amounts re-render the form with an error
/// and the entered value preserved.
#[instrument(skip_all)]
pub async fn submit(
    State(state): State<AppState>,
    OptionalUser(user): OptionalUser,
    session: Session,
    Form(form): Form<DonateForm>,
) -> Response {
    let language = session_language(&session).await;

    let rejected = |error: String| {
        DonateTemplate {
            user: user.clone(),
            language,
            terms: &content::DONATION,
            programs: content::PROGRAMS,
            error: Some(error),
            amount: form.amount.clone(),
        }
        .into_response()
    };

    let Ok(parsed) = form.amount.trim().parse::<Decimal>() else {
        return rejected("Please enter a valid amount.".to_owned());
    };
    let amount = Rupees::new(parsed);
    if !amount.meets_donation_minimum() {
        return rejected(format!(
            "The minimum donation is {}.",
            content::DONATION.minimum_display
        ));
    }

    let program = form
        .program
        .as_deref()
        .and_then(content::program_by_id);

    state.pacing().submit_delay().await;

    let reference = format!("DON-{}", chrono::Utc::now().timestamp_millis());
    tracing::info!(%reference, %amount, "mock donation accepted");

    DonateThanksTemplate {
        user,
        language,
        amount,
        program,
        reference,
    }
    .into_response()
}
