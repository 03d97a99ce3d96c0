//! Role-gated dashboard route handlers.
//!
//! The staff dashboard shows the contact inbox and the mock report
//! figures; the donor dashboard shows the donor's fixed history,
//! certificates, and own messages. Figures match the chat replies.

use askama::Template;
use askama_web::WebTemplate;
use axum::Form;
use axum::extract::{Path, State};
use axum::response::{IntoResponse, Redirect, Response};
use serde::Deserialize;
use tower_sessions::Session;
use tracing::instrument;

use aidconnect_core::{ContactMessageId, Language, MessageStatus};

use crate::error::AppError;
use crate::filters;
use crate::middleware::{RequireDonor, RequireStaff};
use crate::models::{ContactMessage, CurrentUser};
use crate::state::AppState;

use super::session_language;

/// Inbox counts by status.
pub struct InboxStats {
    pub total: usize,
    pub unread: usize,
    pub replied: usize,
}

/// One fixed certificate entry on the donor dashboard.
pub struct Certificate {
    pub donation_id: &'static str,
    pub program: &'static str,
    pub amount: &'static str,
    pub date: &'static str,
}

/// The donor's fixed certificate list.
const CERTIFICATES: &[Certificate] = &[
    Certificate {
        donation_id: "DON-2024-0112",
        program: "Education",
        amount: "₹10,000",
        date: "Jan 12, 2024",
    },
    Certificate {
        donation_id: "DON-2024-0403",
        program: "Healthcare",
        amount: "₹10,000",
        date: "Apr 3, 2024",
    },
    Certificate {
        donation_id: "DON-2024-0821",
        program: "Education",
        amount: "₹5,000",
        date: "Aug 21, 2024",
    },
];

/// Staff dashboard template.
#[derive(Template, WebTemplate)]
#[template(path = "dashboard/staff.html")]
pub struct StaffDashboardTemplate {
    pub user: Option<CurrentUser>,
    pub language: Language,
    pub stats: InboxStats,
    /// Newest first.
    pub inbox: Vec<ContactMessage>,
}

/// Donor dashboard template.
#[derive(Template, WebTemplate)]
#[template(path = "dashboard/donor.html")]
pub struct DonorDashboardTemplate {
    pub user: Option<CurrentUser>,
    pub language: Language,
    pub certificates: &'static [Certificate],
    pub messages: Vec<ContactMessage>,
}

/// Status update form data.
#[derive(Debug, Deserialize)]
pub struct StatusForm {
    pub status: String,
}

/// Display the staff dashboard.
#[instrument(skip_all)]
pub async fn staff_dashboard(
    State(state): State<AppState>,
    RequireStaff(user): RequireStaff,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let mut inbox = state.messages().all_messages()?;
    inbox.reverse();

    let stats = InboxStats {
        total: inbox.len(),
        unread: inbox.iter().filter(|m| m.status == MessageStatus::New).count(),
        replied: inbox
            .iter()
            .filter(|m| m.status == MessageStatus::Replied)
            .count(),
    };

    Ok(StaffDashboardTemplate {
        user: Some(user),
        language: session_language(&session).await,
        stats,
        inbox,
    })
}

/// Advance a contact message's status from the inbox.
///
/// Backward transitions are rejected by the store and surface as 422.
#[instrument(skip_all, fields(message_id = %id))]
pub async fn update_message_status(
    State(state): State<AppState>,
    RequireStaff(_user): RequireStaff,
    Path(id): Path<String>,
    Form(form): Form<StatusForm>,
) -> Result<Response, AppError> {
    let status = form
        .status
        .parse::<MessageStatus>()
        .map_err(|_| AppError::BadRequest(format!("unknown status: {}", form.status)))?;

    state
        .messages()
        .update_status(&ContactMessageId::new(id), status)?;

    Ok(Redirect::to("/staff/dashboard").into_response())
}

/// Display the donor dashboard.
#[instrument(skip_all)]
pub async fn donor_dashboard(
    State(state): State<AppState>,
    RequireDonor(user): RequireDonor,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let messages = state.messages().messages_for_user(&user.id)?;

    Ok(DonorDashboardTemplate {
        user: Some(user),
        language: session_language(&session).await,
        certificates: CERTIFICATES,
        messages,
    })
}
