//! Contact-message domain types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use aidconnect_core::{ContactMessageId, Email, MessageStatus, Role, UserId};

/// A submitted contact-form message, as persisted.
///
/// Records are append-only: status is the only field that ever changes, and
/// only forward along `New -> Read -> Replied`. The whole ordered list is
/// rewritten on every mutation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactMessage {
    /// `MSG-<millis>` identifier.
    pub id: ContactMessageId,
    pub name: String,
    pub email: Email,
    pub subject: String,
    pub body: String,
    pub created_at: DateTime<Utc>,
    pub status: MessageStatus,
    /// Donor or Visitor, when the sender was known at submission time.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sender_role: Option<Role>,
    /// Identity reference for logged-in senders.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sender_id: Option<UserId>,
}

/// Fields the contact form supplies; the store assigns the rest.
///
/// Field validation (non-empty name/subject/body, parseable email) is the
/// form's responsibility, not the store's.
#[derive(Debug, Clone)]
pub struct NewContactMessage {
    pub name: String,
    pub email: Email,
    pub subject: String,
    pub body: String,
    pub sender_role: Option<Role>,
    pub sender_id: Option<UserId>,
}
