//! Session-related types.
//!
//! Types stored in the tower session for authentication and display state.

use serde::{Deserialize, Serialize};

use aidconnect_core::{Email, Role, UserId};

/// The authenticated identity, as persisted and as carried in the session.
///
/// This is the whole identity record: it is overwritten wholesale on every
/// login/register and deleted on logout. There is no ambient global - it
/// travels through extractors and function arguments.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurrentUser {
    /// Opaque user ID (fixture id or minted from the login timestamp).
    pub id: UserId,
    /// User's email address.
    pub email: Email,
    /// Display name (fixture name, registration name, or the email local
    /// part for generic logins).
    pub name: String,
    /// Role chosen at login time; never verified against a real credential.
    pub role: Role,
}

impl CurrentUser {
    /// Convenience for templates.
    #[must_use]
    pub fn is_staff(&self) -> bool {
        self.role == Role::Staff
    }
}

/// Session keys for per-visitor state.
pub mod session_keys {
    /// Key for storing the current logged-in user.
    pub const CURRENT_USER: &str = "current_user";

    /// Key for the visitor's chosen display language.
    pub const LANGUAGE: &str = "language";

    /// Key for the visitor's open chat conversation id.
    pub const CONVERSATION: &str = "conversation";
}
