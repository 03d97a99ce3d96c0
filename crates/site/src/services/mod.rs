//! Application services.

pub mod auth;
pub mod chat;
pub mod messages;
pub mod pacing;

pub use auth::{AuthError, SessionService};
pub use chat::{ChatError, ChatService, ClosePolicy};
pub use messages::{MessageStore, MessageStoreError};
pub use pacing::Pacing;
