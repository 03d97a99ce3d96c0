//! Domain models for the site.

pub mod chat;
pub mod message;
pub mod session;

pub use chat::ChatMessage;
pub use message::{ContactMessage, NewContactMessage};
pub use session::{CurrentUser, session_keys};
