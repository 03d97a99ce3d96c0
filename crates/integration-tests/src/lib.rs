//! Integration tests for the AidConnect Global site.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p aidconnect-integration-tests
//! ```
//!
//! Everything runs against in-memory or temp-directory stores with
//! instant pacing; no server or network is required.
//!
//! # Test Categories
//!
//! - `response_engine` - rule priority, denial gate, localization
//! - `message_store` - contact inbox lifecycle and persistence
//! - `session_auth` - mock login, registration, logout
//! - `chat_flow` - conversation state machine and close policies

use std::path::Path;

use aidconnect_site::engine::ResponseEngine;
use aidconnect_site::services::{ChatService, ClosePolicy, MessageStore, Pacing, SessionService};
use aidconnect_site::storage::LocalStore;

/// A session service over an in-memory store with instant pacing.
#[must_use]
pub fn test_auth() -> SessionService {
    SessionService::new(LocalStore::in_memory(), Pacing::Instant)
}

/// A session service over a disk-backed store, for persistence tests.
#[must_use]
pub fn test_auth_at(dir: &Path) -> SessionService {
    SessionService::new(LocalStore::open(dir), Pacing::Instant)
}

/// A message store over an in-memory store.
#[must_use]
pub fn test_messages() -> MessageStore {
    MessageStore::new(LocalStore::in_memory())
}

/// A message store over a disk-backed store, for persistence tests.
#[must_use]
pub fn test_messages_at(dir: &Path) -> MessageStore {
    MessageStore::new(LocalStore::open(dir))
}

/// A chat service with instant pacing and the given close policy.
#[must_use]
pub fn test_chat(close_policy: ClosePolicy) -> ChatService {
    ChatService::new(ResponseEngine::default(), Pacing::Instant, close_policy)
}
