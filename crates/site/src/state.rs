//! Application state shared across handlers.

use std::sync::Arc;

use crate::config::SiteConfig;
use crate::engine::ResponseEngine;
use crate::services::{ChatService, ClosePolicy, MessageStore, Pacing, SessionService};
use crate::storage::LocalStore;

/// Application state shared across all handlers.
///
/// This struct is cheaply cloneable via `Arc` and provides access to
/// shared resources like the local store and the mock services.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: SiteConfig,
    store: LocalStore,
    auth: SessionService,
    messages: MessageStore,
    chat: ChatService,
    pacing: Pacing,
}

impl AppState {
    /// Create the application state.
    ///
    /// Opens the local store at the configured data directory (falling
    /// back to in-memory on failure) and wires the mock services to it.
    #[must_use]
    pub fn new(config: SiteConfig) -> Self {
        let pacing = if config.simulated_delays {
            Pacing::Simulated
        } else {
            Pacing::Instant
        };
        let store = LocalStore::open(&config.data_dir);
        let auth = SessionService::new(store.clone(), pacing);
        let messages = MessageStore::new(store.clone());
        let chat = ChatService::new(ResponseEngine::default(), pacing, ClosePolicy::default());

        Self {
            inner: Arc::new(AppStateInner {
                config,
                store,
                auth,
                messages,
                chat,
                pacing,
            }),
        }
    }

    /// Get a reference to the site configuration.
    #[must_use]
    pub fn config(&self) -> &SiteConfig {
        &self.inner.config
    }

    /// Get a reference to the local key-value store.
    #[must_use]
    pub fn store(&self) -> &LocalStore {
        &self.inner.store
    }

    /// Get a reference to the authentication service.
    #[must_use]
    pub fn auth(&self) -> &SessionService {
        &self.inner.auth
    }

    /// Get a reference to the contact message store.
    #[must_use]
    pub fn messages(&self) -> &MessageStore {
        &self.inner.messages
    }

    /// Get a reference to the chat service.
    #[must_use]
    pub fn chat(&self) -> &ChatService {
        &self.inner.chat
    }

    /// The pacing mode services were built with.
    #[must_use]
    pub fn pacing(&self) -> Pacing {
        self.inner.pacing
    }
}
