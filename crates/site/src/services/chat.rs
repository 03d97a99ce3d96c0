//! Chat conversation state and pacing.
//!
//! Each open widget owns one in-memory conversation: an append-only
//! transcript plus minimized state. Submissions on the same conversation
//! are serialized by holding the state lock across the simulated typing
//! delay, so transcripts interleave strictly user, assistant, user,
//! assistant. Closing a conversation bumps its epoch; an in-flight reply
//! that observes a stale epoch is cancelled and discarded.

use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use tracing::debug;
use uuid::Uuid;

use aidconnect_core::{ChatRole, Language, Role};

use crate::engine::{PageContext, ResponseEngine};
use crate::models::ChatMessage;

use super::Pacing;

/// What happens to a reply still being "typed" when its conversation
/// closes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ClosePolicy {
    /// Cancel the reply; nothing is appended after close.
    #[default]
    CancelAndDiscard,
    /// Let the reply land on the discarded transcript.
    DeliverSilently,
}

#[derive(Debug, thiserror::Error)]
pub enum ChatError {
    #[error("no conversation with id {0}")]
    UnknownConversation(Uuid),

    #[error("conversation {0} was closed")]
    ConversationClosed(Uuid),
}

#[derive(Debug)]
struct ConversationState {
    messages: Vec<ChatMessage>,
    minimized: bool,
    role: Role,
    context: PageContext,
    language: Language,
}

#[derive(Debug)]
struct Conversation {
    id: Uuid,
    /// Bumped on close. A submission captures the epoch before its typing
    /// delay and re-checks it after; a mismatch means the widget closed
    /// while the reply was pending.
    epoch: AtomicU64,
    state: tokio::sync::Mutex<ConversationState>,
}

/// Manages all live conversations.
#[derive(Debug, Clone)]
pub struct ChatService {
    inner: Arc<ChatServiceInner>,
}

#[derive(Debug)]
struct ChatServiceInner {
    engine: ResponseEngine,
    pacing: Pacing,
    close_policy: ClosePolicy,
    conversations: std::sync::Mutex<HashMap<Uuid, Arc<Conversation>>>,
}

impl ChatService {
    #[must_use]
    pub fn new(engine: ResponseEngine, pacing: Pacing, close_policy: ClosePolicy) -> Self {
        Self {
            inner: Arc::new(ChatServiceInner {
                engine,
                pacing,
                close_policy,
                conversations: std::sync::Mutex::new(HashMap::new()),
            }),
        }
    }

    /// Open a fresh conversation seeded with the one-time welcome message.
    pub async fn open(
        &self,
        role: Role,
        name: Option<&str>,
        context: PageContext,
        language: Language,
    ) -> (Uuid, Vec<ChatMessage>) {
        let welcome = self.inner.engine.welcome(role, name, context, language);
        let id = Uuid::new_v4();
        let conversation = Arc::new(Conversation {
            id,
            epoch: AtomicU64::new(0),
            state: tokio::sync::Mutex::new(ConversationState {
                messages: vec![ChatMessage::now(ChatRole::Assistant, welcome, 0)],
                minimized: false,
                role,
                context,
                language,
            }),
        });

        let transcript = conversation.state.lock().await.messages.clone();
        self.lock_map().insert(id, conversation);
        debug!(conversation_id = %id, %role, "conversation opened");
        (id, transcript)
    }

    /// The current transcript, in append order.
    pub async fn transcript(&self, id: Uuid) -> Result<Vec<ChatMessage>, ChatError> {
        let conversation = self.find(id)?;
        Ok(conversation.state.lock().await.messages.clone())
    }

    /// Submit one user message and wait for the canned reply.
    ///
    /// Blank input is ignored: nothing is appended and the transcript
    /// comes back unchanged. The state lock is held across the typing
    /// delay, so concurrent submissions on one conversation serialize.
    pub async fn submit(
        &self,
        id: Uuid,
        text: &str,
        language: Language,
    ) -> Result<Vec<ChatMessage>, ChatError> {
        let conversation = self.find(id)?;
        let mut state = conversation.state.lock().await;

        if text.trim().is_empty() {
            return Ok(state.messages.clone());
        }

        state.language = language;
        state
            .messages
            .push(ChatMessage::now(ChatRole::User, text, 0));

        let epoch = conversation.epoch.load(Ordering::Acquire);
        self.inner.pacing.typing_delay().await;

        if conversation.epoch.load(Ordering::Acquire) != epoch
            && self.inner.close_policy == ClosePolicy::CancelAndDiscard
        {
            debug!(conversation_id = %id, "reply cancelled by close");
            return Err(ChatError::ConversationClosed(id));
        }

        let reply =
            self.inner
                .engine
                .select_reply(text, state.role, state.context, state.language);
        state
            .messages
            .push(ChatMessage::now(ChatRole::Assistant, reply, 1));
        Ok(state.messages.clone())
    }

    /// Record the widget's minimized flag. Transcript is unaffected.
    pub async fn set_minimized(&self, id: Uuid, minimized: bool) -> Result<(), ChatError> {
        let conversation = self.find(id)?;
        conversation.state.lock().await.minimized = minimized;
        Ok(())
    }

    /// Close and discard a conversation. Idempotent; an unknown id is not
    /// an error. Any in-flight reply observes the epoch bump.
    pub fn close(&self, id: Uuid) {
        if let Some(conversation) = self.lock_map().remove(&id) {
            conversation.epoch.fetch_add(1, Ordering::Release);
            debug!(conversation_id = %conversation.id, "conversation closed");
        }
    }

    fn find(&self, id: Uuid) -> Result<Arc<Conversation>, ChatError> {
        self.lock_map()
            .get(&id)
            .cloned()
            .ok_or(ChatError::UnknownConversation(id))
    }

    fn lock_map(&self) -> std::sync::MutexGuard<'_, HashMap<Uuid, Arc<Conversation>>> {
        self.inner
            .conversations
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn service() -> ChatService {
        ChatService::new(
            ResponseEngine::default(),
            Pacing::Instant,
            ClosePolicy::CancelAndDiscard,
        )
    }

    #[tokio::test]
    async fn test_open_seeds_one_welcome() {
        let chat = service();
        let (_, transcript) = chat
            .open(Role::Visitor, None, PageContext::General, Language::En)
            .await;
        assert_eq!(transcript.len(), 1);
        assert_eq!(transcript.first().unwrap().role, ChatRole::Assistant);
    }

    #[tokio::test]
    async fn test_staff_welcome_uses_name() {
        let chat = service();
        let (_, transcript) = chat
            .open(Role::Staff, Some("Admin Staff"), PageContext::General, Language::En)
            .await;
        assert!(transcript.first().unwrap().content.contains("Admin Staff"));
    }

    #[tokio::test]
    async fn test_blank_input_is_ignored() {
        let chat = service();
        let (id, _) = chat
            .open(Role::Visitor, None, PageContext::General, Language::En)
            .await;
        let transcript = chat.submit(id, "   ", Language::En).await.unwrap();
        assert_eq!(transcript.len(), 1);
    }

    #[tokio::test]
    async fn test_submit_appends_user_then_assistant() {
        let chat = service();
        let (id, _) = chat
            .open(Role::Visitor, None, PageContext::General, Language::En)
            .await;
        let transcript = chat.submit(id, "how do I donate?", Language::En).await.unwrap();

        assert_eq!(transcript.len(), 3);
        let roles: Vec<ChatRole> = transcript.iter().map(|m| m.role).collect();
        assert_eq!(roles, [ChatRole::Assistant, ChatRole::User, ChatRole::Assistant]);
        assert!(transcript.last().unwrap().content.contains("₹100"));
    }

    #[tokio::test]
    async fn test_close_then_submit_fails() {
        let chat = service();
        let (id, _) = chat
            .open(Role::Visitor, None, PageContext::General, Language::En)
            .await;
        chat.close(id);
        let err = chat.submit(id, "hello", Language::En).await.unwrap_err();
        assert!(matches!(err, ChatError::UnknownConversation(_)));
    }

    #[tokio::test]
    async fn test_close_is_idempotent() {
        let chat = service();
        let (id, _) = chat
            .open(Role::Visitor, None, PageContext::General, Language::En)
            .await;
        chat.close(id);
        chat.close(id);
    }

    #[tokio::test]
    async fn test_minimize_preserves_transcript() {
        let chat = service();
        let (id, _) = chat
            .open(Role::Visitor, None, PageContext::General, Language::En)
            .await;
        chat.submit(id, "mission", Language::En).await.unwrap();
        chat.set_minimized(id, true).await.unwrap();
        chat.set_minimized(id, false).await.unwrap();
        let transcript = chat.transcript(id).await.unwrap();
        assert_eq!(transcript.len(), 3);
    }

    #[tokio::test(start_paused = true)]
    async fn test_close_during_typing_cancels_reply() {
        let chat = ChatService::new(
            ResponseEngine::default(),
            Pacing::Simulated,
            ClosePolicy::CancelAndDiscard,
        );
        let (id, _) = chat
            .open(Role::Visitor, None, PageContext::General, Language::En)
            .await;

        let racing = chat.clone();
        let submit = tokio::spawn(async move { racing.submit(id, "mission", Language::En).await });

        // Let the submission reach its typing delay, then close.
        tokio::task::yield_now().await;
        chat.close(id);

        let result = submit.await.unwrap();
        assert!(matches!(result, Err(ChatError::ConversationClosed(_))));
    }

    #[tokio::test(start_paused = true)]
    async fn test_deliver_silently_appends_after_close() {
        let chat = ChatService::new(
            ResponseEngine::default(),
            Pacing::Simulated,
            ClosePolicy::DeliverSilently,
        );
        let (id, _) = chat
            .open(Role::Visitor, None, PageContext::General, Language::En)
            .await;

        let racing = chat.clone();
        let submit = tokio::spawn(async move { racing.submit(id, "mission", Language::En).await });

        tokio::task::yield_now().await;
        chat.close(id);

        let transcript = submit.await.unwrap().unwrap();
        assert_eq!(transcript.last().unwrap().role, ChatRole::Assistant);
    }
}
