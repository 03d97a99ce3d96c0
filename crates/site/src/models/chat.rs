//! Chat transcript types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use aidconnect_core::{ChatMessageId, ChatRole};

/// One entry in a conversation transcript.
///
/// Transcripts live only for the lifetime of the conversation - they are
/// never persisted, never reordered, and never deleted, only appended.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    /// Millisecond-timestamp-derived id.
    pub id: ChatMessageId,
    pub role: ChatRole,
    /// Plain text; may contain literal newlines and markdown-like bullet
    /// and bold markers, rendered preformatted by the widget.
    pub content: String,
    pub timestamp: DateTime<Utc>,
}

impl ChatMessage {
    /// Build a message stamped `now`, with `offset` millis added to the id
    /// to keep same-tick messages distinct.
    #[must_use]
    pub fn now(role: ChatRole, content: impl Into<String>, offset: i64) -> Self {
        let at = Utc::now();
        Self {
            id: ChatMessageId::from_timestamp(at, offset),
            role,
            content: content.into(),
            timestamp: at,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_serialization() {
        let message = ChatMessage::now(ChatRole::Assistant, "Hello", 0);
        let json = serde_json::to_string(&message).unwrap();
        assert!(json.contains("\"role\":\"assistant\""));
        assert!(json.contains("\"content\":\"Hello\""));
    }

    #[test]
    fn test_offset_distinguishes_same_tick_ids() {
        let at = Utc::now();
        let a = ChatMessageId::from_timestamp(at, 0);
        let b = ChatMessageId::from_timestamp(at, 1);
        assert_ne!(a, b);
    }
}
