//! Contact message store.
//!
//! Messages live as one ordered JSON array under a single storage key,
//! rewritten wholesale on every change. Submission order is preserved;
//! the only mutation is the forward-only status transition.

use chrono::Utc;
use tracing::info;

use aidconnect_core::{ContactMessageId, MessageStatus, UserId};

use crate::models::{ContactMessage, NewContactMessage};
use crate::storage::{LocalStore, StorageError, keys};

/// Append-only store for contact form submissions.
#[derive(Debug, Clone)]
pub struct MessageStore {
    store: LocalStore,
}

#[derive(Debug, thiserror::Error)]
pub enum MessageStoreError {
    #[error("no message with id {0}")]
    UnknownMessage(ContactMessageId),

    /// Status may only move forward along new -> read -> replied.
    #[error("cannot move message status from {from} back to {to}")]
    InvalidTransition {
        from: MessageStatus,
        to: MessageStatus,
    },

    #[error(transparent)]
    Storage(#[from] StorageError),
}

impl MessageStore {
    #[must_use]
    pub const fn new(store: LocalStore) -> Self {
        Self { store }
    }

    /// Persist a new submission: assigns the id and timestamp, stamps the
    /// status `new`, and appends to the stored list.
    pub fn save(&self, new: NewContactMessage) -> Result<ContactMessage, MessageStoreError> {
        let created_at = Utc::now();
        let mut messages = self.all_messages()?;

        // Saves in the same millisecond would mint the same `MSG-<millis>`
        // id; bump the offset until the id is free.
        let mut offset = 0;
        let mut id = ContactMessageId::from_timestamp(created_at, offset);
        while messages.iter().any(|m| m.id == id) {
            offset += 1;
            id = ContactMessageId::from_timestamp(created_at, offset);
        }

        let message = ContactMessage {
            id,
            name: new.name,
            email: new.email,
            subject: new.subject,
            body: new.body,
            created_at,
            status: MessageStatus::New,
            sender_role: new.sender_role,
            sender_id: new.sender_id,
        };

        messages.push(message.clone());
        self.store.set(keys::MESSAGES, &messages)?;

        info!(message_id = %message.id, "contact message saved");
        Ok(message)
    }

    /// Advance a message's status.
    ///
    /// Same-status updates are accepted as no-ops; backward transitions
    /// are rejected and leave the stored list untouched.
    pub fn update_status(
        &self,
        id: &ContactMessageId,
        status: MessageStatus,
    ) -> Result<ContactMessage, MessageStoreError> {
        let mut messages = self.all_messages()?;
        let message = messages
            .iter_mut()
            .find(|m| m.id == *id)
            .ok_or_else(|| MessageStoreError::UnknownMessage(id.clone()))?;

        if !message.status.can_advance_to(status) {
            return Err(MessageStoreError::InvalidTransition {
                from: message.status,
                to: status,
            });
        }

        message.status = status;
        let updated = message.clone();
        self.store.set(keys::MESSAGES, &messages)?;

        info!(message_id = %id, status = %status, "message status updated");
        Ok(updated)
    }

    /// Every stored message, in submission order.
    pub fn all_messages(&self) -> Result<Vec<ContactMessage>, MessageStoreError> {
        Ok(self
            .store
            .get::<Vec<ContactMessage>>(keys::MESSAGES)?
            .unwrap_or_default())
    }

    /// Messages submitted by one logged-in sender, in submission order.
    pub fn messages_for_user(
        &self,
        user_id: &UserId,
    ) -> Result<Vec<ContactMessage>, MessageStoreError> {
        let mut messages = self.all_messages()?;
        messages.retain(|m| m.sender_id.as_ref() == Some(user_id));
        Ok(messages)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use aidconnect_core::{Email, Role};

    fn store() -> MessageStore {
        MessageStore::new(LocalStore::in_memory())
    }

    fn submission(subject: &str) -> NewContactMessage {
        NewContactMessage {
            name: "Priya".to_owned(),
            email: Email::parse("priya@example.com").unwrap(),
            subject: subject.to_owned(),
            body: "Hello".to_owned(),
            sender_role: None,
            sender_id: None,
        }
    }

    #[test]
    fn test_save_assigns_id_and_new_status() {
        let messages = store();
        let saved = messages.save(submission("Volunteering")).unwrap();
        assert!(saved.id.as_str().starts_with("MSG-"));
        assert_eq!(saved.status, MessageStatus::New);
    }

    #[test]
    fn test_submission_order_preserved() {
        let messages = store();
        messages.save(submission("first")).unwrap();
        messages.save(submission("second")).unwrap();
        messages.save(submission("third")).unwrap();

        let all = messages.all_messages().unwrap();
        let subjects: Vec<&str> = all.iter().map(|m| m.subject.as_str()).collect();
        assert_eq!(subjects, ["first", "second", "third"]);
    }

    #[test]
    fn test_rapid_saves_mint_distinct_ids() {
        let messages = store();
        let a = messages.save(submission("a")).unwrap();
        let b = messages.save(submission("b")).unwrap();
        let c = messages.save(submission("c")).unwrap();

        assert_ne!(a.id, b.id);
        assert_ne!(b.id, c.id);
        assert_ne!(a.id, c.id);

        // Each record stays individually addressable.
        messages.update_status(&c.id, MessageStatus::Read).unwrap();
        let all = messages.all_messages().unwrap();
        let read = all
            .iter()
            .filter(|m| m.status == MessageStatus::Read)
            .count();
        assert_eq!(read, 1);
        assert_eq!(all.last().unwrap().status, MessageStatus::Read);
    }

    #[test]
    fn test_status_advances_forward() {
        let messages = store();
        let saved = messages.save(submission("s")).unwrap();

        let read = messages.update_status(&saved.id, MessageStatus::Read).unwrap();
        assert_eq!(read.status, MessageStatus::Read);

        let replied = messages.update_status(&saved.id, MessageStatus::Replied).unwrap();
        assert_eq!(replied.status, MessageStatus::Replied);
    }

    #[test]
    fn test_same_status_is_a_noop() {
        let messages = store();
        let saved = messages.save(submission("s")).unwrap();
        messages.update_status(&saved.id, MessageStatus::Read).unwrap();
        let again = messages.update_status(&saved.id, MessageStatus::Read).unwrap();
        assert_eq!(again.status, MessageStatus::Read);
    }

    #[test]
    fn test_backward_transition_rejected() {
        let messages = store();
        let saved = messages.save(submission("s")).unwrap();
        messages.update_status(&saved.id, MessageStatus::Replied).unwrap();

        let err = messages
            .update_status(&saved.id, MessageStatus::New)
            .unwrap_err();
        assert!(matches!(
            err,
            MessageStoreError::InvalidTransition {
                from: MessageStatus::Replied,
                to: MessageStatus::New
            }
        ));

        // The stored record is untouched.
        let all = messages.all_messages().unwrap();
        assert_eq!(all.first().unwrap().status, MessageStatus::Replied);
    }

    #[test]
    fn test_unknown_id_rejected() {
        let messages = store();
        let err = messages
            .update_status(&ContactMessageId::new("MSG-0"), MessageStatus::Read)
            .unwrap_err();
        assert!(matches!(err, MessageStoreError::UnknownMessage(_)));
    }

    #[test]
    fn test_messages_for_user_filters_by_sender() {
        let messages = store();
        let mine = NewContactMessage {
            sender_role: Some(Role::Donor),
            sender_id: Some(aidconnect_core::UserId::new("2")),
            ..submission("mine")
        };
        messages.save(mine).unwrap();
        messages.save(submission("anonymous")).unwrap();

        let own = messages
            .messages_for_user(&aidconnect_core::UserId::new("2"))
            .unwrap();
        assert_eq!(own.len(), 1);
        assert_eq!(own.first().unwrap().subject, "mine");
    }
}
