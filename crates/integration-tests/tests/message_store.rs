//! Integration tests for the contact message store.

#![allow(clippy::unwrap_used)]

use aidconnect_core::{ContactMessageId, Email, MessageStatus, Role, UserId};
use aidconnect_site::models::NewContactMessage;
use aidconnect_site::services::MessageStoreError;

use aidconnect_integration_tests::{test_messages, test_messages_at};

fn submission(subject: &str) -> NewContactMessage {
    NewContactMessage {
        name: "Priya Sharma".to_owned(),
        email: Email::parse("priya@example.com").unwrap(),
        subject: subject.to_owned(),
        body: "Hello there".to_owned(),
        sender_role: None,
        sender_id: None,
    }
}

#[test]
fn test_round_trip() {
    let store = test_messages();
    let saved = store.save(submission("Volunteering")).unwrap();

    let all = store.all_messages().unwrap();
    assert_eq!(all.len(), 1);
    let stored = all.first().unwrap();
    assert_eq!(stored.id, saved.id);
    assert_eq!(stored.subject, "Volunteering");
    assert_eq!(stored.status, MessageStatus::New);
    assert!(stored.id.as_str().starts_with("MSG-"));
}

#[test]
fn test_same_millisecond_saves_get_distinct_ids() {
    let store = test_messages();

    // Back-to-back saves routinely land in the same millisecond, as the
    // CLI seeder does.
    let first = store.save(submission("first")).unwrap();
    let second = store.save(submission("second")).unwrap();
    assert_ne!(first.id, second.id);

    // A status update reaches the intended record, not its twin.
    store.update_status(&second.id, MessageStatus::Read).unwrap();
    let all = store.all_messages().unwrap();
    assert_eq!(all.first().unwrap().status, MessageStatus::New);
    assert_eq!(all.last().unwrap().status, MessageStatus::Read);
}

#[test]
fn test_forward_lifecycle() {
    let store = test_messages();
    let saved = store.save(submission("s")).unwrap();

    store.update_status(&saved.id, MessageStatus::Read).unwrap();
    store.update_status(&saved.id, MessageStatus::Replied).unwrap();

    let all = store.all_messages().unwrap();
    assert_eq!(all.first().unwrap().status, MessageStatus::Replied);
}

#[test]
fn test_backward_transition_rejected() {
    let store = test_messages();
    let saved = store.save(submission("s")).unwrap();
    store.update_status(&saved.id, MessageStatus::Replied).unwrap();

    let err = store.update_status(&saved.id, MessageStatus::Read).unwrap_err();
    assert!(matches!(err, MessageStoreError::InvalidTransition { .. }));
}

#[test]
fn test_unknown_message_rejected() {
    let store = test_messages();
    let err = store
        .update_status(&ContactMessageId::new("MSG-does-not-exist"), MessageStatus::Read)
        .unwrap_err();
    assert!(matches!(err, MessageStoreError::UnknownMessage(_)));
}

#[test]
fn test_per_user_filtering() {
    let store = test_messages();
    let donor_id = UserId::new("2");

    store
        .save(NewContactMessage {
            sender_role: Some(Role::Donor),
            sender_id: Some(donor_id.clone()),
            ..submission("from the donor")
        })
        .unwrap();
    store.save(submission("anonymous")).unwrap();

    let own = store.messages_for_user(&donor_id).unwrap();
    assert_eq!(own.len(), 1);
    assert_eq!(own.first().unwrap().subject, "from the donor");

    let other = store.messages_for_user(&UserId::new("999")).unwrap();
    assert!(other.is_empty());
}

#[test]
fn test_persistence_across_reopen() {
    let dir = tempfile::tempdir().unwrap();

    let saved = {
        let store = test_messages_at(dir.path());
        let saved = store.save(submission("persisted")).unwrap();
        store.update_status(&saved.id, MessageStatus::Read).unwrap();
        saved
    };

    // A fresh store over the same directory sees the same list.
    let reopened = test_messages_at(dir.path());
    let all = reopened.all_messages().unwrap();
    assert_eq!(all.len(), 1);
    let stored = all.first().unwrap();
    assert_eq!(stored.id, saved.id);
    assert_eq!(stored.status, MessageStatus::Read);
}
