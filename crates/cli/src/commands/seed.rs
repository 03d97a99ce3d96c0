//! Seed the local store with demo contact messages.

use tracing::info;

use aidconnect_core::{Email, Role, UserId};
use aidconnect_site::models::NewContactMessage;
use aidconnect_site::services::MessageStore;
use aidconnect_site::storage::LocalStore;

use super::resolve_data_dir;

/// Seed a handful of demo contact messages.
pub fn run(data_dir: Option<&str>) -> Result<(), Box<dyn std::error::Error>> {
    let dir = resolve_data_dir(data_dir);
    let store = MessageStore::new(LocalStore::open(&dir));

    let demo = [
        NewContactMessage {
            name: "Priya Sharma".to_owned(),
            email: Email::parse("priya.sharma@example.com")?,
            subject: "Volunteering in Mumbai".to_owned(),
            body: "I'd like to help with the education program on weekends.".to_owned(),
            sender_role: None,
            sender_id: None,
        },
        NewContactMessage {
            name: "John Donor".to_owned(),
            email: Email::parse("donor@example.com")?,
            subject: "80G certificate for my last donation".to_owned(),
            body: "Could you resend the certificate for DON-2024-0821?".to_owned(),
            sender_role: Some(Role::Donor),
            sender_id: Some(UserId::new("2")),
        },
        NewContactMessage {
            name: "Arjun Mehta".to_owned(),
            email: Email::parse("arjun@example.org")?,
            subject: "Partnership inquiry".to_owned(),
            body: "Our company would like to sponsor a clean water project.".to_owned(),
            sender_role: None,
            sender_id: None,
        },
    ];

    for message in demo {
        let saved = store.save(message)?;
        info!(message_id = %saved.id, subject = %saved.subject, "seeded message");
    }

    info!(data_dir = %dir.display(), "seeding complete");
    Ok(())
}
