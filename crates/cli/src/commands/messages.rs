//! Contact inbox inspection and status updates.

use aidconnect_core::{ContactMessageId, MessageStatus};
use aidconnect_site::services::MessageStore;
use aidconnect_site::storage::LocalStore;

use super::resolve_data_dir;

/// List every stored contact message in submission order.
#[allow(clippy::print_stdout)]
pub fn list(data_dir: Option<&str>) -> Result<(), Box<dyn std::error::Error>> {
    let store = MessageStore::new(LocalStore::open(&resolve_data_dir(data_dir)));
    let messages = store.all_messages()?;

    if messages.is_empty() {
        println!("No contact messages stored.");
        return Ok(());
    }

    for message in messages {
        println!(
            "{}  [{}]  {} <{}>  {}",
            message.id,
            message.status,
            message.name,
            message.email,
            message.subject
        );
    }
    Ok(())
}

/// Advance one message's status.
#[allow(clippy::print_stdout)]
pub fn set_status(
    data_dir: Option<&str>,
    id: &str,
    status: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    let parsed = status
        .parse::<MessageStatus>()
        .map_err(|_| format!("Invalid status: {status}. Valid: new, read, replied"))?;

    let store = MessageStore::new(LocalStore::open(&resolve_data_dir(data_dir)));
    let updated = store.update_status(&ContactMessageId::new(id), parsed)?;
    println!("{} -> {}", updated.id, updated.status);
    Ok(())
}
