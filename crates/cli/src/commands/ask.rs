//! Run one input through the response engine.
//!
//! Useful for eyeballing rule priority without clicking through the
//! widget: the reply is selected exactly as the site would select it.

use aidconnect_core::{Language, Role};
use aidconnect_site::engine::{PageContext, ResponseEngine};

/// Errors for the `ask` command.
#[derive(Debug, thiserror::Error)]
pub enum AskError {
    #[error("Invalid role: {0}. Valid roles: visitor, donor, staff")]
    InvalidRole(String),

    #[error("Invalid language: {0}")]
    InvalidLanguage(String),
}

/// Print the engine's reply for one input.
#[allow(clippy::print_stdout)]
pub fn run(role: &str, language: &str, admin_page: bool, text: &str) -> Result<(), AskError> {
    let role = role
        .parse::<Role>()
        .map_err(|_| AskError::InvalidRole(role.to_owned()))?;
    let language = language
        .parse::<Language>()
        .map_err(|_| AskError::InvalidLanguage(language.to_owned()))?;
    let context = if admin_page {
        PageContext::Admin
    } else {
        PageContext::General
    };

    let reply = ResponseEngine::default().select_reply(text, role, context, language);
    println!("{reply}");
    Ok(())
}
