//! Rule-based response engine for the site assistant.
//!
//! Given free-text input, the caller's role, the page context, and the
//! display language, [`ResponseEngine::select_reply`] deterministically
//! selects one canned reply. There is no scoring and no NLP: matching is
//! case-insensitive unanchored substring search over fixed, ordered rule
//! tables, first match wins. The function is pure and total - every input
//! resolves to exactly one non-empty reply.
//!
//! The rule logic lives in [`rules`] as data (keyword groups mapped to
//! [`Topic`]s) so each rule and the priority ordering are independently
//! testable; [`replies`] turns a topic into the English canned text;
//! [`i18n`] substitutes the partially localized variants.

pub mod i18n;
pub mod replies;
pub mod rules;

pub use i18n::LocalizationPolicy;
pub use rules::{Topic, select_topic};

use aidconnect_core::{Language, Role};

/// Where the widget is mounted, for the administrative rule path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PageContext {
    /// Any public page.
    #[default]
    General,
    /// The staff dashboard or another administrative view.
    Admin,
}

/// The response-selection engine.
#[derive(Debug, Clone, Default)]
pub struct ResponseEngine {
    policy: LocalizationPolicy,
}

impl ResponseEngine {
    /// Create an engine with the given localization policy.
    #[must_use]
    pub const fn new(policy: LocalizationPolicy) -> Self {
        Self { policy }
    }

    /// Select the canned reply for one user message.
    ///
    /// Pure and total: identical arguments always yield the identical
    /// reply, and no input produces an empty one.
    #[must_use]
    pub fn select_reply(
        &self,
        text: &str,
        role: Role,
        context: PageContext,
        language: Language,
    ) -> String {
        let topic = rules::select_topic(text, role, context);
        if let Some(localized) = i18n::localized_reply(topic, language, self.policy) {
            return localized.to_owned();
        }
        replies::english_reply(topic)
    }

    /// The one-time welcome message seeded when a conversation opens.
    #[must_use]
    pub fn welcome(
        &self,
        role: Role,
        name: Option<&str>,
        context: PageContext,
        language: Language,
    ) -> String {
        if role == Role::Staff || context == PageContext::Admin {
            return replies::staff_welcome(name.unwrap_or("there"));
        }
        if role == Role::Donor {
            return replies::donor_welcome(name.unwrap_or("there"));
        }
        if let Some(localized) = i18n::localized_welcome(language, self.policy) {
            return localized.to_owned();
        }
        replies::GENERIC_WELCOME.to_owned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn engine() -> ResponseEngine {
        ResponseEngine::default()
    }

    #[test]
    fn test_totality_over_role_grid() {
        let inputs = ["", "   ", "hello", "donate", "total fund please", "xyzzy"];
        let roles = [Role::Visitor, Role::Donor, Role::Staff];
        let contexts = [PageContext::General, PageContext::Admin];
        for text in inputs {
            for role in roles {
                for context in contexts {
                    for language in aidconnect_core::Language::ALL {
                        let reply = engine().select_reply(text, role, context, language);
                        assert!(!reply.is_empty(), "empty reply for {text:?}/{role}/{language}");
                    }
                }
            }
        }
    }

    #[test]
    fn test_idempotence() {
        let a = engine().select_reply("how do I donate?", Role::Visitor, PageContext::General, Language::En);
        let b = engine().select_reply("how do I donate?", Role::Visitor, PageContext::General, Language::En);
        assert_eq!(a, b);
    }

    #[test]
    fn test_welcome_variants() {
        let staff = engine().welcome(Role::Staff, Some("Admin Staff"), PageContext::General, Language::En);
        assert!(staff.contains("Welcome back, Admin Staff"));

        let donor = engine().welcome(Role::Donor, Some("John Donor"), PageContext::General, Language::En);
        assert!(donor.contains("Hello John Donor"));

        // The admin page gets the staff welcome regardless of role.
        let admin_page = engine().welcome(Role::Visitor, None, PageContext::Admin, Language::En);
        assert!(admin_page.contains("NGO Staff"));

        let generic = engine().welcome(Role::Visitor, None, PageContext::General, Language::En);
        assert!(generic.contains("AidConnect Global"));
    }

    #[test]
    fn test_localized_welcome_for_hindi() {
        let hi = engine().welcome(Role::Visitor, None, PageContext::General, Language::Hi);
        let en = engine().welcome(Role::Visitor, None, PageContext::General, Language::En);
        assert_ne!(hi, en);
    }
}
