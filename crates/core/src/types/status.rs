//! Status enums for contact messages and chat transcripts.

use serde::{Deserialize, Serialize};

/// Contact-message lifecycle status.
///
/// The lifecycle is strictly forward-only: `New -> Read -> Replied`. The
/// message store rejects regressions via [`MessageStatus::can_advance_to`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum MessageStatus {
    /// Just submitted, nobody has looked at it.
    #[default]
    New,
    /// Opened by a staff member.
    Read,
    /// A staff member has responded.
    Replied,
}

impl MessageStatus {
    /// Whether moving to `next` is a legal forward transition.
    ///
    /// Re-asserting the current status counts as a no-op advance and is
    /// allowed; any backward move is not.
    #[must_use]
    pub const fn can_advance_to(self, next: Self) -> bool {
        self.rank() <= next.rank()
    }

    const fn rank(self) -> u8 {
        match self {
            Self::New => 0,
            Self::Read => 1,
            Self::Replied => 2,
        }
    }
}

impl std::fmt::Display for MessageStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::New => write!(f, "new"),
            Self::Read => write!(f, "read"),
            Self::Replied => write!(f, "replied"),
        }
    }
}

impl std::str::FromStr for MessageStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "new" => Ok(Self::New),
            "read" => Ok(Self::Read),
            "replied" => Ok(Self::Replied),
            _ => Err(format!("invalid message status: {s}")),
        }
    }
}

/// Chat message role within a conversation transcript.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChatRole {
    User,
    Assistant,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_forward_transitions_allowed() {
        assert!(MessageStatus::New.can_advance_to(MessageStatus::Read));
        assert!(MessageStatus::New.can_advance_to(MessageStatus::Replied));
        assert!(MessageStatus::Read.can_advance_to(MessageStatus::Replied));
    }

    #[test]
    fn test_backward_transitions_rejected() {
        assert!(!MessageStatus::Read.can_advance_to(MessageStatus::New));
        assert!(!MessageStatus::Replied.can_advance_to(MessageStatus::Read));
        assert!(!MessageStatus::Replied.can_advance_to(MessageStatus::New));
    }

    #[test]
    fn test_same_status_is_noop_advance() {
        assert!(MessageStatus::Read.can_advance_to(MessageStatus::Read));
    }

    #[test]
    fn test_serde_snake_case() {
        let json = serde_json::to_string(&MessageStatus::Replied).expect("serialize");
        assert_eq!(json, "\"replied\"");
        let json = serde_json::to_string(&ChatRole::Assistant).expect("serialize");
        assert_eq!(json, "\"assistant\"");
    }
}
