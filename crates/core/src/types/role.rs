//! User role classification.

use serde::{Deserialize, Serialize};

/// Identity classification used by the role-based access gate.
///
/// A closed variant set so the response engine's branch selection is
/// compile-time exhaustive and an unhandled role cannot fall through
/// silently.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// Anonymous site visitor (no account).
    #[default]
    Visitor,
    /// Authenticated donor.
    Donor,
    /// NGO staff member.
    Staff,
}

impl Role {
    /// Whether this role carries an authenticated account.
    #[must_use]
    pub const fn is_authenticated(self) -> bool {
        !matches!(self, Self::Visitor)
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Visitor => write!(f, "visitor"),
            Self::Donor => write!(f, "donor"),
            Self::Staff => write!(f, "staff"),
        }
    }
}

impl std::str::FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "visitor" => Ok(Self::Visitor),
            "donor" => Ok(Self::Donor),
            "staff" => Ok(Self::Staff),
            _ => Err(format!("invalid role: {s}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip() {
        for role in [Role::Visitor, Role::Donor, Role::Staff] {
            let parsed: Role = role.to_string().parse().expect("parse role");
            assert_eq!(parsed, role);
        }
    }

    #[test]
    fn test_invalid_rejected() {
        assert!("admin".parse::<Role>().is_err());
    }

    #[test]
    fn test_default_is_visitor() {
        assert_eq!(Role::default(), Role::Visitor);
        assert!(!Role::Visitor.is_authenticated());
        assert!(Role::Donor.is_authenticated());
    }
}
