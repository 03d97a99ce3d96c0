//! Newtype IDs for type-safe entity references.
//!
//! Entities are identified by opaque strings (user ids minted from login
//! timestamps, contact-message ids of the form `MSG-<millis>`). The
//! `define_string_id!` macro wraps them so the two cannot be mixed up at a
//! call site.

use chrono::{DateTime, Utc};

/// Macro to define a type-safe string ID wrapper.
///
/// Creates a newtype wrapper around `String` with:
/// - `Serialize`/`Deserialize` with `#[serde(transparent)]`
/// - `Debug`, `Clone`, `PartialEq`, `Eq`, `Hash`
/// - Conversion methods: `new()`, `as_str()`, `into_inner()`
/// - `From<String>` and `From<&str>` implementations
///
/// # Example
///
/// ```rust
/// # use aidconnect_core::define_string_id;
/// define_string_id!(UserId);
/// define_string_id!(ContactMessageId);
///
/// let user_id = UserId::new("1");
/// let message_id = ContactMessageId::new("MSG-1700000000000");
///
/// // These are different types, so this won't compile:
/// // let _: UserId = message_id;
/// ```
#[macro_export]
macro_rules! define_string_id {
    ($name:ident) => {
        #[derive(
            Debug,
            Clone,
            PartialEq,
            Eq,
            Hash,
            ::serde::Serialize,
            ::serde::Deserialize
        )]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Create a new ID from anything string-like.
            #[must_use]
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            /// Get the underlying string value.
            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Consume the ID and return its inner string.
            #[must_use]
            pub fn into_inner(self) -> String {
                self.0
            }
        }

        impl ::core::fmt::Display for $name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<String> for $name {
            fn from(id: String) -> Self {
                Self(id)
            }
        }

        impl From<&str> for $name {
            fn from(id: &str) -> Self {
                Self(id.to_owned())
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }
    };
}

define_string_id!(UserId);
define_string_id!(ContactMessageId);
define_string_id!(ChatMessageId);

impl UserId {
    /// Mint a fresh user ID from a login timestamp.
    #[must_use]
    pub fn from_timestamp(at: DateTime<Utc>) -> Self {
        Self::new(at.timestamp_millis().to_string())
    }
}

impl ContactMessageId {
    /// Mint a contact-message ID (`MSG-<millis>`) from a timestamp plus a
    /// small offset.
    ///
    /// Two saves can land in the same millisecond (the CLI seeder writes
    /// in a tight loop); the store bumps the offset until the id is free.
    #[must_use]
    pub fn from_timestamp(at: DateTime<Utc>, offset: i64) -> Self {
        Self::new(format!("MSG-{}", at.timestamp_millis() + offset))
    }
}

impl ChatMessageId {
    /// Mint a chat-message ID from a timestamp plus a small offset.
    ///
    /// The offset keeps the optimistic user message and the assistant reply
    /// minted in the same tick distinct.
    #[must_use]
    pub fn from_timestamp(at: DateTime<Utc>, offset: i64) -> Self {
        Self::new((at.timestamp_millis() + offset).to_string())
    }
}
