//! Core types for AidConnect.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod amount;
pub mod email;
pub mod id;
pub mod language;
pub mod role;
pub mod status;

pub use amount::Rupees;
pub use email::{Email, EmailError};
pub use id::*;
pub use language::Language;
pub use role::Role;
pub use status::*;
