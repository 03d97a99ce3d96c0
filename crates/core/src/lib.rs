//! AidConnect Core - Shared types library.
//!
//! This crate provides common types used across all AidConnect components:
//! - `site` - Public website, donor/staff dashboards, and chat assistant
//! - `cli` - Command-line tools for seeding and inbox management
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no storage access, no HTTP.
//! This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for IDs, emails, amounts, and the closed
//!   role/status/language enums

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
