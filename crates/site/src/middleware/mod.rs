//! HTTP middleware stack for the site.
//!
//! # Middleware Order (bottom to top in Router)
//!
//! 1. `TraceLayer` (request tracing)
//! 2. Session layer (tower-sessions with in-memory store)

pub mod auth;
pub mod session;

pub use auth::{
    OptionalUser, RequireDonor, RequireStaff, clear_current_user, set_current_user,
};
pub use session::create_session_layer;
