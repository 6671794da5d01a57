//! HTTP middleware: the authentication gate and CORS policy.

pub mod auth;
pub mod cors;

pub use auth::{AuthContext, AuthGate};
pub use cors::configure_cors;
