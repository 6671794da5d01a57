//! Bid route handlers.

pub mod list;
pub mod place;
pub mod status;
