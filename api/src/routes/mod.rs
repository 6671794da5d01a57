//! Route handlers, grouped by resource.

pub mod auth;
pub mod bids;
pub mod health;
pub mod jobs;
