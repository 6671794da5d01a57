//! Repository interfaces for persistence, implemented by the infra layer.

pub mod bid;
pub mod job;

pub use bid::{BidRepository, MockBidRepository};
pub use job::{JobRepository, MockJobRepository};
