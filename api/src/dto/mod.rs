//! Request and response DTOs for the HTTP surface.

pub mod auth;
pub mod bid;
pub mod job;

pub use auth::{IssueTokenRequest, TokenIssuedResponse};
pub use bid::{BidListQuery, PlaceBidRequest, UpdateBidStatusRequest};
pub use job::{CreateJobRequest, UpdateJobRequest};
