//! Bid endpoint DTOs.

use chrono::{DateTime, Utc};
use serde::Deserialize;
use uuid::Uuid;
use validator::Validate;

use one_core::domain::entities::bid::BidStatus;

/// Request body for placing a bid. The bidder identity is never taken from
/// the body, it always comes from the verified credential.
#[derive(Debug, Deserialize, Validate)]
pub struct PlaceBidRequest {
    pub job_id: Uuid,

    #[validate(range(min = 0.01, message = "price must be positive"))]
    pub price: f64,

    #[validate(length(max = 2000, message = "comment must be at most 2000 characters"))]
    pub comment: String,

    pub deadline: DateTime<Utc>,
}

/// Query string for bid listings
#[derive(Debug, Deserialize)]
pub struct BidListQuery {
    /// `placed` or `received`
    pub role: String,
}

/// Request body for a bid status change
#[derive(Debug, Deserialize)]
pub struct UpdateBidStatusRequest {
    pub status: BidStatus,
}
