//! Ownership-scoped bid queries and status transitions.

use std::sync::Arc;

use uuid::Uuid;

use crate::domain::entities::bid::{Bid, BidStatus};
use crate::errors::{DomainError, DomainResult};
use crate::repositories::BidRepository;

/// Direction of a bid listing: bids the identity placed, or bids received
/// on jobs the identity owns. One explicit flag, not a truthy toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BidRole {
    Placed,
    Received,
}

impl BidRole {
    /// Parses the `role` query parameter
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "placed" => Some(BidRole::Placed),
            "received" => Some(BidRole::Received),
            _ => None,
        }
    }
}

/// Service for bid listings and owner-driven status changes
pub struct BidQueryService<B: BidRepository> {
    bids: Arc<B>,
}

impl<B: BidRepository> BidQueryService<B> {
    pub fn new(bids: Arc<B>) -> Self {
        Self { bids }
    }

    /// Lists bids for `email` in the requested direction.
    ///
    /// Callers must already have passed the AuthGate as this identity.
    pub async fn list_bids(&self, email: &str, role: BidRole) -> DomainResult<Vec<Bid>> {
        match role {
            BidRole::Placed => self.bids.find_by_bidder(email).await,
            BidRole::Received => self.bids.find_by_job_owner(email).await,
        }
    }

    /// Moves a bid to a new status. Only the owner of the referenced job
    /// may do this; the bidder never mutates a bid after placement.
    pub async fn update_bid_status(
        &self,
        bid_id: Uuid,
        caller_email: &str,
        status: BidStatus,
    ) -> DomainResult<Bid> {
        let bid = self
            .bids
            .find_by_id(bid_id)
            .await?
            .ok_or_else(|| DomainError::not_found("Bid"))?;

        if !bid.is_for_job_owned_by(caller_email) {
            return Err(DomainError::Forbidden);
        }

        self.bids
            .update_status(bid_id, status)
            .await?
            .ok_or_else(|| DomainError::not_found("Bid"))
    }
}
