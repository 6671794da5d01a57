//! Bid repository trait defining the interface for bid persistence.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::entities::bid::{Bid, BidStatus};
use crate::errors::DomainError;

/// Repository trait for Bid entity persistence operations
#[async_trait]
pub trait BidRepository: Send + Sync {
    /// Persist a new bid.
    ///
    /// The store is the arbiter of the one-bid-per-(bidder, job) invariant:
    /// implementations must reject a second bid for the same pair with
    /// `DomainError::DuplicateBid`, even under concurrent inserts. The MySQL
    /// implementation relies on a unique index; the mock performs the check
    /// and the insert under a single write guard.
    async fn insert(&self, bid: Bid) -> Result<Bid, DomainError>;

    /// Find a bid by id
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Bid>, DomainError>;

    /// Find the bid a bidder placed on a specific job, if any
    async fn find_by_bidder_and_job(
        &self,
        bidder_email: &str,
        job_id: Uuid,
    ) -> Result<Option<Bid>, DomainError>;

    /// List bids placed by the given bidder, in insertion order
    async fn find_by_bidder(&self, bidder_email: &str) -> Result<Vec<Bid>, DomainError>;

    /// List bids on jobs owned by the given identity, in insertion order
    async fn find_by_job_owner(&self, owner_email: &str) -> Result<Vec<Bid>, DomainError>;

    /// Set a bid's status
    ///
    /// # Returns
    /// * `Ok(Some(Bid))` - The updated bid
    /// * `Ok(None)` - Bid not found
    async fn update_status(
        &self,
        id: Uuid,
        status: BidStatus,
    ) -> Result<Option<Bid>, DomainError>;

    /// Delete a bid. Used by the placement rollback path.
    async fn delete(&self, id: Uuid) -> Result<bool, DomainError>;
}
