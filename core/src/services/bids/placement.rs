//! Bid placement workflow.
//!
//! Placement touches two stores and must leave them consistent: one bid row
//! inserted, one `bid_count` increment, or neither. The uniqueness pre-check
//! only buys a friendlier error; the store's unique constraint on
//! `(bidder, job)` is what actually arbitrates concurrent placements.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use tracing::{debug, error};
use uuid::Uuid;

use crate::domain::entities::bid::Bid;
use crate::errors::{DomainError, DomainResult};
use crate::repositories::{BidRepository, JobRepository};

/// Input for placing a bid
#[derive(Debug, Clone)]
pub struct PlaceBid {
    pub job_id: Uuid,
    pub bidder_email: String,
    pub price: f64,
    pub comment: String,
    pub deadline: DateTime<Utc>,
}

/// Orchestrates bid creation across the bid and job stores
pub struct BidPlacementService<J: JobRepository, B: BidRepository> {
    jobs: Arc<J>,
    bids: Arc<B>,
}

impl<J: JobRepository, B: BidRepository> BidPlacementService<J, B> {
    /// Creates a new placement service over the two stores
    pub fn new(jobs: Arc<J>, bids: Arc<B>) -> Self {
        Self { jobs, bids }
    }

    /// Places a bid on a job.
    ///
    /// # Errors
    ///
    /// * `NotFound` - the job does not exist (or vanished mid-placement;
    ///   the inserted bid is rolled back so no orphan survives)
    /// * `Forbidden` - the bidder owns the job
    /// * `DuplicateBid` - this bidder already bid on this job
    pub async fn place_bid(&self, request: PlaceBid) -> DomainResult<Bid> {
        if request.price <= 0.0 {
            return Err(DomainError::Validation {
                message: "price must be positive".to_string(),
            });
        }

        let job = self
            .jobs
            .find_by_id(request.job_id)
            .await?
            .ok_or_else(|| DomainError::not_found("Job"))?;

        if job.is_owned_by(&request.bidder_email) {
            return Err(DomainError::Forbidden);
        }

        // Friendly-error pre-check. A concurrent placement can still pass
        // both checks; the insert below is the real arbiter.
        if self
            .bids
            .find_by_bidder_and_job(&request.bidder_email, request.job_id)
            .await?
            .is_some()
        {
            return Err(DomainError::DuplicateBid);
        }

        let bid = Bid::new(
            request.job_id,
            request.bidder_email,
            job.owner_email.clone(),
            request.price,
            request.comment,
            request.deadline,
        );
        let bid = self.bids.insert(bid).await?;
        debug!(bid_id = %bid.id, job_id = %bid.job_id, "bid inserted");

        // Atomic counter increment at the store layer. If the job was
        // deleted between the lookup and here, remove the freshly inserted
        // bid so no bid exists without a live job.
        match self.jobs.increment_bid_count(request.job_id, 1).await? {
            Some(_) => Ok(bid),
            None => {
                if let Err(e) = self.bids.delete(bid.id).await {
                    error!(
                        bid_id = %bid.id,
                        job_id = %bid.job_id,
                        error = %e,
                        "failed to roll back orphan bid"
                    );
                }
                Err(DomainError::not_found("Job"))
            }
        }
    }
}
