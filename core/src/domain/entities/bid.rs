//! Bid entity: an offer placed by a bidder on an open job.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Lifecycle status of a bid.
///
/// Only the owner of the referenced job may move a bid between states;
/// the bidder never mutates a bid after placing it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BidStatus {
    Pending,
    Accepted,
    Rejected,
    Completed,
}

impl BidStatus {
    /// Stable string form used for database storage
    pub fn as_str(&self) -> &'static str {
        match self {
            BidStatus::Pending => "pending",
            BidStatus::Accepted => "accepted",
            BidStatus::Rejected => "rejected",
            BidStatus::Completed => "completed",
        }
    }

    /// Parses the database string form
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "pending" => Some(BidStatus::Pending),
            "accepted" => Some(BidStatus::Accepted),
            "rejected" => Some(BidStatus::Rejected),
            "completed" => Some(BidStatus::Completed),
            _ => None,
        }
    }
}

/// A bid on a job.
///
/// Invariant: at most one bid exists per `(bidder_email, job_id)` pair.
/// The store enforces this; see `BidRepository::insert`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bid {
    /// Unique identifier for the bid
    pub id: Uuid,

    /// The job this bid targets
    pub job_id: Uuid,

    /// Email of the identity placing the bid
    pub bidder_email: String,

    /// Email of the job's owner, denormalized at placement time so
    /// owner-scoped listings and status changes need no join
    pub job_owner_email: String,

    /// Offered price
    pub price: f64,

    /// Pitch accompanying the bid
    pub comment: String,

    /// Proposed completion date
    pub deadline: DateTime<Utc>,

    /// Current status, owner-controlled after placement
    pub status: BidStatus,

    /// Timestamp when the bid was placed
    pub created_at: DateTime<Utc>,

    /// Timestamp when the bid was last updated
    pub updated_at: DateTime<Utc>,
}

impl Bid {
    /// Creates a new pending bid
    pub fn new(
        job_id: Uuid,
        bidder_email: String,
        job_owner_email: String,
        price: f64,
        comment: String,
        deadline: DateTime<Utc>,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            job_id,
            bidder_email,
            job_owner_email,
            price,
            comment,
            deadline,
            status: BidStatus::Pending,
            created_at: now,
            updated_at: now,
        }
    }

    /// Checks whether `email` owns the job this bid targets
    pub fn is_for_job_owned_by(&self, email: &str) -> bool {
        self.job_owner_email == email
    }
}
