//! Job entity: a work posting created by a buyer, open for bids.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A job posted on the marketplace.
///
/// `bid_count` is a derived counter: it must equal the number of bids
/// referencing this job after every committed bid placement. It is only
/// ever changed through `JobRepository::increment_bid_count`, never by a
/// plain update.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Job {
    /// Unique identifier for the job
    pub id: Uuid,

    /// Email of the identity that posted the job (the owner)
    pub owner_email: String,

    /// Short job title
    pub title: String,

    /// Full job description
    pub description: String,

    /// Category label, e.g. "Web Development"
    pub category: String,

    /// Minimum budget
    pub min_price: f64,

    /// Maximum budget
    pub max_price: f64,

    /// Deadline for completing the job
    pub deadline: DateTime<Utc>,

    /// Number of bids placed on this job
    pub bid_count: u32,

    /// Timestamp when the job was created
    pub created_at: DateTime<Utc>,

    /// Timestamp when the job was last updated
    pub updated_at: DateTime<Utc>,
}

impl Job {
    /// Creates a new job owned by `owner_email` with a zero bid count
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        owner_email: String,
        title: String,
        description: String,
        category: String,
        min_price: f64,
        max_price: f64,
        deadline: DateTime<Utc>,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            owner_email,
            title,
            description,
            category,
            min_price,
            max_price,
            deadline,
            bid_count: 0,
            created_at: now,
            updated_at: now,
        }
    }

    /// Checks whether `email` owns this job
    pub fn is_owned_by(&self, email: &str) -> bool {
        self.owner_email == email
    }

    /// Applies a partial update to the descriptive fields.
    ///
    /// `bid_count` and ownership are deliberately untouchable here.
    pub fn apply(&mut self, update: JobUpdate) {
        if let Some(title) = update.title {
            self.title = title;
        }
        if let Some(description) = update.description {
            self.description = description;
        }
        if let Some(category) = update.category {
            self.category = category;
        }
        if let Some(min_price) = update.min_price {
            self.min_price = min_price;
        }
        if let Some(max_price) = update.max_price {
            self.max_price = max_price;
        }
        if let Some(deadline) = update.deadline {
            self.deadline = deadline;
        }
        self.updated_at = Utc::now();
    }
}

/// Partial update for a job's descriptive fields
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct JobUpdate {
    pub title: Option<String>,
    pub description: Option<String>,
    pub category: Option<String>,
    pub min_price: Option<f64>,
    pub max_price: Option<f64>,
    pub deadline: Option<DateTime<Utc>>,
}
