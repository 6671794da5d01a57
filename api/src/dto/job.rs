//! Job endpoint DTOs.

use chrono::{DateTime, Utc};
use serde::Deserialize;
use validator::Validate;

use one_core::domain::entities::job::JobUpdate;
use one_core::services::jobs::JobDraft;

/// Request body for posting a job
#[derive(Debug, Deserialize, Validate)]
pub struct CreateJobRequest {
    #[validate(length(min = 1, max = 255, message = "title must be 1-255 characters"))]
    pub title: String,

    #[validate(length(min = 1, message = "description must not be empty"))]
    pub description: String,

    #[validate(length(min = 1, max = 100, message = "category must be 1-100 characters"))]
    pub category: String,

    #[validate(range(min = 0.0, message = "min_price must not be negative"))]
    pub min_price: f64,

    #[validate(range(min = 0.0, message = "max_price must not be negative"))]
    pub max_price: f64,

    pub deadline: DateTime<Utc>,
}

impl From<CreateJobRequest> for JobDraft {
    fn from(request: CreateJobRequest) -> Self {
        JobDraft {
            title: request.title,
            description: request.description,
            category: request.category,
            min_price: request.min_price,
            max_price: request.max_price,
            deadline: request.deadline,
        }
    }
}

/// Request body for updating a job; absent fields are left untouched.
/// Ownership and `bid_count` are not client-writable.
#[derive(Debug, Default, Deserialize, Validate)]
pub struct UpdateJobRequest {
    #[validate(length(min = 1, max = 255, message = "title must be 1-255 characters"))]
    pub title: Option<String>,

    #[validate(length(min = 1, message = "description must not be empty"))]
    pub description: Option<String>,

    #[validate(length(min = 1, max = 100, message = "category must be 1-100 characters"))]
    pub category: Option<String>,

    #[validate(range(min = 0.0, message = "min_price must not be negative"))]
    pub min_price: Option<f64>,

    #[validate(range(min = 0.0, message = "max_price must not be negative"))]
    pub max_price: Option<f64>,

    pub deadline: Option<DateTime<Utc>>,
}

impl From<UpdateJobRequest> for JobUpdate {
    fn from(request: UpdateJobRequest) -> Self {
        JobUpdate {
            title: request.title,
            description: request.description,
            category: request.category,
            min_price: request.min_price,
            max_price: request.max_price,
            deadline: request.deadline,
        }
    }
}
