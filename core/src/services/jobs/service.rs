//! Job service implementation.
//!
//! Ownership checks live here, once, for every mutating operation. The
//! transport's AuthGate establishes *who* the caller is; this service
//! decides whether that caller may touch the record.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use tracing::debug;
use uuid::Uuid;

use crate::domain::entities::job::{Job, JobUpdate};
use crate::errors::{DomainError, DomainResult};
use crate::repositories::JobRepository;

/// Fields supplied by the owner when posting a job
#[derive(Debug, Clone)]
pub struct JobDraft {
    pub title: String,
    pub description: String,
    pub category: String,
    pub min_price: f64,
    pub max_price: f64,
    pub deadline: DateTime<Utc>,
}

/// Service for job lifecycle operations
pub struct JobService<J: JobRepository> {
    repository: Arc<J>,
}

impl<J: JobRepository> JobService<J> {
    /// Creates a new job service backed by the given repository
    pub fn new(repository: Arc<J>) -> Self {
        Self { repository }
    }

    /// Creates a job owned by `owner_email`
    pub async fn create_job(&self, owner_email: &str, draft: JobDraft) -> DomainResult<Job> {
        if draft.title.trim().is_empty() {
            return Err(DomainError::Validation {
                message: "title must not be empty".to_string(),
            });
        }
        if draft.max_price < draft.min_price {
            return Err(DomainError::Validation {
                message: "max_price must not be below min_price".to_string(),
            });
        }

        let job = Job::new(
            owner_email.to_string(),
            draft.title,
            draft.description,
            draft.category,
            draft.min_price,
            draft.max_price,
            draft.deadline,
        );
        debug!(job_id = %job.id, owner = %owner_email, "creating job");
        self.repository.insert(job).await
    }

    /// Fetches a job by id
    pub async fn get_job(&self, id: Uuid) -> DomainResult<Job> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::not_found("Job"))
    }

    /// Lists every job, newest last
    pub async fn list_jobs(&self) -> DomainResult<Vec<Job>> {
        self.repository.find_all().await
    }

    /// Lists jobs posted by `owner_email`.
    ///
    /// Callers must already have passed the AuthGate as this identity;
    /// the service trusts its input here.
    pub async fn list_by_owner(&self, owner_email: &str) -> DomainResult<Vec<Job>> {
        self.repository.find_by_owner(owner_email).await
    }

    /// Lists jobs in a category
    pub async fn list_by_category(&self, category: &str) -> DomainResult<Vec<Job>> {
        self.repository.find_by_category(category).await
    }

    /// Updates a job's descriptive fields. Only the owner may update.
    pub async fn update_job(
        &self,
        id: Uuid,
        caller_email: &str,
        update: JobUpdate,
    ) -> DomainResult<Job> {
        let job = self.get_job(id).await?;
        if !job.is_owned_by(caller_email) {
            return Err(DomainError::Forbidden);
        }

        let min = update.min_price.unwrap_or(job.min_price);
        let max = update.max_price.unwrap_or(job.max_price);
        if max < min {
            return Err(DomainError::Validation {
                message: "max_price must not be below min_price".to_string(),
            });
        }

        self.repository
            .update(id, update)
            .await?
            .ok_or_else(|| DomainError::not_found("Job"))
    }

    /// Deletes a job. Only the owner may delete.
    pub async fn delete_job(&self, id: Uuid, caller_email: &str) -> DomainResult<()> {
        let job = self.get_job(id).await?;
        if !job.is_owned_by(caller_email) {
            return Err(DomainError::Forbidden);
        }

        if self.repository.delete(id).await? {
            Ok(())
        } else {
            Err(DomainError::not_found("Job"))
        }
    }
}
