//! Job repository trait defining the interface for job persistence.
//!
//! The trait is async-first and uses Result types for error handling.
//! Implementations handle the actual database operations while keeping the
//! abstraction boundary between domain and infrastructure layers.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::entities::job::{Job, JobUpdate};
use crate::errors::DomainError;

/// Repository trait for Job entity persistence operations
#[async_trait]
pub trait JobRepository: Send + Sync {
    /// Persist a new job
    ///
    /// # Returns
    /// * `Ok(Job)` - The created job
    /// * `Err(DomainError)` - Database error occurred
    async fn insert(&self, job: Job) -> Result<Job, DomainError>;

    /// Find a job by its unique identifier
    ///
    /// # Returns
    /// * `Ok(Some(Job))` - Job found
    /// * `Ok(None)` - No job with the given id
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Job>, DomainError>;

    /// List all jobs in insertion order
    async fn find_all(&self) -> Result<Vec<Job>, DomainError>;

    /// List jobs posted by the given owner, in insertion order
    async fn find_by_owner(&self, owner_email: &str) -> Result<Vec<Job>, DomainError>;

    /// List jobs in the given category, in insertion order
    async fn find_by_category(&self, category: &str) -> Result<Vec<Job>, DomainError>;

    /// Apply a partial update to a job's descriptive fields
    ///
    /// # Returns
    /// * `Ok(Some(Job))` - The updated job
    /// * `Ok(None)` - Job not found
    async fn update(&self, id: Uuid, update: JobUpdate) -> Result<Option<Job>, DomainError>;

    /// Delete a job
    ///
    /// # Returns
    /// * `Ok(true)` - Job was deleted
    /// * `Ok(false)` - Job not found
    async fn delete(&self, id: Uuid) -> Result<bool, DomainError>;

    /// Apply `delta` to the job's `bid_count` as one atomic store operation.
    ///
    /// This must not be implemented as read-increment-write at the
    /// application layer: concurrent placements on the same job would lose
    /// updates. SQL implementations use a single
    /// `UPDATE ... SET bid_count = bid_count + ?`.
    ///
    /// # Returns
    /// * `Ok(Some(Job))` - The job after the increment
    /// * `Ok(None)` - Job not found
    async fn increment_bid_count(&self, id: Uuid, delta: i32) -> Result<Option<Job>, DomainError>;
}
