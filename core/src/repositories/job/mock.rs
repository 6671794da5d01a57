//! In-memory implementation of JobRepository for tests and local development

use async_trait::async_trait;
use chrono::Utc;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::entities::job::{Job, JobUpdate};
use crate::errors::DomainError;

use super::trait_::JobRepository;

/// Mock job repository backed by a Vec to preserve insertion order
pub struct MockJobRepository {
    jobs: Arc<RwLock<Vec<Job>>>,
}

impl MockJobRepository {
    /// Create a new empty mock repository
    pub fn new() -> Self {
        Self {
            jobs: Arc::new(RwLock::new(Vec::new())),
        }
    }
}

impl Default for MockJobRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl JobRepository for MockJobRepository {
    async fn insert(&self, job: Job) -> Result<Job, DomainError> {
        let mut jobs = self.jobs.write().await;
        jobs.push(job.clone());
        Ok(job)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Job>, DomainError> {
        let jobs = self.jobs.read().await;
        Ok(jobs.iter().find(|j| j.id == id).cloned())
    }

    async fn find_all(&self) -> Result<Vec<Job>, DomainError> {
        let jobs = self.jobs.read().await;
        Ok(jobs.clone())
    }

    async fn find_by_owner(&self, owner_email: &str) -> Result<Vec<Job>, DomainError> {
        let jobs = self.jobs.read().await;
        Ok(jobs
            .iter()
            .filter(|j| j.owner_email == owner_email)
            .cloned()
            .collect())
    }

    async fn find_by_category(&self, category: &str) -> Result<Vec<Job>, DomainError> {
        let jobs = self.jobs.read().await;
        Ok(jobs
            .iter()
            .filter(|j| j.category == category)
            .cloned()
            .collect())
    }

    async fn update(&self, id: Uuid, update: JobUpdate) -> Result<Option<Job>, DomainError> {
        let mut jobs = self.jobs.write().await;
        match jobs.iter_mut().find(|j| j.id == id) {
            Some(job) => {
                job.apply(update);
                Ok(Some(job.clone()))
            }
            None => Ok(None),
        }
    }

    async fn delete(&self, id: Uuid) -> Result<bool, DomainError> {
        let mut jobs = self.jobs.write().await;
        let before = jobs.len();
        jobs.retain(|j| j.id != id);
        Ok(jobs.len() < before)
    }

    async fn increment_bid_count(
        &self,
        id: Uuid,
        delta: i32,
    ) -> Result<Option<Job>, DomainError> {
        // Single write guard: the read-modify-write is not observable
        // mid-flight, matching the atomicity of the SQL UPDATE
        let mut jobs = self.jobs.write().await;
        match jobs.iter_mut().find(|j| j.id == id) {
            Some(job) => {
                job.bid_count = job.bid_count.saturating_add_signed(delta);
                job.updated_at = Utc::now();
                Ok(Some(job.clone()))
            }
            None => Ok(None),
        }
    }
}
