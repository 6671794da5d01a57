//! MySQL implementation of the JobRepository trait.
//!
//! The bid counter is only ever moved by a single relative UPDATE so that
//! concurrent placements on the same job cannot lose increments.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{MySqlPool, Row};
use uuid::Uuid;

use one_core::domain::entities::job::{Job, JobUpdate};
use one_core::errors::DomainError;
use one_core::repositories::JobRepository;

/// MySQL implementation of JobRepository
pub struct MySqlJobRepository {
    /// Database connection pool
    pool: MySqlPool,
}

impl MySqlJobRepository {
    /// Create a new MySQL job repository
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    /// Convert a database row to a Job entity
    fn row_to_job(row: &sqlx::mysql::MySqlRow) -> Result<Job, DomainError> {
        let id: String = row
            .try_get("id")
            .map_err(|e| DomainError::database(format!("failed to get id: {e}")))?;

        Ok(Job {
            id: Uuid::parse_str(&id)
                .map_err(|e| DomainError::database(format!("invalid job UUID: {e}")))?,
            owner_email: row
                .try_get("owner_email")
                .map_err(|e| DomainError::database(format!("failed to get owner_email: {e}")))?,
            title: row
                .try_get("title")
                .map_err(|e| DomainError::database(format!("failed to get title: {e}")))?,
            description: row
                .try_get("description")
                .map_err(|e| DomainError::database(format!("failed to get description: {e}")))?,
            category: row
                .try_get("category")
                .map_err(|e| DomainError::database(format!("failed to get category: {e}")))?,
            min_price: row
                .try_get("min_price")
                .map_err(|e| DomainError::database(format!("failed to get min_price: {e}")))?,
            max_price: row
                .try_get("max_price")
                .map_err(|e| DomainError::database(format!("failed to get max_price: {e}")))?,
            deadline: row
                .try_get::<DateTime<Utc>, _>("deadline")
                .map_err(|e| DomainError::database(format!("failed to get deadline: {e}")))?,
            bid_count: row
                .try_get("bid_count")
                .map_err(|e| DomainError::database(format!("failed to get bid_count: {e}")))?,
            created_at: row
                .try_get::<DateTime<Utc>, _>("created_at")
                .map_err(|e| DomainError::database(format!("failed to get created_at: {e}")))?,
            updated_at: row
                .try_get::<DateTime<Utc>, _>("updated_at")
                .map_err(|e| DomainError::database(format!("failed to get updated_at: {e}")))?,
        })
    }

    async fn fetch_optional(&self, id: Uuid) -> Result<Option<Job>, DomainError> {
        let query = r#"
            SELECT id, owner_email, title, description, category,
                   min_price, max_price, deadline, bid_count, created_at, updated_at
            FROM jobs
            WHERE id = ?
            LIMIT 1
        "#;

        let result = sqlx::query(query)
            .bind(id.to_string())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::database(format!("failed to find job: {e}")))?;

        match result {
            Some(row) => Ok(Some(Self::row_to_job(&row)?)),
            None => Ok(None),
        }
    }

    async fn fetch_list(
        &self,
        query: &str,
        bind: Option<&str>,
    ) -> Result<Vec<Job>, DomainError> {
        let mut q = sqlx::query(query);
        if let Some(value) = bind {
            q = q.bind(value);
        }
        let rows = q
            .fetch_all(&self.pool)
            .await
            .map_err(|e| DomainError::database(format!("failed to list jobs: {e}")))?;

        rows.iter().map(Self::row_to_job).collect()
    }
}

#[async_trait]
impl JobRepository for MySqlJobRepository {
    async fn insert(&self, job: Job) -> Result<Job, DomainError> {
        let query = r#"
            INSERT INTO jobs (
                id, owner_email, title, description, category,
                min_price, max_price, deadline, bid_count, created_at, updated_at
            ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
        "#;

        sqlx::query(query)
            .bind(job.id.to_string())
            .bind(&job.owner_email)
            .bind(&job.title)
            .bind(&job.description)
            .bind(&job.category)
            .bind(job.min_price)
            .bind(job.max_price)
            .bind(job.deadline)
            .bind(job.bid_count)
            .bind(job.created_at)
            .bind(job.updated_at)
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::database(format!("failed to insert job: {e}")))?;

        Ok(job)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Job>, DomainError> {
        self.fetch_optional(id).await
    }

    async fn find_all(&self) -> Result<Vec<Job>, DomainError> {
        let query = r#"
            SELECT id, owner_email, title, description, category,
                   min_price, max_price, deadline, bid_count, created_at, updated_at
            FROM jobs
            ORDER BY created_at ASC
        "#;
        self.fetch_list(query, None).await
    }

    async fn find_by_owner(&self, owner_email: &str) -> Result<Vec<Job>, DomainError> {
        let query = r#"
            SELECT id, owner_email, title, description, category,
                   min_price, max_price, deadline, bid_count, created_at, updated_at
            FROM jobs
            WHERE owner_email = ?
            ORDER BY created_at ASC
        "#;
        self.fetch_list(query, Some(owner_email)).await
    }

    async fn find_by_category(&self, category: &str) -> Result<Vec<Job>, DomainError> {
        let query = r#"
            SELECT id, owner_email, title, description, category,
                   min_price, max_price, deadline, bid_count, created_at, updated_at
            FROM jobs
            WHERE category = ?
            ORDER BY created_at ASC
        "#;
        self.fetch_list(query, Some(category)).await
    }

    async fn update(&self, id: Uuid, update: JobUpdate) -> Result<Option<Job>, DomainError> {
        let query = r#"
            UPDATE jobs SET
                title = COALESCE(?, title),
                description = COALESCE(?, description),
                category = COALESCE(?, category),
                min_price = COALESCE(?, min_price),
                max_price = COALESCE(?, max_price),
                deadline = COALESCE(?, deadline),
                updated_at = ?
            WHERE id = ?
        "#;

        let result = sqlx::query(query)
            .bind(update.title)
            .bind(update.description)
            .bind(update.category)
            .bind(update.min_price)
            .bind(update.max_price)
            .bind(update.deadline)
            .bind(Utc::now())
            .bind(id.to_string())
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::database(format!("failed to update job: {e}")))?;

        if result.rows_affected() == 0 {
            return Ok(None);
        }
        self.fetch_optional(id).await
    }

    async fn delete(&self, id: Uuid) -> Result<bool, DomainError> {
        let result = sqlx::query("DELETE FROM jobs WHERE id = ?")
            .bind(id.to_string())
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::database(format!("failed to delete job: {e}")))?;

        Ok(result.rows_affected() > 0)
    }

    async fn increment_bid_count(
        &self,
        id: Uuid,
        delta: i32,
    ) -> Result<Option<Job>, DomainError> {
        // Relative update: the read and write happen inside one statement,
        // so concurrent increments on the same row serialize in the store.
        let query = r#"
            UPDATE jobs
            SET bid_count = GREATEST(CAST(bid_count AS SIGNED) + ?, 0),
                updated_at = ?
            WHERE id = ?
        "#;

        let result = sqlx::query(query)
            .bind(delta)
            .bind(Utc::now())
            .bind(id.to_string())
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::database(format!("failed to increment bid_count: {e}")))?;

        if result.rows_affected() == 0 {
            return Ok(None);
        }
        self.fetch_optional(id).await
    }
}
