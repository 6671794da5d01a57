//! MySQL implementation of the BidRepository trait.
//!
//! The `uq_bids_bidder_job` unique index over `(bidder_email, job_id)` is
//! the arbiter of the one-bid-per-job invariant: under concurrent inserts
//! for the same pair, the first writer wins and every loser surfaces as
//! `DuplicateBid`.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{MySqlPool, Row};
use uuid::Uuid;

use one_core::domain::entities::bid::{Bid, BidStatus};
use one_core::errors::DomainError;
use one_core::repositories::BidRepository;

/// MySQL implementation of BidRepository
pub struct MySqlBidRepository {
    /// Database connection pool
    pool: MySqlPool,
}

impl MySqlBidRepository {
    /// Create a new MySQL bid repository
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    /// Convert a database row to a Bid entity
    fn row_to_bid(row: &sqlx::mysql::MySqlRow) -> Result<Bid, DomainError> {
        let id: String = row
            .try_get("id")
            .map_err(|e| DomainError::database(format!("failed to get id: {e}")))?;
        let job_id: String = row
            .try_get("job_id")
            .map_err(|e| DomainError::database(format!("failed to get job_id: {e}")))?;
        let status: String = row
            .try_get("status")
            .map_err(|e| DomainError::database(format!("failed to get status: {e}")))?;

        Ok(Bid {
            id: Uuid::parse_str(&id)
                .map_err(|e| DomainError::database(format!("invalid bid UUID: {e}")))?,
            job_id: Uuid::parse_str(&job_id)
                .map_err(|e| DomainError::database(format!("invalid job UUID: {e}")))?,
            bidder_email: row
                .try_get("bidder_email")
                .map_err(|e| DomainError::database(format!("failed to get bidder_email: {e}")))?,
            job_owner_email: row.try_get("job_owner_email").map_err(|e| {
                DomainError::database(format!("failed to get job_owner_email: {e}"))
            })?,
            price: row
                .try_get("price")
                .map_err(|e| DomainError::database(format!("failed to get price: {e}")))?,
            comment: row
                .try_get("comment")
                .map_err(|e| DomainError::database(format!("failed to get comment: {e}")))?,
            deadline: row
                .try_get::<DateTime<Utc>, _>("deadline")
                .map_err(|e| DomainError::database(format!("failed to get deadline: {e}")))?,
            status: BidStatus::parse(&status)
                .ok_or_else(|| DomainError::database(format!("unknown bid status: {status}")))?,
            created_at: row
                .try_get::<DateTime<Utc>, _>("created_at")
                .map_err(|e| DomainError::database(format!("failed to get created_at: {e}")))?,
            updated_at: row
                .try_get::<DateTime<Utc>, _>("updated_at")
                .map_err(|e| DomainError::database(format!("failed to get updated_at: {e}")))?,
        })
    }

    async fn fetch_list(&self, query: &str, bind: &str) -> Result<Vec<Bid>, DomainError> {
        let rows = sqlx::query(query)
            .bind(bind)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| DomainError::database(format!("failed to list bids: {e}")))?;

        rows.iter().map(Self::row_to_bid).collect()
    }
}

const SELECT_COLUMNS: &str = "id, job_id, bidder_email, job_owner_email, price, comment, \
                              deadline, status, created_at, updated_at";

#[async_trait]
impl BidRepository for MySqlBidRepository {
    async fn insert(&self, bid: Bid) -> Result<Bid, DomainError> {
        let query = r#"
            INSERT INTO bids (
                id, job_id, bidder_email, job_owner_email, price, comment,
                deadline, status, created_at, updated_at
            ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
        "#;

        sqlx::query(query)
            .bind(bid.id.to_string())
            .bind(bid.job_id.to_string())
            .bind(&bid.bidder_email)
            .bind(&bid.job_owner_email)
            .bind(bid.price)
            .bind(&bid.comment)
            .bind(bid.deadline)
            .bind(bid.status.as_str())
            .bind(bid.created_at)
            .bind(bid.updated_at)
            .execute(&self.pool)
            .await
            .map_err(|e| match &e {
                sqlx::Error::Database(db) if db.is_unique_violation() => {
                    DomainError::DuplicateBid
                }
                _ => DomainError::database(format!("failed to insert bid: {e}")),
            })?;

        Ok(bid)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Bid>, DomainError> {
        let query = format!("SELECT {SELECT_COLUMNS} FROM bids WHERE id = ? LIMIT 1");

        let result = sqlx::query(&query)
            .bind(id.to_string())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::database(format!("failed to find bid: {e}")))?;

        match result {
            Some(row) => Ok(Some(Self::row_to_bid(&row)?)),
            None => Ok(None),
        }
    }

    async fn find_by_bidder_and_job(
        &self,
        bidder_email: &str,
        job_id: Uuid,
    ) -> Result<Option<Bid>, DomainError> {
        let query = format!(
            "SELECT {SELECT_COLUMNS} FROM bids WHERE bidder_email = ? AND job_id = ? LIMIT 1"
        );

        let result = sqlx::query(&query)
            .bind(bidder_email)
            .bind(job_id.to_string())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::database(format!("failed to find bid: {e}")))?;

        match result {
            Some(row) => Ok(Some(Self::row_to_bid(&row)?)),
            None => Ok(None),
        }
    }

    async fn find_by_bidder(&self, bidder_email: &str) -> Result<Vec<Bid>, DomainError> {
        let query = format!(
            "SELECT {SELECT_COLUMNS} FROM bids WHERE bidder_email = ? ORDER BY created_at ASC"
        );
        self.fetch_list(&query, bidder_email).await
    }

    async fn find_by_job_owner(&self, owner_email: &str) -> Result<Vec<Bid>, DomainError> {
        let query = format!(
            "SELECT {SELECT_COLUMNS} FROM bids WHERE job_owner_email = ? ORDER BY created_at ASC"
        );
        self.fetch_list(&query, owner_email).await
    }

    async fn update_status(
        &self,
        id: Uuid,
        status: BidStatus,
    ) -> Result<Option<Bid>, DomainError> {
        let result = sqlx::query("UPDATE bids SET status = ?, updated_at = ? WHERE id = ?")
            .bind(status.as_str())
            .bind(Utc::now())
            .bind(id.to_string())
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::database(format!("failed to update bid status: {e}")))?;

        if result.rows_affected() == 0 {
            return Ok(None);
        }
        self.find_by_id(id).await
    }

    async fn delete(&self, id: Uuid) -> Result<bool, DomainError> {
        let result = sqlx::query("DELETE FROM bids WHERE id = ?")
            .bind(id.to_string())
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::database(format!("failed to delete bid: {e}")))?;

        Ok(result.rows_affected() > 0)
    }
}
