//! In-memory implementation of BidRepository for tests and local development

use async_trait::async_trait;
use chrono::Utc;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::entities::bid::{Bid, BidStatus};
use crate::errors::DomainError;

use super::trait_::BidRepository;

/// Mock bid repository backed by a Vec to preserve insertion order
pub struct MockBidRepository {
    bids: Arc<RwLock<Vec<Bid>>>,
}

impl MockBidRepository {
    /// Create a new empty mock repository
    pub fn new() -> Self {
        Self {
            bids: Arc::new(RwLock::new(Vec::new())),
        }
    }
}

impl Default for MockBidRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BidRepository for MockBidRepository {
    async fn insert(&self, bid: Bid) -> Result<Bid, DomainError> {
        // Uniqueness check and insert under one write guard, so a concurrent
        // insert for the same (bidder, job) pair cannot slip between them.
        // This mirrors the unique index arbitration in MySQL.
        let mut bids = self.bids.write().await;
        if bids
            .iter()
            .any(|b| b.bidder_email == bid.bidder_email && b.job_id == bid.job_id)
        {
            return Err(DomainError::DuplicateBid);
        }
        bids.push(bid.clone());
        Ok(bid)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Bid>, DomainError> {
        let bids = self.bids.read().await;
        Ok(bids.iter().find(|b| b.id == id).cloned())
    }

    async fn find_by_bidder_and_job(
        &self,
        bidder_email: &str,
        job_id: Uuid,
    ) -> Result<Option<Bid>, DomainError> {
        let bids = self.bids.read().await;
        Ok(bids
            .iter()
            .find(|b| b.bidder_email == bidder_email && b.job_id == job_id)
            .cloned())
    }

    async fn find_by_bidder(&self, bidder_email: &str) -> Result<Vec<Bid>, DomainError> {
        let bids = self.bids.read().await;
        Ok(bids
            .iter()
            .filter(|b| b.bidder_email == bidder_email)
            .cloned()
            .collect())
    }

    async fn find_by_job_owner(&self, owner_email: &str) -> Result<Vec<Bid>, DomainError> {
        let bids = self.bids.read().await;
        Ok(bids
            .iter()
            .filter(|b| b.job_owner_email == owner_email)
            .cloned()
            .collect())
    }

    async fn update_status(
        &self,
        id: Uuid,
        status: BidStatus,
    ) -> Result<Option<Bid>, DomainError> {
        let mut bids = self.bids.write().await;
        match bids.iter_mut().find(|b| b.id == id) {
            Some(bid) => {
                bid.status = status;
                bid.updated_at = Utc::now();
                Ok(Some(bid.clone()))
            }
            None => Ok(None),
        }
    }

    async fn delete(&self, id: Uuid) -> Result<bool, DomainError> {
        let mut bids = self.bids.write().await;
        let before = bids.len();
        bids.retain(|b| b.id != id);
        Ok(bids.len() < before)
    }
}
