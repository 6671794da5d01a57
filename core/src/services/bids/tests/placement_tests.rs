//! Unit tests for the bid placement workflow

use async_trait::async_trait;
use chrono::{Duration, Utc};
use std::sync::Arc;
use uuid::Uuid;

use crate::domain::entities::job::{Job, JobUpdate};
use crate::errors::DomainError;
use crate::repositories::{BidRepository, JobRepository, MockBidRepository, MockJobRepository};
use crate::services::bids::{BidPlacementService, PlaceBid};

fn job(owner: &str) -> Job {
    Job::new(
        owner.to_string(),
        "title".to_string(),
        "description".to_string(),
        "Web Development".to_string(),
        50.0,
        150.0,
        Utc::now() + Duration::days(7),
    )
}

fn request(bidder: &str, job_id: Uuid) -> PlaceBid {
    PlaceBid {
        job_id,
        bidder_email: bidder.to_string(),
        price: 120.0,
        comment: "I can do this".to_string(),
        deadline: Utc::now() + Duration::days(5),
    }
}

fn setup() -> (
    BidPlacementService<MockJobRepository, MockBidRepository>,
    Arc<MockJobRepository>,
    Arc<MockBidRepository>,
) {
    let jobs = Arc::new(MockJobRepository::new());
    let bids = Arc::new(MockBidRepository::new());
    (
        BidPlacementService::new(Arc::clone(&jobs), Arc::clone(&bids)),
        jobs,
        bids,
    )
}

#[tokio::test]
async fn placing_a_bid_increments_the_counter() {
    let (service, jobs, _) = setup();
    let posted = jobs.insert(job("owner@x.com")).await.unwrap();

    let bid = service.place_bid(request("a@x.com", posted.id)).await.unwrap();
    assert_eq!(bid.job_owner_email, "owner@x.com");

    let stored = jobs.find_by_id(posted.id).await.unwrap().unwrap();
    assert_eq!(stored.bid_count, 1);
}

#[tokio::test]
async fn second_bid_from_same_bidder_is_a_conflict_and_count_stays() {
    let (service, jobs, _) = setup();
    let posted = jobs.insert(job("owner@x.com")).await.unwrap();

    service.place_bid(request("a@x.com", posted.id)).await.unwrap();
    let err = service
        .place_bid(request("a@x.com", posted.id))
        .await
        .unwrap_err();
    assert!(matches!(err, DomainError::DuplicateBid));

    let stored = jobs.find_by_id(posted.id).await.unwrap().unwrap();
    assert_eq!(stored.bid_count, 1);
}

#[tokio::test]
async fn bidding_on_a_missing_job_leaves_no_orphan_bid() {
    let (service, _, bids) = setup();

    let err = service
        .place_bid(request("a@x.com", Uuid::new_v4()))
        .await
        .unwrap_err();
    assert!(matches!(err, DomainError::NotFound { .. }));
    assert!(bids.find_by_bidder("a@x.com").await.unwrap().is_empty());
}

#[tokio::test]
async fn bidding_on_your_own_job_is_forbidden() {
    let (service, jobs, _) = setup();
    let posted = jobs.insert(job("a@x.com")).await.unwrap();

    let err = service
        .place_bid(request("a@x.com", posted.id))
        .await
        .unwrap_err();
    assert!(matches!(err, DomainError::Forbidden));
}

#[tokio::test]
async fn non_positive_price_is_rejected_before_any_write() {
    let (service, jobs, bids) = setup();
    let posted = jobs.insert(job("owner@x.com")).await.unwrap();

    let mut bad = request("a@x.com", posted.id);
    bad.price = 0.0;
    let err = service.place_bid(bad).await.unwrap_err();
    assert!(matches!(err, DomainError::Validation { .. }));
    assert!(bids.find_by_bidder("a@x.com").await.unwrap().is_empty());
}

#[tokio::test]
async fn concurrent_same_pair_placements_admit_exactly_one_bid() {
    let (service, jobs, bids) = setup();
    let posted = jobs.insert(job("owner@x.com")).await.unwrap();
    let service = Arc::new(service);

    let mut handles = Vec::new();
    for _ in 0..20 {
        let service = Arc::clone(&service);
        let req = request("a@x.com", posted.id);
        handles.push(tokio::spawn(async move { service.place_bid(req).await }));
    }

    let mut successes = 0;
    for handle in handles {
        if handle.await.unwrap().is_ok() {
            successes += 1;
        }
    }
    assert_eq!(successes, 1);
    assert_eq!(bids.find_by_bidder("a@x.com").await.unwrap().len(), 1);

    let stored = jobs.find_by_id(posted.id).await.unwrap().unwrap();
    assert_eq!(stored.bid_count, 1);
}

#[tokio::test]
async fn distinct_bidders_all_count() {
    let (service, jobs, _) = setup();
    let posted = jobs.insert(job("owner@x.com")).await.unwrap();
    let service = Arc::new(service);

    let mut handles = Vec::new();
    for i in 0..10 {
        let service = Arc::clone(&service);
        let req = request(&format!("bidder{i}@x.com"), posted.id);
        handles.push(tokio::spawn(async move { service.place_bid(req).await }));
    }
    for handle in handles {
        handle.await.unwrap().unwrap();
    }

    let stored = jobs.find_by_id(posted.id).await.unwrap().unwrap();
    assert_eq!(stored.bid_count, 10);
}

/// Job repository double whose counter increment always reports the job as
/// gone, simulating a delete racing the placement between lookup and
/// increment.
struct VanishingJobRepository {
    inner: MockJobRepository,
}

#[async_trait]
impl JobRepository for VanishingJobRepository {
    async fn insert(&self, job: Job) -> Result<Job, DomainError> {
        self.inner.insert(job).await
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Job>, DomainError> {
        self.inner.find_by_id(id).await
    }

    async fn find_all(&self) -> Result<Vec<Job>, DomainError> {
        self.inner.find_all().await
    }

    async fn find_by_owner(&self, owner_email: &str) -> Result<Vec<Job>, DomainError> {
        self.inner.find_by_owner(owner_email).await
    }

    async fn find_by_category(&self, category: &str) -> Result<Vec<Job>, DomainError> {
        self.inner.find_by_category(category).await
    }

    async fn update(&self, id: Uuid, update: JobUpdate) -> Result<Option<Job>, DomainError> {
        self.inner.update(id, update).await
    }

    async fn delete(&self, id: Uuid) -> Result<bool, DomainError> {
        self.inner.delete(id).await
    }

    async fn increment_bid_count(
        &self,
        _id: Uuid,
        _delta: i32,
    ) -> Result<Option<Job>, DomainError> {
        Ok(None)
    }
}

#[tokio::test]
async fn bid_is_rolled_back_when_the_job_vanishes_mid_placement() {
    let jobs = Arc::new(VanishingJobRepository {
        inner: MockJobRepository::new(),
    });
    let bids = Arc::new(MockBidRepository::new());
    let service = BidPlacementService::new(Arc::clone(&jobs), Arc::clone(&bids));

    let posted = jobs.insert(job("owner@x.com")).await.unwrap();
    let err = service
        .place_bid(request("a@x.com", posted.id))
        .await
        .unwrap_err();

    assert!(matches!(err, DomainError::NotFound { .. }));
    assert!(bids.find_by_bidder("a@x.com").await.unwrap().is_empty());
}
