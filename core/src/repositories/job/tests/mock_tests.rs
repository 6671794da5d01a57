//! Tests for the mock job repository

use chrono::{Duration, Utc};
use std::sync::Arc;
use uuid::Uuid;

use crate::domain::entities::job::{Job, JobUpdate};
use crate::repositories::job::{JobRepository, MockJobRepository};

fn job(owner: &str, category: &str) -> Job {
    Job::new(
        owner.to_string(),
        "title".to_string(),
        "description".to_string(),
        category.to_string(),
        50.0,
        100.0,
        Utc::now() + Duration::days(7),
    )
}

#[tokio::test]
async fn find_all_preserves_insertion_order() {
    let repo = MockJobRepository::new();
    let first = repo.insert(job("a@x.com", "Web Development")).await.unwrap();
    let second = repo.insert(job("b@x.com", "Graphics Design")).await.unwrap();

    let all = repo.find_all().await.unwrap();
    assert_eq!(all.len(), 2);
    assert_eq!(all[0].id, first.id);
    assert_eq!(all[1].id, second.id);
}

#[tokio::test]
async fn owner_and_category_filters_are_restartable() {
    let repo = MockJobRepository::new();
    repo.insert(job("a@x.com", "Web Development")).await.unwrap();
    repo.insert(job("a@x.com", "Graphics Design")).await.unwrap();
    repo.insert(job("b@x.com", "Web Development")).await.unwrap();

    assert_eq!(repo.find_by_owner("a@x.com").await.unwrap().len(), 2);
    // Same filter again returns the same result
    assert_eq!(repo.find_by_owner("a@x.com").await.unwrap().len(), 2);
    assert_eq!(
        repo.find_by_category("Web Development").await.unwrap().len(),
        2
    );
    assert!(repo.find_by_owner("c@x.com").await.unwrap().is_empty());
}

#[tokio::test]
async fn update_and_delete_report_not_found() {
    let repo = MockJobRepository::new();
    let missing = Uuid::new_v4();

    assert!(repo
        .update(missing, JobUpdate::default())
        .await
        .unwrap()
        .is_none());
    assert!(!repo.delete(missing).await.unwrap());
    assert!(repo.increment_bid_count(missing, 1).await.unwrap().is_none());
}

#[tokio::test]
async fn concurrent_increments_are_all_reflected() {
    let repo = Arc::new(MockJobRepository::new());
    let created = repo.insert(job("a@x.com", "Web Development")).await.unwrap();

    let mut handles = Vec::new();
    for _ in 0..50 {
        let repo = Arc::clone(&repo);
        let id = created.id;
        handles.push(tokio::spawn(async move {
            repo.increment_bid_count(id, 1).await.unwrap();
        }));
    }
    for handle in handles {
        handle.await.unwrap();
    }

    let job = repo.find_by_id(created.id).await.unwrap().unwrap();
    assert_eq!(job.bid_count, 50);
}

#[tokio::test]
async fn increment_can_roll_back_by_negative_delta() {
    let repo = MockJobRepository::new();
    let created = repo.insert(job("a@x.com", "Web Development")).await.unwrap();

    repo.increment_bid_count(created.id, 1).await.unwrap();
    let job = repo.increment_bid_count(created.id, -1).await.unwrap().unwrap();
    assert_eq!(job.bid_count, 0);
}
