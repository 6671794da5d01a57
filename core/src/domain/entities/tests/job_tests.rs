//! Unit tests for the Job entity

use chrono::{Duration, Utc};

use crate::domain::entities::job::{Job, JobUpdate};

fn sample_job(owner: &str) -> Job {
    Job::new(
        owner.to_string(),
        "Build a landing page".to_string(),
        "Responsive landing page with contact form".to_string(),
        "Web Development".to_string(),
        100.0,
        500.0,
        Utc::now() + Duration::days(14),
    )
}

#[test]
fn new_job_starts_with_zero_bids() {
    let job = sample_job("a@x.com");
    assert_eq!(job.bid_count, 0);
    assert_eq!(job.created_at, job.updated_at);
}

#[test]
fn ownership_is_exact_email_match() {
    let job = sample_job("a@x.com");
    assert!(job.is_owned_by("a@x.com"));
    assert!(!job.is_owned_by("b@x.com"));
    assert!(!job.is_owned_by("A@x.com"));
}

#[test]
fn apply_updates_only_provided_fields() {
    let mut job = sample_job("a@x.com");
    let original_description = job.description.clone();

    job.apply(JobUpdate {
        title: Some("Redesign landing page".to_string()),
        max_price: Some(750.0),
        ..Default::default()
    });

    assert_eq!(job.title, "Redesign landing page");
    assert_eq!(job.max_price, 750.0);
    assert_eq!(job.description, original_description);
    assert_eq!(job.bid_count, 0);
}
