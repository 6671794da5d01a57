//! # OneSphere Core
//!
//! Core business logic and domain layer for the OneSphere backend.
//! This crate contains domain entities, business services, repository
//! interfaces, and error types that form the foundation of the application
//! architecture.

pub mod domain;
pub mod errors;
pub mod repositories;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::entities::{AccessToken, Bid, BidStatus, Claims, Job, JobUpdate};
pub use errors::{DomainError, DomainResult, TokenError};
pub use repositories::{BidRepository, JobRepository, MockBidRepository, MockJobRepository};
pub use services::{
    BidPlacementService, BidQueryService, BidRole, JobDraft, JobService, PlaceBid, TokenService,
    TokenServiceConfig,
};
