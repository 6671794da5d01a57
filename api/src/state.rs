//! Shared application state wired into every handler.

use std::sync::Arc;

use one_core::repositories::{BidRepository, JobRepository};
use one_core::services::bids::{BidPlacementService, BidQueryService};
use one_core::services::jobs::JobService;
use one_core::services::token::TokenService;

use crate::config::Environment;

/// Services shared across handlers.
///
/// Generic over the repository implementations so integration tests can run
/// the full HTTP stack against the in-memory mocks.
pub struct AppState<J, B>
where
    J: JobRepository,
    B: BidRepository,
{
    /// Credential issuance and verification
    pub token_service: Arc<TokenService>,
    /// Job lifecycle operations
    pub jobs: JobService<J>,
    /// Bid placement with counter maintenance
    pub bid_placement: BidPlacementService<J, B>,
    /// Bid listings and status changes
    pub bid_queries: BidQueryService<B>,
    /// Deployment environment, drives cookie attributes
    pub environment: Environment,
}

impl<J, B> AppState<J, B>
where
    J: JobRepository,
    B: BidRepository,
{
    pub fn new(
        token_service: Arc<TokenService>,
        job_repository: Arc<J>,
        bid_repository: Arc<B>,
        environment: Environment,
    ) -> Self {
        Self {
            token_service,
            jobs: JobService::new(Arc::clone(&job_repository)),
            bid_placement: BidPlacementService::new(job_repository, Arc::clone(&bid_repository)),
            bid_queries: BidQueryService::new(bid_repository),
            environment,
        }
    }
}
