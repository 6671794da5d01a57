//! Business services containing domain logic and use cases.

pub mod bids;
pub mod jobs;
pub mod token;

// Re-export commonly used types
pub use bids::{BidPlacementService, BidQueryService, BidRole, PlaceBid};
pub use jobs::{JobDraft, JobService};
pub use token::{TokenService, TokenServiceConfig};
