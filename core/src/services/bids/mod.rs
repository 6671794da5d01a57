//! Bid services: placement (the one place two stores must stay consistent)
//! and owner/bidder-scoped queries.

mod placement;
mod queries;

#[cfg(test)]
mod tests;

pub use placement::{BidPlacementService, PlaceBid};
pub use queries::{BidQueryService, BidRole};
