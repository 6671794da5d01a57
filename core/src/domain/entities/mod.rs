//! Domain entities representing core business objects.

pub mod bid;
pub mod job;
pub mod token;

#[cfg(test)]
mod tests;

// Re-export commonly used types
pub use bid::{Bid, BidStatus};
pub use job::{Job, JobUpdate};
pub use token::{AccessToken, Claims, JWT_AUDIENCE, JWT_ISSUER};
