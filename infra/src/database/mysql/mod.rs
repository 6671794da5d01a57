//! MySQL repository implementations

mod bid_repository_impl;
mod job_repository_impl;

pub use bid_repository_impl::MySqlBidRepository;
pub use job_repository_impl::MySqlJobRepository;
