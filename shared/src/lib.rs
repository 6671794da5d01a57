//! # OneSphere Shared
//!
//! Types shared across the OneSphere backend layers: API response wrappers
//! and the standardized error payload returned by every endpoint.

pub mod types;

pub use types::response::{ApiResponse, ErrorResponse};
