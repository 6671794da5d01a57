//! Domain-specific error types and error handling.

mod types;

pub use types::TokenError;

use thiserror::Error;

/// Core domain errors.
///
/// Every variant is recoverable at the request boundary and maps to a
/// distinct HTTP status in the api layer; none should take the process down.
#[derive(Error, Debug)]
pub enum DomainError {
    /// Credential missing or failed verification
    #[error("Unauthenticated")]
    Unauthenticated,

    /// Valid credential, but the caller does not own the target record
    #[error("Forbidden")]
    Forbidden,

    #[error("Resource not found: {resource}")]
    NotFound { resource: String },

    /// Uniqueness violation on `(bidder, job)`
    #[error("Bid already placed on this job")]
    DuplicateBid,

    #[error("Validation error: {message}")]
    Validation { message: String },

    /// The persistence layer could not be reached or failed mid-request
    #[error("Database error: {message}")]
    Database { message: String },

    // Bridge to specific error types
    #[error(transparent)]
    Token(#[from] TokenError),
}

impl DomainError {
    /// Convenience constructor for not-found errors
    pub fn not_found(resource: impl Into<String>) -> Self {
        DomainError::NotFound {
            resource: resource.into(),
        }
    }

    /// Convenience constructor for database errors
    pub fn database(message: impl Into<String>) -> Self {
        DomainError::Database {
            message: message.into(),
        }
    }
}

pub type DomainResult<T> = Result<T, DomainError>;
