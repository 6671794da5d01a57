//! Credential error types.
//!
//! Verification failures deliberately collapse into a single variant before
//! they reach the transport layer: callers learn that a credential is
//! invalid, never why.

use thiserror::Error;

/// Token-related errors
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenError {
    /// Covers bad signature, malformed payload, wrong issuer/audience,
    /// and expiry alike
    #[error("Invalid or expired token")]
    InvalidToken,

    #[error("Token generation failed")]
    TokenGenerationFailed,
}
