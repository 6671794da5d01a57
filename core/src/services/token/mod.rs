//! Token service module for JWT session credentials.
//!
//! Issues and verifies the signed, expiring tokens that gate
//! ownership-scoped queries. Stateless by design: no refresh tokens, no
//! revocation list; a credential dies by expiry alone.

mod config;
mod service;

#[cfg(test)]
mod tests;

pub use config::TokenServiceConfig;
pub use service::TokenService;
