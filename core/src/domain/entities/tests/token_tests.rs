//! Unit tests for Claims

use crate::domain::entities::token::{Claims, JWT_AUDIENCE, JWT_ISSUER};

#[test]
fn claims_carry_identity_and_audience() {
    let claims = Claims::new("a@x.com", 1);
    assert_eq!(claims.email(), "a@x.com");
    assert_eq!(claims.iss, JWT_ISSUER);
    assert_eq!(claims.aud, JWT_AUDIENCE);
    assert!(!claims.jti.is_empty());
}

#[test]
fn expiry_window_is_configurable() {
    let short = Claims::new("a@x.com", 1);
    let long = Claims::new("a@x.com", 24 * 365);
    assert_eq!(short.exp - short.iat, 3600);
    assert_eq!(long.exp - long.iat, 3600 * 24 * 365);
    assert!(!short.is_expired());
}

#[test]
fn past_expiry_is_detected() {
    let mut claims = Claims::new("a@x.com", 1);
    claims.exp = claims.iat - 10;
    assert!(claims.is_expired());
}
