//! Unit tests for the token service

use chrono::Utc;
use jsonwebtoken::{encode, EncodingKey, Header};
use uuid::Uuid;

use crate::domain::entities::token::{Claims, JWT_AUDIENCE, JWT_ISSUER};
use crate::errors::{DomainError, TokenError};
use crate::services::token::{TokenService, TokenServiceConfig};

fn service() -> TokenService {
    TokenService::new(TokenServiceConfig {
        jwt_secret: "test-secret".to_string(),
        ..Default::default()
    })
}

#[test]
fn issued_token_verifies_back_to_same_identity() {
    let service = service();
    let issued = service.issue_token("a@x.com").unwrap();
    assert_eq!(issued.expires_in, 3600);

    let claims = service.verify_token(&issued.token).unwrap();
    assert_eq!(claims.email(), "a@x.com");
    assert_ne!(claims.email(), "b@x.com");
}

#[test]
fn tokens_for_different_identities_are_distinct() {
    let service = service();
    let for_a = service.issue_token("a@x.com").unwrap();
    let for_b = service.issue_token("b@x.com").unwrap();

    assert_ne!(for_a.token, for_b.token);
    assert_eq!(service.verify_token(&for_a.token).unwrap().email(), "a@x.com");
    assert_eq!(service.verify_token(&for_b.token).unwrap().email(), "b@x.com");
}

#[test]
fn tampered_token_is_rejected() {
    let service = service();
    let issued = service.issue_token("a@x.com").unwrap();

    // Flip a character in the payload segment
    let mut parts: Vec<String> = issued.token.split('.').map(String::from).collect();
    let mut payload: Vec<char> = parts[1].chars().collect();
    payload[0] = if payload[0] == 'A' { 'B' } else { 'A' };
    parts[1] = payload.into_iter().collect();
    let tampered = parts.join(".");

    let err = service.verify_token(&tampered).unwrap_err();
    assert!(matches!(err, DomainError::Token(TokenError::InvalidToken)));
}

#[test]
fn token_signed_with_other_secret_is_rejected() {
    let issued = TokenService::new(TokenServiceConfig {
        jwt_secret: "other-secret".to_string(),
        ..Default::default()
    })
    .issue_token("a@x.com")
    .unwrap();

    let err = service().verify_token(&issued.token).unwrap_err();
    assert!(matches!(err, DomainError::Token(TokenError::InvalidToken)));
}

#[test]
fn expired_token_is_rejected_even_if_well_formed() {
    let now = Utc::now().timestamp();
    let claims = Claims {
        sub: "a@x.com".to_string(),
        iat: now - 7200,
        exp: now - 3600,
        nbf: now - 7200,
        iss: JWT_ISSUER.to_string(),
        aud: JWT_AUDIENCE.to_string(),
        jti: Uuid::new_v4().to_string(),
    };
    let token = encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(b"test-secret"),
    )
    .unwrap();

    let err = service().verify_token(&token).unwrap_err();
    assert!(matches!(err, DomainError::Token(TokenError::InvalidToken)));
}

#[test]
fn garbage_input_yields_the_same_failure_kind_as_expiry() {
    let service = service();
    let garbage = service.verify_token("not-a-token").unwrap_err();
    assert!(matches!(
        garbage,
        DomainError::Token(TokenError::InvalidToken)
    ));
}
