//! Auth endpoint DTOs.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Request body for issuing a session credential
#[derive(Debug, Deserialize, Validate)]
pub struct IssueTokenRequest {
    /// Identity the credential is issued for
    #[validate(email(message = "must be a valid email address"))]
    pub email: String,
}

/// Response body for a successful issuance.
///
/// The credential itself travels in the `token` cookie; the body only
/// confirms success and how long the credential lives.
#[derive(Debug, Serialize, Deserialize)]
pub struct TokenIssuedResponse {
    pub success: bool,
    /// Credential lifetime in seconds
    pub expires_in: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_malformed_email() {
        let request = IssueTokenRequest {
            email: "not-an-email".to_string(),
        };
        assert!(request.validate().is_err());
    }

    #[test]
    fn accepts_well_formed_email() {
        let request = IssueTokenRequest {
            email: "alice@example.com".to_string(),
        };
        assert!(request.validate().is_ok());
    }
}
