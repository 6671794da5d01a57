use actix_web::{web, HttpResponse};
use validator::Validate;

use one_core::repositories::{BidRepository, JobRepository};

use crate::dto::auth::{IssueTokenRequest, TokenIssuedResponse};
use crate::handlers::error::{handle_domain_error, handle_validation_errors};
use crate::routes::auth::session_cookie;
use crate::state::AppState;

/// Handler for POST /api/v1/auth/token
///
/// Issues a session credential for the given email and sets it as an
/// HttpOnly cookie. The credential never appears in the response body.
///
/// # Errors
/// - 400 Bad Request: malformed email
pub async fn issue_token<J, B>(
    state: web::Data<AppState<J, B>>,
    body: web::Json<IssueTokenRequest>,
) -> HttpResponse
where
    J: JobRepository + 'static,
    B: BidRepository + 'static,
{
    if let Err(errors) = body.validate() {
        return handle_validation_errors(errors);
    }

    match state.token_service.issue_token(&body.email) {
        Ok(access) => {
            let cookie = session_cookie(access.token, access.expires_in, state.environment);
            HttpResponse::Ok().cookie(cookie).json(TokenIssuedResponse {
                success: true,
                expires_in: access.expires_in,
            })
        }
        Err(error) => handle_domain_error(error),
    }
}
