use actix_web::{
    cookie::{time::Duration, Cookie, SameSite},
    web, HttpResponse,
};
use serde_json::json;

use one_core::repositories::{BidRepository, JobRepository};

use crate::routes::auth::TOKEN_COOKIE;
use crate::state::AppState;

/// Handler for POST /api/v1/auth/logout
///
/// Clears the credential cookie. Credentials are stateless so there is
/// nothing to revoke server-side; a cleared cookie plus natural expiry is
/// the whole logout story.
pub async fn logout<J, B>(state: web::Data<AppState<J, B>>) -> HttpResponse
where
    J: JobRepository + 'static,
    B: BidRepository + 'static,
{
    let production = state.environment.is_production();
    let expired = Cookie::build(TOKEN_COOKIE, "")
        .path("/")
        .http_only(true)
        .secure(production)
        .same_site(if production {
            SameSite::None
        } else {
            SameSite::Lax
        })
        .max_age(Duration::ZERO)
        .finish();

    HttpResponse::Ok()
        .cookie(expired)
        .json(json!({ "success": true }))
}
