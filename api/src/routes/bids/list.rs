use actix_web::{web, HttpResponse};

use one_core::repositories::{BidRepository, JobRepository};
use one_core::services::bids::BidRole;

use crate::dto::bid::BidListQuery;
use crate::handlers::error::handle_domain_error;
use crate::middleware::auth::AuthContext;
use crate::state::AppState;
use one_shared::types::response::ErrorResponse;

/// Handler for GET /api/v1/bids/{email}?role=placed|received
///
/// Lists bids the identity placed, or bids received on jobs it owns. The
/// caller may only list their own bids.
///
/// # Errors
/// - 400 Bad Request: unknown role
/// - 401 Unauthorized: missing or invalid credential
/// - 403 Forbidden: credential belongs to a different identity
pub async fn list_bids<J, B>(
    state: web::Data<AppState<J, B>>,
    auth: AuthContext,
    path: web::Path<String>,
    query: web::Query<BidListQuery>,
) -> HttpResponse
where
    J: JobRepository + 'static,
    B: BidRepository + 'static,
{
    let email = path.into_inner();
    if let Err(error) = auth.require(&email) {
        return handle_domain_error(error);
    }

    let role = match BidRole::parse(&query.role) {
        Some(role) => role,
        None => {
            return HttpResponse::BadRequest().json(ErrorResponse::new(
                "validation_error",
                "role must be 'placed' or 'received'",
            ))
        }
    };

    match state.bid_queries.list_bids(&email, role).await {
        Ok(bids) => HttpResponse::Ok().json(bids),
        Err(error) => handle_domain_error(error),
    }
}
