use actix_web::{web, HttpResponse};
use uuid::Uuid;

use one_core::repositories::{BidRepository, JobRepository};

use crate::dto::bid::UpdateBidStatusRequest;
use crate::handlers::error::handle_domain_error;
use crate::middleware::auth::AuthContext;
use crate::state::AppState;

/// Handler for PATCH /api/v1/bids/{id}/status
///
/// Moves a bid to a new status. Only the owner of the job the bid targets
/// may change it; the bidder never mutates a bid after placement.
///
/// # Errors
/// - 401 Unauthorized: missing or invalid credential
/// - 403 Forbidden: caller does not own the bid's job
/// - 404 Not Found: no bid with this id
pub async fn update_bid_status<J, B>(
    state: web::Data<AppState<J, B>>,
    auth: AuthContext,
    path: web::Path<Uuid>,
    body: web::Json<UpdateBidStatusRequest>,
) -> HttpResponse
where
    J: JobRepository + 'static,
    B: BidRepository + 'static,
{
    match state
        .bid_queries
        .update_bid_status(path.into_inner(), &auth.email, body.status)
        .await
    {
        Ok(bid) => HttpResponse::Ok().json(bid),
        Err(error) => handle_domain_error(error),
    }
}
