use actix_web::{web, HttpResponse};
use validator::Validate;

use one_core::repositories::{BidRepository, JobRepository};
use one_core::services::bids::PlaceBid;

use crate::dto::bid::PlaceBidRequest;
use crate::handlers::error::{handle_domain_error, handle_validation_errors};
use crate::middleware::auth::AuthContext;
use crate::state::AppState;

/// Handler for POST /api/v1/bids
///
/// Places a bid on a job as the authenticated caller. At most one bid per
/// caller per job; the job's `bid_count` moves with the placement.
///
/// # Errors
/// - 400 Bad Request: invalid fields
/// - 401 Unauthorized: missing or invalid credential
/// - 403 Forbidden: caller owns the job
/// - 404 Not Found: no job with this id
/// - 409 Conflict: caller already bid on this job
pub async fn place_bid<J, B>(
    state: web::Data<AppState<J, B>>,
    auth: AuthContext,
    body: web::Json<PlaceBidRequest>,
) -> HttpResponse
where
    J: JobRepository + 'static,
    B: BidRepository + 'static,
{
    if let Err(errors) = body.validate() {
        return handle_validation_errors(errors);
    }

    let request = body.into_inner();
    let placement = PlaceBid {
        job_id: request.job_id,
        bidder_email: auth.email,
        price: request.price,
        comment: request.comment,
        deadline: request.deadline,
    };

    match state.bid_placement.place_bid(placement).await {
        Ok(bid) => HttpResponse::Created().json(bid),
        Err(error) => handle_domain_error(error),
    }
}
