use actix_web::{web, HttpResponse};
use uuid::Uuid;
use validator::Validate;

use one_core::repositories::{BidRepository, JobRepository};

use crate::dto::job::UpdateJobRequest;
use crate::handlers::error::{handle_domain_error, handle_validation_errors};
use crate::middleware::auth::AuthContext;
use crate::state::AppState;

/// Handler for PUT /api/v1/jobs/{id}
///
/// Updates a job's descriptive fields. Only the owner may update;
/// `bid_count` and ownership are never client-writable.
///
/// # Errors
/// - 400 Bad Request: invalid fields
/// - 401 Unauthorized: missing or invalid credential
/// - 403 Forbidden: caller does not own the job
/// - 404 Not Found: no job with this id
pub async fn update_job<J, B>(
    state: web::Data<AppState<J, B>>,
    auth: AuthContext,
    path: web::Path<Uuid>,
    body: web::Json<UpdateJobRequest>,
) -> HttpResponse
where
    J: JobRepository + 'static,
    B: BidRepository + 'static,
{
    if let Err(errors) = body.validate() {
        return handle_validation_errors(errors);
    }

    match state
        .jobs
        .update_job(path.into_inner(), &auth.email, body.into_inner().into())
        .await
    {
        Ok(job) => HttpResponse::Ok().json(job),
        Err(error) => handle_domain_error(error),
    }
}
