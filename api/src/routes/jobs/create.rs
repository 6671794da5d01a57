use actix_web::{web, HttpResponse};
use validator::Validate;

use one_core::repositories::{BidRepository, JobRepository};

use crate::dto::job::CreateJobRequest;
use crate::handlers::error::{handle_domain_error, handle_validation_errors};
use crate::middleware::auth::AuthContext;
use crate::state::AppState;

/// Handler for POST /api/v1/jobs
///
/// Creates a job owned by the authenticated caller. Ownership comes from
/// the credential, never from the request body.
///
/// # Errors
/// - 400 Bad Request: invalid fields
/// - 401 Unauthorized: missing or invalid credential
pub async fn create_job<J, B>(
    state: web::Data<AppState<J, B>>,
    auth: AuthContext,
    body: web::Json<CreateJobRequest>,
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
        .create_job(&auth.email, body.into_inner().into())
        .await
    {
        Ok(job) => HttpResponse::Created().json(job),
        Err(error) => handle_domain_error(error),
    }
}
