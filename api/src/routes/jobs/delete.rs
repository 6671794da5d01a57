use actix_web::{web, HttpResponse};
use serde_json::json;
use uuid::Uuid;

use one_core::repositories::{BidRepository, JobRepository};

use crate::handlers::error::handle_domain_error;
use crate::middleware::auth::AuthContext;
use crate::state::AppState;

/// Handler for DELETE /api/v1/jobs/{id}
///
/// # Errors
/// - 401 Unauthorized: missing or invalid credential
/// - 403 Forbidden: caller does not own the job
/// - 404 Not Found: no job with this id
pub async fn delete_job<J, B>(
    state: web::Data<AppState<J, B>>,
    auth: AuthContext,
    path: web::Path<Uuid>,
) -> HttpResponse
where
    J: JobRepository + 'static,
    B: BidRepository + 'static,
{
    match state.jobs.delete_job(path.into_inner(), &auth.email).await {
        Ok(()) => HttpResponse::Ok().json(json!({ "deleted": true })),
        Err(error) => handle_domain_error(error),
    }
}
