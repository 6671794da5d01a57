use actix_web::{web, HttpResponse};
use uuid::Uuid;

use one_core::repositories::{BidRepository, JobRepository};

use crate::handlers::error::handle_domain_error;
use crate::middleware::auth::AuthContext;
use crate::state::AppState;

/// Handler for GET /api/v1/jobs
///
/// Public listing of every job, oldest first.
pub async fn list_jobs<J, B>(state: web::Data<AppState<J, B>>) -> HttpResponse
where
    J: JobRepository + 'static,
    B: BidRepository + 'static,
{
    match state.jobs.list_jobs().await {
        Ok(jobs) => HttpResponse::Ok().json(jobs),
        Err(error) => handle_domain_error(error),
    }
}

/// Handler for GET /api/v1/jobs/{id}
///
/// # Errors
/// - 404 Not Found: no job with this id
pub async fn get_job<J, B>(
    state: web::Data<AppState<J, B>>,
    path: web::Path<Uuid>,
) -> HttpResponse
where
    J: JobRepository + 'static,
    B: BidRepository + 'static,
{
    match state.jobs.get_job(path.into_inner()).await {
        Ok(job) => HttpResponse::Ok().json(job),
        Err(error) => handle_domain_error(error),
    }
}

/// Handler for GET /api/v1/jobs/owner/{email}
///
/// Ownership-scoped listing: the caller may only list their own jobs.
///
/// # Errors
/// - 401 Unauthorized: missing or invalid credential
/// - 403 Forbidden: credential belongs to a different identity
pub async fn list_by_owner<J, B>(
    state: web::Data<AppState<J, B>>,
    auth: AuthContext,
    path: web::Path<String>,
) -> HttpResponse
where
    J: JobRepository + 'static,
    B: BidRepository + 'static,
{
    let owner_email = path.into_inner();
    if let Err(error) = auth.require(&owner_email) {
        return handle_domain_error(error);
    }

    match state.jobs.list_by_owner(&owner_email).await {
        Ok(jobs) => HttpResponse::Ok().json(jobs),
        Err(error) => handle_domain_error(error),
    }
}

/// Handler for GET /api/v1/jobs/category/{category}
///
/// Public listing of jobs in one category.
pub async fn list_by_category<J, B>(
    state: web::Data<AppState<J, B>>,
    path: web::Path<String>,
) -> HttpResponse
where
    J: JobRepository + 'static,
    B: BidRepository + 'static,
{
    match state.jobs.list_by_category(&path.into_inner()).await {
        Ok(jobs) => HttpResponse::Ok().json(jobs),
        Err(error) => handle_domain_error(error),
    }
}
