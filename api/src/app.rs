//! Application factory.
//!
//! Builds the actix-web App with routes, CORS and the authentication gate.
//! Kept generic over the repository implementations so the integration
//! tests can run the exact production route table against in-memory stores.

use std::sync::Arc;

use actix_web::{
    middleware::{Compat, Logger},
    web, App, HttpResponse,
};

use one_core::repositories::{BidRepository, JobRepository};
use one_shared::types::response::ErrorResponse;

use crate::middleware::auth::AuthGate;
use crate::middleware::cors::configure_cors;
use crate::routes::auth::{issue::issue_token, logout::logout};
use crate::routes::bids::{list::list_bids, place::place_bid, status::update_bid_status};
use crate::routes::health::health_check;
use crate::routes::jobs::{
    create::create_job,
    delete::delete_job,
    list::{get_job, list_by_category, list_by_owner, list_jobs},
    update::update_job,
};
use crate::state::AppState;

/// Create and configure the application with all routes wired up
pub fn create_app<J, B>(
    app_state: web::Data<AppState<J, B>>,
) -> App<
    impl actix_web::dev::ServiceFactory<
        actix_web::dev::ServiceRequest,
        Config = (),
        Response = actix_web::dev::ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
>
where
    J: JobRepository + 'static,
    B: BidRepository + 'static,
{
    let cors = configure_cors(app_state.environment);
    let tokens = Arc::clone(&app_state.token_service);
    let gate = move || AuthGate::new(Arc::clone(&tokens));

    // Compat boxes each middleware's body type so the factory can keep the
    // plain ServiceResponse signature below
    App::new()
        .app_data(app_state)
        .wrap(Compat::new(Logger::default()))
        .wrap(Compat::new(cors))
        .route("/health", web::get().to(health_check))
        .service(
            web::scope("/api/v1")
                .service(
                    web::scope("/auth")
                        .route("/token", web::post().to(issue_token::<J, B>))
                        .route("/logout", web::post().to(logout::<J, B>)),
                )
                .service(
                    web::scope("/jobs")
                        .route("", web::get().to(list_jobs::<J, B>))
                        .route("", web::post().to(create_job::<J, B>).wrap(gate()))
                        // Registered before /{id} so the literal segments win
                        .route(
                            "/owner/{email}",
                            web::get().to(list_by_owner::<J, B>).wrap(gate()),
                        )
                        .route(
                            "/category/{category}",
                            web::get().to(list_by_category::<J, B>),
                        )
                        .route("/{id}", web::get().to(get_job::<J, B>))
                        .route("/{id}", web::put().to(update_job::<J, B>).wrap(gate()))
                        .route("/{id}", web::delete().to(delete_job::<J, B>).wrap(gate())),
                )
                .service(
                    web::scope("/bids")
                        .route("", web::post().to(place_bid::<J, B>).wrap(gate()))
                        .route(
                            "/{id}/status",
                            web::patch().to(update_bid_status::<J, B>).wrap(gate()),
                        )
                        .route("/{email}", web::get().to(list_bids::<J, B>).wrap(gate())),
                ),
        )
        .default_service(web::route().to(not_found))
}

/// Default 404 handler
async fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(ErrorResponse::new(
        "not_found",
        "The requested resource was not found",
    ))
}
