//! Maps domain errors onto HTTP responses.
//!
//! One function, one mapping. Handlers never build error responses by hand,
//! so every failure of a given kind looks the same on the wire.

use actix_web::HttpResponse;
use validator::ValidationErrors;

use one_core::errors::DomainError;
use one_shared::types::response::ErrorResponse;

/// Converts a domain error into the matching HTTP response.
pub fn handle_domain_error(error: DomainError) -> HttpResponse {
    match error {
        DomainError::Unauthenticated | DomainError::Token(_) => HttpResponse::Unauthorized()
            .json(ErrorResponse::new("unauthenticated", "Authentication required")),
        DomainError::Forbidden => HttpResponse::Forbidden().json(ErrorResponse::new(
            "forbidden",
            "You do not have access to this resource",
        )),
        DomainError::NotFound { resource } => HttpResponse::NotFound().json(
            ErrorResponse::new("not_found", format!("{resource} not found")),
        ),
        DomainError::DuplicateBid => HttpResponse::Conflict().json(ErrorResponse::new(
            "duplicate_bid",
            "A bid for this job already exists",
        )),
        DomainError::Validation { message } => {
            HttpResponse::BadRequest().json(ErrorResponse::new("validation_error", message))
        }
        DomainError::Database { message } => {
            // Store details go to the log, not the client
            log::error!("store failure: {message}");
            HttpResponse::ServiceUnavailable().json(ErrorResponse::new(
                "store_unavailable",
                "The service is temporarily unavailable",
            ))
        }
    }
}

/// Converts request-shape validation failures into a 400 with field details.
pub fn handle_validation_errors(errors: ValidationErrors) -> HttpResponse {
    let details = errors
        .field_errors()
        .iter()
        .map(|(field, errs)| {
            let messages: Vec<String> = errs
                .iter()
                .map(|e| {
                    e.message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| e.code.to_string())
                })
                .collect();
            (
                field.to_string(),
                serde_json::Value::String(messages.join(", ")),
            )
        })
        .collect();

    HttpResponse::BadRequest().json(
        ErrorResponse::new("validation_error", "Request validation failed").with_details(details),
    )
}
