//! CORS policy, environment-aware.
//!
//! The browser client sends the credential cookie cross-origin, so
//! `supports_credentials` is always on. Development stays permissive;
//! production only admits the configured origins.

use actix_cors::Cors;
use actix_web::http::header;

use crate::config::Environment;

const DEFAULT_DEV_ORIGIN: &str = "http://localhost:5173";

/// Builds the CORS middleware for the given environment
pub fn configure_cors(environment: Environment) -> Cors {
    match environment {
        Environment::Development => Cors::default()
            .allowed_origin(DEFAULT_DEV_ORIGIN)
            .allowed_origin_fn(|origin, _| {
                origin
                    .to_str()
                    .map(|o| o.starts_with("http://localhost:") || o.starts_with("http://127.0.0.1:"))
                    .unwrap_or(false)
            })
            .allow_any_method()
            .allow_any_header()
            .supports_credentials()
            .max_age(3600),
        Environment::Production => {
            let origins = std::env::var("ALLOWED_ORIGINS").unwrap_or_default();
            let mut cors = Cors::default()
                .allowed_methods(vec!["GET", "POST", "PUT", "PATCH", "DELETE"])
                .allowed_headers(vec![header::AUTHORIZATION, header::CONTENT_TYPE])
                .supports_credentials()
                .max_age(3600);
            for origin in origins.split(',').map(str::trim).filter(|o| !o.is_empty()) {
                cors = cors.allowed_origin(origin);
            }
            cors
        }
    }
}
