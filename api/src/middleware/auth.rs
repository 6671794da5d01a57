//! Authentication gate for protected endpoints.
//!
//! The gate accepts a credential from either the `token` cookie or the
//! `Authorization: Bearer` header, verifies it, and injects the caller's
//! identity into request extensions. Handlers read it back through the
//! [`AuthContext`] extractor.

use std::{
    future::{ready, Ready},
    rc::Rc,
    sync::Arc,
    task::{Context, Poll},
};

use actix_web::{
    dev::{Service, ServiceRequest, ServiceResponse, Transform},
    error::InternalError,
    http::header::AUTHORIZATION,
    Error, FromRequest, HttpMessage, HttpRequest, HttpResponse,
};
use futures_util::future::LocalBoxFuture;

use one_core::domain::entities::token::Claims;
use one_core::errors::DomainError;
use one_core::services::token::TokenService;
use one_shared::types::response::ErrorResponse;

/// Verified caller identity injected into requests
#[derive(Debug, Clone)]
pub struct AuthContext {
    /// Email the credential was issued to
    pub email: String,
    /// Credential ID, for log correlation
    pub jti: String,
}

impl AuthContext {
    fn from_claims(claims: Claims) -> Self {
        Self {
            email: claims.sub,
            jti: claims.jti,
        }
    }

    /// Checks that the caller is `target_email`.
    ///
    /// Ownership-scoped routes carry the target identity in the path; a
    /// valid credential for a *different* identity is forbidden, not
    /// unauthenticated.
    pub fn require(&self, target_email: &str) -> Result<(), DomainError> {
        if self.email == target_email {
            Ok(())
        } else {
            Err(DomainError::Forbidden)
        }
    }
}

/// Authentication middleware factory
pub struct AuthGate {
    token_service: Arc<TokenService>,
}

impl AuthGate {
    pub fn new(token_service: Arc<TokenService>) -> Self {
        Self { token_service }
    }
}

impl<S, B> Transform<S, ServiceRequest> for AuthGate
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type InitError = ();
    type Transform = AuthGateMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(AuthGateMiddleware {
            service: Rc::new(service),
            token_service: Arc::clone(&self.token_service),
        }))
    }
}

/// Authentication middleware service
pub struct AuthGateMiddleware<S> {
    service: Rc<S>,
    token_service: Arc<TokenService>,
}

impl<S, B> Service<ServiceRequest> for AuthGateMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(&self, ctx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.service.poll_ready(ctx)
    }

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = Rc::clone(&self.service);
        let token_service = Arc::clone(&self.token_service);

        Box::pin(async move {
            let token = match extract_token(&req) {
                Some(token) => token,
                None => return Err(unauthenticated()),
            };

            match token_service.verify_token(&token) {
                Ok(claims) => {
                    req.extensions_mut().insert(AuthContext::from_claims(claims));
                }
                Err(_) => return Err(unauthenticated()),
            }

            service.call(req).await
        })
    }
}

/// Pulls the credential out of the request, cookie first.
fn extract_token(req: &ServiceRequest) -> Option<String> {
    if let Some(cookie) = req.request().cookie("token") {
        let value = cookie.value().to_string();
        if !value.is_empty() {
            return Some(value);
        }
    }

    req.headers()
        .get(AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .map(|s| s.to_string())
}

/// Every gate failure collapses to the same 401 body
fn unauthenticated() -> Error {
    let response = HttpResponse::Unauthorized().json(ErrorResponse::new(
        "unauthenticated",
        "Authentication required",
    ));
    InternalError::from_response(DomainError::Unauthenticated, response).into()
}

impl FromRequest for AuthContext {
    type Error = Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut actix_web::dev::Payload) -> Self::Future {
        let result = req
            .extensions()
            .get::<AuthContext>()
            .cloned()
            .ok_or_else(unauthenticated);

        ready(result)
    }
}
