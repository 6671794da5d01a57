//! # OneSphere API
//!
//! HTTP transport layer for the OneSphere backend: route handlers, request
//! DTOs, the authentication gate, and the error-to-status mapping. All
//! business rules live in `one_core`; this crate only adapts them to
//! actix-web.

pub mod app;
pub mod config;
pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod routes;
pub mod state;
