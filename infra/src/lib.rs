//! # OneSphere Infrastructure
//!
//! Concrete implementations of the core repository traits against MySQL,
//! plus connection-pool bootstrapping. This is the only crate that talks
//! to the database.

pub mod database;

pub use database::{create_pool, DatabaseConfig};
pub use database::mysql::{MySqlBidRepository, MySqlJobRepository};
