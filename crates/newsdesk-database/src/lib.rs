//! # newsdesk-database
//!
//! PostgreSQL connection pool, migrations, and repository implementations
//! for Newsdesk.

pub mod connection;
pub mod migration;
pub mod repositories;

pub use connection::create_pool;
