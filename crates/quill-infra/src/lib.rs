//! # Quill Infrastructure
//!
//! Concrete implementations of the ports defined in `quill-core`.
//!
//! ## Feature Flags
//!
//! - `postgres` (default) - PostgreSQL storage via SeaORM
//! - `minimal` - no external database, in-memory only

pub mod database;

pub use database::InMemoryPostRepository;

#[cfg(feature = "postgres")]
pub use database::{DatabaseConfig, PostgresPostRepository};
