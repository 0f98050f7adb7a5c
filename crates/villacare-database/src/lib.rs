//! # villacare-database
//!
//! PostgreSQL access layer for VillaCare: connection pool management,
//! the migration runner, and one repository per entity. Repositories
//! are concrete structs over a shared [`sqlx::PgPool`] and expose only
//! the queries the services need.

pub mod connection;
pub mod migration;
pub mod repositories;
