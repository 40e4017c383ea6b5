//! SQLite storage implementation for Skylog.
//!
//! This crate provides all database-related functionality using Diesel
//! with SQLite. It implements the repository traits defined in
//! `skylog-core` and contains:
//! - Database connection pooling and management
//! - Embedded Diesel migrations
//! - Repository implementations for diary entries and weather snapshots
//! - Database-specific model types (with Diesel derives)
//!
//! This crate is the only place in the application where Diesel
//! dependencies exist; everything above it works with traits.

pub mod db;
pub mod errors;
pub mod schema;

// Repository implementations
pub mod diary;
pub mod weather;

// Re-export database utilities
pub use db::{
    create_pool, get_connection, init, run_migrations, spawn_writer, DbConnection, DbPool,
    WriteHandle,
};

// Re-export storage errors
pub use errors::StorageError;

// Re-export from skylog-core for convenience
pub use skylog_core::errors::{DatabaseError, Error, Result};
