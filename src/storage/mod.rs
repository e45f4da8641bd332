//! Storage layer for the cricket dashboard CLI
//!
//! This module provides a clean abstraction over the SQLite database,
//! organized into logical components:
//! - `models`: Data structures
//! - `schema`: Database connection and schema management
//! - `queries`: Replace (Loader) and read-surface operations

pub mod models;
pub mod queries;
pub mod schema;


// Re-export the main types and database struct for easy access
pub use models::*;
pub use queries::LoadResult;
pub use schema::CricketDatabase;
