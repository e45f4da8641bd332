//! Cricket Dashboard CLI Library
//!
//! A Rust library for populating a cricket statistics dashboard: scrapes
//! match results and batting/bowling leaderboards from third-party sites,
//! normalizes them into a fixed schema, and atomically replaces the stored
//! tables consumed by the dashboard's read queries.
//!
//! ## Features
//!
//! - **Tolerant Extraction**: ordered fallback page locations and CSS
//!   locators, bounded timeouts, per-kind failure isolation
//! - **Schema Normalization**: typed coercion with degrade-to-default for
//!   non-identity fields; rejection only for missing identities
//! - **Atomic Replace**: each table is replaced in a single transaction,
//!   never left in a mixed old/new state
//! - **Bundled Fallback Dataset**: a complete season usable when scraping
//!   is blocked, shaped identically to scraped data
//! - **Read Surface**: sort/limit queries and chart payloads for the
//!   dashboard UI
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use cricket_dash::{
//!     pipeline::{self, RunOptions},
//!     scrape::{fixture, Source},
//!     CricketDatabase,
//! };
//!
//! # async fn example() -> cricket_dash::Result<()> {
//! let mut db = CricketDatabase::new()?;
//! let source = Source::Fixture(fixture::BUNDLED);
//! let summary = pipeline::run(&mut db, &source, &RunOptions::default()).await?;
//! assert!(summary.succeeded());
//! # Ok(())
//! # }
//! ```
//!
//! ## Environment Configuration
//!
//! Set the target site to avoid passing it in every command:
//! ```bash
//! export CRICKET_DASH_SITE_URL=http://bigbashboard.com
//! ```

pub mod cli;
pub mod commands;
pub mod error;
pub mod normalize;
pub mod pipeline;
pub mod scrape;
pub mod storage;

// Re-export commonly used types
pub use cli::types::{MatchNo, Rank, RecordKind};
pub use error::{CricketError, Result};
pub use storage::CricketDatabase;

pub const SITE_URL_ENV_VAR: &str = "CRICKET_DASH_SITE_URL";
