//! CLI argument definitions and parsing.

pub mod types;

use crate::scrape::page::DEFAULT_TIMEOUT_SECS;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use types::RecordKind;

#[derive(Debug, Parser)]
#[clap(name = "cricket-dash", about = "Cricket statistics dashboard CLI")]
pub struct CricketDash {
    #[clap(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Scrape the target site and replace all stored tables.
    ///
    /// Extracts matches, batting leaders, and bowling leaders from the remote
    /// site, normalizes them, and performs an atomic replace per table. A
    /// failure for one kind does not abort the others.
    Scrape {
        /// Base URL of the target site (or set `CRICKET_DASH_SITE_URL` env var).
        #[clap(long)]
        site_url: Option<String>,

        /// Per-request timeout in seconds.
        #[clap(long, default_value_t = DEFAULT_TIMEOUT_SECS)]
        timeout_secs: u64,

        /// Where to write the JSON backup of the run's normalized records.
        #[clap(long, default_value = "scraped_data.json")]
        backup: PathBuf,

        /// Capture site structure diagnostics before extraction.
        #[clap(long)]
        survey: bool,

        /// Show detailed progress information.
        #[clap(long)]
        verbose: bool,
    },

    /// Load the bundled dataset instead of scraping.
    ///
    /// The reliable fallback path: replaces all stored tables from the
    /// in-process fixture tables, producing the same record shapes as a
    /// successful scrape.
    Import {
        /// Where to write the JSON backup of the run's normalized records.
        #[clap(long, default_value = "scraped_data.json")]
        backup: PathBuf,

        /// Show detailed progress information.
        #[clap(long)]
        verbose: bool,
    },

    /// Print stored records for one kind.
    Show {
        /// Record kind: matches, batting, or bowling.
        kind: RecordKind,

        /// Maximum number of rows to print.
        #[clap(long, short)]
        limit: Option<usize>,

        /// Output a chart payload as JSON instead of text lines.
        #[clap(long)]
        json: bool,
    },
}
