//! Import command implementation

use super::print_summary;
use crate::pipeline::{self, RunOptions};
use crate::scrape::{fixture, Source};
use crate::storage::CricketDatabase;
use crate::Result;
use std::path::PathBuf;

/// Handle the import command: a full pipeline run from the bundled dataset.
pub async fn handle_import(backup: PathBuf, verbose: bool) -> Result<()> {
    println!("Importing the bundled season dataset...");

    let source = Source::Fixture(fixture::BUNDLED);
    let mut db = CricketDatabase::new()?;

    let opts = RunOptions {
        backup_path: Some(backup),
        survey: false,
        verbose,
    };
    let summary = pipeline::run(&mut db, &source, &opts).await?;
    print_summary(&summary);

    Ok(())
}
