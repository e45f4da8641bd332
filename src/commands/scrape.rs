//! Scrape command implementation

use super::{print_summary, resolve_site_url};
use crate::pipeline::{self, RunOptions};
use crate::scrape::{PageClient, SiteConfig, Source};
use crate::storage::CricketDatabase;
use crate::Result;
use std::path::PathBuf;
use std::time::Duration;

/// Handle the scrape command: a full remote pipeline run.
pub async fn handle_scrape(
    site_url: Option<String>,
    timeout_secs: u64,
    backup: PathBuf,
    survey: bool,
    verbose: bool,
) -> Result<()> {
    let base_url = resolve_site_url(site_url);
    println!("Scraping {}...", base_url);

    // No session means no run at all; abort before any table is touched.
    let client = PageClient::new(Duration::from_secs(timeout_secs))?;
    let source = Source::Site {
        config: SiteConfig::new(base_url),
        client,
    };

    let mut db = CricketDatabase::new()?;

    let opts = RunOptions {
        backup_path: Some(backup),
        survey,
        verbose,
    };
    let summary = pipeline::run(&mut db, &source, &opts).await?;
    print_summary(&summary);

    Ok(())
}
