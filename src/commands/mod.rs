//! Command implementations for the cricket dashboard CLI

pub mod import;
pub mod scrape;
pub mod show;

use crate::pipeline::RunSummary;
use crate::scrape::DEFAULT_SITE_URL;
use crate::SITE_URL_ENV_VAR;

/// Resolve the target site from the CLI flag, the environment, or the
/// built-in default, in that order.
pub fn resolve_site_url(flag: Option<String>) -> String {
    flag.or_else(|| std::env::var(SITE_URL_ENV_VAR).ok())
        .unwrap_or_else(|| DEFAULT_SITE_URL.to_string())
}

/// Print the operator-facing run summary. Counts are reported for every
/// kind, including ones whose load failed.
pub fn print_summary(summary: &RunSummary) {
    println!("\nRun summary:");
    for report in &summary.reports {
        match &report.error {
            None => println!(
                "  ✓ {}: extracted {}, normalized {}, rejected {}, loaded {}",
                report.kind, report.extracted, report.normalized, report.rejected, report.loaded
            ),
            Some(error) => println!(
                "  ⚠ {}: extracted {}, normalized {}, rejected {}, load failed: {}",
                report.kind, report.extracted, report.normalized, report.rejected, error
            ),
        }
    }
    println!("Completed in {:.2}s", summary.duration.as_secs_f64());
}
