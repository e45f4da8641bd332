//! Site survey diagnostics captured before a remote extraction run.
//!
//! Writes a navigation-link map (`site_structure.json`) and a raw snapshot of
//! the homepage (`homepage.html`). Both are debugging aids for adjusting
//! locators after a site redesign; nothing downstream reads them.

use super::page::PageClient;
use crate::error::{CricketError, Result};
use scraper::{Html, Selector};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// One anchor found on the homepage.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteLink {
    pub text: String,
    pub href: String,
}

/// Fetch the site root and write the diagnostic files into `out_dir`.
///
/// Returns the navigation links found. Failure is reported to the caller,
/// which logs it and continues; the survey never blocks extraction.
pub async fn survey_site(
    client: &PageClient,
    base_url: &str,
    out_dir: &Path,
) -> Result<Vec<SiteLink>> {
    let body = client.fetch(base_url).await?.ok_or(CricketError::NoData)?;

    std::fs::write(out_dir.join("homepage.html"), &body)?;

    let links = collect_links(&body);
    let json = serde_json::to_string_pretty(&links)?;
    std::fs::write(out_dir.join("site_structure.json"), json)?;

    Ok(links)
}

/// Collect every anchor's trimmed text and href from a page body.
pub(crate) fn collect_links(html: &str) -> Vec<SiteLink> {
    let document = Html::parse_document(html);
    let Ok(selector) = Selector::parse("a[href]") else {
        return Vec::new();
    };

    document
        .select(&selector)
        .filter_map(|anchor| {
            let href = anchor.value().attr("href")?;
            Some(SiteLink {
                text: anchor.text().collect::<String>().trim().to_string(),
                href: href.to_string(),
            })
        })
        .collect()
}
