//! Scrape layer: page fetching, candidate extraction, and bundled fixtures.
//!
//! The Extractor is deliberately tolerant: the target site's structure is not
//! under our control, so every lookup (page location, CSS locator, cell
//! layout) is a best-effort attempt with an ordered list of fallbacks.

pub mod extract;
pub mod fixture;
pub mod page;
pub mod survey;


pub use extract::extract;
pub use fixture::FixtureSet;
pub use page::PageClient;

use crate::cli::types::RecordKind;

/// Default target site, overridable per run.
pub const DEFAULT_SITE_URL: &str = "http://bigbashboard.com";

/// One raw candidate: the ordered cell/field texts captured for a single
/// element, before any validation.
#[derive(Debug, Clone, PartialEq)]
pub struct RawRecord {
    pub fields: Vec<String>,
}

impl RawRecord {
    pub fn new(fields: Vec<String>) -> Self {
        Self { fields }
    }

    /// Field text at `idx`, if captured.
    pub fn field(&self, idx: usize) -> Option<&str> {
        self.fields.get(idx).map(String::as_str)
    }
}

/// Where candidates come from: a live site sharing one HTTP session across
/// all kinds, or the in-process fixture tables.
pub enum Source {
    Site {
        config: SiteConfig,
        client: PageClient,
    },
    Fixture(FixtureSet),
}

/// Candidate page locations rooted at the operator-supplied base URL.
#[derive(Debug, Clone)]
pub struct SiteConfig {
    pub base_url: String,
}

impl SiteConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self { base_url }
    }

    /// Ordered candidate URLs for a kind. The site's URL scheme may change
    /// without notice, so each kind carries several likely paths.
    pub fn pages(&self, kind: RecordKind) -> Vec<String> {
        let paths: &[&str] = match kind {
            RecordKind::Match => &["matches", "fixtures", "bbl/matches"],
            RecordKind::Batting => &[
                "stats/batting",
                "statistics/batting",
                "players/batting",
                "bbl/batting",
            ],
            RecordKind::Bowling => &[
                "stats/bowling",
                "statistics/bowling",
                "players/bowling",
                "bbl/bowling",
            ],
        };
        paths
            .iter()
            .map(|path| format!("{}/{}", self.base_url, path))
            .collect()
    }
}
