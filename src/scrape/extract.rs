//! Candidate extraction: fetch a page for a kind and produce raw records.

use super::{fixture::FixtureSet, RawRecord, SiteConfig, Source};
use crate::cli::types::RecordKind;
use crate::scrape::page::PageClient;
use crate::Result;
use scraper::{Html, Selector};

/// Maximum stats rows captured per kind; the dashboard only shows top-N.
pub const STATS_ROW_CAP: usize = 20;

/// Maximum match cards captured per run.
pub const MATCH_CARD_CAP: usize = 40;

/// A stats row needs at least this many cells to be usable.
pub const MIN_STATS_FIELDS: usize = 5;

/// Ordered CSS locators for a stats table's rows. Tried in sequence; the
/// first that matches at least one element wins.
const STATS_LOCATORS: &[&str] = &["table.ds-table tbody tr", "table tbody tr", "table tr"];

/// Ordered CSS locators for match cards.
const MATCH_LOCATORS: &[&str] = &[
    ".ds-rounded-lg",
    ".match-card",
    ".match-item",
    "[class*=\"match\"]",
];

/// Produce raw candidates for a kind from the given source.
///
/// Remote failures for one kind never abort the others: the orchestrator
/// turns an `Err` here into an empty candidate list and logs the cause.
pub async fn extract(kind: RecordKind, source: &Source) -> Result<Vec<RawRecord>> {
    match source {
        Source::Fixture(set) => Ok(enumerate_fixture(kind, set)),
        Source::Site { config, client } => extract_remote(kind, config, client).await,
    }
}

/// Fixture mode: direct enumeration of the bundled tables.
fn enumerate_fixture(kind: RecordKind, set: &FixtureSet) -> Vec<RawRecord> {
    set.rows(kind)
        .iter()
        .take(cap(kind))
        .map(|row| RawRecord::new(row.iter().map(|s| s.to_string()).collect()))
        .collect()
}

/// Remote mode: try each candidate page location in order, parse the first
/// body that yields at least one element for a locator.
async fn extract_remote(
    kind: RecordKind,
    config: &SiteConfig,
    client: &PageClient,
) -> Result<Vec<RawRecord>> {
    let mut last_err = None;

    for url in config.pages(kind) {
        let body = match client.fetch(&url).await {
            Ok(Some(body)) => body,
            // Page not there; try the next candidate location.
            Ok(None) => continue,
            // Timeout or transport failure; remember the cause and move on.
            Err(e) => {
                last_err = Some(e);
                continue;
            }
        };

        let raws = match kind {
            RecordKind::Match => select_match_cards(&body),
            RecordKind::Batting | RecordKind::Bowling => select_stats_rows(&body),
        };
        if !raws.is_empty() {
            return Ok(raws);
        }
    }

    match last_err {
        Some(e) => Err(e),
        None => Ok(Vec::new()),
    }
}

fn cap(kind: RecordKind) -> usize {
    match kind {
        RecordKind::Match => MATCH_CARD_CAP,
        RecordKind::Batting | RecordKind::Bowling => STATS_ROW_CAP,
    }
}

/// Extract stats rows from a page body.
///
/// A row's fields are its cell texts; rows with fewer than
/// [`MIN_STATS_FIELDS`] cells are skipped, not counted as errors.
pub(crate) fn select_stats_rows(html: &str) -> Vec<RawRecord> {
    let document = Html::parse_document(html);
    let Ok(cell_selector) = Selector::parse("td, th") else {
        return Vec::new();
    };

    for locator in STATS_LOCATORS {
        let Ok(selector) = Selector::parse(locator) else {
            continue;
        };
        let rows: Vec<_> = document.select(&selector).collect();
        if rows.is_empty() {
            continue;
        }

        return rows
            .iter()
            .filter_map(|row| {
                let cells: Vec<String> = row
                    .select(&cell_selector)
                    .map(|cell| cell.text().collect::<String>().trim().to_string())
                    .collect();
                (cells.len() >= MIN_STATS_FIELDS).then(|| RawRecord::new(cells))
            })
            .take(STATS_ROW_CAP)
            .collect();
    }

    Vec::new()
}

/// Extract match cards from a page body.
///
/// A card's fields are its trimmed non-empty text lines; cards with an empty
/// text body are skipped.
pub(crate) fn select_match_cards(html: &str) -> Vec<RawRecord> {
    let document = Html::parse_document(html);

    for locator in MATCH_LOCATORS {
        let Ok(selector) = Selector::parse(locator) else {
            continue;
        };
        let cards: Vec<_> = document.select(&selector).collect();
        if cards.is_empty() {
            continue;
        }

        return cards
            .iter()
            .filter_map(|card| {
                let lines: Vec<String> = card
                    .text()
                    .collect::<String>()
                    .lines()
                    .map(str::trim)
                    .filter(|line| !line.is_empty())
                    .map(String::from)
                    .collect();
                (!lines.is_empty()).then(|| RawRecord::new(lines))
            })
            .take(MATCH_CARD_CAP)
            .collect();
    }

    Vec::new()
}
