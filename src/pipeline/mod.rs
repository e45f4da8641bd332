//! Pipeline orchestrator: Extract -> Normalize -> Load per record kind.
//!
//! Kinds are processed sequentially because they share one HTTP session, and
//! independently: a failure for one kind is recorded in its report while the
//! run proceeds to the next. A run always fully replaces each table, so the
//! whole run is safe to retry.

use crate::cli::types::RecordKind;
use crate::normalize::{self, Record};
use crate::scrape::{self, survey, Source};
use crate::storage::models::{BattingEntry, BowlingEntry, Match};
use crate::storage::CricketDatabase;
use crate::Result;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

/// Per-run knobs supplied by the command layer.
#[derive(Debug, Default)]
pub struct RunOptions {
    /// Where to write the JSON backup of the run's normalized records.
    /// `None` skips the backup.
    pub backup_path: Option<PathBuf>,
    /// Capture site structure diagnostics before extraction (remote only).
    pub survey: bool,
    /// Show per-stage progress.
    pub verbose: bool,
}

/// Per-kind counts for the operator-facing summary.
#[derive(Debug, Clone)]
pub struct KindReport {
    pub kind: RecordKind,
    pub extracted: usize,
    pub normalized: usize,
    pub rejected: usize,
    pub loaded: usize,
    /// Set when this kind's load failed; the table kept its previous rows.
    pub error: Option<String>,
}

/// Outcome of a full run across all three kinds.
#[derive(Debug)]
pub struct RunSummary {
    pub reports: Vec<KindReport>,
    pub duration: Duration,
}

impl RunSummary {
    /// The report for a kind. Every run produces all three.
    pub fn report(&self, kind: RecordKind) -> Option<&KindReport> {
        self.reports.iter().find(|r| r.kind == kind)
    }

    /// True when no kind recorded a load failure.
    pub fn succeeded(&self) -> bool {
        self.reports.iter().all(|r| r.error.is_none())
    }
}

/// The exact normalized records of the most recent run, written as a JSON
/// debugging artifact. Not authoritative; the database is.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct ScrapeBackup {
    pub matches: Vec<Match>,
    pub batting: Vec<BattingEntry>,
    pub bowling: Vec<BowlingEntry>,
}

impl ScrapeBackup {
    fn push(&mut self, records: &[Record]) {
        for record in records {
            match record {
                Record::Match(m) => self.matches.push(m.clone()),
                Record::Batting(b) => self.batting.push(b.clone()),
                Record::Bowling(b) => self.bowling.push(b.clone()),
            }
        }
    }

    /// Write the backup as pretty-printed JSON.
    pub fn write(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }
}

/// Run the full pipeline: all three kinds, in order, against one source.
///
/// The store is only reachable through per-kind transactional replaces, so a
/// partial run leaves untouched kinds exactly as they were.
pub async fn run(
    db: &mut CricketDatabase,
    source: &Source,
    opts: &RunOptions,
) -> Result<RunSummary> {
    let started = Instant::now();

    if opts.survey {
        if let Source::Site { config, client } = source {
            match survey::survey_site(client, &config.base_url, Path::new(".")).await {
                Ok(links) => {
                    println!("✓ Site survey captured {} navigation links", links.len())
                }
                Err(e) => println!("⚠ Site survey failed: {}", e),
            }
        }
    }

    let mut backup = ScrapeBackup::default();
    let mut reports = Vec::new();
    for kind in RecordKind::ALL {
        reports.push(run_kind(db, source, kind, opts, &mut backup).await);
    }

    if let Some(path) = &opts.backup_path {
        match backup.write(path) {
            Ok(()) => {
                if opts.verbose {
                    println!("✓ Backup saved to {}", path.display());
                }
            }
            // The backup is a debugging artifact; a write failure must not
            // fail a run whose tables already committed.
            Err(e) => println!("⚠ Could not write backup to {}: {}", path.display(), e),
        }
    }

    Ok(RunSummary {
        reports,
        duration: started.elapsed(),
    })
}

/// Extract -> Normalize -> Load for one kind.
async fn run_kind(
    db: &mut CricketDatabase,
    source: &Source,
    kind: RecordKind,
    opts: &RunOptions,
    backup: &mut ScrapeBackup,
) -> KindReport {
    if opts.verbose {
        println!("Extracting {} records...", kind);
    }
    let raws = match scrape::extract(kind, source).await {
        Ok(raws) => raws,
        Err(e) => {
            // Zero candidates for this kind; the others still run.
            println!("⚠ Extraction failed for {}: {}", kind, e);
            Vec::new()
        }
    };
    let extracted = raws.len();

    if opts.verbose {
        println!("Normalizing {} {} candidates...", extracted, kind);
    }
    let batch = normalize::normalize_all(kind, &raws);
    for rejection in &batch.rejections {
        println!(
            "⚠ Skipping {} candidate {}: {}",
            kind,
            rejection.seq + 1,
            rejection.reason
        );
    }
    backup.push(&batch.records);

    let mut report = KindReport {
        kind,
        extracted,
        normalized: batch.records.len(),
        rejected: batch.rejections.len(),
        loaded: 0,
        error: None,
    };

    match db.replace(kind, &batch.records) {
        Ok(result) => {
            println!("✓ Loaded {} {} records", result.inserted, kind);
            report.loaded = result.inserted;
        }
        Err(e) => {
            println!("⚠ Load failed for {}: {}", kind, e);
            report.error = Some(e.to_string());
        }
    }

    report
}
