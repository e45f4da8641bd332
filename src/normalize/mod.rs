//! Normalizer: coerce raw candidates into the canonical record schema.
//!
//! Everything downstream of this module sees typed records only. The policy
//! mirrors the source sites' reliability: non-identity fields degrade to a
//! default instead of failing the record, while a candidate missing its
//! identity fields (player name, or both team names) is rejected outright.
//!
//! Positional field layouts, shared by the remote and fixture paths:
//! - match: date, venue, team1, score1, team2, score2, result, winner,
//!   margin, player_of_match
//! - batting: player_name, team, matches, runs, average, strike_rate,
//!   high_score, hundreds, fifties, fours, sixes
//! - bowling: player_name, team, matches, wickets, best_figures, average,
//!   economy, strike_rate
//!
//! Rank and match number are never carried in the raw fields; they are
//! assigned sequentially in extraction order.

use crate::cli::types::{MatchNo, Rank, RecordKind};
use crate::scrape::RawRecord;
use crate::storage::models::{BattingEntry, BowlingEntry, Match};
use serde::{Deserialize, Serialize};

#[cfg(test)]
mod tests;

/// A normalized record of any kind.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Record {
    Match(Match),
    Batting(BattingEntry),
    Bowling(BowlingEntry),
}

impl Record {
    pub fn kind(&self) -> RecordKind {
        match self {
            Record::Match(_) => RecordKind::Match,
            Record::Batting(_) => RecordKind::Batting,
            Record::Bowling(_) => RecordKind::Bowling,
        }
    }
}

/// Result of normalizing a single candidate.
#[derive(Debug)]
pub enum Outcome {
    Accepted(Record),
    Rejected { reason: String },
}

/// A rejected candidate: its position in the extraction order and why.
#[derive(Debug, Clone)]
pub struct Rejection {
    pub seq: usize,
    pub reason: String,
}

/// All accepted records of a kind plus the rejections, in extraction order.
#[derive(Debug)]
pub struct NormalizedBatch {
    pub records: Vec<Record>,
    pub rejections: Vec<Rejection>,
}

/// Normalize every candidate of a kind, assigning contiguous 1-based
/// rank/match numbers over the accepted records. No reordering happens here;
/// candidates pass through in extraction order.
pub fn normalize_all(kind: RecordKind, raws: &[RawRecord]) -> NormalizedBatch {
    let mut records = Vec::new();
    let mut rejections = Vec::new();

    for (seq, raw) in raws.iter().enumerate() {
        let assigned_no = records.len() as u32 + 1;
        match normalize(kind, raw, assigned_no) {
            Outcome::Accepted(record) => records.push(record),
            Outcome::Rejected { reason } => rejections.push(Rejection { seq, reason }),
        }
    }

    NormalizedBatch {
        records,
        rejections,
    }
}

/// Normalize one candidate. `assigned_no` becomes the record's match number
/// or rank when accepted.
pub fn normalize(kind: RecordKind, raw: &RawRecord, assigned_no: u32) -> Outcome {
    match kind {
        RecordKind::Match => normalize_match(raw, assigned_no),
        RecordKind::Batting => normalize_batting(raw, assigned_no),
        RecordKind::Bowling => normalize_bowling(raw, assigned_no),
    }
}

fn normalize_match(raw: &RawRecord, assigned_no: u32) -> Outcome {
    let Some(team1) = identity_field(raw, 2) else {
        return Outcome::Rejected {
            reason: "missing team1".to_string(),
        };
    };
    let Some(team2) = identity_field(raw, 4) else {
        return Outcome::Rejected {
            reason: "missing team2".to_string(),
        };
    };

    Outcome::Accepted(Record::Match(Match {
        match_no: MatchNo::new(assigned_no),
        date: text_or(raw, 0, "TBD"),
        venue: text_or(raw, 1, "Unknown"),
        team1,
        score1: text_or(raw, 3, "TBD"),
        team2,
        score2: text_or(raw, 5, "TBD"),
        result: text_or(raw, 6, "TBD"),
        winner: text_or(raw, 7, "TBD"),
        margin: text_or(raw, 8, "TBD"),
        player_of_match: text_or(raw, 9, "TBD"),
    }))
}

fn normalize_batting(raw: &RawRecord, assigned_no: u32) -> Outcome {
    let Some(player_name) = identity_field(raw, 0) else {
        return Outcome::Rejected {
            reason: "missing player name".to_string(),
        };
    };

    Outcome::Accepted(Record::Batting(BattingEntry {
        rank: Rank::new(assigned_no),
        player_name,
        team: text_or(raw, 1, "Unknown"),
        matches: int_field(raw, 2),
        runs: int_field(raw, 3),
        average: float_field(raw, 4),
        strike_rate: float_field(raw, 5),
        high_score: text_or(raw, 6, "0"),
        hundreds: int_field(raw, 7),
        fifties: int_field(raw, 8),
        fours: int_field(raw, 9),
        sixes: int_field(raw, 10),
    }))
}

fn normalize_bowling(raw: &RawRecord, assigned_no: u32) -> Outcome {
    let Some(player_name) = identity_field(raw, 0) else {
        return Outcome::Rejected {
            reason: "missing player name".to_string(),
        };
    };

    Outcome::Accepted(Record::Bowling(BowlingEntry {
        rank: Rank::new(assigned_no),
        player_name,
        team: text_or(raw, 1, "Unknown"),
        matches: int_field(raw, 2),
        wickets: int_field(raw, 3),
        best_figures: text_or(raw, 4, "0/0"),
        average: float_field(raw, 5),
        economy: float_field(raw, 6),
        strike_rate: float_field(raw, 7),
    }))
}

/// An identity field must be present and non-empty after trimming.
fn identity_field(raw: &RawRecord, idx: usize) -> Option<String> {
    let text = raw.field(idx)?.trim();
    (!text.is_empty()).then(|| text.to_string())
}

/// Trimmed field text, or the given default when absent or empty.
fn text_or(raw: &RawRecord, idx: usize, default: &str) -> String {
    match raw.field(idx).map(str::trim) {
        Some(text) if !text.is_empty() => text.to_string(),
        _ => default.to_string(),
    }
}

/// Tolerant integer parse: trim whitespace and thousands separators;
/// malformed values floor to 0.
fn int_field(raw: &RawRecord, idx: usize) -> u32 {
    raw.field(idx)
        .and_then(|text| text.trim().replace(',', "").parse().ok())
        .unwrap_or(0)
}

/// Tolerant float parse, same policy as [`int_field`].
fn float_field(raw: &RawRecord, idx: usize) -> f64 {
    raw.field(idx)
        .and_then(|text| text.trim().replace(',', "").parse().ok())
        .unwrap_or(0.0)
}
