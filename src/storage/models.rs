//! Data models for the storage layer

use crate::cli::types::{MatchNo, Rank};
use serde::{Deserialize, Serialize};

/// A single fixture result in the season schedule.
///
/// Scores, result, and margin are free-form display strings captured as-is
/// from the source ("133/9 (20)", "4 wickets").
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Match {
    pub match_no: MatchNo,
    pub date: String,
    pub venue: String,
    pub team1: String,
    pub score1: String,
    pub team2: String,
    pub score2: String,
    pub result: String,
    pub winner: String,
    pub margin: String,
    pub player_of_match: String,
}

/// A batting leaderboard row.
///
/// `high_score` keeps the captured text verbatim; a `*` suffix marks a
/// not-out innings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BattingEntry {
    pub rank: Rank,
    pub player_name: String,
    pub team: String,
    pub matches: u32,
    pub runs: u32,
    pub average: f64,
    pub strike_rate: f64,
    pub high_score: String,
    pub hundreds: u32,
    pub fifties: u32,
    pub fours: u32,
    pub sixes: u32,
}

/// A bowling leaderboard row.
///
/// `best_figures` is the "wickets/runs" display string as captured ("4/23").
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BowlingEntry {
    pub rank: Rank,
    pub player_name: String,
    pub team: String,
    pub matches: u32,
    pub wickets: u32,
    pub best_figures: String,
    pub average: f64,
    pub economy: f64,
    pub strike_rate: f64,
}
