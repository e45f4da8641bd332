//! Record kind tags for the three scraped tables.

use crate::error::{CricketError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One of the three record categories handled by the pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RecordKind {
    Match,
    Batting,
    Bowling,
}

impl RecordKind {
    /// Pipeline processing order: matches first, then the two leaderboards.
    pub const ALL: [RecordKind; 3] = [RecordKind::Match, RecordKind::Batting, RecordKind::Bowling];

    /// Name of the SQL table that stores this kind.
    pub fn table(&self) -> &'static str {
        match self {
            RecordKind::Match => "matches",
            RecordKind::Batting => "batting",
            RecordKind::Bowling => "bowling",
        }
    }
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            RecordKind::Match => "match",
            RecordKind::Batting => "batting",
            RecordKind::Bowling => "bowling",
        };
        write!(f, "{}", name)
    }
}

impl FromStr for RecordKind {
    type Err = CricketError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "match" | "matches" => Ok(RecordKind::Match),
            "batting" => Ok(RecordKind::Batting),
            "bowling" => Ok(RecordKind::Bowling),
            _ => Err(CricketError::InvalidKind {
                kind: s.to_string(),
            }),
        }
    }
}
