//! ID types for cricket records.

use crate::error::{CricketError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Type-safe wrapper for a match's schedule number.
///
/// Match numbers are unique within a pipeline run and define the natural
/// display order of the season schedule.
///
/// # Examples
///
/// ```rust
/// use cricket_dash::MatchNo;
///
/// let match_no = MatchNo::new(7);
/// assert_eq!(match_no.as_u32(), 7);
/// assert_eq!(match_no.to_string(), "7");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct MatchNo(pub u32);

impl MatchNo {
    /// Create a new MatchNo from a u32 value.
    pub fn new(no: u32) -> Self {
        Self(no)
    }

    /// Get the underlying u32 value.
    pub fn as_u32(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for MatchNo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for MatchNo {
    type Err = CricketError;

    fn from_str(s: &str) -> Result<Self> {
        Ok(Self(s.parse()?))
    }
}

/// Type-safe wrapper for a leaderboard position (1 = best).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Rank(pub u32);

impl Rank {
    pub fn new(rank: u32) -> Self {
        Self(rank)
    }

    pub fn as_u32(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Rank {
    type Err = CricketError;

    fn from_str(s: &str) -> Result<Self> {
        Ok(Self(s.parse()?))
    }
}
