//! Loader and read-surface query operations

use super::{models::*, schema::CricketDatabase};
use crate::cli::types::{MatchNo, Rank, RecordKind};
use crate::normalize::Record;
use anyhow::{bail, Result};
use rusqlite::{params, Row};

/// Outcome of one kind's replace operation.
#[derive(Debug, Clone, Copy)]
pub struct LoadResult {
    pub kind: RecordKind,
    pub inserted: usize,
}

impl CricketDatabase {
    /// Atomically replace a kind's table with the given normalized records.
    ///
    /// Runs as a single transaction: delete all existing rows, insert every
    /// record, commit. Any insert failure rolls the whole operation back, so
    /// the table is never left in a mixed old/new state.
    pub fn replace(&mut self, kind: RecordKind, records: &[Record]) -> Result<LoadResult> {
        let tx = self.conn.transaction()?;

        tx.execute(&format!("DELETE FROM {}", kind.table()), [])?;

        let mut inserted = 0;
        for record in records {
            match (kind, record) {
                (RecordKind::Match, Record::Match(m)) => {
                    tx.execute(
                        "INSERT INTO matches
                         (match_no, date, venue, team1, score1, team2, score2,
                          result, winner, margin, player_of_match)
                         VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)",
                        params![
                            m.match_no.as_u32(),
                            m.date,
                            m.venue,
                            m.team1,
                            m.score1,
                            m.team2,
                            m.score2,
                            m.result,
                            m.winner,
                            m.margin,
                            m.player_of_match
                        ],
                    )?;
                }
                (RecordKind::Batting, Record::Batting(b)) => {
                    tx.execute(
                        "INSERT INTO batting
                         (rank, player_name, team, matches, runs, average,
                          strike_rate, high_score, hundreds, fifties, fours, sixes)
                         VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)",
                        params![
                            b.rank.as_u32(),
                            b.player_name,
                            b.team,
                            b.matches,
                            b.runs,
                            b.average,
                            b.strike_rate,
                            b.high_score,
                            b.hundreds,
                            b.fifties,
                            b.fours,
                            b.sixes
                        ],
                    )?;
                }
                (RecordKind::Bowling, Record::Bowling(b)) => {
                    tx.execute(
                        "INSERT INTO bowling
                         (rank, player_name, team, matches, wickets, best_figures,
                          average, economy, strike_rate)
                         VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)",
                        params![
                            b.rank.as_u32(),
                            b.player_name,
                            b.team,
                            b.matches,
                            b.wickets,
                            b.best_figures,
                            b.average,
                            b.economy,
                            b.strike_rate
                        ],
                    )?;
                }
                _ => bail!("record does not belong to the {} table", kind.table()),
            }
            inserted += 1;
        }

        tx.commit()?;
        Ok(LoadResult { kind, inserted })
    }

    /// Every match, ordered by match number ascending
    pub fn all_matches(&self) -> Result<Vec<Match>> {
        let mut stmt = self.conn.prepare(
            "SELECT match_no, date, venue, team1, score1, team2, score2,
                    result, winner, margin, player_of_match
             FROM matches
             ORDER BY match_no",
        )?;

        let rows = stmt.query_map([], Self::row_to_match)?;

        let mut matches = Vec::new();
        for row in rows {
            matches.push(row?);
        }
        Ok(matches)
    }

    /// Top batting entries by runs descending
    pub fn top_batting(&self, limit: usize) -> Result<Vec<BattingEntry>> {
        self.batting_query("ORDER BY runs DESC LIMIT ?", Some(limit))
    }

    /// Full batting leaderboard, rank ascending
    pub fn batting_by_rank(&self) -> Result<Vec<BattingEntry>> {
        self.batting_query("ORDER BY rank", None)
    }

    /// Top bowling entries by wickets descending
    pub fn top_bowling(&self, limit: usize) -> Result<Vec<BowlingEntry>> {
        self.bowling_query("ORDER BY wickets DESC LIMIT ?", Some(limit))
    }

    /// Full bowling leaderboard, rank ascending
    pub fn bowling_by_rank(&self) -> Result<Vec<BowlingEntry>> {
        self.bowling_query("ORDER BY rank", None)
    }

    /// Number of stored rows for a kind
    pub fn row_count(&self, kind: RecordKind) -> Result<usize> {
        let count: i64 = self.conn.query_row(
            &format!("SELECT COUNT(*) FROM {}", kind.table()),
            [],
            |row| row.get(0),
        )?;
        Ok(count as usize)
    }

    fn batting_query(&self, tail: &str, limit: Option<usize>) -> Result<Vec<BattingEntry>> {
        let mut stmt = self.conn.prepare(&format!(
            "SELECT rank, player_name, team, matches, runs, average,
                    strike_rate, high_score, hundreds, fifties, fours, sixes
             FROM batting {}",
            tail
        ))?;

        let mut entries = Vec::new();
        let rows = match limit {
            Some(n) => stmt.query_map(params![n as i64], Self::row_to_batting)?,
            None => stmt.query_map([], Self::row_to_batting)?,
        };
        for row in rows {
            entries.push(row?);
        }
        Ok(entries)
    }

    fn bowling_query(&self, tail: &str, limit: Option<usize>) -> Result<Vec<BowlingEntry>> {
        let mut stmt = self.conn.prepare(&format!(
            "SELECT rank, player_name, team, matches, wickets, best_figures,
                    average, economy, strike_rate
             FROM bowling {}",
            tail
        ))?;

        let mut entries = Vec::new();
        let rows = match limit {
            Some(n) => stmt.query_map(params![n as i64], Self::row_to_bowling)?,
            None => stmt.query_map([], Self::row_to_bowling)?,
        };
        for row in rows {
            entries.push(row?);
        }
        Ok(entries)
    }

    /// Helper to convert a database row to a Match
    fn row_to_match(row: &Row) -> rusqlite::Result<Match> {
        Ok(Match {
            match_no: MatchNo::new(row.get(0)?),
            date: row.get(1)?,
            venue: row.get(2)?,
            team1: row.get(3)?,
            score1: row.get(4)?,
            team2: row.get(5)?,
            score2: row.get(6)?,
            result: row.get(7)?,
            winner: row.get(8)?,
            margin: row.get(9)?,
            player_of_match: row.get(10)?,
        })
    }

    /// Helper to convert a database row to a BattingEntry
    fn row_to_batting(row: &Row) -> rusqlite::Result<BattingEntry> {
        Ok(BattingEntry {
            rank: Rank::new(row.get(0)?),
            player_name: row.get(1)?,
            team: row.get(2)?,
            matches: row.get(3)?,
            runs: row.get(4)?,
            average: row.get(5)?,
            strike_rate: row.get(6)?,
            high_score: row.get(7)?,
            hundreds: row.get(8)?,
            fifties: row.get(9)?,
            fours: row.get(10)?,
            sixes: row.get(11)?,
        })
    }

    /// Helper to convert a database row to a BowlingEntry
    fn row_to_bowling(row: &Row) -> rusqlite::Result<BowlingEntry> {
        Ok(BowlingEntry {
            rank: Rank::new(row.get(0)?),
            player_name: row.get(1)?,
            team: row.get(2)?,
            matches: row.get(3)?,
            wickets: row.get(4)?,
            best_figures: row.get(5)?,
            average: row.get(6)?,
            economy: row.get(7)?,
            strike_rate: row.get(8)?,
        })
    }
}
