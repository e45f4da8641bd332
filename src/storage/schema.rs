//! Database schema and connection management

use anyhow::{anyhow, Result};
use dirs::cache_dir;
use rusqlite::Connection;
use std::path::{Path, PathBuf};

/// Database connection manager for the three cricket tables
pub struct CricketDatabase {
    pub(crate) conn: Connection,
}

impl CricketDatabase {
    /// Create a new database connection and ensure tables exist
    pub fn new() -> Result<Self> {
        let db_path = Self::database_path()?;

        // Ensure the cache directory exists
        if let Some(parent) = db_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        Self::open(&db_path)
    }

    /// Open a database at an explicit location
    pub fn open(path: &Path) -> Result<Self> {
        let conn = Connection::open(path)?;
        let mut db = Self { conn };
        db.initialize_schema()?;
        Ok(db)
    }

    /// Open an in-memory database, used by tests
    pub fn new_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        let mut db = Self { conn };
        db.initialize_schema()?;
        Ok(db)
    }

    /// Get the path to the database file
    fn database_path() -> Result<PathBuf> {
        let cache_dir =
            cache_dir().ok_or_else(|| anyhow!("Could not determine cache directory"))?;
        Ok(cache_dir.join("cricket-dash").join("cricket.db"))
    }

    /// Initialize the database schema
    pub(crate) fn initialize_schema(&mut self) -> Result<()> {
        // Create matches table; match_no is the natural display order
        self.conn.execute(
            "CREATE TABLE IF NOT EXISTS matches (
                match_no INTEGER PRIMARY KEY,
                date TEXT NOT NULL,
                venue TEXT NOT NULL,
                team1 TEXT NOT NULL,
                score1 TEXT NOT NULL,
                team2 TEXT NOT NULL,
                score2 TEXT NOT NULL,
                result TEXT NOT NULL,
                winner TEXT NOT NULL,
                margin TEXT NOT NULL,
                player_of_match TEXT NOT NULL
            )",
            [],
        )?;

        // Create batting leaderboard table
        self.conn.execute(
            "CREATE TABLE IF NOT EXISTS batting (
                rank INTEGER PRIMARY KEY,
                player_name TEXT NOT NULL,
                team TEXT NOT NULL,
                matches INTEGER NOT NULL,
                runs INTEGER NOT NULL,
                average REAL NOT NULL,
                strike_rate REAL NOT NULL,
                high_score TEXT NOT NULL,
                hundreds INTEGER NOT NULL,
                fifties INTEGER NOT NULL,
                fours INTEGER NOT NULL,
                sixes INTEGER NOT NULL
            )",
            [],
        )?;

        // Create bowling leaderboard table
        self.conn.execute(
            "CREATE TABLE IF NOT EXISTS bowling (
                rank INTEGER PRIMARY KEY,
                player_name TEXT NOT NULL,
                team TEXT NOT NULL,
                matches INTEGER NOT NULL,
                wickets INTEGER NOT NULL,
                best_figures TEXT NOT NULL,
                average REAL NOT NULL,
                economy REAL NOT NULL,
                strike_rate REAL NOT NULL
            )",
            [],
        )?;

        // Create indexes for the top-N read queries
        self.conn.execute(
            "CREATE INDEX IF NOT EXISTS idx_batting_runs ON batting(runs)",
            [],
        )?;

        self.conn.execute(
            "CREATE INDEX IF NOT EXISTS idx_bowling_wickets ON bowling(wickets)",
            [],
        )?;

        Ok(())
    }
}
