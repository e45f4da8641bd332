//! Error types for the cricket dashboard CLI

use thiserror::Error;

pub type Result<T> = std::result::Result<T, CricketError>;

#[derive(Error, Debug)]
pub enum CricketError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse number: {0}")]
    InvalidNumber(#[from] std::num::ParseIntError),

    #[error("Unknown record kind: {kind} (expected matches, batting, or bowling)")]
    InvalidKind { kind: String },

    #[error("Site returned no data")]
    NoData,

    #[error(transparent)]
    Storage(#[from] anyhow::Error),
}
