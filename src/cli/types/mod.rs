//! Type-safe wrappers and enums for cricket dashboard data.

pub mod ids;
pub mod kind;

pub use ids::{MatchNo, Rank};
pub use kind::RecordKind;
