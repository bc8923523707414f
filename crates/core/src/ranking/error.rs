//! Error types for the ranking module.

use thiserror::Error;

/// Misuse of the ranking API. Missing data is never an error here.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RankingError {
    /// League identifier outside Little / Great / Ultra.
    #[error("Unknown league: {0}")]
    InvalidLeague(String),
}
