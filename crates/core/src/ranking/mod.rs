//! Ranking passes over the capture table.
//!
//! Each pass looks at the captures of one evolution line and picks the
//! individuals worth keeping for one reason:
//!
//! - [`top_by_quality`]: best combined IVs per shadow bucket
//! - [`top_three_by_league`]: best three percentile ranks per league and shadow bucket
//! - [`earliest_per_variant`]: first caught capture per (species, form)
//!
//! A pass whose input columns are absent returns [`Unavailable`] instead of
//! failing, so the other passes still run.
//!
//! [`Unavailable`]: crate::capture::Unavailable

mod competitive;
mod error;
mod league;
mod quality;
mod reason;
mod recency;

pub use competitive::{parse_rank_percent, top_three_by_league, LEAGUE_TOP_N};
pub use error::RankingError;
pub use league::League;
pub use quality::{quality_percent, top_by_quality, MAX_IV_TOTAL};
pub use reason::{RankingResult, Reason};
pub use recency::{earliest_per_variant, parse_catch_date, CATCH_DATE_FORMAT};
