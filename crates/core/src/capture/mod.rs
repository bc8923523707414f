//! Capture table: the read-only collection every ranker works over.
//!
//! Rows come from a delimited export (one row per capture). Columns are
//! detected from the header row so that rankers can check up front whether
//! the attributes they need exist, see [`Schema::require`].

mod error;
mod loader;
mod schema;
mod types;

pub use error::CaptureError;
pub use loader::{load_captures, CaptureSource, CsvCaptureSource};
pub use schema::{Column, Schema, Unavailable};
pub use types::{CaptureRecord, CaptureTable, LeagueColumns};
