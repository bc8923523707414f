//! Keep-list aggregation.
//!
//! Runs every ranking pass in a fixed order and merges the selections into
//! one ordered list. A capture is accepted only if no earlier entry shares
//! its identity; the first reason attached wins.

mod aggregator;
mod types;

pub use aggregator::build_keep_list;
pub use types::{KeepList, KeepListEntry, KeepSummary};
