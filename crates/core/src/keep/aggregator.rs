use tracing::{debug, warn};

use super::KeepList;
use crate::capture::CaptureTable;
use crate::config::IdentityKey;
use crate::evolution::EvolutionLine;
use crate::ranking::Reason;

/// Builds the keep-list for one evolution line.
///
/// Ranking passes run in [`Reason::ORDER`]. A pass whose columns are missing
/// is skipped with a warning and the remaining passes still contribute.
pub fn build_keep_list(
    table: &CaptureTable,
    line: &EvolutionLine,
    identity: IdentityKey,
) -> KeepList {
    let mut keep = KeepList::new();

    for reason in Reason::ORDER {
        let result = match reason.select(table, line) {
            Ok(result) => result,
            Err(unavailable) => {
                warn!(reason = %reason, %unavailable, "Ranking skipped");
                continue;
            }
        };

        let offered = result.records.len();
        let accepted = result
            .records
            .into_iter()
            .filter(|record| keep.offer(record, reason, identity))
            .count();
        debug!(reason = %reason, offered, accepted, "Ranking merged");
    }

    keep
}
