use serde::{Serialize, Serializer};
use std::fmt;

use super::{earliest_per_variant, top_by_quality, top_three_by_league, League};
use crate::capture::{CaptureRecord, CaptureTable, Unavailable};
use crate::evolution::EvolutionLine;

/// Why a capture is kept. This is the complete set of labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Reason {
    TopIv { shadow: bool },
    TopPvp { league: League, shadow: bool },
    EarliestCaught,
}

impl Reason {
    /// Every selection criterion in the order the keep-list offers them.
    pub const ORDER: [Reason; 9] = [
        Reason::TopIv { shadow: true },
        Reason::TopIv { shadow: false },
        Reason::TopPvp { league: League::Little, shadow: true },
        Reason::TopPvp { league: League::Little, shadow: false },
        Reason::TopPvp { league: League::Great, shadow: true },
        Reason::TopPvp { league: League::Great, shadow: false },
        Reason::TopPvp { league: League::Ultra, shadow: true },
        Reason::TopPvp { league: League::Ultra, shadow: false },
        Reason::EarliestCaught,
    ];

    /// Runs the ranking pass behind this reason.
    pub fn select<'a>(
        self,
        table: &'a CaptureTable,
        line: &EvolutionLine,
    ) -> Result<RankingResult<'a>, Unavailable> {
        let records = match self {
            Reason::TopIv { shadow } => top_by_quality(table, &line.full_line, shadow)?
                .into_iter()
                .collect(),
            Reason::TopPvp { league, shadow } => top_three_by_league(
                table,
                &line.full_line,
                shadow,
                &line.terminal_names,
                league,
            )?,
            Reason::EarliestCaught => earliest_per_variant(table, &line.full_line)?,
        };
        Ok(RankingResult {
            reason: self,
            records,
        })
    }
}

fn bucket(shadow: bool) -> &'static str {
    if shadow {
        "Shadow"
    } else {
        "Non-Shadow"
    }
}

impl fmt::Display for Reason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Reason::TopIv { shadow } => write!(f, "Top IV {} Pokémon", bucket(*shadow)),
            Reason::TopPvp { league, shadow } => write!(
                f,
                "Top 3 PvP IVs for {} League ({})",
                league,
                bucket(*shadow)
            ),
            Reason::EarliestCaught => f.write_str("Earliest Caught Pokémon"),
        }
    }
}

impl Serialize for Reason {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Captures chosen by one ranking pass, tagged with its reason.
#[derive(Debug, Clone)]
pub struct RankingResult<'a> {
    pub reason: Reason,
    pub records: Vec<&'a CaptureRecord>,
}
