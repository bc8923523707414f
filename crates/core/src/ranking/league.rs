use serde::Serialize;
use std::fmt;
use std::str::FromStr;

use super::RankingError;
use crate::capture::{CaptureRecord, Column};

/// Competitive league. Each has its own rank column and eligibility rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum League {
    Little,
    Great,
    Ultra,
}

impl League {
    pub const ALL: [League; 3] = [League::Little, League::Great, League::Ultra];

    pub fn label(self) -> &'static str {
        match self {
            League::Little => "Little",
            League::Great => "Great",
            League::Ultra => "Ultra",
        }
    }

    /// Percentile rank column for this league.
    pub fn rank_column(self) -> Column {
        match self {
            League::Little => Column::RankLittle,
            League::Great => Column::RankGreat,
            League::Ultra => Column::RankUltra,
        }
    }

    /// Column naming the species the league rank was computed for.
    pub fn name_column(self) -> Column {
        match self {
            League::Little => Column::NameLittle,
            League::Great => Column::NameGreat,
            League::Ultra => Column::NameUltra,
        }
    }

    /// Little League only admits the unevolved form of the line; Great and
    /// Ultra only admit fully evolved forms.
    pub fn is_eligible(
        self,
        record: &CaptureRecord,
        species: &[String],
        terminal_names: &[String],
    ) -> bool {
        let Some(league_name) = record.league_name.get(self).as_deref() else {
            return false;
        };
        match self {
            League::Little => species.first().is_some_and(|base| base == league_name),
            League::Great | League::Ultra => terminal_names.iter().any(|t| t == league_name),
        }
    }
}

impl fmt::Display for League {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for League {
    type Err = RankingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        League::ALL
            .into_iter()
            .find(|l| l.label().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| RankingError::InvalidLeague(s.to_string()))
    }
}
