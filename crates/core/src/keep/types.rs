//! Types for the keep module.

use serde::Serialize;

use crate::capture::CaptureRecord;
use crate::config::IdentityKey;
use crate::ranking::Reason;

/// A capture recommended for retention and the reason it was first selected.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct KeepListEntry {
    pub record: CaptureRecord,
    pub reason: Reason,
}

/// Flat row handed to presentation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct KeepSummary {
    pub name: String,
    pub cp: Option<u32>,
    pub hp: Option<u32>,
    pub catch_date: Option<String>,
    pub rank_little: Option<String>,
    pub rank_great: Option<String>,
    pub rank_ultra: Option<String>,
    pub reason: String,
}

impl KeepListEntry {
    pub fn summary(&self) -> KeepSummary {
        let r = &self.record;
        KeepSummary {
            name: r.name.clone(),
            cp: r.cp,
            hp: r.hp,
            catch_date: r.catch_date.clone(),
            rank_little: r.rank.little.clone(),
            rank_great: r.rank.great.clone(),
            rank_ultra: r.rank.ultra.clone(),
            reason: self.reason.to_string(),
        }
    }
}

/// Ordered keep-list. Order is first acceptance, never re-sorted.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct KeepList {
    entries: Vec<KeepListEntry>,
}

impl KeepList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `record` unless an entry with the same identity exists.
    /// Returns whether it was added.
    pub fn offer(&mut self, record: &CaptureRecord, reason: Reason, identity: IdentityKey) -> bool {
        let duplicate = self.entries.iter().any(|e| match identity {
            IdentityKey::Species => e.record.name == record.name,
            IdentityKey::Record => e.record.row == record.row,
        });
        if duplicate {
            return false;
        }
        self.entries.push(KeepListEntry {
            record: record.clone(),
            reason,
        });
        true
    }

    pub fn entries(&self) -> &[KeepListEntry] {
        &self.entries
    }

    pub fn iter(&self) -> impl Iterator<Item = &KeepListEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn summaries(&self) -> Vec<KeepSummary> {
        self.entries.iter().map(KeepListEntry::summary).collect()
    }
}

impl<'a> IntoIterator for &'a KeepList {
    type Item = &'a KeepListEntry;
    type IntoIter = std::slice::Iter<'a, KeepListEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl FromIterator<KeepListEntry> for KeepList {
    fn from_iter<I: IntoIterator<Item = KeepListEntry>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}
