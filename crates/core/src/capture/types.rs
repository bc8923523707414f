//! Types for the capture module.

use serde::Serialize;

use super::Schema;
use crate::ranking::League;

/// One value per competitive league.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct LeagueColumns<T> {
    pub little: T,
    pub great: T,
    pub ultra: T,
}

impl<T> LeagueColumns<T> {
    pub fn get(&self, league: League) -> &T {
        match league {
            League::Little => &self.little,
            League::Great => &self.great,
            League::Ultra => &self.ultra,
        }
    }
}

/// A single capture as exported. Absent or empty cells are `None`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CaptureRecord {
    /// Zero-based position in the export.
    pub row: usize,
    pub name: String,
    pub form: Option<String>,
    pub cp: Option<u32>,
    pub hp: Option<u32>,
    /// Catch date text as exported (`DD/MM/YYYY`).
    pub catch_date: Option<String>,
    /// 0 regular, 1 shadow; other values match neither bucket.
    pub shadow: Option<u8>,
    pub atk_iv: Option<u8>,
    pub def_iv: Option<u8>,
    pub sta_iv: Option<u8>,
    /// Percentile rank text per league, e.g. `"98.52%"`.
    pub rank: LeagueColumns<Option<String>>,
    /// Species name the league ranking was computed for.
    pub league_name: LeagueColumns<Option<String>>,
}

impl CaptureRecord {
    /// Creates a record with only a row and species name set.
    pub fn new(row: usize, name: impl Into<String>) -> Self {
        Self {
            row,
            name: name.into(),
            form: None,
            cp: None,
            hp: None,
            catch_date: None,
            shadow: None,
            atk_iv: None,
            def_iv: None,
            sta_iv: None,
            rank: LeagueColumns::default(),
            league_name: LeagueColumns::default(),
        }
    }

    /// Whether the shadow flag equals the requested bucket.
    pub fn in_shadow_bucket(&self, shadow: bool) -> bool {
        self.shadow == Some(u8::from(shadow))
    }
}

/// The loaded export: detected columns plus rows in file order.
#[derive(Debug, Clone, Default)]
pub struct CaptureTable {
    schema: Schema,
    records: Vec<CaptureRecord>,
}

impl CaptureTable {
    pub fn new(schema: Schema, records: Vec<CaptureRecord>) -> Self {
        Self { schema, records }
    }

    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    pub fn records(&self) -> &[CaptureRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Records whose species name is one of `species`, in file order.
    pub fn in_species<'a, 's>(
        &'a self,
        species: &'s [String],
    ) -> impl Iterator<Item = &'a CaptureRecord> + 's
    where
        'a: 's,
    {
        self.records
            .iter()
            .filter(move |r| species.iter().any(|s| *s == r.name))
    }
}
