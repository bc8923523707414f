use chrono::NaiveDate;
use std::collections::HashMap;

use crate::capture::{CaptureRecord, CaptureTable, Column, Unavailable};

/// Catch dates are exported day first.
pub const CATCH_DATE_FORMAT: &str = "%d/%m/%Y";

pub fn parse_catch_date(text: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(text.trim(), CATCH_DATE_FORMAT).ok()
}

/// Earliest caught capture for every (species, form) pair present among the
/// captures of `species`. A missing form is its own group. Groups come out in
/// order of first appearance; a group without any parseable date is skipped.
pub fn earliest_per_variant<'a>(
    table: &'a CaptureTable,
    species: &[String],
) -> Result<Vec<&'a CaptureRecord>, Unavailable> {
    table.schema().require(&[Column::Form, Column::CatchDate])?;

    let mut slots: HashMap<(&str, Option<&str>), usize> = HashMap::new();
    let mut groups: Vec<Option<(NaiveDate, &CaptureRecord)>> = Vec::new();

    for record in table.in_species(species) {
        let key = (record.name.as_str(), record.form.as_deref());
        let slot = *slots.entry(key).or_insert_with(|| {
            groups.push(None);
            groups.len() - 1
        });

        let Some(date) = record.catch_date.as_deref().and_then(parse_catch_date) else {
            continue;
        };
        let earliest = &mut groups[slot];
        if earliest.is_none_or(|(current, _)| date < current) {
            *earliest = Some((date, record));
        }
    }

    Ok(groups
        .into_iter()
        .flatten()
        .map(|(_, record)| record)
        .collect())
}
