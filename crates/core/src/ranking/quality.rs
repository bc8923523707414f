use crate::capture::{CaptureRecord, CaptureTable, Column, Unavailable};

/// Highest possible attack + defense + stamina.
pub const MAX_IV_TOTAL: f64 = 45.0;

const REQUIRED: [Column; 4] = [
    Column::ShadowPurified,
    Column::AtkIv,
    Column::DefIv,
    Column::StaIv,
];

/// Combined IVs as a percentage of the maximum. `None` if any IV is missing.
pub fn quality_percent(record: &CaptureRecord) -> Option<f64> {
    let total = u32::from(record.atk_iv?) + u32::from(record.def_iv?) + u32::from(record.sta_iv?);
    Some(f64::from(total) / MAX_IV_TOTAL * 100.0)
}

/// Capture of `species` in the given shadow bucket with the highest combined
/// IVs. Ties go to the earliest row.
pub fn top_by_quality<'a>(
    table: &'a CaptureTable,
    species: &[String],
    shadow: bool,
) -> Result<Option<&'a CaptureRecord>, Unavailable> {
    table.schema().require(&REQUIRED)?;

    let mut best: Option<(f64, &CaptureRecord)> = None;
    for record in table
        .in_species(species)
        .filter(|r| r.in_shadow_bucket(shadow))
    {
        let Some(quality) = quality_percent(record) else {
            continue;
        };
        if best.is_none_or(|(top, _)| quality > top) {
            best = Some((quality, record));
        }
    }

    Ok(best.map(|(_, record)| record))
}
