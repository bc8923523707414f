//! Console presentation of an analysis.

use std::io::Write;

use anyhow::Result;
use dexkeep_core::{Analysis, KeepSummary};

const HEADERS: [&str; 8] = [
    "Name",
    "CP",
    "HP",
    "Catch Date",
    "Rank % (L)",
    "Rank % (G)",
    "Rank % (U)",
    "Reason",
];

fn cells(row: &KeepSummary) -> [String; 8] {
    fn opt<T: ToString>(value: &Option<T>) -> String {
        value.as_ref().map(T::to_string).unwrap_or_else(|| "-".to_string())
    }
    [
        row.name.clone(),
        opt(&row.cp),
        opt(&row.hp),
        opt(&row.catch_date),
        opt(&row.rank_little),
        opt(&row.rank_great),
        opt(&row.rank_ultra),
        row.reason.clone(),
    ]
}

/// Writes the keep-list as an aligned table followed by the search strings.
pub fn write_table<W: Write>(out: &mut W, analysis: &Analysis) -> Result<()> {
    writeln!(out, "Evolution line: {}", analysis.line.full_line.join(" -> "))?;

    let rows: Vec<[String; 8]> = analysis.keep_list.summaries().iter().map(cells).collect();
    if rows.is_empty() {
        writeln!(out, "No captures to keep.")?;
    } else {
        let mut widths = HEADERS.map(|h| h.chars().count());
        for row in &rows {
            for (width, cell) in widths.iter_mut().zip(row) {
                *width = (*width).max(cell.chars().count());
            }
        }

        let header: Vec<String> = HEADERS.iter().map(|h| h.to_string()).collect();
        write_row(out, &header, &widths)?;
        for row in &rows {
            write_row(out, row, &widths)?;
        }
    }

    writeln!(out)?;
    writeln!(out, "Search strings:")?;
    for s in &analysis.search_strings {
        writeln!(out, "{}", s)?;
    }
    Ok(())
}

fn write_row<W: Write>(out: &mut W, cells: &[String], widths: &[usize; 8]) -> Result<()> {
    let padded: Vec<String> = cells
        .iter()
        .zip(widths)
        .map(|(cell, width)| format!("{:<width$}", cell, width = *width))
        .collect();
    writeln!(out, "{}", padded.join("  ").trim_end())?;
    Ok(())
}

/// Writes the full analysis as pretty JSON.
pub fn write_json<W: Write>(out: &mut W, analysis: &Analysis) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, analysis)?;
    writeln!(out)?;
    Ok(())
}
