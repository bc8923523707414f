//! Reading the capture export.

use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use csv::{ReaderBuilder, StringRecord, Trim};
use tracing::debug;

use super::{CaptureError, CaptureRecord, CaptureTable, Column, LeagueColumns, Schema};

/// Something that can produce the capture table.
pub trait CaptureSource {
    /// Returns a short name for logging.
    fn name(&self) -> &str;

    /// Loads the full table.
    fn load(&self) -> Result<CaptureTable, CaptureError>;
}

/// Capture source backed by a delimited export on disk.
#[derive(Debug, Clone)]
pub struct CsvCaptureSource {
    path: PathBuf,
}

impl CsvCaptureSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl CaptureSource for CsvCaptureSource {
    fn name(&self) -> &str {
        "csv"
    }

    fn load(&self) -> Result<CaptureTable, CaptureError> {
        load_captures(&self.path)
    }
}

/// Load the capture export at `path`.
pub fn load_captures(path: &Path) -> Result<CaptureTable, CaptureError> {
    let file = File::open(path).map_err(|source| CaptureError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let table = CaptureTable::from_reader(file)?;
    debug!(path = %path.display(), rows = table.len(), "Loaded capture export");
    Ok(table)
}

/// Header position of every recognised column.
struct ColumnIndex {
    positions: Vec<(Column, usize)>,
}

impl ColumnIndex {
    fn from_headers(headers: &StringRecord) -> Self {
        let mut positions: Vec<(Column, usize)> = Vec::new();
        for (idx, header) in headers.iter().enumerate() {
            if let Some(column) = Column::from_header(header) {
                // First occurrence wins on duplicated headers
                if !positions.iter().any(|(c, _)| *c == column) {
                    positions.push((column, idx));
                }
            }
        }
        Self { positions }
    }

    fn schema(&self) -> Schema {
        Schema::new(self.positions.iter().map(|(c, _)| *c))
    }

    fn text(&self, record: &StringRecord, column: Column) -> Option<String> {
        let idx = self
            .positions
            .iter()
            .find(|(c, _)| *c == column)
            .map(|(_, i)| *i)?;
        record
            .get(idx)
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
    }

    fn number<T: TryFrom<u64>>(&self, record: &StringRecord, column: Column) -> Option<T> {
        self.text(record, column).and_then(|s| parse_whole(&s))
    }
}

/// Parses a non-negative whole number, accepting a `.0` style float
/// rendering (`"12.0"`) as some exports write integers that way.
fn parse_whole<T: TryFrom<u64>>(text: &str) -> Option<T> {
    if let Ok(n) = text.parse::<u64>() {
        return T::try_from(n).ok();
    }
    let value = text.parse::<f64>().ok()?;
    if !value.is_finite() || value < 0.0 || value.fract() != 0.0 {
        return None;
    }
    T::try_from(value as u64).ok()
}

impl CaptureTable {
    /// Reads a comma-delimited export with a header row.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, CaptureError> {
        let mut csv = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .trim(Trim::Headers)
            .from_reader(reader);

        let headers = csv
            .headers()
            .map_err(|source| CaptureError::Csv { line: 1, source })?
            .clone();
        let index = ColumnIndex::from_headers(&headers);
        let schema = index.schema();
        if !schema.has(Column::Name) {
            return Err(CaptureError::MissingColumn(Column::Name));
        }

        let mut records = Vec::new();
        for (row, result) in csv.records().enumerate() {
            let raw = result.map_err(|source| CaptureError::Csv {
                line: source.position().map(|p| p.line()).unwrap_or(row as u64 + 2),
                source,
            })?;
            let name = index.text(&raw, Column::Name).unwrap_or_default();
            records.push(CaptureRecord {
                row,
                name,
                form: index.text(&raw, Column::Form),
                cp: index.number(&raw, Column::Cp),
                hp: index.number(&raw, Column::Hp),
                catch_date: index.text(&raw, Column::CatchDate),
                shadow: index.number(&raw, Column::ShadowPurified),
                atk_iv: index.number(&raw, Column::AtkIv),
                def_iv: index.number(&raw, Column::DefIv),
                sta_iv: index.number(&raw, Column::StaIv),
                rank: LeagueColumns {
                    little: index.text(&raw, Column::RankLittle),
                    great: index.text(&raw, Column::RankGreat),
                    ultra: index.text(&raw, Column::RankUltra),
                },
                league_name: LeagueColumns {
                    little: index.text(&raw, Column::NameLittle),
                    great: index.text(&raw, Column::NameGreat),
                    ultra: index.text(&raw, Column::NameUltra),
                },
            });
        }

        Ok(Self::new(schema, records))
    }
}
