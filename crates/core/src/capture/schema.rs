//! Column detection for the capture export.

use std::collections::BTreeSet;
use std::fmt;

/// A column of the capture export that the core understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Column {
    Name,
    Form,
    Cp,
    Hp,
    CatchDate,
    ShadowPurified,
    AtkIv,
    DefIv,
    StaIv,
    RankLittle,
    RankGreat,
    RankUltra,
    NameLittle,
    NameGreat,
    NameUltra,
}

impl Column {
    pub const ALL: [Column; 15] = [
        Column::Name,
        Column::Form,
        Column::Cp,
        Column::Hp,
        Column::CatchDate,
        Column::ShadowPurified,
        Column::AtkIv,
        Column::DefIv,
        Column::StaIv,
        Column::RankLittle,
        Column::RankGreat,
        Column::RankUltra,
        Column::NameLittle,
        Column::NameGreat,
        Column::NameUltra,
    ];

    /// Header text as written by the export.
    pub fn header(self) -> &'static str {
        match self {
            Column::Name => "Name",
            Column::Form => "Form",
            Column::Cp => "CP",
            Column::Hp => "HP",
            Column::CatchDate => "Catch Date",
            Column::ShadowPurified => "Shadow/Purified",
            Column::AtkIv => "Atk IV",
            Column::DefIv => "Def IV",
            Column::StaIv => "Sta IV",
            Column::RankLittle => "Rank % (L)",
            Column::RankGreat => "Rank % (G)",
            Column::RankUltra => "Rank % (U)",
            Column::NameLittle => "Name (L)",
            Column::NameGreat => "Name (G)",
            Column::NameUltra => "Name (U)",
        }
    }

    /// Looks up a column by its header text. Surrounding whitespace is ignored.
    pub fn from_header(header: &str) -> Option<Column> {
        let header = header.trim();
        Column::ALL.into_iter().find(|c| c.header() == header)
    }
}

impl fmt::Display for Column {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.header())
    }
}

/// Returned by a ranker whose input columns are not in the table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Unavailable {
    pub missing: Vec<Column>,
}

impl fmt::Display for Unavailable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<&str> = self.missing.iter().map(|c| c.header()).collect();
        write!(f, "missing columns: {}", names.join(", "))
    }
}

/// The set of columns present in a loaded table.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Schema {
    columns: BTreeSet<Column>,
}

impl Schema {
    pub fn new(columns: impl IntoIterator<Item = Column>) -> Self {
        Self {
            columns: columns.into_iter().collect(),
        }
    }

    /// Schema with every known column.
    pub fn full() -> Self {
        Self::new(Column::ALL)
    }

    pub fn has(&self, column: Column) -> bool {
        self.columns.contains(&column)
    }

    /// Checks that every column in `required` is present.
    pub fn require(&self, required: &[Column]) -> Result<(), Unavailable> {
        let missing: Vec<Column> = required
            .iter()
            .copied()
            .filter(|c| !self.has(*c))
            .collect();
        if missing.is_empty() {
            Ok(())
        } else {
            Err(Unavailable { missing })
        }
    }

    pub fn without(mut self, column: Column) -> Self {
        self.columns.remove(&column);
        self
    }
}
