//! End-to-end analysis of one evolution line.

use serde::Serialize;
use thiserror::Error;
use tracing::info;

use crate::capture::{CaptureError, CaptureSource, CaptureTable, CsvCaptureSource};
use crate::config::Config;
use crate::evolution::{EvolutionError, EvolutionGraph, EvolutionLine};
use crate::keep::{build_keep_list, KeepList};
use crate::search::pack_search_strings;

#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error(transparent)]
    Evolution(#[from] EvolutionError),

    #[error(transparent)]
    Capture(#[from] CaptureError),
}

/// Keep-list and search strings for one species' evolution line.
#[derive(Debug, Clone, Serialize)]
pub struct Analysis {
    pub line: EvolutionLine,
    pub keep_list: KeepList,
    pub search_strings: Vec<String>,
}

/// Both static inputs, loaded once.
#[derive(Debug, Clone)]
pub struct Inputs {
    pub graph: EvolutionGraph,
    pub captures: CaptureTable,
}

impl Inputs {
    /// Loads the graph and the capture export named in `config`.
    pub fn load(config: &Config) -> Result<Self, AnalysisError> {
        let source = CsvCaptureSource::new(&config.data.captures_path);
        Self::load_with(&config.data.evolutions_path, &source)
    }

    /// Loads the graph from `evolutions_path` and captures from `source`.
    pub fn load_with(
        evolutions_path: &std::path::Path,
        source: &dyn CaptureSource,
    ) -> Result<Self, AnalysisError> {
        let graph = EvolutionGraph::load(evolutions_path)?;
        let captures = source.load()?;
        info!(
            source = source.name(),
            species = graph.len(),
            captures = captures.len(),
            "Inputs loaded"
        );
        Ok(Self { graph, captures })
    }
}

/// Resolves `species`, builds its keep-list and packs the search strings.
///
/// Fails only when the species is not in the graph.
pub fn analyze(
    graph: &EvolutionGraph,
    table: &CaptureTable,
    species: &str,
    config: &Config,
) -> Result<Analysis, AnalysisError> {
    let line = graph.resolve(species)?;
    info!(
        species = %line.species,
        line = ?line.full_line,
        terminal = ?line.terminal_names,
        "Resolved evolution line"
    );

    let keep_list = build_keep_list(table, &line, config.keep.identity);
    let search_strings = pack_search_strings(&keep_list, config.search.char_limit);
    info!(
        kept = keep_list.len(),
        search_strings = search_strings.len(),
        "Analysis complete"
    );

    Ok(Analysis {
        line,
        keep_list,
        search_strings,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::capture::{Column, Schema};
    use crate::ranking::League;
    use crate::testing::fixtures::{capture, pidgey_graph};
    use crate::testing::MockCaptureSource;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn table() -> CaptureTable {
        CaptureTable::new(
            Schema::full(),
            vec![
                capture(0, "Pidgey").cp(300).ivs(15, 15, 15).caught("10/10/2020").build(),
                capture(1, "Pidgeot")
                    .cp(1800)
                    .ivs(12, 12, 12)
                    .rank(League::Ultra, "97%", "Pidgeot")
                    .caught("10/10/2021")
                    .build(),
                capture(2, "Rattata").cp(90).ivs(15, 15, 15).caught("01/01/2016").build(),
            ],
        )
    }

    #[test]
    fn test_analyze_pidgey_line() {
        let analysis = analyze(&pidgey_graph(), &table(), "Pidgey", &Config::default()).unwrap();

        assert_eq!(analysis.line.terminal_names, vec!["Pidgeot"]);
        let rows: Vec<usize> = analysis.keep_list.iter().map(|e| e.record.row).collect();
        assert_eq!(rows, vec![0, 1]);
        assert_eq!(analysis.search_strings, vec!["pidgey&cp300", "pidgeot&cp1800"]);
    }

    #[test]
    fn test_analyze_unknown_species_is_fatal() {
        let err = analyze(&pidgey_graph(), &table(), "mew", &Config::default()).unwrap_err();
        assert!(matches!(
            err,
            AnalysisError::Evolution(EvolutionError::UnknownSpecies(_))
        ));
    }

    #[test]
    fn test_analysis_serializes_reason_labels() {
        let analysis = analyze(&pidgey_graph(), &table(), "pidgey", &Config::default()).unwrap();
        let json = serde_json::to_value(&analysis).unwrap();
        assert_eq!(json["keep_list"][0]["reason"], "Top IV Non-Shadow Pokémon");
        assert_eq!(
            json["keep_list"][1]["reason"],
            "Top 3 PvP IVs for Ultra League (Non-Shadow)"
        );
        assert_eq!(json["search_strings"][1], "pidgeot&cp1800");
    }

    #[test]
    fn test_inputs_load_with_mock_source() {
        let mut graph_file = NamedTempFile::new().unwrap();
        write!(graph_file, r#"{{"pidgey":["pidgey"]}}"#).unwrap();
        let source = MockCaptureSource::new(vec![capture(0, "Pidgey").build()]);

        let inputs = Inputs::load_with(graph_file.path(), &source).unwrap();
        assert_eq!(inputs.graph.len(), 1);
        assert_eq!(inputs.captures.len(), 1);
    }

    #[test]
    fn test_inputs_load_propagates_capture_error() {
        let mut graph_file = NamedTempFile::new().unwrap();
        write!(graph_file, "{{}}").unwrap();
        let source = MockCaptureSource::new(vec![]).failing(Column::Name);

        let err = Inputs::load_with(graph_file.path(), &source).unwrap_err();
        assert!(matches!(err, AnalysisError::Capture(_)));
    }
}
