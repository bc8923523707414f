//! Error types for the evolution module.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading or querying the evolution graph.
#[derive(Debug, Error)]
pub enum EvolutionError {
    /// The requested species is not a key of the graph.
    #[error("Evolution data for '{0}' not found")]
    UnknownSpecies(String),

    /// Graph file could not be read.
    #[error("Failed to read evolution graph {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Graph file is not a JSON object of string -> string array.
    #[error("Invalid evolution graph: {0}")]
    Parse(#[from] serde_json::Error),
}
