use serde::Serialize;
use std::collections::HashMap;
use std::path::Path;

use tracing::debug;

use super::EvolutionError;

/// Immutable species -> next evolutions mapping. Load once and pass by reference.
#[derive(Debug, Clone, Default)]
pub struct EvolutionGraph {
    edges: HashMap<String, Vec<String>>,
}

/// One species' evolution chain in display casing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EvolutionLine {
    /// Graph key the line was resolved from.
    pub species: String,
    /// Names listed for the species, in graph order.
    pub full_line: Vec<String>,
    /// Members of `full_line` that cannot evolve any further.
    pub terminal_names: Vec<String>,
}

impl EvolutionLine {
    /// First name of the line (the unevolved form).
    pub fn base(&self) -> Option<&str> {
        self.full_line.first().map(String::as_str)
    }
}

impl EvolutionGraph {
    pub fn new(edges: HashMap<String, Vec<String>>) -> Self {
        Self { edges }
    }

    pub fn from_json_str(json: &str) -> Result<Self, EvolutionError> {
        let edges: HashMap<String, Vec<String>> = serde_json::from_str(json)?;
        Ok(Self::new(edges))
    }

    /// Reads the graph from a JSON file.
    pub fn load(path: &Path) -> Result<Self, EvolutionError> {
        let text = std::fs::read_to_string(path).map_err(|source| EvolutionError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let graph = Self::from_json_str(&text)?;
        debug!(path = %path.display(), species = graph.len(), "Loaded evolution graph");
        Ok(graph)
    }

    pub fn len(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    pub fn contains(&self, species: &str) -> bool {
        self.edges.contains_key(species)
    }

    pub fn evolutions(&self, species: &str) -> Option<&[String]> {
        self.edges.get(species).map(Vec::as_slice)
    }

    /// A name is terminal when it is not a key, or when each of its listed
    /// evolutions is either itself or not a key.
    pub fn is_terminal(&self, species: &str) -> bool {
        match self.edges.get(species) {
            None => true,
            Some(next) => next
                .iter()
                .all(|evo| evo == species || !self.edges.contains_key(evo)),
        }
    }

    /// Expands `species` into its evolution line.
    ///
    /// The lookup is case-insensitive; graph keys are lower-case.
    pub fn resolve(&self, species: &str) -> Result<EvolutionLine, EvolutionError> {
        let key = species.trim().to_lowercase();
        let line = self
            .edges
            .get(&key)
            .ok_or_else(|| EvolutionError::UnknownSpecies(species.to_string()))?;

        let full_line = line.iter().map(|name| capitalize(name)).collect();
        let terminal_names = line
            .iter()
            .filter(|name| self.is_terminal(name))
            .map(|name| capitalize(name))
            .collect();

        Ok(EvolutionLine {
            species: key,
            full_line,
            terminal_names,
        })
    }
}

/// Upper-cases the first character and lower-cases the rest.
pub fn capitalize(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}
