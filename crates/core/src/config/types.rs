use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Root configuration
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub data: DataConfig,
    #[serde(default)]
    pub search: SearchConfig,
    #[serde(default)]
    pub keep: KeepConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

/// Locations of the two static inputs
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DataConfig {
    /// Capture export (delimited, one row per capture)
    #[serde(default = "default_captures_path")]
    pub captures_path: PathBuf,
    /// Evolution graph (JSON object of name -> next evolutions)
    #[serde(default = "default_evolutions_path")]
    pub evolutions_path: PathBuf,
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            captures_path: default_captures_path(),
            evolutions_path: default_evolutions_path(),
        }
    }
}

fn default_captures_path() -> PathBuf {
    PathBuf::from("poke_export.csv")
}

fn default_evolutions_path() -> PathBuf {
    PathBuf::from("evolutionDict.json")
}

/// Search string generation
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SearchConfig {
    /// Maximum length of the part after `&` in each search string
    #[serde(default = "default_char_limit")]
    pub char_limit: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            char_limit: default_char_limit(),
        }
    }
}

fn default_char_limit() -> usize {
    crate::search::DEFAULT_CHAR_LIMIT
}

/// Keep-list aggregation
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct KeepConfig {
    #[serde(default)]
    pub identity: IdentityKey,
}

/// What two keep-list candidates must share to count as the same entry.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum IdentityKey {
    /// Species name only: one entry per species, first reason wins.
    #[default]
    Species,
    /// Source row: distinct captures of one species are kept separately.
    Record,
}

/// Presentation settings used by the binary
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub format: OutputFormat,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
}
