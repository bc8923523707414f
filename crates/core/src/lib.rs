pub mod analysis;
pub mod capture;
pub mod config;
pub mod evolution;
pub mod keep;
pub mod ranking;
pub mod search;
pub mod testing;

pub use analysis::{analyze, Analysis, AnalysisError, Inputs};
pub use capture::{
    load_captures, CaptureError, CaptureRecord, CaptureSource, CaptureTable, Column,
    CsvCaptureSource, Schema, Unavailable,
};
pub use config::{
    load_config, load_config_from_str, validate_config, Config, ConfigError, IdentityKey,
    OutputFormat,
};
pub use evolution::{EvolutionError, EvolutionGraph, EvolutionLine};
pub use keep::{build_keep_list, KeepList, KeepListEntry, KeepSummary};
pub use ranking::{League, RankingError, RankingResult, Reason};
pub use search::{pack_search_strings, DEFAULT_CHAR_LIMIT};
