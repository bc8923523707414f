//! Evolution graph and line resolution.
//!
//! The graph maps a lower-case species name to the names it evolves into.
//! Graphs produced from full chains list the species itself first (e.g.
//! `"pidgey": ["pidgey", "pidgeotto", "pidgeot"]`), and a fully evolved
//! species lists only itself.
//!
//! # Example
//!
//! ```
//! use dexkeep_core::evolution::EvolutionGraph;
//!
//! let graph = EvolutionGraph::from_json_str(
//!     r#"{"pidgey":["pidgey","pidgeotto","pidgeot"],
//!         "pidgeotto":["pidgeotto","pidgeot"],
//!         "pidgeot":["pidgeot"]}"#,
//! )
//! .unwrap();
//!
//! let line = graph.resolve("Pidgey").unwrap();
//! assert_eq!(line.full_line, vec!["Pidgey", "Pidgeotto", "Pidgeot"]);
//! assert_eq!(line.terminal_names, vec!["Pidgeot"]);
//! ```

mod error;
mod graph;

pub use error::EvolutionError;
pub use graph::{capitalize, EvolutionGraph, EvolutionLine};
