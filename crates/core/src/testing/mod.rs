//! Testing utilities: fixture builders and an in-memory capture source.
//!
//! # Example
//!
//! ```
//! use dexkeep_core::ranking::League;
//! use dexkeep_core::testing::{fixtures, MockCaptureSource};
//! use dexkeep_core::CaptureSource;
//!
//! let source = MockCaptureSource::new(vec![
//!     fixtures::capture(0, "Pidgey").ivs(15, 15, 15).cp(320).build(),
//!     fixtures::capture(1, "Pidgeot")
//!         .rank(League::Great, "98.1%", "Pidgeot")
//!         .build(),
//! ]);
//!
//! let table = source.load().unwrap();
//! assert_eq!(table.len(), 2);
//! assert_eq!(source.load_count(), 1);
//! ```

mod mock_capture_source;

pub use mock_capture_source::MockCaptureSource;

/// Test fixtures and helper functions.
pub mod fixtures {
    use crate::capture::CaptureRecord;
    use crate::evolution::EvolutionGraph;
    use crate::ranking::League;

    /// Builder for a capture record with reasonable defaults
    /// (regular, no form, no stats).
    pub struct CaptureBuilder {
        record: CaptureRecord,
    }

    /// Start building a capture at `row` for species `name`.
    pub fn capture(row: usize, name: &str) -> CaptureBuilder {
        let mut record = CaptureRecord::new(row, name);
        record.shadow = Some(0);
        CaptureBuilder { record }
    }

    impl CaptureBuilder {
        pub fn form(mut self, form: &str) -> Self {
            self.record.form = Some(form.to_string());
            self
        }

        pub fn cp(mut self, cp: u32) -> Self {
            self.record.cp = Some(cp);
            self
        }

        pub fn hp(mut self, hp: u32) -> Self {
            self.record.hp = Some(hp);
            self
        }

        /// Catch date as exported, `DD/MM/YYYY`.
        pub fn caught(mut self, date: &str) -> Self {
            self.record.catch_date = Some(date.to_string());
            self
        }

        /// Raw shadow/purified flag (0 regular, 1 shadow, 2 purified).
        pub fn shadow(mut self, flag: u8) -> Self {
            self.record.shadow = Some(flag);
            self
        }

        pub fn ivs(mut self, atk: u8, def: u8, sta: u8) -> Self {
            self.record.atk_iv = Some(atk);
            self.record.def_iv = Some(def);
            self.record.sta_iv = Some(sta);
            self
        }

        /// Percentile rank text and ranked species name for one league.
        pub fn rank(mut self, league: League, rank: &str, league_name: &str) -> Self {
            let (rank_slot, name_slot) = match league {
                League::Little => (
                    &mut self.record.rank.little,
                    &mut self.record.league_name.little,
                ),
                League::Great => (
                    &mut self.record.rank.great,
                    &mut self.record.league_name.great,
                ),
                League::Ultra => (
                    &mut self.record.rank.ultra,
                    &mut self.record.league_name.ultra,
                ),
            };
            *rank_slot = Some(rank.to_string());
            *name_slot = Some(league_name.to_string());
            self
        }

        pub fn build(self) -> CaptureRecord {
            self.record
        }
    }

    /// Owned species list from string literals.
    pub fn species(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    /// Three-stage chain graph in the shape the evolution export uses.
    pub fn pidgey_graph() -> EvolutionGraph {
        let json = r#"{
            "pidgey": ["pidgey", "pidgeotto", "pidgeot"],
            "pidgeotto": ["pidgeotto", "pidgeot"],
            "pidgeot": ["pidgeot"],
            "rattata": ["rattata", "raticate"],
            "raticate": ["raticate"]
        }"#;
        match EvolutionGraph::from_json_str(json) {
            Ok(graph) => graph,
            Err(e) => panic!("fixture graph is invalid: {}", e),
        }
    }
}
