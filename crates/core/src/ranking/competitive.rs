use std::cmp::Ordering;

use tracing::trace;

use super::League;
use crate::capture::{CaptureRecord, CaptureTable, Column, Unavailable};

/// Number of captures kept per league and shadow bucket.
pub const LEAGUE_TOP_N: usize = 3;

/// Parses a percentile rank such as `"98.52%"`. Missing or non-numeric text
/// yields `None`, which sorts after every parsed rank.
pub fn parse_rank_percent(text: &str) -> Option<f64> {
    text.trim()
        .trim_end_matches('%')
        .trim_end()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
}

/// The three eligible captures with the highest percentile rank in `league`.
///
/// Ties keep file order. Captures without a parseable rank sort after every
/// parsed rank, so they only fill slots that parsed ranks leave open.
pub fn top_three_by_league<'a>(
    table: &'a CaptureTable,
    species: &[String],
    shadow: bool,
    terminal_names: &[String],
    league: League,
) -> Result<Vec<&'a CaptureRecord>, Unavailable> {
    table.schema().require(&[
        Column::ShadowPurified,
        league.name_column(),
        league.rank_column(),
    ])?;

    let mut ranked: Vec<(Option<f64>, &CaptureRecord)> = table
        .in_species(species)
        .filter(|r| r.in_shadow_bucket(shadow))
        .filter(|r| league.is_eligible(r, species, terminal_names))
        .map(|r| (r.rank.get(league).as_deref().and_then(parse_rank_percent), r))
        .collect();

    // Stable sort so equal ranks stay in file order
    ranked.sort_by(|a, b| match (a.0, b.0) {
        (Some(x), Some(y)) => y.total_cmp(&x),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    });
    trace!(league = %league, shadow, eligible = ranked.len(), "Ranked league candidates");

    Ok(ranked
        .into_iter()
        .take(LEAGUE_TOP_N)
        .map(|(_, record)| record)
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::capture::Schema;
    use crate::testing::fixtures::{capture, species};

    fn line() -> (Vec<String>, Vec<String>) {
        (
            species(&["Pidgey", "Pidgeotto", "Pidgeot"]),
            species(&["Pidgeot"]),
        )
    }

    fn rows(records: &[&CaptureRecord]) -> Vec<usize> {
        records.iter().map(|r| r.row).collect()
    }

    #[test]
    fn test_parse_rank_percent() {
        assert_eq!(parse_rank_percent("98.52%"), Some(98.52));
        assert_eq!(parse_rank_percent("100"), Some(100.0));
        assert_eq!(parse_rank_percent(" 7.5 % "), Some(7.5));
        assert_eq!(parse_rank_percent(""), None);
        assert_eq!(parse_rank_percent("n/a"), None);
        assert_eq!(parse_rank_percent("NaN%"), None);
    }

    #[test]
    fn test_great_league_top_three_sorted_desc() {
        let (species, terminal) = line();
        let table = CaptureTable::new(
            Schema::full(),
            vec![
                capture(0, "Pidgey").rank(League::Great, "80%", "Pidgeot").build(),
                capture(1, "Pidgeot").rank(League::Great, "99%", "Pidgeot").build(),
                capture(2, "Pidgeotto").rank(League::Great, "95%", "Pidgeot").build(),
                capture(3, "Pidgey").rank(League::Great, "97%", "Pidgeot").build(),
                capture(4, "Pidgey").rank(League::Great, "100%", "Pidgeotto").build(),
            ],
        );

        let top = top_three_by_league(&table, &species, false, &terminal, League::Great).unwrap();
        // Row 4 is ranked as Pidgeotto, which is not fully evolved
        assert_eq!(rows(&top), vec![1, 3, 2]);
    }

    #[test]
    fn test_little_league_only_base_form() {
        let (species, terminal) = line();
        let table = CaptureTable::new(
            Schema::full(),
            vec![
                capture(0, "Pidgey").rank(League::Little, "90%", "Pidgey").build(),
                capture(1, "Pidgeotto").rank(League::Little, "99%", "Pidgeotto").build(),
                capture(2, "Pidgey").rank(League::Little, "95%", "Pidgey").build(),
            ],
        );

        let top = top_three_by_league(&table, &species, false, &terminal, League::Little).unwrap();
        assert_eq!(rows(&top), vec![2, 0]);
    }

    #[test]
    fn test_ties_keep_file_order() {
        let (species, terminal) = line();
        let table = CaptureTable::new(
            Schema::full(),
            (0..5)
                .map(|row| capture(row, "Pidgeot").rank(League::Ultra, "90%", "Pidgeot").build())
                .collect(),
        );

        let top = top_three_by_league(&table, &species, false, &terminal, League::Ultra).unwrap();
        assert_eq!(rows(&top), vec![0, 1, 2]);
    }

    #[test]
    fn test_unparseable_rank_sorts_last() {
        let (species, terminal) = line();
        let table = CaptureTable::new(
            Schema::full(),
            vec![
                capture(0, "Pidgeot").rank(League::Great, "", "Pidgeot").build(),
                capture(1, "Pidgeot").rank(League::Great, "-", "Pidgeot").build(),
                capture(2, "Pidgeot").rank(League::Great, "12%", "Pidgeot").build(),
            ],
        );

        let top = top_three_by_league(&table, &species, false, &terminal, League::Great).unwrap();
        assert_eq!(rows(&top), vec![2, 0, 1]);
    }

    #[test]
    fn test_missing_rank_fills_open_slot() {
        let (species, terminal) = line();
        let table = CaptureTable::new(
            Schema::full(),
            vec![
                capture(0, "Pidgeot").rank(League::Great, "", "Pidgeot").build(),
                capture(1, "Pidgeot").rank(League::Great, "12%", "Pidgeot").build(),
            ],
        );

        let top = top_three_by_league(&table, &species, false, &terminal, League::Great).unwrap();
        assert_eq!(rows(&top), vec![1, 0]);
    }

    #[test]
    fn test_missing_rank_loses_to_three_parsed() {
        let (species, terminal) = line();
        let table = CaptureTable::new(
            Schema::full(),
            vec![
                capture(0, "Pidgeot").rank(League::Great, "n/a", "Pidgeot").build(),
                capture(1, "Pidgeot").rank(League::Great, "1%", "Pidgeot").build(),
                capture(2, "Pidgeot").rank(League::Great, "2%", "Pidgeot").build(),
                capture(3, "Pidgeot").rank(League::Great, "3%", "Pidgeot").build(),
            ],
        );

        let top = top_three_by_league(&table, &species, false, &terminal, League::Great).unwrap();
        assert_eq!(rows(&top), vec![3, 2, 1]);
    }

    #[test]
    fn test_shadow_bucket_filter() {
        let (species, terminal) = line();
        let table = CaptureTable::new(
            Schema::full(),
            vec![
                capture(0, "Pidgeot").shadow(1).rank(League::Great, "99%", "Pidgeot").build(),
                capture(1, "Pidgeot").rank(League::Great, "50%", "Pidgeot").build(),
            ],
        );

        let shadow = top_three_by_league(&table, &species, true, &terminal, League::Great).unwrap();
        assert_eq!(rows(&shadow), vec![0]);
        let regular = top_three_by_league(&table, &species, false, &terminal, League::Great).unwrap();
        assert_eq!(rows(&regular), vec![1]);
    }

    #[test]
    fn test_never_more_than_three() {
        let (species, terminal) = line();
        let table = CaptureTable::new(
            Schema::full(),
            (0..10)
                .map(|row| {
                    let rank = format!("{}%", 50 + row);
                    capture(row, "Pidgeot").rank(League::Great, &rank, "Pidgeot").build()
                })
                .collect(),
        );

        let top = top_three_by_league(&table, &species, false, &terminal, League::Great).unwrap();
        assert_eq!(rows(&top), vec![9, 8, 7]);
    }

    #[test]
    fn test_unavailable_without_rank_column() {
        let (species, terminal) = line();
        let table = CaptureTable::new(Schema::full().without(Column::RankUltra), vec![]);

        let err = top_three_by_league(&table, &species, false, &terminal, League::Ultra).unwrap_err();
        assert_eq!(err.missing, vec![Column::RankUltra]);
        // Other leagues are unaffected
        assert!(top_three_by_league(&table, &species, false, &terminal, League::Great).is_ok());
    }
}
