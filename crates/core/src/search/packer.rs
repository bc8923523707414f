use tracing::warn;

use crate::keep::KeepList;

pub const DEFAULT_CHAR_LIMIT: usize = 200;

/// Fragments collected for one lower-cased species name.
struct SpeciesFragments {
    name: String,
    fragments: Vec<String>,
}

impl SpeciesFragments {
    /// Appends `tag` to the last fragment if the result stays within `limit`,
    /// otherwise starts a new fragment. Tags are never reordered.
    fn push(&mut self, tag: String, limit: usize) {
        match self.fragments.last_mut() {
            Some(current) if current.len() + tag.len() + 1 <= limit => {
                current.push(',');
                current.push_str(&tag);
            }
            _ => {
                if tag.len() > limit {
                    warn!(tag = %tag, limit, "Search tag longer than the character limit");
                }
                self.fragments.push(tag);
            }
        }
    }
}

/// Packs the keep-list into search strings grouped by species.
///
/// Species appear in order of first appearance in the keep-list, each one's
/// fragments in fill order. Captures without a CP have no tag.
pub fn pack_search_strings(keep: &KeepList, char_limit: usize) -> Vec<String> {
    let mut groups: Vec<SpeciesFragments> = Vec::new();

    for entry in keep {
        let Some(cp) = entry.record.cp else {
            continue;
        };
        let name = entry.record.name.to_lowercase();
        let idx = match groups.iter().position(|g| g.name == name) {
            Some(idx) => idx,
            None => {
                groups.push(SpeciesFragments {
                    name,
                    fragments: Vec::new(),
                });
                groups.len() - 1
            }
        };
        groups[idx].push(format!("cp{}", cp), char_limit);
    }

    groups
        .into_iter()
        .flat_map(|g| {
            let name = g.name;
            g.fragments
                .into_iter()
                .map(move |fragment| format!("{}&{}", name, fragment))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    use crate::keep::KeepListEntry;
    use crate::ranking::Reason;
    use crate::testing::fixtures::capture;

    fn keep_list(entries: &[(&str, u32)]) -> KeepList {
        entries
            .iter()
            .enumerate()
            .map(|(row, (name, cp))| KeepListEntry {
                record: capture(row, name).cp(*cp).build(),
                reason: Reason::EarliestCaught,
            })
            .collect()
    }

    #[test]
    fn test_append_then_overflow() {
        // "cp100,cp200" is exactly 11 characters
        let keep = keep_list(&[("X", 100), ("X", 200), ("X", 300)]);
        assert_eq!(
            pack_search_strings(&keep, 11),
            vec!["x&cp100,cp200", "x&cp300"]
        );
    }

    #[test]
    fn test_limit_one_below_fit_splits_every_tag() {
        let keep = keep_list(&[("X", 100), ("X", 200), ("X", 300)]);
        assert_eq!(
            pack_search_strings(&keep, 10),
            vec!["x&cp100", "x&cp200", "x&cp300"]
        );
    }

    #[test]
    fn test_groups_by_lowercase_name_in_first_appearance_order() {
        let keep = keep_list(&[
            ("Pidgeot", 2000),
            ("Pidgey", 10),
            ("Pidgeot", 1500),
            ("Pidgey", 15),
        ]);
        assert_eq!(
            pack_search_strings(&keep, DEFAULT_CHAR_LIMIT),
            vec!["pidgeot&cp2000,cp1500", "pidgey&cp10,cp15"]
        );
    }

    #[test]
    fn test_fragments_within_limit_and_tags_preserved() {
        let cps: Vec<(&str, u32)> = (0..60).map(|i| ("Rattata", 100 + i * 37)).collect();
        let keep = keep_list(&cps);
        let limit = 40;

        let strings = pack_search_strings(&keep, limit);
        assert!(strings.len() > 1);

        let mut tags = Vec::new();
        for s in &strings {
            let (name, fragment) = s.split_once('&').unwrap();
            assert_eq!(name, "rattata");
            assert!(fragment.len() <= limit, "{} exceeds limit", fragment);
            tags.extend(fragment.split(',').map(str::to_string));
        }
        let expected: Vec<String> = cps.iter().map(|(_, cp)| format!("cp{}", cp)).collect();
        assert_eq!(tags, expected);
    }

    #[test]
    fn test_oversized_tag_is_emitted_alone() {
        let keep = keep_list(&[("X", 1), ("X", 123456), ("X", 2)]);
        assert_eq!(
            pack_search_strings(&keep, 4),
            vec!["x&cp1", "x&cp123456", "x&cp2"]
        );
    }

    #[test]
    fn test_missing_cp_skipped() {
        let mut keep = keep_list(&[("X", 100)]);
        let mut no_cp = capture(1, "X").build();
        no_cp.cp = None;
        keep.offer(&no_cp, Reason::EarliestCaught, crate::config::IdentityKey::Record);
        assert_eq!(pack_search_strings(&keep, 200), vec!["x&cp100"]);
    }

    #[test]
    fn test_empty_keep_list() {
        assert!(pack_search_strings(&KeepList::new(), 200).is_empty());
    }

    proptest! {
        #[test]
        fn proptest_fragments_fit_and_keep_tag_order(
            cps in prop::collection::vec(0u32..100_000, 0..80),
            limit in 7usize..120,
        ) {
            // Every tag is at most "cp99999", so each one fits on its own
            let entries: Vec<(&str, u32)> = cps.iter().map(|cp| ("Pidgey", *cp)).collect();
            let strings = pack_search_strings(&keep_list(&entries), limit);

            let mut tags = Vec::new();
            for s in &strings {
                let (name, fragment) = s.split_once('&').unwrap();
                prop_assert_eq!(name, "pidgey");
                prop_assert!(fragment.len() <= limit);
                tags.extend(fragment.split(',').map(str::to_string));
            }
            let expected: Vec<String> = cps.iter().map(|cp| format!("cp{}", cp)).collect();
            prop_assert_eq!(tags, expected);
        }

        #[test]
        fn proptest_species_groups_keep_their_own_order(
            entries in prop::collection::vec((0usize..3, 0u32..5_000), 0..40),
            limit in 6usize..60,
        ) {
            const NAMES: [&str; 3] = ["Pidgey", "Pidgeotto", "Pidgeot"];
            let named: Vec<(&str, u32)> = entries.iter().map(|(i, cp)| (NAMES[*i], *cp)).collect();
            let strings = pack_search_strings(&keep_list(&named), limit);

            for name in NAMES {
                let lower = name.to_lowercase();
                let packed: Vec<String> = strings
                    .iter()
                    .filter_map(|s| s.split_once('&'))
                    .filter(|(n, _)| *n == lower)
                    .flat_map(|(_, fragment)| fragment.split(',').map(str::to_string))
                    .collect();
                let expected: Vec<String> = named
                    .iter()
                    .filter(|(n, _)| *n == name)
                    .map(|(_, cp)| format!("cp{}", cp))
                    .collect();
                prop_assert_eq!(packed, expected);
            }
        }
    }
}
