//! Property-based tests for the path algebra.
//!
//! Note: The normalize and relationship modules already carry small
//! property tests. This module checks the laws tying the operators and the
//! resolvers together.

use super::common::CommonOptions;
use super::normalize::normalize_with;
use super::partition::partition;
use super::types::GenericPath;
use crate::platform::Platform;
use crate::render::render_with;
use proptest::prelude::*;

// Strategy for generating path components
fn part_strategy() -> impl Strategy<Value = String> {
    "[a-d]{1,3}"
}

fn relative_strategy() -> impl Strategy<Value = GenericPath> {
    (0usize..3, prop::collection::vec(part_strategy(), 0..5)).prop_map(|(level, parts)| {
        GenericPath::from_components(false, "", level, parts).unwrap_or_default()
    })
}

fn plain_relative_strategy() -> impl Strategy<Value = GenericPath> {
    prop::collection::vec(part_strategy(), 0..5)
        .prop_map(|parts| GenericPath::from_components(false, "", 0, parts).unwrap_or_default())
}

fn path_strategy() -> impl Strategy<Value = GenericPath> {
    (
        any::<bool>(),
        prop_oneof![Just(""), Just("C"), Just("D")],
        relative_strategy(),
    )
        .prop_map(|(root, drive, relative)| {
            let level = if root { 0 } else { relative.parent_level() };
            GenericPath::from_components(root, drive, level, relative.named_parts().to_vec())
                .unwrap_or_default()
        })
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 10000,
        max_shrink_iters: 10000,
        .. ProptestConfig::default()
    })]

    // Rendering then normalizing gives back the same path
    #[test]
    fn generic_rendering_round_trip(path in path_strategy()) {
        let text = path.to_string();
        prop_assert_eq!(normalize_with(&text, Platform::Generic.dialect()), path);
    }

    // Windows rendering round-trips too
    #[test]
    fn windows_rendering_round_trip(path in path_strategy()) {
        let dialect = Platform::WindowsNt.dialect();
        let text = render_with(&path, dialect);
        prop_assert_eq!(normalize_with(&text, dialect), path);
    }

    // POSIX rendering round-trips once the drive is gone
    #[test]
    fn posix_rendering_round_trip(path in path_strategy()) {
        let dialect = Platform::Posix.dialect();
        let text = render_with(&path, dialect);
        prop_assert_eq!(normalize_with(&text, dialect), path.without_drive());
    }

    // Every path is its own common base
    #[test]
    fn common_with_self(path in path_strategy()) {
        prop_assert_eq!(path.common_with(&path, CommonOptions::default()), Some(path.clone()));
    }

    // Every path is its own empty subpath
    #[test]
    fn subpath_from_self_is_empty(path in path_strategy()) {
        prop_assert_eq!(path.subpath_from(&path), Some(GenericPath::empty()));
    }

    // The common base is symmetric
    #[test]
    fn common_with_symmetric(a in path_strategy(), b in path_strategy()) {
        for options in [CommonOptions::STRICT, CommonOptions::default(), CommonOptions::LENIENT] {
            prop_assert_eq!(a.common_with(&b, options), b.common_with(&a, options));
        }
    }

    // The common base contains both paths
    #[test]
    fn common_base_contains_both(a in path_strategy(), b in path_strategy()) {
        if let Some(common) = a.common_with(&b, CommonOptions::LENIENT) {
            prop_assert!(common.contains(&a));
            prop_assert!(common.contains(&b));
        }
    }

    // A subpath leads back to the path
    #[test]
    fn subpath_concat_round_trip(base in path_strategy(), sub in plain_relative_strategy()) {
        let full = base.concat(&sub);
        prop_assert_eq!(full.subpath_from(&base), Some(sub));
    }

    // Truncation distributes over concatenation of plain relative paths
    #[test]
    fn truncate_distributes(base in path_strategy(), sub in plain_relative_strategy(), n in 0usize..6) {
        let n = n % (sub.len() + 1);
        prop_assert_eq!(base.concat(&sub).truncate(n), base.concat(&sub.truncate(n)));
    }

    // Repeating zero times leaves only the anchor
    #[test]
    fn repeat_zero_keeps_anchor(path in path_strategy()) {
        let anchor = path.repeat(0);
        prop_assert_eq!(anchor.len(), 0);
        prop_assert_eq!(anchor.parent_level(), 0);
        prop_assert_eq!(anchor.absolute(), path.absolute());
        prop_assert_eq!(anchor.drive(), path.drive());
    }

    // Shifting up undoes shifting down
    #[test]
    fn shift_round_trip(path in path_strategy(), n in 0isize..5) {
        prop_assert_eq!(path.shift_down(n).shift_up(n), path);
    }

    // Operators never break the invariants
    #[test]
    fn operators_hold_invariants(a in path_strategy(), b in path_strategy(), n in 0usize..4) {
        for result in [a.concat(&b), a.truncate(n), a.repeat(n), a.as_relative(Some(n)), a.as_absolute()] {
            prop_assert!(result.check_invariants().is_ok());
        }
    }

    // Partition members rebuild the input paths
    #[test]
    fn partition_covers_input(paths in prop::collection::vec(path_strategy(), 0..12)) {
        let groups = partition(paths.clone(), CommonOptions::default()).unwrap();
        let total: usize = groups.values().map(Vec::len).sum();
        prop_assert_eq!(total, paths.len());

        for (base, members) in &groups {
            for member in members {
                let rebuilt = base.concat(member);
                prop_assert!(paths.contains(&rebuilt));
            }
        }
    }

    // Partition bases never share a common base with each other
    #[test]
    fn partition_bases_disjoint(paths in prop::collection::vec(path_strategy(), 0..12)) {
        let groups = partition(paths, CommonOptions::default()).unwrap();
        let bases: Vec<&GenericPath> = groups.keys().collect();
        for (i, a) in bases.iter().enumerate() {
            for b in &bases[i + 1..] {
                prop_assert_eq!(a.common_with(b, CommonOptions::default()), None);
            }
        }
    }
}
