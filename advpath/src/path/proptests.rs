//! Property-based tests for path decomposition and ordering.

use super::{common_prefix, PathValue, SystemPlatform};
use proptest::prelude::*;
use std::cmp::Ordering;

fn posix() -> SystemPlatform {
    SystemPlatform::posix("/base")
}

// Mostly path-shaped strings, with the odd separator run and unicode letter.
fn path_strategy() -> impl Strategy<Value = String> {
    "(/|\\\\)?([a-zA-Zé.~:]{0,6}(/|\\\\){1,2}){0,5}[a-zA-Zé.]{0,6}"
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 2000,
        .. ProptestConfig::default()
    })]

    // directory + fragment always reassembles the input
    #[test]
    fn decomposition_reassembles(s in path_strategy()) {
        let path = PathValue::new(s.clone(), &posix());
        prop_assert_eq!(format!("{}{}", path.directory(), path.fragment()), s.clone());
        prop_assert_eq!(path.full(), s.as_str());
    }

    #[test]
    fn fragment_has_no_separator(s in path_strategy()) {
        let path = PathValue::new(s, &posix());
        prop_assert!(!path.fragment().contains(path.separator()));
    }

    #[test]
    fn as_directory_idempotent(s in path_strategy()) {
        let platform = posix();
        let once = PathValue::new(s, &platform).as_directory(&platform);
        let twice = once.as_directory(&platform);
        prop_assert!(once.is_directory_form());
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn root_idempotent(s in path_strategy()) {
        let platform = posix();
        let root = PathValue::new(s, &platform).root(&platform);
        prop_assert!(root.is_root(&platform));
        prop_assert_eq!(root.root(&platform), root);
    }

    #[test]
    fn parent_of_root_is_fixed(s in path_strategy()) {
        let platform = posix();
        let root = PathValue::new(s, &platform).root(&platform);
        prop_assert_eq!(root.parent(&platform), root);
    }

    #[test]
    fn windows_decomposition_reassembles(s in path_strategy()) {
        let platform = SystemPlatform::windows(r"C:\base");
        let path = PathValue::new(s.clone(), &platform);
        prop_assert_eq!(format!("{}{}", path.directory(), path.fragment()), s);
        prop_assert!(!path.fragment().contains(path.separator()));
    }

    // compare is antisymmetric and Equal exactly when the strings match
    #[test]
    fn compare_consistent_with_eq(a in path_strategy(), b in path_strategy()) {
        let platform = posix();
        let (a, b) = (PathValue::new(a, &platform), PathValue::new(b, &platform));
        let forward = PathValue::compare(&a, &b);
        prop_assert_eq!(forward, PathValue::compare(&b, &a).reverse());
        prop_assert_eq!(forward == Ordering::Equal, a == b);
    }

    #[test]
    fn compare_transitive(
        a in path_strategy(),
        b in path_strategy(),
        c in path_strategy(),
    ) {
        let platform = posix();
        let mut values = vec![
            PathValue::new(a, &platform),
            PathValue::new(b, &platform),
            PathValue::new(c, &platform),
        ];
        values.sort();
        prop_assert!(values[0] <= values[1]);
        prop_assert!(values[1] <= values[2]);
        prop_assert!(values[0] <= values[2]);
    }

    // exact prefix of the sorted extremes is a prefix of every input
    #[test]
    fn common_prefix_is_prefix(paths in prop::collection::vec(path_strategy(), 2..6)) {
        let platform = posix();
        let values: Vec<_> = paths
            .iter()
            .map(|p| PathValue::new(p.as_str(), &platform))
            .collect();

        let sensitive = common_prefix(&values, true, &platform).unwrap();
        for p in &paths {
            prop_assert!(p.starts_with(sensitive.full()));
        }

        let insensitive = common_prefix(&values, false, &platform).unwrap();
        prop_assert!(
            insensitive.full().chars().count() >= sensitive.full().chars().count()
        );
    }
}
