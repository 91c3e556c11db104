//! Property-based tests for output-name derivation and exclusion matching

use dirdigest::config::ScanConfig;
use dirdigest::digest::output_file_name;
use dirdigest::scan::Scanner;
use proptest::prelude::*;
use std::path::PathBuf;

/// Strategy for safe path components (no separators, no dot-relatives)
fn component() -> impl Strategy<Value = String> {
    "[A-Za-z0-9_][A-Za-z0-9_.]{0,11}".prop_filter("no dot-relative components", |s| {
        s != "." && s != ".."
    })
}

proptest! {
    /// Output names never contain a path separator and equal the
    /// dash-joined relative components.
    #[test]
    fn output_names_have_no_separators(components in prop::collection::vec(component(), 0..6)) {
        let root = PathBuf::from("/proptest/root");
        let mut dir = root.clone();
        for c in &components {
            dir.push(c);
        }

        let name = output_file_name(&root, &dir).unwrap();

        prop_assert!(!name.contains('/'));
        prop_assert!(!name.contains('\\'));
        if components.is_empty() {
            prop_assert_eq!(name, "root");
        } else {
            prop_assert_eq!(name, components.join("-"));
        }
    }

    /// Derivation is deterministic.
    #[test]
    fn output_names_deterministic(components in prop::collection::vec(component(), 0..6)) {
        let root = PathBuf::from("/proptest/root");
        let mut dir = root.clone();
        for c in &components {
            dir.push(c);
        }

        let first = output_file_name(&root, &dir).unwrap();
        let second = output_file_name(&root, &dir).unwrap();
        prop_assert_eq!(first, second);
    }

    /// Any name ending in "target" matches the default "*target" pattern.
    #[test]
    fn names_ending_in_target_are_excluded(prefix in "[A-Za-z0-9_.]{0,10}") {
        let scanner = Scanner::new(PathBuf::from("."), &ScanConfig::default()).unwrap();
        let name = format!("{}target", prefix);
        prop_assert!(scanner.is_excluded(&name));
    }

    /// Names free of all default pattern stems are never excluded.
    #[test]
    fn unrelated_names_are_not_excluded(name in "[A-Za-z0-9_.]{1,16}") {
        prop_assume!(!name.ends_with("target"));
        prop_assume!(!name.ends_with("git"));
        prop_assume!(!name.ends_with("idea"));
        prop_assume!(name != "output");

        let scanner = Scanner::new(PathBuf::from("."), &ScanConfig::default()).unwrap();
        prop_assert!(!scanner.is_excluded(&name));
    }
}
