//! Exclusion behavior: pruned directories and skipped file names

use dirdigest::aggregate::Aggregator;
use dirdigest::config::DigestConfig;
use std::fs;
use tempfile::TempDir;

/// Each default pattern prunes the directories it names.
#[test]
fn test_default_patterns_prune_common_directories() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path().to_path_buf();
    fs::write(root.join("keep.rs"), "x").unwrap();

    for dir in ["target", "wasm-target", ".git", "git", ".idea", "output"] {
        fs::create_dir(root.join(dir)).unwrap();
        fs::write(root.join(dir).join("hidden.rs"), "x").unwrap();
    }

    let aggregator = Aggregator::new(root.clone(), &DigestConfig::default()).unwrap();
    let summary = aggregator.run().unwrap();

    assert_eq!(summary.written.len(), 1);
    let digest = fs::read_to_string(root.join("outputs").join("root.txt")).unwrap();
    assert!(digest.contains("keep.rs"));
    assert!(!digest.contains("hidden.rs"));
}

/// The default `output` pattern does not match the `outputs` directory;
/// it stays inert only because .txt is never an eligible extension.
#[test]
fn test_outputs_directory_is_visited_but_produces_nothing() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path().to_path_buf();
    fs::write(root.join("a.md"), "x").unwrap();
    fs::create_dir(root.join("outputs")).unwrap();
    fs::write(root.join("outputs").join("stale.txt"), "old digest").unwrap();

    let aggregator = Aggregator::new(root.clone(), &DigestConfig::default()).unwrap();
    let summary = aggregator.run().unwrap();

    assert_eq!(summary.written.len(), 1);
    assert!(summary.written[0].ends_with("root.txt"));
}

/// A file whose name matches a pattern is skipped even with an eligible
/// extension.
#[test]
fn test_excluded_file_name_skipped_despite_extension() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path().to_path_buf();

    let mut config = DigestConfig::default();
    config.scan.exclude_patterns.push("*_gen.rs".to_string());

    fs::write(root.join("handwritten.rs"), "x").unwrap();
    fs::write(root.join("schema_gen.rs"), "x").unwrap();

    let aggregator = Aggregator::new(root.clone(), &config).unwrap();
    aggregator.run().unwrap();

    let digest = fs::read_to_string(root.join("outputs").join("root.txt")).unwrap();
    assert!(digest.contains("handwritten.rs"));
    assert!(!digest.contains("schema_gen.rs"));
}

/// Exclusion matches the base name only, not the full path.
#[test]
fn test_exclusion_matches_base_name_not_path() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path().to_path_buf();

    // "src" under an excluded-sounding parent still digests; only the base
    // name "target" itself prunes.
    fs::create_dir_all(root.join("retargeting").join("src")).unwrap();
    fs::write(root.join("retargeting").join("src").join("a.rs"), "x").unwrap();

    let aggregator = Aggregator::new(root.clone(), &DigestConfig::default()).unwrap();
    let summary = aggregator.run().unwrap();

    // "retargeting" does not match "*target" (fnmatch is anchored)
    assert_eq!(summary.written.len(), 1);
    assert!(summary.written[0].ends_with("retargeting-src.txt"));
}
