//! Determinism: repeated runs produce byte-identical digests in a fixed order

use dirdigest::aggregate::Aggregator;
use dirdigest::config::DigestConfig;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn collect_outputs(dir: &Path) -> BTreeMap<String, String> {
    fs::read_dir(dir)
        .unwrap()
        .map(|e| {
            let e = e.unwrap();
            (
                e.file_name().to_string_lossy().into_owned(),
                fs::read_to_string(e.path()).unwrap(),
            )
        })
        .collect()
}

/// Two runs over an unchanged tree produce byte-identical output files.
#[test]
fn test_idempotent_runs() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path().to_path_buf();
    fs::write(root.join("z.rs"), "z").unwrap();
    fs::write(root.join("a.md"), "a").unwrap();
    fs::create_dir(root.join("sub")).unwrap();
    fs::write(root.join("sub").join("cfg.toml"), "k = 1").unwrap();

    let aggregator = Aggregator::new(root.clone(), &DigestConfig::default()).unwrap();

    aggregator.run().unwrap();
    let first = collect_outputs(aggregator.output_dir());

    aggregator.run().unwrap();
    let second = collect_outputs(aggregator.output_dir());

    assert_eq!(first, second);
}

/// Blocks within a digest appear in lexicographic file-name order,
/// regardless of creation order.
#[test]
fn test_blocks_in_lexicographic_order() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path().to_path_buf();
    fs::write(root.join("zz.rs"), "last").unwrap();
    fs::write(root.join("aa.rs"), "first").unwrap();
    fs::write(root.join("mm.rs"), "middle").unwrap();

    let aggregator = Aggregator::new(root.clone(), &DigestConfig::default()).unwrap();
    aggregator.run().unwrap();

    let digest = fs::read_to_string(root.join("outputs").join("root.txt")).unwrap();
    let aa = digest.find("# aa.rs").unwrap();
    let mm = digest.find("# mm.rs").unwrap();
    let zz = digest.find("# zz.rs").unwrap();
    assert!(aa < mm && mm < zz);
}

/// Written paths come back in a stable, path-sorted order.
#[test]
fn test_written_paths_sorted() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path().to_path_buf();
    fs::write(root.join("a.rs"), "x").unwrap();
    for dir in ["zeta", "alpha", "mid"] {
        fs::create_dir(root.join(dir)).unwrap();
        fs::write(root.join(dir).join("f.rs"), "x").unwrap();
    }

    let aggregator = Aggregator::new(root.clone(), &DigestConfig::default()).unwrap();
    let summary = aggregator.run().unwrap();

    let names: Vec<_> = summary
        .written
        .iter()
        .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
        .collect();
    assert_eq!(names, vec!["root.txt", "alpha.txt", "mid.txt", "zeta.txt"]);
}
