//! Aggregator: scan the tree, render per-directory digests, write them out.

use crate::config::DigestConfig;
use crate::digest;
use crate::error::DigestError;
use crate::scan::Scanner;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Result of one aggregation run, consumed by the CLI presentation layer.
#[derive(Debug, Clone)]
pub struct RunSummary {
    /// Number of directories visited (pruned subtrees are not counted)
    pub directories_scanned: usize,
    /// Digest files written, in traversal order
    pub written: Vec<PathBuf>,
}

/// Directory digest aggregator
pub struct Aggregator {
    root: PathBuf,
    output_dir: PathBuf,
    scanner: Scanner,
}

impl Aggregator {
    /// Build an aggregator for `root` using `config`.
    ///
    /// The configured output directory resolves under `root` unless absolute.
    pub fn new(root: PathBuf, config: &DigestConfig) -> Result<Self, DigestError> {
        let output_dir = if config.output.directory.is_absolute() {
            config.output.directory.clone()
        } else {
            root.join(&config.output.directory)
        };
        let scanner = Scanner::new(root.clone(), &config.scan)?;
        Ok(Self {
            root,
            output_dir,
            scanner,
        })
    }

    /// Resolved output directory.
    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Run the aggregation: one digest file per directory with eligible files.
    ///
    /// Creates the output directory if absent, overwrites existing digests of
    /// the same name, and skips directories whose digest would be empty.
    /// Fail-fast: the first I/O or decode error aborts the run.
    pub fn run(&self) -> Result<RunSummary, DigestError> {
        fs::create_dir_all(&self.output_dir)?;

        let listings = self.scanner.scan()?;
        let directories_scanned = listings.len();
        let mut written = Vec::new();

        for listing in &listings {
            let mut body = String::new();
            for file in &listing.files {
                body.push_str(&digest::render_file_block(&self.root, file)?);
            }

            if body.is_empty() {
                debug!(dir = %listing.dir.display(), "no eligible files, skipping");
                continue;
            }

            let stem = digest::output_file_name(&self.root, &listing.dir)?;
            let output_path = self.output_dir.join(format!("{}.txt", stem));
            fs::write(&output_path, &body)?;
            info!(
                path = %output_path.display(),
                blocks = listing.files.len(),
                "digest written"
            );
            written.push(output_path);
        }

        Ok(RunSummary {
            directories_scanned,
            written,
        })
    }
}
