//! Filesystem scanner: pruned top-down traversal grouping eligible files per directory.

use crate::error::DigestError;
use glob::Pattern;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::PathBuf;
use walkdir::WalkDir;

/// Scanner configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanConfig {
    /// Glob patterns matched against base names (directories are pruned, files skipped)
    #[serde(default = "default_exclude_patterns")]
    pub exclude_patterns: Vec<String>,

    /// File-name suffixes defining eligible files
    #[serde(default = "default_extensions")]
    pub extensions: Vec<String>,

    /// Whether to follow symbolic links (default: false for determinism)
    #[serde(default)]
    pub follow_symlinks: bool,
}

pub(crate) fn default_exclude_patterns() -> Vec<String> {
    ["*target", "*git", "*idea", "output"]
        .iter()
        .map(|s| (*s).to_string())
        .collect()
}

pub(crate) fn default_extensions() -> Vec<String> {
    [".rs", ".toml", ".yaml", ".md"]
        .iter()
        .map(|s| (*s).to_string())
        .collect()
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            exclude_patterns: default_exclude_patterns(),
            extensions: default_extensions(),
            follow_symlinks: false,
        }
    }
}

impl ScanConfig {
    /// Validate scan configuration
    pub fn validate(&self) -> Result<(), String> {
        for pattern in &self.exclude_patterns {
            Pattern::new(pattern)
                .map_err(|e| format!("Invalid exclude pattern '{}': {}", pattern, e))?;
        }
        for extension in &self.extensions {
            if extension.is_empty() {
                return Err("Extensions cannot be empty".to_string());
            }
        }
        Ok(())
    }
}

/// One visited directory and the eligible files directly inside it.
///
/// Files in subdirectories belong to their own listing, never to a parent's.
#[derive(Debug, Clone)]
pub struct DirectoryListing {
    pub dir: PathBuf,
    pub files: Vec<PathBuf>,
}

/// Filesystem scanner
pub struct Scanner {
    root: PathBuf,
    patterns: Vec<Pattern>,
    extensions: Vec<String>,
    follow_symlinks: bool,
}

impl Scanner {
    /// Create a scanner for the given root path, compiling the exclusion patterns.
    pub fn new(root: PathBuf, config: &ScanConfig) -> Result<Self, DigestError> {
        let mut patterns = Vec::with_capacity(config.exclude_patterns.len());
        for raw in &config.exclude_patterns {
            let pattern = Pattern::new(raw).map_err(|e| DigestError::InvalidPattern {
                pattern: raw.clone(),
                source: e,
            })?;
            patterns.push(pattern);
        }
        Ok(Self {
            root,
            patterns,
            extensions: config.extensions.clone(),
            follow_symlinks: config.follow_symlinks,
        })
    }

    /// True if a base name matches any exclusion pattern.
    ///
    /// Applied to directory names (to prune traversal) and file names (to skip).
    pub fn is_excluded(&self, name: &str) -> bool {
        self.patterns.iter().any(|p| p.matches(name))
    }

    /// True if a file name ends with a configured extension and is not excluded.
    pub fn is_eligible_file(&self, name: &str) -> bool {
        self.extensions.iter().any(|ext| name.ends_with(ext.as_str())) && !self.is_excluded(name)
    }

    /// Walk the tree and collect one listing per visited directory.
    ///
    /// Excluded directories are pruned before descent, so their subtrees are
    /// never visited. Listings come back sorted by path; files within a
    /// listing are in lexicographic file-name order.
    pub fn scan(&self) -> Result<Vec<DirectoryListing>, DigestError> {
        let mut listings: BTreeMap<PathBuf, Vec<PathBuf>> = BTreeMap::new();

        let walker = WalkDir::new(&self.root)
            .follow_links(self.follow_symlinks)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|entry| {
                // The root itself is never pruned, even if its own name matches.
                if entry.depth() == 0 {
                    return true;
                }
                !self.is_excluded(&entry.file_name().to_string_lossy())
            });

        for entry in walker {
            let entry = entry.map_err(|e| DigestError::Walk(e.to_string()))?;
            let path = entry.path().to_path_buf();

            if entry.file_type().is_dir() {
                listings.entry(path).or_default();
            } else if entry.file_type().is_file() {
                let name = entry.file_name().to_string_lossy();
                if !self.is_eligible_file(&name) {
                    continue;
                }
                let parent = path
                    .parent()
                    .ok_or_else(|| DigestError::InvalidPath(path.display().to_string()))?
                    .to_path_buf();
                listings.entry(parent).or_default().push(path);
            }
            // Symlinks are skipped when not followed
        }

        Ok(listings
            .into_iter()
            .map(|(dir, files)| DirectoryListing { dir, files })
            .collect())
    }
}
