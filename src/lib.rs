//! Dirdigest: per-directory source digests
//!
//! Recursively scans a directory tree, prunes excluded subtrees, and
//! concatenates each directory's eligible source files into one fenced-text
//! digest file per directory.

pub mod aggregate;
pub mod cli;
pub mod config;
pub mod digest;
pub mod error;
pub mod logging;
pub mod scan;
