//! CLI parse: clap types for dirdigest. No behavior; definitions only.

use clap::Parser;
use std::path::PathBuf;

/// Dirdigest CLI - per-directory source digests
#[derive(Parser)]
#[command(name = "dirdigest")]
#[command(about = "Concatenate each directory's source files into per-directory digest files")]
pub struct Cli {
    /// Root directory to scan
    #[arg(long, default_value = ".")]
    pub root: PathBuf,

    /// Output directory for digest files (overrides config)
    #[arg(long)]
    pub output_dir: Option<PathBuf>,

    /// Configuration file path (overrides default config loading)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging (default: off)
    #[arg(long, default_value = "false")]
    pub verbose: bool,

    /// Disable logging entirely
    #[arg(long)]
    pub quiet: bool,

    /// Log level (trace, debug, info, warn, error, off)
    #[arg(long)]
    pub log_level: Option<String>,

    /// Log format (json, text)
    #[arg(long)]
    pub log_format: Option<String>,

    /// Log output (stdout, stderr)
    #[arg(long)]
    pub log_output: Option<String>,
}
