//! CLI route: run context resolving config and dispatching the aggregator.

use crate::aggregate::Aggregator;
use crate::cli::presentation::format_run_summary;
use crate::config::{ConfigLoader, DigestConfig};
use crate::error::DigestError;
use std::path::PathBuf;

/// Runtime context for CLI execution: scan root and resolved configuration.
/// Built from the root and an optional config path using ConfigLoader only.
pub struct RunContext {
    root: PathBuf,
    config: DigestConfig,
}

impl RunContext {
    /// Create run context from root, optional config path, and CLI overrides.
    pub fn new(
        root: PathBuf,
        config_path: Option<PathBuf>,
        output_dir: Option<PathBuf>,
    ) -> Result<Self, DigestError> {
        let mut config = if let Some(ref cfg_path) = config_path {
            ConfigLoader::load_from_file(cfg_path)?
        } else {
            ConfigLoader::load(&root)?
        };

        if let Some(dir) = output_dir {
            config.output.directory = dir;
        }

        config.validate().map_err(|errors| {
            let msgs: Vec<String> = errors.iter().map(|e| e.to_string()).collect();
            DigestError::Config(format!(
                "Configuration validation failed:\n{}",
                msgs.join("\n")
            ))
        })?;

        Ok(Self { root, config })
    }

    /// Resolved configuration.
    pub fn config(&self) -> &DigestConfig {
        &self.config
    }

    /// Execute the aggregation and format its output for the terminal.
    pub fn execute(&self) -> Result<String, DigestError> {
        let aggregator = Aggregator::new(self.root.clone(), &self.config)?;
        let summary = aggregator.run()?;
        Ok(format_run_summary(&summary))
    }
}
