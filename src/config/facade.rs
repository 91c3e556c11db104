//! ConfigLoader facade: builds the layered configuration pipeline.

use super::merge;
use super::sources::{global_file, workspace_file};
use super::DigestConfig;
use crate::error::DigestError;
use config::File;
use std::path::{Path, PathBuf};

/// Loads configuration from defaults, the global file, and the workspace file.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration for a scan root.
    ///
    /// Precedence (lowest to highest): built-in defaults, then
    /// ~/.config/dirdigest/config.toml, then <root>/dirdigest.toml.
    pub fn load(root: &Path) -> Result<DigestConfig, DigestError> {
        let builder = merge::builder_with_defaults()?;
        let builder = global_file::add_to_builder(builder)?;
        let builder = workspace_file::add_to_builder(builder, root)?;
        let config = builder.build()?;
        Ok(config.try_deserialize()?)
    }

    /// Load configuration from an explicit file, skipping the default sources.
    pub fn load_from_file(path: &Path) -> Result<DigestConfig, DigestError> {
        let builder = merge::builder_with_defaults()?
            .add_source(File::with_name(&path.to_string_lossy()));
        let config = builder.build()?;
        Ok(config.try_deserialize()?)
    }

    /// Path of the global config file, if HOME is set.
    pub fn global_config_path() -> Option<PathBuf> {
        global_file::global_config_path()
    }
}
