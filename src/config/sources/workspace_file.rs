//! Workspace config file source: <root>/dirdigest.toml

use config::builder::DefaultState;
use config::ConfigBuilder;
use config::ConfigError;
use config::File;
use std::path::Path;

/// File name looked up directly under the scan root.
pub const WORKSPACE_CONFIG_NAME: &str = "dirdigest.toml";

/// Add the workspace config file to builder. Workspace values override global ones.
pub fn add_to_builder(
    builder: ConfigBuilder<DefaultState>,
    root: &Path,
) -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    let mut builder = builder;

    let config_path = root.join(WORKSPACE_CONFIG_NAME);
    if config_path.exists() {
        builder =
            builder.add_source(File::with_name(&config_path.to_string_lossy()).required(false));
    }

    Ok(builder)
}
