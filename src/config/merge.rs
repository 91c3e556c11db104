//! Merge rules: defaults, override order, conflict handling.

use config::Config;
use config::ConfigBuilder;
use config::ConfigError;

/// Create a Config builder with merge policy defaults applied.
///
/// Defaults are the reference values; file sources layered on top override.
pub fn builder_with_defaults() -> Result<ConfigBuilder<config::builder::DefaultState>, ConfigError>
{
    Config::builder()
        .set_default("output.directory", "outputs")?
        .set_default(
            "scan.exclude_patterns",
            crate::scan::default_exclude_patterns(),
        )?
        .set_default("scan.extensions", crate::scan::default_extensions())?
        .set_default("scan.follow_symlinks", false)
}
