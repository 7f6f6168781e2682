//! Workspace config file source: ./treedoc.toml

use config::builder::DefaultState;
use config::ConfigBuilder;
use config::ConfigError;
use config::{File, FileFormat};
use std::path::Path;

/// File name of the per-workspace configuration
pub const WORKSPACE_CONFIG_FILE: &str = "treedoc.toml";

/// Add the workspace config file to builder if it exists.
pub fn add_to_builder(
    builder: ConfigBuilder<DefaultState>,
    workspace_root: &Path,
) -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    let config_path = workspace_root.join(WORKSPACE_CONFIG_FILE);
    if !config_path.is_file() {
        return Ok(builder);
    }
    Ok(builder.add_source(
        File::from(config_path.as_path())
            .format(FileFormat::Toml)
            .required(false),
    ))
}
