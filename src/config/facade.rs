//! Config loading facade: assembles sources in precedence order.

use crate::config::merge::merge_policy;
use crate::config::sources::{environment, global_file, workspace_file};
use crate::config::TreedocConfig;
use config::{ConfigError, File, FileFormat};
use std::path::Path;
use tracing::debug;

/// Loads [`TreedocConfig`] from files and environment
#[derive(Debug, Default, Clone, Copy)]
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration for a workspace.
    ///
    /// Precedence (lowest first): defaults, global config file, workspace
    /// `treedoc.toml`, `TREEDOC_*` environment variables.
    pub fn load(workspace_root: &Path) -> Result<TreedocConfig, ConfigError> {
        let builder = merge_policy::builder_with_defaults()?;
        let builder = global_file::add_to_builder(builder)?;
        let builder = workspace_file::add_to_builder(builder, workspace_root)?;
        let builder = environment::add_to_builder(builder);

        let config: TreedocConfig = builder.build()?.try_deserialize()?;
        debug!(
            workspace = %workspace_root.display(),
            roots = config.roots.len(),
            "Configuration loaded"
        );
        Ok(config)
    }

    /// Load configuration from one explicit file instead of the global and
    /// workspace files. Defaults and environment still apply. The file must exist.
    pub fn load_from_file(path: &Path) -> Result<TreedocConfig, ConfigError> {
        let builder = merge_policy::builder_with_defaults()?
            .add_source(File::from(path).format(FileFormat::Toml).required(true));
        let builder = environment::add_to_builder(builder);

        let config: TreedocConfig = builder.build()?.try_deserialize()?;
        debug!(config_path = %path.display(), "Configuration loaded from file");
        Ok(config)
    }
}
