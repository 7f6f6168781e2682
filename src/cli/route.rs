//! CLI route: run context and command dispatch.

use crate::cli::output::format_export_summary;
use crate::cli::parse::Commands;
use crate::config::{ConfigLoader, TreedocConfig};
use crate::error::ExportError;
use crate::export::{run_export, run_list};
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Runtime context for CLI execution: the loaded (pre-override) configuration.
pub struct RunContext {
    config: TreedocConfig,
    config_path: Option<PathBuf>,
}

impl RunContext {
    /// Load configuration from `config_path`, or from the sources rooted at
    /// the current directory when no path is given.
    pub fn new(config_path: Option<PathBuf>) -> Result<Self, ExportError> {
        let config = match config_path {
            Some(ref path) => ConfigLoader::load_from_file(path)?,
            None => ConfigLoader::load(Path::new("."))?,
        };
        Ok(Self {
            config,
            config_path,
        })
    }

    /// Build a context around an already resolved configuration.
    pub fn from_config(config: TreedocConfig) -> Self {
        Self {
            config,
            config_path: None,
        }
    }

    pub fn config(&self) -> &TreedocConfig {
        &self.config
    }

    pub fn config_path(&self) -> Option<&Path> {
        self.config_path.as_deref()
    }

    /// Apply the command's overrides to the loaded configuration.
    pub fn resolve(&self, command: &Commands) -> TreedocConfig {
        let mut config = self.config.clone();
        command.overrides().apply(&mut config);
        config
    }

    /// Execute a command. Streaming output (diagnostics, listed paths) goes to
    /// `console`; the returned string is the final message, possibly empty.
    pub fn execute<W: Write>(
        &self,
        command: &Commands,
        console: &mut W,
    ) -> Result<String, ExportError> {
        let config = self.resolve(command);

        match command {
            Commands::Config(_) => config
                .to_toml()
                .map_err(|e| ExportError::ConfigError(format!("Failed to render config: {}", e))),
            Commands::Export(_) => {
                validate(&config)?;
                debug!(
                    roots = ?config.roots,
                    output = %config.output.path.display(),
                    "Starting export"
                );
                let summary = run_export(&config, console)?;
                Ok(format_export_summary(&summary))
            }
            Commands::List(_) => {
                validate(&config)?;
                run_list(&config, console)?;
                Ok(String::new())
            }
        }
    }
}

fn validate(config: &TreedocConfig) -> Result<(), ExportError> {
    config.validate().map_err(|errors| {
        let error_msgs: Vec<String> = errors.iter().map(|e| e.to_string()).collect();
        ExportError::ConfigError(format!(
            "Configuration validation failed:\n{}",
            error_msgs.join("\n")
        ))
    })
}
