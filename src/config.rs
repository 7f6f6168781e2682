//! Configuration System
//!
//! Layered configuration for an export run: built-in defaults, the global
//! config file, the workspace `treedoc.toml`, `TREEDOC_*` environment
//! variables and finally command-line overrides. Tests included.

use crate::document::BodyStyle;
use crate::ignore::ExclusionConfig;
use crate::logging::LoggingConfig;
use crate::tree::WalkerConfig;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[cfg(test)]
use std::sync::Mutex;

mod facade;
mod merge;
mod sources;

pub use facade::ConfigLoader;
pub use sources::workspace_file::WORKSPACE_CONFIG_FILE;

/// Root configuration structure
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TreedocConfig {
    /// Directories to export, processed in order
    #[serde(default)]
    pub roots: Vec<PathBuf>,

    /// Directory and file names skipped during traversal
    #[serde(default)]
    pub exclusions: ExclusionConfig,

    /// Traversal options
    #[serde(default)]
    pub traversal: WalkerConfig,

    /// Output document settings
    #[serde(default)]
    pub output: OutputConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Output document settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Output document path, relative to the working directory
    #[serde(default = "default_output_path")]
    pub path: PathBuf,

    /// Level-1 title heading; empty disables it
    #[serde(default = "default_title")]
    pub title: String,

    /// Monospaced font family for file contents
    #[serde(default = "default_font")]
    pub font: String,

    /// Font size for file contents, in points
    #[serde(default = "default_font_size_pt")]
    pub font_size_pt: u32,
}

pub(crate) const DEFAULT_OUTPUT_PATH: &str = "extractor.docx";
pub(crate) const DEFAULT_TITLE: &str = "Code export";

fn default_output_path() -> PathBuf {
    PathBuf::from(DEFAULT_OUTPUT_PATH)
}

fn default_title() -> String {
    DEFAULT_TITLE.to_string()
}

fn default_font() -> String {
    BodyStyle::default().font
}

fn default_font_size_pt() -> u32 {
    BodyStyle::default().size_pt
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            path: default_output_path(),
            title: default_title(),
            font: default_font(),
            font_size_pt: default_font_size_pt(),
        }
    }
}

impl OutputConfig {
    pub const MAX_FONT_SIZE_PT: u32 = 800;

    /// Validate output settings
    pub fn validate(&self) -> Result<(), String> {
        if self.path.as_os_str().is_empty() {
            return Err("Output path cannot be empty".to_string());
        }
        if self.font.trim().is_empty() {
            return Err("Font cannot be empty".to_string());
        }
        if self.font_size_pt == 0 || self.font_size_pt > Self::MAX_FONT_SIZE_PT {
            return Err(format!(
                "Font size {} pt is out of range (1-{})",
                self.font_size_pt,
                Self::MAX_FONT_SIZE_PT
            ));
        }
        Ok(())
    }

    pub fn body_style(&self) -> BodyStyle {
        BodyStyle {
            font: self.font.clone(),
            size_pt: self.font_size_pt,
        }
    }

    pub fn title(&self) -> Option<String> {
        if self.title.is_empty() {
            None
        } else {
            Some(self.title.clone())
        }
    }
}

/// Configuration validation errors
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    Roots(String),
    Exclusions(String),
    Output(String),
    Logging(String),
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationError::Roots(msg) => write!(f, "Roots: {}", msg),
            ValidationError::Exclusions(msg) => write!(f, "Exclusions: {}", msg),
            ValidationError::Output(msg) => write!(f, "Output: {}", msg),
            ValidationError::Logging(msg) => write!(f, "Logging: {}", msg),
        }
    }
}

impl std::error::Error for ValidationError {}

impl TreedocConfig {
    /// Validate the entire configuration, collecting every problem
    pub fn validate(&self) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();

        if self.roots.is_empty() {
            errors.push(ValidationError::Roots(
                "No root directories configured".to_string(),
            ));
        }
        if self.roots.iter().any(|r| r.as_os_str().is_empty()) {
            errors.push(ValidationError::Roots("Root path cannot be empty".to_string()));
        }
        if let Err(e) = self.exclusions.validate() {
            errors.push(ValidationError::Exclusions(e));
        }
        if let Err(e) = self.output.validate() {
            errors.push(ValidationError::Output(e));
        }
        if let Err(e) = self.logging.validate() {
            errors.push(ValidationError::Logging(e));
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    /// Render the configuration as TOML, e.g. for `treedoc config`.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}

/// Command-line overrides applied on top of the loaded configuration
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigOverrides {
    /// Replace the configured roots when non-empty
    pub roots: Vec<PathBuf>,
    pub output: Option<PathBuf>,
    pub title: Option<String>,
    /// Appended to the configured directory exclusions
    pub exclude_dirs: Vec<String>,
    /// Appended to the configured file exclusions
    pub exclude_files: Vec<String>,
    pub sorted: bool,
}

impl ConfigOverrides {
    pub fn apply(&self, config: &mut TreedocConfig) {
        if !self.roots.is_empty() {
            config.roots = self.roots.clone();
        }
        if let Some(ref output) = self.output {
            config.output.path = output.clone();
        }
        if let Some(ref title) = self.title {
            config.output.title = title.clone();
        }
        for dir in &self.exclude_dirs {
            if !config.exclusions.dirs.contains(dir) {
                config.exclusions.dirs.push(dir.clone());
            }
        }
        for file in &self.exclude_files {
            if !config.exclusions.files.contains(file) {
                config.exclusions.files.push(file.clone());
            }
        }
        if self.sorted {
            config.traversal.sorted = true;
        }
    }
}

// Serializes tests that touch process environment (HOME, XDG_*, TREEDOC_*).
#[cfg(test)]
pub(crate) static ENV_MUTEX: Mutex<()> = Mutex::new(());
