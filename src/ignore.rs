//! Exclusion set for the walker.
//!
//! Directory names are pruned before descent, so nothing below an excluded
//! directory is ever listed. File names are skipped wherever they occur.
//! Both match a single path component exactly.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::ffi::{OsStr, OsString};

/// Built-in directory exclusions: dependency cache, version control, build output.
pub const BUILTIN_EXCLUDED_DIRS: &[&str] = &["node_modules", ".git", "dist"];

/// Built-in file exclusions: the package manager's lockfile.
pub const BUILTIN_EXCLUDED_FILES: &[&str] = &["package-lock.json"];

/// Exclusion configuration as it appears in config files.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExclusionConfig {
    /// Directory names never descended into
    #[serde(default = "default_excluded_dirs")]
    pub dirs: Vec<String>,

    /// File names never read
    #[serde(default = "default_excluded_files")]
    pub files: Vec<String>,
}

fn default_excluded_dirs() -> Vec<String> {
    BUILTIN_EXCLUDED_DIRS.iter().map(|s| s.to_string()).collect()
}

fn default_excluded_files() -> Vec<String> {
    BUILTIN_EXCLUDED_FILES.iter().map(|s| s.to_string()).collect()
}

impl Default for ExclusionConfig {
    fn default() -> Self {
        Self {
            dirs: default_excluded_dirs(),
            files: default_excluded_files(),
        }
    }
}

impl ExclusionConfig {
    /// Validate exclusion names: each must be a single, non-empty path component.
    pub fn validate(&self) -> Result<(), String> {
        for (kind, names) in [("directory", &self.dirs), ("file", &self.files)] {
            for name in names {
                if name.is_empty() {
                    return Err(format!("Excluded {} name cannot be empty", kind));
                }
                if name.contains('/') || name.contains('\\') || name == "." || name == ".." {
                    return Err(format!(
                        "Excluded {} name '{}' must be a single path component",
                        kind, name
                    ));
                }
            }
        }
        Ok(())
    }
}

/// Resolved exclusion set used during traversal.
#[derive(Debug, Clone, Default)]
pub struct ExclusionSet {
    dirs: BTreeSet<OsString>,
    files: BTreeSet<OsString>,
}

impl ExclusionSet {
    pub fn new<D, F>(dirs: D, files: F) -> Self
    where
        D: IntoIterator,
        D::Item: Into<OsString>,
        F: IntoIterator,
        F::Item: Into<OsString>,
    {
        Self {
            dirs: dirs.into_iter().map(Into::into).collect(),
            files: files.into_iter().map(Into::into).collect(),
        }
    }

    /// The built-in set: `node_modules`, `.git`, `dist` and `package-lock.json`.
    pub fn builtin() -> Self {
        Self::from(&ExclusionConfig::default())
    }

    /// True if a directory with this name must be pruned.
    pub fn excludes_dir(&self, name: &OsStr) -> bool {
        self.dirs.contains(name)
    }

    /// True if a file with this name must be skipped.
    pub fn excludes_file(&self, name: &OsStr) -> bool {
        self.files.contains(name)
    }
}

impl From<&ExclusionConfig> for ExclusionSet {
    fn from(config: &ExclusionConfig) -> Self {
        Self::new(config.dirs.iter().cloned(), config.files.iter().cloned())
    }
}
