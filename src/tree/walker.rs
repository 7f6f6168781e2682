//! Filesystem walker for enumerating the files to export

use crate::error::WalkError;
use crate::ignore::ExclusionSet;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use walkdir::{DirEntry, WalkDir};

/// Traversal configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WalkerConfig {
    /// Whether to follow symbolic links (default: false)
    #[serde(default)]
    pub follow_symlinks: bool,
    /// Sort entries by file name within each directory (default: filesystem order)
    #[serde(default)]
    pub sorted: bool,
    /// Maximum depth to traverse (None = unlimited)
    #[serde(default)]
    pub max_depth: Option<usize>,
}

/// Filesystem walker over an ordered list of roots
pub struct Walker {
    roots: Vec<PathBuf>,
    exclusions: ExclusionSet,
    config: WalkerConfig,
}

impl Walker {
    /// Create a walker with the built-in exclusions and default configuration
    pub fn new(roots: Vec<PathBuf>) -> Self {
        Self::with_config(roots, ExclusionSet::builtin(), WalkerConfig::default())
    }

    /// Create a walker with custom exclusions and configuration
    pub fn with_config(
        roots: Vec<PathBuf>,
        exclusions: ExclusionSet,
        config: WalkerConfig,
    ) -> Self {
        Self {
            roots,
            exclusions,
            config,
        }
    }

    pub fn roots(&self) -> &[PathBuf] {
        &self.roots
    }

    /// Lazily enumerate every included file, roots in order.
    ///
    /// Excluded directories are pruned before descent. A traversal error is
    /// yielded as `Err` and callers are expected to stop on it.
    pub fn files(&self) -> impl Iterator<Item = Result<PathBuf, WalkError>> + '_ {
        self.roots.iter().flat_map(move |root| self.walk_root(root))
    }

    fn walk_root<'a>(
        &'a self,
        root: &'a Path,
    ) -> impl Iterator<Item = Result<PathBuf, WalkError>> + 'a {
        let mut walker = WalkDir::new(root).follow_links(self.config.follow_symlinks);
        if let Some(depth) = self.config.max_depth {
            walker = walker.max_depth(depth);
        }
        if self.config.sorted {
            walker = walker.sort_by_file_name();
        }

        walker
            .into_iter()
            .filter_entry(move |entry| !self.is_pruned(entry))
            .filter_map(move |entry| match entry {
                Ok(entry) if self.is_included_file(&entry) => Some(Ok(entry.into_path())),
                Ok(_) => None,
                Err(source) => Some(Err(WalkError::Traversal {
                    root: root.to_path_buf(),
                    source,
                })),
            })
    }

    /// The root itself is always walked, whatever its name.
    fn is_pruned(&self, entry: &DirEntry) -> bool {
        entry.depth() > 0
            && entry.file_type().is_dir()
            && self.exclusions.excludes_dir(entry.file_name())
    }

    /// Symlinks count as files unless they resolve to a directory. A
    /// dangling link is yielded so its read failure gets reported.
    fn is_included_file(&self, entry: &DirEntry) -> bool {
        let is_file = entry.file_type().is_file()
            || (entry.path_is_symlink() && !entry.path().is_dir());
        is_file && !self.exclusions.excludes_file(entry.file_name())
    }
}
