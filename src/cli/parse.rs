//! CLI parse: clap types for treedoc. No behavior; definitions only.

use crate::config::ConfigOverrides;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Treedoc CLI - export source trees into a single Word document
#[derive(Parser, Debug)]
#[command(name = "treedoc", version)]
#[command(about = "Export source trees into a single Word document")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Configuration file path (replaces global and workspace config files)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable debug logging to stderr (default: off)
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Log level (trace, debug, info, warn, error, off)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Log format (json, text)
    #[arg(long, global = true)]
    pub log_format: Option<String>,

    /// Log output (stdout, stderr, file, file+stderr)
    #[arg(long, global = true)]
    pub log_output: Option<String>,

    /// Log file path (if output includes "file")
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Walk the roots and write the output document
    Export(ExportArgs),
    /// Print the files an export would include, without writing anything
    List(SelectionArgs),
    /// Print the effective configuration as TOML
    Config(ExportArgs),
}

/// Which files to include
#[derive(Args, Debug, Clone, Default)]
pub struct SelectionArgs {
    /// Root directories to export (replace configured roots)
    pub roots: Vec<PathBuf>,

    /// Additional directory name to prune (repeatable)
    #[arg(long = "exclude-dir", value_name = "NAME")]
    pub exclude_dirs: Vec<String>,

    /// Additional file name to skip (repeatable)
    #[arg(long = "exclude-file", value_name = "NAME")]
    pub exclude_files: Vec<String>,

    /// Sort entries by name within each directory
    #[arg(long)]
    pub sorted: bool,
}

/// File selection plus output document settings
#[derive(Args, Debug, Clone, Default)]
pub struct ExportArgs {
    #[command(flatten)]
    pub selection: SelectionArgs,

    /// Output document path
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Document title (empty to omit)
    #[arg(long)]
    pub title: Option<String>,
}

impl SelectionArgs {
    pub fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            roots: self.roots.clone(),
            exclude_dirs: self.exclude_dirs.clone(),
            exclude_files: self.exclude_files.clone(),
            sorted: self.sorted,
            ..ConfigOverrides::default()
        }
    }
}

impl ExportArgs {
    pub fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            output: self.output.clone(),
            title: self.title.clone(),
            ..self.selection.overrides()
        }
    }
}

impl Commands {
    /// Config overrides carried by this command's arguments.
    pub fn overrides(&self) -> ConfigOverrides {
        match self {
            Commands::Export(args) | Commands::Config(args) => args.overrides(),
            Commands::List(args) => args.overrides(),
        }
    }
}
