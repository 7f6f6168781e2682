//! Merge rules: defaults, override order, conflict handling.
//!
//! List values (roots, exclusions) are replaced, not concatenated, by a
//! higher-precedence source. Their defaults live on the serde types.

use crate::config::{DEFAULT_OUTPUT_PATH, DEFAULT_TITLE};
use crate::document::BodyStyle;
use config::Config;
use config::ConfigBuilder;
use config::ConfigError;

/// Create a Config builder with merge policy defaults applied.
pub fn builder_with_defaults() -> Result<ConfigBuilder<config::builder::DefaultState>, ConfigError>
{
    let style = BodyStyle::default();
    Config::builder()
        .set_default("output.path", DEFAULT_OUTPUT_PATH)?
        .set_default("output.title", DEFAULT_TITLE)?
        .set_default("output.font", style.font)?
        .set_default("output.font_size_pt", i64::from(style.size_pt))?
        .set_default("traversal.sorted", false)?
        .set_default("traversal.follow_symlinks", false)?
        .set_default("logging.enabled", false)
}
