//! Source tree traversal
//!
//! Enumerates the files under the configured roots, pruning excluded
//! directories before descent.

pub mod walker;

pub use walker::{Walker, WalkerConfig};
