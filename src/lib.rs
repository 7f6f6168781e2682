//! Treedoc: export source trees into a single Word document
//!
//! Walks an ordered list of root directories, pruning excluded directories
//! before descent, reads every remaining file as lossily decoded UTF-8 and
//! appends it as a heading plus a monospaced body to one `.docx` document.

pub mod cli;
pub mod config;
pub mod document;
pub mod error;
pub mod export;
pub mod ignore;
pub mod logging;
pub mod tree;
