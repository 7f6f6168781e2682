//! CLI domain: parse, route and output only.
//! Export orchestration lives in `crate::export`.

mod output;
mod parse;
mod route;

pub use output::{format_export_summary, map_error, write_output};
pub use parse::{Cli, Commands, ExportArgs, SelectionArgs};
pub use route::RunContext;
