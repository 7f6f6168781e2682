//! Environment source: TREEDOC_* variables, `__` separating nested keys.
//!
//! `TREEDOC_OUTPUT__PATH=out.docx` sets `output.path`; list keys take
//! comma-separated values (`TREEDOC_ROOTS=backend,frontend`).

use config::builder::DefaultState;
use config::ConfigBuilder;
use config::Environment;

const LIST_KEYS: &[&str] = &["roots", "exclusions.dirs", "exclusions.files"];

pub fn add_to_builder(builder: ConfigBuilder<DefaultState>) -> ConfigBuilder<DefaultState> {
    let mut environment = Environment::with_prefix("TREEDOC")
        .prefix_separator("_")
        .separator("__")
        .list_separator(",")
        .try_parsing(true);
    for key in LIST_KEYS {
        environment = environment.with_list_parse_key(key);
    }
    builder.add_source(environment)
}
