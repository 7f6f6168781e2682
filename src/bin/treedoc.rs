//! Treedoc CLI Binary
//!
//! Command-line interface for exporting source trees into a Word document.

use clap::Parser;
use owo_colors::OwoColorize;
use std::process;
use treedoc::cli::{map_error, write_output, Cli, RunContext};
use treedoc::logging::{init_logging, LoggingConfig};
use tracing::{error, info};

fn main() {
    let cli = Cli::parse();

    let context = match RunContext::new(cli.config.clone()) {
        Ok(ctx) => ctx,
        Err(e) => fail(&map_error(&e)),
    };

    // Initialize logging once the config file's [logging] section is known
    let logging_config = build_logging_config(&cli, &context.config().logging);
    if let Err(e) = init_logging(&logging_config) {
        fail(&format!("Failed to initialize logging: {}", e));
    }

    info!(config = ?context.config_path(), "Treedoc CLI starting");

    let stdout = std::io::stdout();
    let mut console = stdout.lock();
    match context.execute(&cli.command, &mut console) {
        Ok(output) => {
            if let Err(e) = write_output(&mut console, &output) {
                error!("Failed to write command output: {}", e);
                drop(console);
                fail(&map_error(&e));
            }
            info!("Command completed successfully");
        }
        Err(e) => {
            error!("Command failed: {}", e);
            drop(console);
            fail(&map_error(&e));
        }
    }
}

fn fail(message: &str) -> ! {
    eprintln!("{} {}", "Error:".red().bold(), message);
    process::exit(1);
}

/// Build logging configuration from the config file and CLI flags.
/// Precedence: CLI flags override config file override defaults.
fn build_logging_config(cli: &Cli, from_config: &LoggingConfig) -> LoggingConfig {
    let mut config = from_config.clone();

    if cli.verbose {
        config.enabled = true;
        config.level = "debug".to_string();
    }
    if let Some(ref level) = cli.log_level {
        config.enabled = true;
        config.level = level.clone();
    }
    if let Some(ref format) = cli.log_format {
        config.format = format.clone();
    }
    if let Some(ref output) = cli.log_output {
        config.enabled = true;
        config.output = output.clone();
    }
    if let Some(ref file) = cli.log_file {
        config.file = Some(file.clone());
    }

    config
}
