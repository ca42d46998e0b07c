//! Appstate CLI Binary
//!
//! Command-line interface for an application's remote key-value state store.

use appstate::cli::{Cli, Console, RunContext, EXIT_SUCCESS};
use appstate::config::ConfigLoader;
use appstate::error::ApiError;
use appstate::logging::{init_logging, LoggingConfig};
use clap::Parser;
use std::process;
use tracing::{debug, error};

fn main() {
    let cli = Cli::parse();

    // Build logging config from CLI args, env vars, and config file
    let logging_config = build_logging_config(&cli);

    if let Err(e) = init_logging(Some(&logging_config)) {
        eprintln!("Failed to initialize logging: {}", e);
        process::exit(1);
    }

    debug!(command = ?cli.command, json = cli.json, region = ?cli.region, "appstate starting");

    match run(&cli) {
        Ok(()) => {
            debug!("Command completed successfully");
            process::exit(EXIT_SUCCESS);
        }
        Err(e) => {
            if !e.is_cancelled() {
                error!(command = cli.command.name(), "Command failed: {}", e);
            }
            let code = Console::stdio(cli.json).report_error(&e);
            process::exit(code);
        }
    }
}

fn run(cli: &Cli) -> Result<(), ApiError> {
    let context = RunContext::new(cli, Console::stdio(cli.json))?;
    context.execute(&cli.command)
}

/// Build logging configuration from CLI args and the config file.
/// Precedence: CLI flags override config file override defaults.
fn build_logging_config(cli: &Cli) -> LoggingConfig {
    let mut config = match &cli.config {
        Some(path) => ConfigLoader::load_from_file(path)
            .ok()
            .map(|c| c.logging)
            .unwrap_or_default(),
        None => ConfigLoader::load(&cli.workspace)
            .ok()
            .map(|c| c.logging)
            .unwrap_or_default(),
    };

    if cli.verbose {
        config.enabled = true;
        config.level = "debug".to_string();
    }
    if let Some(level) = &cli.log_level {
        config.enabled = true;
        config.level = level.clone();
    }
    if let Some(format) = &cli.log_format {
        config.format = format.clone();
    }
    if let Some(output) = &cli.log_output {
        config.enabled = true;
        config.output = output.clone();
    }
    if let Some(file) = &cli.log_file {
        config.file = Some(file.clone());
    }
    if cli.quiet {
        config.enabled = false;
    }

    config
}
