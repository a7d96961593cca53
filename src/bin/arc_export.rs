//! arc-export CLI Binary
//!
//! Command-line interface for exporting pinned tabs from the Arc browser
//! sidebar.

use arc_export::logging;
use arc_export::tooling::cli::{Cli, CliContext};
use clap::Parser;
use std::process;

fn main() {
    let cli = Cli::parse();

    // Create CLI context
    let context = match CliContext::new(cli.source.clone(), cli.config.clone()) {
        Ok(ctx) => ctx,
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };

    // CLI flags override the configured logging section
    let mut logging_config = context.config().logging.clone();
    if let Some(level) = cli.log_level.clone() {
        logging_config.level = level;
    }
    if let Some(format) = cli.log_format.clone() {
        logging_config.format = format;
    }
    if let Err(e) = logging::init_logging(Some(&logging_config)) {
        eprintln!("Error initializing logging: {}", e);
        process::exit(1);
    }

    // Execute command
    match context.execute(&cli.command) {
        Ok(output) => {
            println!("{}", output);
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    }
}
