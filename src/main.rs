//! dashfmt - Dashboard presentation formatting
//!
//! CLI entry point.

#![forbid(unsafe_code)]
#![warn(clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

use clap::Parser;
use std::process::ExitCode;

use dashfmt::cli::{Cli, OutputFormat};
use dashfmt::core::logging::{self, LoggingConfig};
use dashfmt::storage::ResolvedConfig;

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Config errors render with the format given on the command line

    let mut config = match ResolvedConfig::resolve(&cli) {
        Ok(config) => config,
        Err(e) => {
            let format = if cli.json {
                OutputFormat::Json
            } else {
                cli.format.unwrap_or_default()
            };
            let output =
                dashfmt::render::error::render_error_full(&e, format, cli.no_color, cli.pretty);
            eprintln!("{output}");
            return e.exit_code().into();
        }
    };

    logging::init(&LoggingConfig::for_level(config.log_level, cli.json_output));

    config.no_color = !dashfmt::util::env::should_use_color(config.no_color);
    tracing::debug!(path = %config.config_path.display(), "Configuration resolved");

    let Some(command) = cli.command else {
        print_quickstart();
        return dashfmt::ExitCode::Success.into();
    };

    match dashfmt::cli::dispatch(&command, &config) {
        Ok(()) => dashfmt::ExitCode::Success.into(),
        Err(e) => {
            tracing::error!("{}", e);
            let output = dashfmt::render::error::render_error_full(
                &e,
                config.format,
                config.no_color,
                config.pretty,
            );
            eprintln!("{output}");
            e.exit_code().into()
        }
    }
}

/// Print quickstart help when no command is given.
fn print_quickstart() {
    println!(
        r#"dashfmt - Dashboard presentation formatting

USAGE:
    dashfmt [OPTIONS] <COMMAND>

COMMANDS:
    currency     Format amounts given in cents as US dollars
    date         Format dates for display in a locale
    axis         Compute y-axis labels for a revenue series
    pages        Show the pagination control for a page
    config       Show the resolved configuration

QUICK START:
    dashfmt currency 123456                # $1,234.56
    dashfmt date 2023-01-15 --locale en-GB # 15 Jan 2023
    dashfmt axis --input revenue.json      # $5K ... $0K
    dashfmt pages 5 10                     # 1 ... 4 [5] 6 ... 10

ROBOT MODE (for AI agents):
    dashfmt pages 5 10 --json     # JSON output
    dashfmt currency 500 --format md

For more help: dashfmt --help
"#
    );

    println!("Version: {}", env!("CARGO_PKG_VERSION"));
}
