//! CLI argument parsing and command dispatch.

pub mod args;
pub mod axis;
pub mod config;
pub mod currency;
pub mod date;
pub mod pages;

use std::io::Write;

use clap::CommandFactory;

pub use args::{Cli, Commands, OutputFormat};

use crate::error::Result;
use crate::storage::ResolvedConfig;

/// Run a parsed subcommand against the resolved configuration.
///
/// # Errors
///
/// Propagates the command's error.
pub fn dispatch(command: &Commands, config: &ResolvedConfig) -> Result<()> {
    match command {
        Commands::Currency(args) => currency::execute(args, config),
        Commands::Date(args) => date::execute(args, config),
        Commands::Axis(args) => axis::execute(args, config),
        Commands::Pages(args) => pages::execute(args, config),
        Commands::Config => config::execute(config),
        Commands::Completions(args) => write_completions(args.shell, &mut std::io::stdout()),
    }
}

/// Write a completion script for `shell`.
///
/// # Errors
///
/// Returns an error if the writer fails to flush.
pub fn write_completions(shell: clap_complete::Shell, out: &mut impl Write) -> Result<()> {
    let mut command = Cli::command();
    let name = command.get_name().to_string();
    clap_complete::generate(shell, &mut command, name, &mut *out);
    out.flush()?;
    Ok(())
}
