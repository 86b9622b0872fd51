//! Currency command implementation.

use crate::cli::args::CurrencyArgs;
use crate::core::models::{CurrencyEntry, RobotOutput};
use crate::error::Result;
use crate::render;
use crate::storage::ResolvedConfig;
use crate::util::format_currency;

/// Format every amount.
#[must_use]
pub fn build(amounts: &[i64]) -> Vec<CurrencyEntry> {
    amounts
        .iter()
        .map(|&amount| CurrencyEntry {
            amount,
            formatted: format_currency(amount),
        })
        .collect()
}

/// Execute the currency command.
pub fn execute(args: &CurrencyArgs, config: &ResolvedConfig) -> Result<()> {
    tracing::debug!(count = args.amounts.len(), "Formatting amounts");

    let output = RobotOutput::new("currency", build(&args.amounts));
    let rendered =
        render::render_currency(&output, config.format, config.pretty, config.no_color)?;
    print!("{rendered}");
    Ok(())
}
