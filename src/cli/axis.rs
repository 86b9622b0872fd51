//! Axis command implementation.
//!
//! Reads a JSON array of revenue samples from a file or stdin.

use std::io::Read;
use std::path::Path;

use crate::cli::args::AxisArgs;
use crate::core::chart::generate_y_axis;
use crate::core::models::{RevenueSample, RobotOutput};
use crate::error::{DashfmtError, Result};
use crate::render;
use crate::storage::ResolvedConfig;

/// Parse revenue samples from JSON text.
///
/// # Errors
///
/// Returns [`DashfmtError::InvalidRevenueInput`] if the text is not a JSON
/// array of samples.
pub fn parse_revenue(text: &str) -> Result<Vec<RevenueSample>> {
    serde_json::from_str(text).map_err(|e| DashfmtError::InvalidRevenueInput(e.to_string()))
}

/// Read the input text from `path`, or stdin for `None` and `-`.
fn read_input(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) if path != Path::new("-") => {
            tracing::debug!(?path, "Reading revenue file");
            Ok(std::fs::read_to_string(path)?)
        }
        _ => {
            tracing::debug!("Reading revenue from stdin");
            let mut text = String::new();
            std::io::stdin().read_to_string(&mut text)?;
            Ok(text)
        }
    }
}

/// Execute the axis command.
pub fn execute(args: &AxisArgs, config: &ResolvedConfig) -> Result<()> {
    let text = read_input(args.input.as_deref())?;
    let revenue = parse_revenue(&text)?;
    let axis = generate_y_axis(&revenue)?;

    let output = RobotOutput::new("axis", axis);
    let rendered = render::render_axis(&output, config.format, config.pretty, config.no_color)?;
    print!("{rendered}");
    Ok(())
}
