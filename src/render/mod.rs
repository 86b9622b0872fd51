//! Output rendering for human and robot modes.

pub mod error;
pub mod human;
pub mod robot;

use crate::cli::args::OutputFormat;
use crate::core::models::{
    ConfigPayload, CurrencyEntry, DatePayload, PagesPayload, RobotOutput, YAxis,
};
use crate::error::Result;

/// Render currency results.
pub fn render_currency(
    output: &RobotOutput<Vec<CurrencyEntry>>,
    format: OutputFormat,
    pretty: bool,
    no_color: bool,
) -> Result<String> {
    match format {
        OutputFormat::Human => human::render_currency(&output.data, no_color),
        OutputFormat::Json => robot::render_envelope(output, pretty),
        OutputFormat::Md => robot::render_currency_md(&output.data),
    }
}

/// Render date results.
pub fn render_dates(
    output: &RobotOutput<DatePayload>,
    format: OutputFormat,
    pretty: bool,
    no_color: bool,
) -> Result<String> {
    match format {
        OutputFormat::Human => human::render_dates(&output.data, no_color),
        OutputFormat::Json => robot::render_envelope(output, pretty),
        OutputFormat::Md => robot::render_dates_md(&output.data),
    }
}

/// Render a y-axis layout.
pub fn render_axis(
    output: &RobotOutput<YAxis>,
    format: OutputFormat,
    pretty: bool,
    no_color: bool,
) -> Result<String> {
    match format {
        OutputFormat::Human => human::render_axis(&output.data, no_color),
        OutputFormat::Json => robot::render_envelope(output, pretty),
        OutputFormat::Md => robot::render_axis_md(&output.data),
    }
}

/// Render a pagination control.
pub fn render_pages(
    output: &RobotOutput<PagesPayload>,
    format: OutputFormat,
    pretty: bool,
    no_color: bool,
) -> Result<String> {
    match format {
        OutputFormat::Human => human::render_pages(&output.data, no_color),
        OutputFormat::Json => robot::render_envelope(output, pretty),
        OutputFormat::Md => robot::render_pages_md(&output.data),
    }
}

/// Render the configuration report.
pub fn render_config(
    output: &RobotOutput<ConfigPayload>,
    format: OutputFormat,
    pretty: bool,
    no_color: bool,
) -> Result<String> {
    match format {
        OutputFormat::Human => human::render_config(&output.data, no_color),
        OutputFormat::Json => robot::render_envelope(output, pretty),
        OutputFormat::Md => robot::render_config_md(&output.data),
    }
}
