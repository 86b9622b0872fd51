//! Error rendering for dashfmt.
//!
//! Human mode prints a short text block with the error code and a fix
//! command. JSON and Markdown modes print a structured error object.

use colored::Colorize;
use serde::Serialize;

use crate::cli::args::OutputFormat;
use crate::error::{DashfmtError, FixSuggestion};

/// Render an error for the given output format.
#[must_use]
pub fn render_error(error: &DashfmtError, format: OutputFormat, no_color: bool) -> String {
    render_error_full(error, format, no_color, false)
}

/// Render an error with explicit control over JSON pretty-printing.
#[must_use]
pub fn render_error_full(
    error: &DashfmtError,
    format: OutputFormat,
    no_color: bool,
    pretty: bool,
) -> String {
    match format {
        OutputFormat::Json => render_error_json(error, pretty),
        OutputFormat::Md => render_error_json(error, true),
        OutputFormat::Human if no_color || !crate::util::env::stderr_is_tty() => {
            render_simple(error)
        }
        OutputFormat::Human => render_colored(error),
    }
}

/// Render error as structured JSON for machine consumption.
#[must_use]
pub fn render_error_json(error: &DashfmtError, pretty: bool) -> String {
    let error_json = ErrorJson::from_error(error);
    let rendered = if pretty {
        serde_json::to_string_pretty(&error_json)
    } else {
        serde_json::to_string(&error_json)
    };
    rendered.unwrap_or_else(|_| render_simple(error))
}

/// Render error as plain text (no ANSI codes).
fn render_simple(error: &DashfmtError) -> String {
    let mut lines = vec![format!("Error [{}]: {error}", error.error_code())];

    if let Some(cmd) = first_command(error.fix_suggestion().as_ref()) {
        lines.push(format!("Fix: {cmd}"));
    }

    lines.join("\n")
}

/// Render error with terminal colors, including the context line.
fn render_colored(error: &DashfmtError) -> String {
    let suggestion = error.fix_suggestion();

    let mut lines = vec![format!(
        "{} {}",
        format!("{}: {error}", error.category()).red().bold(),
        format!("[{}]", error.error_code()).dimmed()
    )];

    if let Some(suggestion) = &suggestion {
        if let Some(cmd) = first_command(Some(suggestion)) {
            lines.push(format!("  {} {}", "Fix:".bold(), cmd.cyan()));
        }
        if !suggestion.context.is_empty() {
            lines.push(format!("  {}", suggestion.context.dimmed()));
        }
    }

    lines.join("\n")
}

fn first_command(suggestion: Option<&FixSuggestion>) -> Option<&str> {
    suggestion?
        .commands
        .iter()
        .map(String::as_str)
        .find(|cmd| !cmd.starts_with('#'))
}

/// JSON representation of an error.
#[derive(Serialize)]
struct ErrorJson {
    error_code: &'static str,
    category: String,
    message: String,
    exit_code: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    suggestion: Option<SuggestionJson>,
}

#[derive(Serialize)]
struct SuggestionJson {
    commands: Vec<String>,
    context: String,
}

impl ErrorJson {
    fn from_error(error: &DashfmtError) -> Self {
        Self {
            error_code: error.error_code(),
            category: error.category().to_string(),
            message: error.to_string(),
            exit_code: error.exit_code().into(),
            suggestion: error.fix_suggestion().map(|s| SuggestionJson {
                commands: s.commands,
                context: s.context,
            }),
        }
    }
}
