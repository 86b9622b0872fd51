//! Robot-mode output (JSON and Markdown).
//!
//! JSON output is always wrapped in a [`RobotOutput`] envelope so consumers
//! can branch on `schemaVersion` and `command`.

use std::fmt::Write as _;

use serde::Serialize;

use crate::core::models::{
    ConfigPayload, CurrencyEntry, DatePayload, PagesPayload, PaginationToken, RobotOutput, YAxis,
};
use crate::error::Result;

/// Render any `RobotOutput` as JSON.
pub fn render_json<T: Serialize>(output: &T) -> Result<String> {
    Ok(serde_json::to_string(output)?)
}

/// Render any `RobotOutput` as pretty JSON.
pub fn render_json_pretty<T: Serialize>(output: &T) -> Result<String> {
    Ok(serde_json::to_string_pretty(output)?)
}

/// Render an envelope, pretty or compact.
pub fn render_envelope<T: Serialize>(output: &RobotOutput<T>, pretty: bool) -> Result<String> {
    let mut json = if pretty {
        render_json_pretty(output)?
    } else {
        render_json(output)?
    };
    json.push('\n');
    Ok(json)
}

/// Render formatted amounts as a Markdown table.
pub fn render_currency_md(entries: &[CurrencyEntry]) -> Result<String> {
    let mut output = String::from("| Cents | Formatted |\n|------:|----------:|\n");
    for entry in entries {
        let _ = writeln!(output, "| {} | {} |", entry.amount, entry.formatted);
    }
    Ok(output)
}

/// Render formatted dates as a Markdown table.
pub fn render_dates_md(payload: &DatePayload) -> Result<String> {
    let mut output = format!("## Dates ({})\n\n", payload.locale);
    output.push_str("| Input | Formatted |\n|-------|-----------|\n");
    for entry in &payload.dates {
        let _ = writeln!(output, "| `{}` | {} |", entry.input, entry.formatted);
    }
    Ok(output)
}

/// Render axis labels as a Markdown list.
pub fn render_axis_md(axis: &YAxis) -> Result<String> {
    let mut output = String::from("## Y-Axis\n\n");
    let _ = writeln!(output, "- top_label: {}", axis.top_label);
    let _ = writeln!(output, "- labels: {}", axis.y_axis_labels.join(", "));
    Ok(output)
}

/// Render the pagination control as Markdown, current page in bold.
pub fn render_pages_md(payload: &PagesPayload) -> Result<String> {
    let tokens: Vec<String> = payload
        .tokens
        .iter()
        .map(|token| match token {
            PaginationToken::Page(page) if *page == payload.current_page => format!("**{page}**"),
            other => other.to_string(),
        })
        .collect();

    let mut output = format!(
        "## Page {} of {}\n\n",
        payload.current_page, payload.total_pages
    );
    let _ = writeln!(output, "{}", tokens.join(" "));
    Ok(output)
}

/// Render the resolved configuration as a Markdown table.
pub fn render_config_md(payload: &ConfigPayload) -> Result<String> {
    let mut output = String::from("## Configuration\n\n");
    let _ = writeln!(
        output,
        "- config_path: `{}`{}\n",
        payload.config_path,
        if payload.config_exists { "" } else { " (missing)" }
    );
    output.push_str("| Setting | Value | Source |\n|---------|-------|--------|\n");
    for entry in &payload.settings {
        let _ = writeln!(output, "| {} | {} | {} |", entry.key, entry.value, entry.source);
    }
    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::SCHEMA_VERSION;
    use crate::core::pagination::generate_pagination;

    #[test]
    fn envelope_compact_is_single_line() {
        let output = RobotOutput::new(
            "currency",
            vec![CurrencyEntry {
                amount: 100,
                formatted: "$1.00".to_string(),
            }],
        );
        let json = render_envelope(&output, false).unwrap();
        assert_eq!(json.lines().count(), 1);

        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["schemaVersion"], SCHEMA_VERSION);
        assert_eq!(value["data"][0]["formatted"], "$1.00");
    }

    #[test]
    fn envelope_pretty_spans_lines() {
        let output = RobotOutput::new("axis", vec![1, 2]);
        let json = render_envelope(&output, true).unwrap();
        assert!(json.lines().count() > 1);
    }

    #[test]
    fn pages_md_bolds_current() {
        let payload = PagesPayload {
            current_page: 2,
            total_pages: 3,
            tokens: generate_pagination(2, 3),
        };
        let md = render_pages_md(&payload).unwrap();
        assert!(md.starts_with("## Page 2 of 3"));
        assert!(md.contains("1 **2** 3"));
    }

    #[test]
    fn currency_md_has_row_per_entry() {
        let entries = vec![
            CurrencyEntry {
                amount: 0,
                formatted: "$0.00".to_string(),
            },
            CurrencyEntry {
                amount: 5,
                formatted: "$0.05".to_string(),
            },
        ];
        let md = render_currency_md(&entries).unwrap();
        assert!(md.contains("| 0 | $0.00 |"));
        assert!(md.contains("| 5 | $0.05 |"));
    }

    #[test]
    fn axis_md_lists_labels() {
        let axis = YAxis {
            y_axis_labels: vec!["$1K".to_string(), "$0K".to_string()],
            top_label: 1000,
        };
        let md = render_axis_md(&axis).unwrap();
        assert!(md.contains("- top_label: 1000"));
        assert!(md.contains("- labels: $1K, $0K"));
    }
}
