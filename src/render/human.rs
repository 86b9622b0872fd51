//! Human-readable output using `colored`.
//!
//! Output is plain enough to pipe: one value per line, color only when
//! enabled.

use colored::{ColoredString, Colorize};

use crate::core::models::{
    ConfigPayload, CurrencyEntry, DatePayload, PagesPayload, PaginationToken, YAxis,
};
use crate::error::Result;

/// Apply `style` unless colors are disabled.
fn paint(text: &str, no_color: bool, style: impl Fn(&str) -> ColoredString) -> String {
    if no_color {
        text.to_string()
    } else {
        style(text).to_string()
    }
}

/// Render formatted amounts, one per line.
pub fn render_currency(entries: &[CurrencyEntry], no_color: bool) -> Result<String> {
    let mut output = String::new();

    for entry in entries {
        let line = if entry.amount < 0 {
            paint(&entry.formatted, no_color, |s| s.red())
        } else {
            paint(&entry.formatted, no_color, |s| s.green())
        };
        output.push_str(&line);
        output.push('\n');
    }

    Ok(output)
}

/// Render formatted dates, one per line.
pub fn render_dates(payload: &DatePayload, no_color: bool) -> Result<String> {
    let mut output = String::new();

    for entry in &payload.dates {
        let line = if entry.valid {
            entry.formatted.clone()
        } else {
            paint(&entry.formatted, no_color, |s| s.yellow())
        };
        output.push_str(&line);
        output.push('\n');
    }

    Ok(output)
}

/// Render axis labels from the top gridline down.
pub fn render_axis(axis: &YAxis, no_color: bool) -> Result<String> {
    let mut output = String::new();

    for (i, label) in axis.y_axis_labels.iter().enumerate() {
        let line = if i == 0 {
            paint(label, no_color, |s| s.bold())
        } else {
            label.clone()
        };
        output.push_str(&line);
        output.push('\n');
    }

    Ok(output)
}

/// Render the pagination control on one line, current page in brackets.
pub fn render_pages(payload: &PagesPayload, no_color: bool) -> Result<String> {
    let tokens: Vec<String> = payload
        .tokens
        .iter()
        .map(|token| match token {
            PaginationToken::Page(page) if *page == payload.current_page => {
                paint(&format!("[{page}]"), no_color, |s| s.bold().cyan())
            }
            PaginationToken::Page(page) => page.to_string(),
            PaginationToken::Ellipsis => paint(&token.to_string(), no_color, |s| s.dimmed()),
        })
        .collect();

    Ok(format!("{}\n", tokens.join(" ")))
}

/// Render the resolved configuration as an aligned table.
pub fn render_config(payload: &ConfigPayload, no_color: bool) -> Result<String> {
    let mut output = String::new();

    let exists = if payload.config_exists {
        paint("found", no_color, |s| s.green())
    } else {
        paint("not found, using defaults", no_color, |s| s.dimmed())
    };
    output.push_str(&format!("Config file: {} ({exists})\n\n", payload.config_path));

    let key_width = payload
        .settings
        .iter()
        .map(|entry| entry.key.len())
        .max()
        .unwrap_or(0);
    let value_width = payload
        .settings
        .iter()
        .map(|entry| entry.value.len())
        .max()
        .unwrap_or(0);

    for entry in &payload.settings {
        let key = paint(
            &format!("{:<key_width$}", entry.key),
            no_color,
            |s| s.bold(),
        );
        let source = paint(&entry.source, no_color, |s| s.dimmed());
        output.push_str(&format!(
            "{key}  {:<value_width$}  {source}\n",
            entry.value
        ));
    }

    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::{ConfigEntry, DateEntry};

    #[test]
    fn currency_lines_without_color() {
        let entries = vec![
            CurrencyEntry {
                amount: 123_456,
                formatted: "$1,234.56".to_string(),
            },
            CurrencyEntry {
                amount: -500,
                formatted: "-$5.00".to_string(),
            },
        ];
        let output = render_currency(&entries, true).unwrap();
        assert_eq!(output, "$1,234.56\n-$5.00\n");
    }

    #[test]
    fn dates_keep_invalid_sentinel() {
        let payload = DatePayload {
            locale: "en-US".to_string(),
            dates: vec![
                DateEntry {
                    input: "2023-01-15".to_string(),
                    formatted: "Jan 15, 2023".to_string(),
                    valid: true,
                },
                DateEntry {
                    input: "soon".to_string(),
                    formatted: "Invalid Date".to_string(),
                    valid: false,
                },
            ],
        };
        let output = render_dates(&payload, true).unwrap();
        assert_eq!(output, "Jan 15, 2023\nInvalid Date\n");
    }

    #[test]
    fn axis_lists_labels_top_down() {
        let axis = YAxis {
            y_axis_labels: vec!["$2K".to_string(), "$1K".to_string(), "$0K".to_string()],
            top_label: 2000,
        };
        assert_eq!(render_axis(&axis, true).unwrap(), "$2K\n$1K\n$0K\n");
    }

    #[test]
    fn pages_bracket_current_page() {
        let payload = PagesPayload {
            current_page: 5,
            total_pages: 10,
            tokens: crate::core::pagination::generate_pagination(5, 10),
        };
        let output = render_pages(&payload, true).unwrap();
        assert_eq!(output, "1 ... 4 [5] 6 ... 10\n");
    }

    #[test]
    fn config_table_aligns_columns() {
        let payload = ConfigPayload {
            config_path: "/tmp/config.toml".to_string(),
            config_exists: false,
            settings: vec![
                ConfigEntry {
                    key: "locale".to_string(),
                    value: "en-GB".to_string(),
                    source: "CLI flag".to_string(),
                },
                ConfigEntry {
                    key: "format".to_string(),
                    value: "human".to_string(),
                    source: "default".to_string(),
                },
            ],
        };
        let output = render_config(&payload, true).unwrap();
        assert!(output.contains("not found, using defaults"));
        assert!(output.contains("locale  en-GB  CLI flag"));
        assert!(output.contains("format  human  default"));
    }

    #[test]
    fn color_adds_escape_codes() {
        colored::control::set_override(true);
        let output = paint("x", false, |s| s.red());
        colored::control::unset_override();
        assert!(output.contains("\x1b["));
        assert_eq!(paint("x", true, |s| s.red()), "x");
    }
}
