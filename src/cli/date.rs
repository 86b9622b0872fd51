//! Date command implementation.

use crate::cli::args::DateArgs;
use crate::core::models::{DateEntry, DatePayload, RobotOutput};
use crate::error::Result;
use crate::render;
use crate::storage::ResolvedConfig;
use crate::util::time::{DateLocale, INVALID_DATE, format_date, parse_calendar_date};

/// Format every date in `locale`.
#[must_use]
pub fn build(dates: &[String], locale_tag: &str, locale: DateLocale) -> DatePayload {
    let dates = dates
        .iter()
        .map(|input| match parse_calendar_date(input) {
            Some(date) => DateEntry {
                input: input.clone(),
                formatted: format_date(date, locale),
                valid: true,
            },
            None => {
                tracing::debug!(input = %input, "Unparseable date");
                DateEntry {
                    input: input.clone(),
                    formatted: INVALID_DATE.to_string(),
                    valid: false,
                }
            }
        })
        .collect();

    DatePayload {
        locale: locale_tag.to_string(),
        dates,
    }
}

/// Execute the date command.
pub fn execute(args: &DateArgs, config: &ResolvedConfig) -> Result<()> {
    tracing::debug!(
        count = args.dates.len(),
        locale = %config.locale_tag,
        source = %config.sources.locale,
        "Formatting dates"
    );

    let payload = build(&args.dates, &config.locale_tag, config.locale);
    let mut flags = Vec::new();
    if config.sources.locale == crate::storage::ConfigSource::Cli {
        flags.push(format!("--locale={}", config.locale_tag));
    }

    let output = RobotOutput::new("date", payload).with_flags(flags);
    let rendered = render::render_dates(&output, config.format, config.pretty, config.no_color)?;
    print!("{rendered}");
    Ok(())
}
