//! Config command implementation.
//!
//! Shows each resolved setting and where it came from.

use crate::core::models::{ConfigEntry, ConfigPayload, RobotOutput};
use crate::error::Result;
use crate::render;
use crate::storage::ResolvedConfig;

fn entry(key: &str, value: impl ToString, source: impl ToString) -> ConfigEntry {
    ConfigEntry {
        key: key.to_string(),
        value: value.to_string(),
        source: source.to_string(),
    }
}

/// Build the configuration report.
#[must_use]
pub fn build(config: &ResolvedConfig) -> ConfigPayload {
    ConfigPayload {
        config_path: config.config_path.display().to_string(),
        config_exists: config.config_path.exists(),
        settings: vec![
            entry("locale", &config.locale_tag, config.sources.locale),
            entry("format", config.format.as_str(), config.sources.format),
            entry("color", !config.no_color, config.sources.no_color),
            entry("pretty", config.pretty, config.sources.pretty),
            entry("verbose", config.verbose, config.sources.verbose),
            entry(
                "log_level",
                config.log_level.as_filter(),
                config.sources.log_level,
            ),
        ],
    }
}

/// Execute the config command.
pub fn execute(config: &ResolvedConfig) -> Result<()> {
    let output = RobotOutput::new("config", build(config));
    let rendered = render::render_config(&output, config.format, config.pretty, config.no_color)?;
    print!("{rendered}");
    Ok(())
}
