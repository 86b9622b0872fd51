//! Settings from `config.toml`, the environment and the command line.
//!
//! Loads configuration from `config.toml` in the platform config directory
//! (see [`AppPaths`]).
//!
//! ## Precedence
//!
//! Each setting takes the first value found in: CLI flag, environment
//! variable, config file, built-in default.
//!
//! ## Environment
//!
//! - `DASHFMT_LOCALE`: Date locale (e.g., "en-GB")
//! - `DASHFMT_FORMAT`: Output format (human, json, md)
//! - `DASHFMT_NO_COLOR` or `NO_COLOR`: Disable colors (1, true, yes)
//! - `DASHFMT_VERBOSE`: Enable verbose output (1, true, yes)
//! - `DASHFMT_PRETTY`: Pretty-print JSON output (1, true, yes)
//! - `DASHFMT_CONFIG`: Override config file path
//!
//! ## Example
//!
//! ```toml
//! [general]
//! log_level = "info"
//!
//! [display]
//! locale = "en-GB"
//!
//! [output]
//! format = "human"
//! color = true
//! pretty = false
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::AppPaths;
use crate::cli::args::{Cli, OutputFormat};
use crate::core::logging::{LOG_LEVEL_ENV, LogLevel};
use crate::error::{DashfmtError, Result};
use crate::util::time::{DEFAULT_LOCALE, DateLocale};

// =============================================================================
// Environment Variable Names
// =============================================================================

/// Date locale override.
pub const ENV_LOCALE: &str = "DASHFMT_LOCALE";
/// Output format override.
pub const ENV_FORMAT: &str = "DASHFMT_FORMAT";
/// Disables color when truthy.
pub const ENV_NO_COLOR: &str = "DASHFMT_NO_COLOR";
/// The cross-tool `NO_COLOR` convention; any value disables color.
pub const ENV_NO_COLOR_STD: &str = "NO_COLOR";
/// Enables debug logging when truthy.
pub const ENV_VERBOSE: &str = "DASHFMT_VERBOSE";
/// Pretty-prints JSON when truthy.
pub const ENV_PRETTY: &str = "DASHFMT_PRETTY";
/// Path of the config file to read instead of the platform default.
pub const ENV_CONFIG: &str = "DASHFMT_CONFIG";

// =============================================================================
// Resolved Configuration
// =============================================================================

/// Settings after applying precedence, ready for the commands.
#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    /// Locale tag as given (e.g. `en-GB`).
    pub locale_tag: String,
    /// Parsed date locale.
    pub locale: DateLocale,
    pub format: OutputFormat,
    pub no_color: bool,
    /// Raises the log level to debug.
    pub verbose: bool,
    pub pretty: bool,
    /// Effective log level, `--verbose` already applied.
    pub log_level: LogLevel,
    /// Config file that was consulted.
    pub config_path: PathBuf,
    /// Where each setting came from, for the `config` command.
    pub sources: ConfigSources,
}

/// Origin of each resolved setting.
#[derive(Debug, Clone, Default)]
pub struct ConfigSources {
    pub locale: ConfigSource,
    pub format: ConfigSource,
    pub no_color: ConfigSource,
    pub verbose: ConfigSource,
    pub pretty: ConfigSource,
    pub log_level: ConfigSource,
}

/// Origin of one setting.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ConfigSource {
    Cli,
    Env,
    ConfigFile,
    #[default]
    Default,
}

impl std::fmt::Display for ConfigSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Cli => write!(f, "CLI flag"),
            Self::Env => write!(f, "environment variable"),
            Self::ConfigFile => write!(f, "config file"),
            Self::Default => write!(f, "default"),
        }
    }
}

impl ResolvedConfig {
    /// Resolve final configuration from CLI args, the process environment,
    /// and the config file.
    ///
    /// # Errors
    ///
    /// Fails on an unreadable or malformed config file, or on any invalid
    /// resolved value such as an unknown locale.
    pub fn resolve(cli: &Cli) -> Result<Self> {
        let config_path = std::env::var(ENV_CONFIG)
            .map_or_else(|_| AppPaths::new().config_file(), PathBuf::from);
        let config = Config::load_from(&config_path)?;
        let mut resolved = Self::resolve_from(cli, &config, |key| std::env::var(key).ok())?;
        resolved.config_path = config_path;
        Ok(resolved)
    }

    /// Resolve against an already-loaded config and an environment lookup.
    ///
    /// # Errors
    ///
    /// Returns an error if the config is invalid or a resolved value is.
    pub fn resolve_from(
        cli: &Cli,
        config: &Config,
        env: impl Fn(&str) -> Option<String>,
    ) -> Result<Self> {
        config.validate()?;

        let mut sources = ConfigSources::default();

        let (locale_tag, locale) = Self::resolve_locale(cli, config, &env, &mut sources.locale)?;
        let format = Self::resolve_format(cli, config, &env, &mut sources.format)?;
        let no_color = Self::resolve_no_color(cli, config, &env, &mut sources.no_color);
        let verbose = Self::resolve_flag(cli.verbose, ENV_VERBOSE, false, &env, &mut sources.verbose);
        let pretty = Self::resolve_flag(
            cli.pretty,
            ENV_PRETTY,
            config.output.pretty,
            &env,
            &mut sources.pretty,
        );
        let log_level =
            Self::resolve_log_level(cli, config, &env, verbose, &mut sources.log_level);

        tracing::debug!(
            locale = %locale_tag,
            locale_source = %sources.locale,
            ?format,
            format_source = %sources.format,
            "Resolved configuration"
        );

        Ok(Self {
            locale_tag,
            locale,
            format,
            no_color,
            verbose,
            pretty,
            log_level,
            config_path: AppPaths::new().config_file(),
            sources,
        })
    }

    /// Resolve log level: `--log-level` > `DASHFMT_LOG` > config file > warn.
    fn resolve_log_level(
        cli: &Cli,
        config: &Config,
        env: &impl Fn(&str) -> Option<String>,
        verbose: bool,
        source: &mut ConfigSource,
    ) -> LogLevel {
        let (level, from) =
            if let Some(level) = cli.log_level.as_deref().and_then(LogLevel::from_arg) {
                (level, ConfigSource::Cli)
            } else if let Some(level) = env(LOG_LEVEL_ENV).and_then(|v| LogLevel::from_arg(&v)) {
                (level, ConfigSource::Env)
            } else if let Some(level) =
                config.general.log_level.as_deref().and_then(LogLevel::from_arg)
            {
                (level, ConfigSource::ConfigFile)
            } else {
                (LogLevel::default(), ConfigSource::Default)
            };

        *source = from;
        level.raised_by_verbose(verbose)
    }

    /// Resolve locale setting.
    fn resolve_locale(
        cli: &Cli,
        config: &Config,
        env: &impl Fn(&str) -> Option<String>,
        source: &mut ConfigSource,
    ) -> Result<(String, DateLocale)> {
        let (tag, from) = if let Some(tag) = &cli.locale {
            (tag.clone(), ConfigSource::Cli)
        } else if let Some(tag) = env(ENV_LOCALE).filter(|v| !v.trim().is_empty()) {
            (tag, ConfigSource::Env)
        } else if config.display.locale != DEFAULT_LOCALE {
            (config.display.locale.clone(), ConfigSource::ConfigFile)
        } else {
            (DEFAULT_LOCALE.to_string(), ConfigSource::Default)
        };

        let locale = DateLocale::parse(&tag)?;
        *source = from;
        Ok((tag, locale))
    }

    /// Resolve output format setting.
    fn resolve_format(
        cli: &Cli,
        config: &Config,
        env: &impl Fn(&str) -> Option<String>,
        source: &mut ConfigSource,
    ) -> Result<OutputFormat> {
        // 1. CLI --json shorthand, then --format
        if cli.json {
            *source = ConfigSource::Cli;
            return Ok(OutputFormat::Json);
        }
        if let Some(format) = cli.format {
            *source = ConfigSource::Cli;
            return Ok(format);
        }

        // 2. Environment variable
        if let Some(format_env) = env(ENV_FORMAT) {
            *source = ConfigSource::Env;
            return Self::parse_format(&format_env);
        }

        // 3. Config file
        if let Some(ref format_str) = config.output.format {
            *source = ConfigSource::ConfigFile;
            return Self::parse_format(format_str);
        }

        // 4. Default
        *source = ConfigSource::Default;
        Ok(OutputFormat::Human)
    }

    /// Parse a format string into `OutputFormat`.
    fn parse_format(s: &str) -> Result<OutputFormat> {
        OutputFormat::from_name(s).ok_or_else(|| {
            DashfmtError::Config(format!(
                "Invalid format '{s}'. Valid formats: human, json, md"
            ))
        })
    }

    /// Resolve `no_color` setting.
    fn resolve_no_color(
        cli: &Cli,
        config: &Config,
        env: &impl Fn(&str) -> Option<String>,
        source: &mut ConfigSource,
    ) -> bool {
        if cli.no_color {
            *source = ConfigSource::Cli;
            return true;
        }

        // NO_COLOR disables color for any value, including empty
        if is_truthy(env(ENV_NO_COLOR).as_deref()) || env(ENV_NO_COLOR_STD).is_some() {
            *source = ConfigSource::Env;
            return true;
        }

        // Inverted: config.output.color = false means no_color = true
        if !config.output.color {
            *source = ConfigSource::ConfigFile;
            return true;
        }

        *source = ConfigSource::Default;
        false
    }

    /// Resolve a boolean that can be switched on by flag, env var or config.
    fn resolve_flag(
        cli_flag: bool,
        env_key: &str,
        config_value: bool,
        env: &impl Fn(&str) -> Option<String>,
        source: &mut ConfigSource,
    ) -> bool {
        if cli_flag {
            *source = ConfigSource::Cli;
            return true;
        }
        if is_truthy(env(env_key).as_deref()) {
            *source = ConfigSource::Env;
            return true;
        }
        if config_value {
            *source = ConfigSource::ConfigFile;
            return true;
        }
        *source = ConfigSource::Default;
        false
    }
}

/// Check if an environment value is truthy.
fn is_truthy(value: Option<&str>) -> bool {
    value.is_some_and(|v| matches!(v.trim().to_lowercase().as_str(), "1" | "true" | "yes" | "on"))
}

// =============================================================================
// Config File
// =============================================================================

/// Contents of `config.toml`. Missing sections and keys take defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub general: GeneralConfig,
    pub display: DisplayConfig,
    pub output: OutputConfig,
}

/// `[general]`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// Log level used when neither `--log-level` nor `DASHFMT_LOG` is set.
    pub log_level: Option<String>,
}

/// `[display]`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Locale tag for dates.
    pub locale: String,
}

/// `[output]`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// One of human, json, md.
    pub format: Option<String>,
    pub color: bool,
    pub pretty: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            locale: DEFAULT_LOCALE.to_string(),
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: None,
            color: true,
            pretty: false,
        }
    }
}

impl Config {
    /// Read the config file at `path`; a missing file yields defaults.
    ///
    /// # Errors
    ///
    /// Returns an error only if the file exists but cannot be read or parsed.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!(?path, "Config file not found, using defaults");
            return Ok(Self::default());
        }

        tracing::debug!(?path, "Loading config file");
        let content = fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| DashfmtError::ConfigParse {
            path: path.display().to_string(),
            message: e.to_string(),
        })
    }

    /// Write the config as TOML, creating parent directories.
    ///
    /// # Errors
    ///
    /// Returns an error if the file or its directory cannot be written.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)
            .map_err(|e| DashfmtError::Config(format!("Failed to serialize config: {e}")))?;

        fs::write(path, content)?;
        tracing::debug!(?path, "Config file saved");
        Ok(())
    }

    /// Reject unknown locales, format names and log levels.
    ///
    /// # Errors
    ///
    /// Returns the first invalid value found.
    pub fn validate(&self) -> Result<()> {
        DateLocale::parse(&self.display.locale)?;

        if let Some(format) = &self.output.format {
            if OutputFormat::from_name(format).is_none() {
                return Err(DashfmtError::Config(format!(
                    "Invalid format \"{format}\". Valid formats: human, json, md"
                )));
            }
        }

        if let Some(level) = &self.general.log_level {
            if LogLevel::from_arg(level).is_none() {
                return Err(DashfmtError::Config(format!(
                    "Invalid log_level \"{level}\". Valid levels: trace, debug, info, warn, error"
                )));
            }
        }

        Ok(())
    }
}
