//! CLI argument definitions using clap.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

/// Dashboard formatting - currency, dates, chart axes and pagination.
#[derive(Parser, Debug)]
#[command(name = "dashfmt")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    // === Global flags ===
    /// Output format [default: human]
    #[arg(long, value_enum, global = true)]
    pub format: Option<OutputFormat>,

    /// Shorthand for --format json
    #[arg(long, global = true)]
    pub json: bool,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pub pretty: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Locale for dates (BCP 47 tag, e.g. en-US, en-GB, de-DE)
    #[arg(long, value_name = "TAG", global = true)]
    pub locale: Option<String>,

    /// Log level
    #[arg(long, value_name = "LEVEL", global = true)]
    pub log_level: Option<String>,

    /// Emit JSONL logs to stderr
    #[arg(long, global = true)]
    pub json_output: bool,

    /// Verbose output (sets log level to debug)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

/// Available commands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Format amounts given in cents as US dollars
    Currency(CurrencyArgs),

    /// Format dates for display in a locale
    Date(DateArgs),

    /// Compute y-axis labels for a revenue series
    Axis(AxisArgs),

    /// Show the pagination control for a page
    Pages(PagesArgs),

    /// Show the resolved configuration
    Config,

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the `currency` command.
#[derive(Parser, Debug)]
pub struct CurrencyArgs {
    /// Amounts in minor units (cents)
    #[arg(required = true, allow_negative_numbers = true, value_name = "CENTS")]
    pub amounts: Vec<i64>,
}

/// Arguments for the `date` command.
#[derive(Parser, Debug)]
pub struct DateArgs {
    /// ISO 8601 dates or date-times
    #[arg(required = true, value_name = "DATE")]
    pub dates: Vec<String>,
}

/// Arguments for the `axis` command.
#[derive(Parser, Debug)]
pub struct AxisArgs {
    /// JSON file with revenue samples (reads stdin when omitted or "-")
    #[arg(short, long, value_name = "FILE")]
    pub input: Option<PathBuf>,
}

/// Arguments for the `pages` command.
#[derive(Parser, Debug)]
pub struct PagesArgs {
    /// Current page (1-based)
    pub current: u32,

    /// Total number of pages
    pub total: u32,

    /// Reject page numbers outside 1..=TOTAL instead of rendering them anyway
    #[arg(long)]
    pub strict: bool,
}

/// Arguments for the `completions` command.
#[derive(Parser, Debug)]
pub struct CompletionsArgs {
    /// Target shell
    #[arg(value_enum)]
    pub shell: clap_complete::Shell,
}

/// Output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output
    #[default]
    Human,
    /// JSON output
    Json,
    /// Markdown output
    Md,
}

impl OutputFormat {
    /// Parse a format name from config or environment (case-insensitive).
    #[must_use]
    pub fn from_name(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "human" => Some(Self::Human),
            "json" => Some(Self::Json),
            "md" | "markdown" => Some(Self::Md),
            _ => None,
        }
    }

    /// Canonical name, as accepted by `--format`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Human => "human",
            Self::Json => "json",
            Self::Md => "md",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_parses() {
        Cli::command().debug_assert();
    }

    #[test]
    fn currency_accepts_negative_amounts() {
        let cli = Cli::try_parse_from(["dashfmt", "currency", "-500", "123456"]).unwrap();
        match cli.command {
            Some(Commands::Currency(args)) => assert_eq!(args.amounts, vec![-500, 123_456]),
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn global_flags_after_subcommand() {
        let cli =
            Cli::try_parse_from(["dashfmt", "date", "2023-01-15", "--locale", "en-GB", "--json"])
                .unwrap();
        assert!(cli.json);
        assert_eq!(cli.locale.as_deref(), Some("en-GB"));
    }

    #[test]
    fn pages_requires_both_numbers() {
        assert!(Cli::try_parse_from(["dashfmt", "pages", "3"]).is_err());
        let cli = Cli::try_parse_from(["dashfmt", "pages", "3", "10", "--strict"]).unwrap();
        match cli.command {
            Some(Commands::Pages(args)) => {
                assert_eq!((args.current, args.total), (3, 10));
                assert!(args.strict);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn output_format_names() {
        assert_eq!(OutputFormat::from_name("JSON"), Some(OutputFormat::Json));
        assert_eq!(OutputFormat::from_name("markdown"), Some(OutputFormat::Md));
        assert_eq!(OutputFormat::from_name("xml"), None);
    }
}
