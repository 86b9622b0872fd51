//! Error types for dashfmt.
//!
//! Uses `thiserror` for structured error types that map to exit codes.
//!
//! ## Error Taxonomy
//!
//! Errors are categorized into three categories:
//! - **Input**: Arguments or data the caller passed in break a precondition
//! - **Configuration**: Config file parsing, validation, or unknown values
//! - **Internal**: I/O, serialization, or unclassified failures
//!
//! Each error has a stable error code (e.g., `DFMT-I001`) for programmatic handling.
//!
//! The formatters themselves (`format_currency`, `format_date_to_local`) never
//! fail. Only the strict entry points (`generate_y_axis`, `PaginationRequest::new`)
//! and the CLI surface produce these errors.

use thiserror::Error;

// =============================================================================
// Error Categories
// =============================================================================

/// High-level error categories for classification and routing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    /// Caller-supplied input violates a precondition.
    Input,
    /// Configuration issues (parse errors, invalid values).
    Configuration,
    /// Internal errors (I/O, serialization, unclassified).
    Internal,
}

impl ErrorCategory {
    /// Returns a human-readable description of the category.
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::Input => "Input error",
            Self::Configuration => "Configuration error",
            Self::Internal => "Internal error",
        }
    }

    /// Returns a short code prefix for this category.
    #[must_use]
    pub const fn code_prefix(&self) -> &'static str {
        match self {
            Self::Input => "I",
            Self::Configuration => "C",
            Self::Internal => "X",
        }
    }
}

impl std::fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.description())
    }
}

// =============================================================================
// Exit Codes
// =============================================================================

/// Process exit codes for the `dashfmt` binary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    /// Success
    Success = 0,
    /// Unexpected failure
    GeneralError = 1,
    /// Input violated a precondition (empty series, bad page numbers)
    InvalidInput = 2,
    /// Config file or argument could not be parsed or validated
    ConfigError = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> Self {
        code as Self
    }
}

impl From<ExitCode> for std::process::ExitCode {
    fn from(code: ExitCode) -> Self {
        Self::from(code as u8)
    }
}

// =============================================================================
// Fix Suggestions
// =============================================================================

/// An actionable hint shown alongside an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixSuggestion {
    /// Commands the user can run (copy-paste ready).
    pub commands: Vec<String>,
    /// Why the error happened.
    pub context: String,
}

impl FixSuggestion {
    /// Create a suggestion from commands and context.
    pub fn new(commands: Vec<String>, context: impl Into<String>) -> Self {
        Self {
            commands,
            context: context.into(),
        }
    }
}

// =============================================================================
// Error Type
// =============================================================================

/// Main error type for dashfmt operations.
///
/// Each variant has:
/// - A stable error code (e.g., `DFMT-I001`)
/// - A category for classification
/// - An exit code for the binary
#[derive(Error, Debug)]
pub enum DashfmtError {
    // ==========================================================================
    // Input errors (Category: Input)
    // ==========================================================================
    /// The y-axis generator needs at least one revenue sample.
    #[error("revenue series is empty; at least one sample is required")]
    EmptyRevenue,

    /// Page numbers outside `1 <= current <= total`.
    #[error("invalid page request {current}/{total}: {reason}")]
    InvalidPage {
        current: u32,
        total: u32,
        reason: String,
    },

    /// Revenue input could not be read as samples.
    #[error("invalid revenue input: {0}")]
    InvalidRevenueInput(String),

    /// Highest revenue cannot be rounded up to a whole gridline.
    #[error("revenue amount {0} is too large to place on the axis")]
    RevenueOutOfRange(i64),

    // ==========================================================================
    // Configuration errors (Category: Configuration)
    // ==========================================================================
    /// Error parsing configuration file.
    #[error("config parse error at {path}: {message}")]
    ConfigParse { path: String, message: String },

    /// Locale tag is not recognized by the locale data.
    #[error("unknown locale: {0}")]
    InvalidLocale(String),

    /// Generic configuration error.
    #[error("configuration error: {0}")]
    Config(String),

    // ==========================================================================
    // Internal errors (Category: Internal)
    // ==========================================================================
    /// I/O operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Catch-all for other errors.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl DashfmtError {
    /// Map error to process exit code.
    #[must_use]
    pub const fn exit_code(&self) -> ExitCode {
        match self.category() {
            ErrorCategory::Input => ExitCode::InvalidInput,
            ErrorCategory::Configuration => ExitCode::ConfigError,
            ErrorCategory::Internal => ExitCode::GeneralError,
        }
    }

    /// Returns the error category for classification and routing.
    #[must_use]
    pub const fn category(&self) -> ErrorCategory {
        match self {
            Self::EmptyRevenue
            | Self::InvalidPage { .. }
            | Self::InvalidRevenueInput(_)
            | Self::RevenueOutOfRange(_) => ErrorCategory::Input,

            Self::ConfigParse { .. } | Self::InvalidLocale(_) | Self::Config(_) => {
                ErrorCategory::Configuration
            }

            Self::Io(_) | Self::Json(_) | Self::Other(_) => ErrorCategory::Internal,
        }
    }

    /// Returns a stable error code for programmatic handling.
    ///
    /// Format: `DFMT-{category}{number}` where category is:
    /// - I: Input
    /// - C: Configuration
    /// - X: Internal
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::EmptyRevenue => "DFMT-I001",
            Self::InvalidPage { .. } => "DFMT-I002",
            Self::InvalidRevenueInput(_) => "DFMT-I003",
            Self::RevenueOutOfRange(_) => "DFMT-I004",

            Self::ConfigParse { .. } => "DFMT-C001",
            Self::InvalidLocale(_) => "DFMT-C002",
            Self::Config(_) => "DFMT-C099",

            Self::Io(_) => "DFMT-X001",
            Self::Json(_) => "DFMT-X002",
            Self::Other(_) => "DFMT-X099",
        }
    }

    /// Returns an actionable fix suggestion for this error, if one applies.
    #[must_use]
    pub fn fix_suggestion(&self) -> Option<FixSuggestion> {
        match self {
            Self::EmptyRevenue => Some(FixSuggestion::new(
                vec![r#"echo '[{"period":"Jan","amount":2000}]' | dashfmt axis"#.to_string()],
                "The y-axis needs the highest record of a non-empty revenue series.",
            )),
            Self::InvalidPage { total, .. } => Some(FixSuggestion::new(
                vec![format!("dashfmt pages 1 {}", (*total).max(1))],
                "Page numbers start at 1 and the current page cannot exceed the total.",
            )),
            Self::InvalidRevenueInput(_) => Some(FixSuggestion::new(
                vec![r#"dashfmt axis --input revenue.json"#.to_string()],
                "Expected a JSON array of objects with `period`/`amount` (or `month`/`revenue`).",
            )),
            Self::RevenueOutOfRange(_) => Some(FixSuggestion::new(
                vec![r#"echo '[{"period":"Jan","amount":2000}]' | dashfmt axis"#.to_string()],
                "Amounts are whole currency units and the rounded top must fit in a 64-bit integer.",
            )),
            Self::ConfigParse { path, .. } => Some(FixSuggestion::new(
                vec![format!("$EDITOR {path}")],
                "The config file must be valid TOML.",
            )),
            Self::InvalidLocale(_) => Some(FixSuggestion::new(
                vec!["dashfmt date 2024-01-12 --locale en-US".to_string()],
                "Use a BCP 47 tag such as en-US, en-GB, de-DE or fr-FR.",
            )),
            Self::Config(_) => Some(FixSuggestion::new(
                vec!["dashfmt config".to_string()],
                "Show the resolved configuration and where each value came from.",
            )),
            Self::Io(_) | Self::Json(_) | Self::Other(_) => None,
        }
    }
}

/// Result type alias for dashfmt operations.
pub type Result<T> = std::result::Result<T, DashfmtError>;

// =============================================================================
// Tests
// =============================================================================
