//! Core value types shared by the formatters and the CLI.
//!
//! Every type here is a transient value: built by the caller, consumed by a
//! single call, discarded.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize, Serializer};

/// Schema identifier stamped on every JSON envelope.
pub const SCHEMA_VERSION: &str = "dashfmt.v1";

// =============================================================================
// Revenue
// =============================================================================

/// One observation of a revenue time series.
///
/// `amount` is in whole currency units (not cents). On input the field names
/// `month` and `revenue` are accepted as well.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RevenueSample {
    #[serde(alias = "month")]
    pub period: String,

    #[serde(alias = "revenue")]
    pub amount: i64,
}

impl RevenueSample {
    /// Create a sample.
    pub fn new(period: impl Into<String>, amount: i64) -> Self {
        Self {
            period: period.into(),
            amount,
        }
    }
}

/// Y-axis layout for a revenue chart.
///
/// # Fields
/// - `y_axis_labels`: Labels from `top_label` down to `$0K`.
/// - `top_label`: Highest gridline value, a multiple of 1000.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct YAxis {
    pub y_axis_labels: Vec<String>,
    pub top_label: i64,
}

// =============================================================================
// Pagination
// =============================================================================

/// Text shown for a collapsed run of pages.
pub const ELLIPSIS: &str = "...";

/// One entry of a pagination control.
///
/// Serializes as a JSON number for pages and as `"..."` for the ellipsis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PaginationToken {
    /// A clickable page number (1-based).
    Page(u32),
    /// A collapsed run of pages.
    Ellipsis,
}

impl PaginationToken {
    /// Page number, if this token is a page.
    #[must_use]
    pub const fn page(self) -> Option<u32> {
        match self {
            Self::Page(page) => Some(page),
            Self::Ellipsis => None,
        }
    }

    /// Whether this token is the ellipsis marker.
    #[must_use]
    pub const fn is_ellipsis(self) -> bool {
        matches!(self, Self::Ellipsis)
    }
}

impl From<u32> for PaginationToken {
    fn from(page: u32) -> Self {
        Self::Page(page)
    }
}

impl fmt::Display for PaginationToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Page(page) => write!(f, "{page}"),
            Self::Ellipsis => f.write_str(ELLIPSIS),
        }
    }
}

impl Serialize for PaginationToken {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Page(page) => serializer.serialize_u32(*page),
            Self::Ellipsis => serializer.serialize_str(ELLIPSIS),
        }
    }
}

// =============================================================================
// Command Payloads
// =============================================================================

/// One formatted amount from the `currency` command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrencyEntry {
    /// Input amount in cents.
    pub amount: i64,
    pub formatted: String,
}

/// Result of the `date` command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DatePayload {
    /// Locale tag the dates were rendered in.
    pub locale: String,
    pub dates: Vec<DateEntry>,
}

/// One formatted date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DateEntry {
    pub input: String,
    pub formatted: String,
    /// False when the input did not parse and `formatted` is the sentinel.
    pub valid: bool,
}

/// Result of the `pages` command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PagesPayload {
    pub current_page: u32,
    pub total_pages: u32,
    pub tokens: Vec<PaginationToken>,
}

/// One setting in the `config` report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigEntry {
    pub key: String,
    pub value: String,
    /// Where the value came from (CLI flag, environment variable, ...).
    pub source: String,
}

/// Result of the `config` command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigPayload {
    pub config_path: String,
    pub config_exists: bool,
    pub settings: Vec<ConfigEntry>,
}

// =============================================================================
// Robot Output
// =============================================================================

/// Top-level JSON envelope for robot mode output.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RobotOutput<T> {
    pub schema_version: String,
    pub generated_at: DateTime<Utc>,
    pub command: String,
    pub data: T,

    pub errors: Vec<String>,

    pub meta: RobotMeta,
}

/// Metadata for robot output.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RobotMeta {
    pub format: String,
    pub flags: Vec<String>,
    pub runtime: String,
}

impl<T> RobotOutput<T> {
    /// Create a new robot output envelope.
    pub fn new(command: impl Into<String>, data: T) -> Self {
        Self::with_errors(command, data, Vec::new())
    }

    /// Create with errors.
    pub fn with_errors(command: impl Into<String>, data: T, errors: Vec<String>) -> Self {
        Self {
            schema_version: SCHEMA_VERSION.to_string(),
            generated_at: Utc::now(),
            command: command.into(),
            data,
            errors,
            meta: RobotMeta {
                format: "json".to_string(),
                flags: Vec::new(),
                runtime: "cli".to_string(),
            },
        }
    }

    /// Record the CLI flags that shaped this output.
    #[must_use]
    pub fn with_flags(mut self, flags: Vec<String>) -> Self {
        self.meta.flags = flags;
        self
    }
}
