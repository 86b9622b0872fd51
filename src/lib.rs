//! dashfmt - Dashboard presentation formatting
//!
//! Pure helpers for the values a financial dashboard displays: currency from
//! minor units, locale dates, revenue chart axis labels and pagination
//! controls. The `dashfmt` binary exposes each helper as a subcommand.

// Note: deny (not forbid) to allow #[allow(unsafe_code)] in test helpers for env var manipulation
#![deny(unsafe_code)]
#![warn(clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod cli;
pub mod core;
pub mod error;
pub mod render;
pub mod storage;
pub mod util;

/// Test utilities module - included in test builds or when test-utils feature is enabled.
#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use crate::core::chart::generate_y_axis;
pub use crate::core::models::{PaginationToken, RevenueSample, YAxis};
pub use crate::core::pagination::{PaginationRequest, generate_pagination};
pub use crate::error::{DashfmtError, ExitCode, Result};
pub use crate::util::{format_currency, format_date_to_local};
