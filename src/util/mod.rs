//! Formatting helpers and environment detection.

pub mod env;
pub mod format;
pub mod time;

pub use format::{format_currency, format_currency_f64, group_thousands};
pub use time::{DEFAULT_LOCALE, DateLocale, format_date_to_local, format_date_to_local_default};
