//! Currency formatting.
//!
//! Amounts arrive in minor units (cents) and are rendered as US dollars with
//! en-US digit grouping, e.g. `123456` -> `$1,234.56`.

use num_format::{Locale, ToFormattedString};

/// Display symbol of the single supported currency (USD).
pub const CURRENCY_SYMBOL: &str = "$";

/// Minor units per major unit (cents per dollar).
pub const MINOR_UNITS_PER_MAJOR: u64 = 100;

/// Locale whose grouping rules apply to the major part.
const GROUPING_LOCALE: Locale = Locale::en;

/// Format an amount of minor units (cents) as a US dollar string.
///
/// Always prints exactly two fractional digits. Negative amounts put the sign
/// before the symbol.
///
/// ```
/// use dashfmt::util::format_currency;
///
/// assert_eq!(format_currency(123_456), "$1,234.56");
/// assert_eq!(format_currency(-500), "-$5.00");
/// ```
#[must_use]
pub fn format_currency(amount: i64) -> String {
    render_cents(amount < 0, amount.unsigned_abs())
}

/// Format a possibly fractional amount of minor units as a US dollar string.
///
/// The dollar value is rounded to cents half-to-even. Values too large for
/// `i64` cents saturate. Non-finite input renders as `$NaN`, `$∞` or `-$∞`.
#[must_use]
pub fn format_currency_f64(minor_units: f64) -> String {
    if minor_units.is_nan() {
        return format!("{CURRENCY_SYMBOL}NaN");
    }
    if minor_units.is_infinite() {
        let sign = if minor_units < 0.0 { "-" } else { "" };
        return format!("{sign}{CURRENCY_SYMBOL}∞");
    }

    #[allow(clippy::cast_possible_truncation)]
    let cents = minor_units.round_ties_even() as i64;
    // -0.4 cents still reads as a negative amount
    render_cents(minor_units < 0.0, cents.unsigned_abs())
}

/// Group the digits of a whole number with en-US separators.
#[must_use]
pub fn group_thousands(value: u64) -> String {
    value.to_formatted_string(&GROUPING_LOCALE)
}

fn render_cents(negative: bool, cents: u64) -> String {
    let sign = if negative { "-" } else { "" };
    let major = group_thousands(cents / MINOR_UNITS_PER_MAJOR);
    let minor = cents % MINOR_UNITS_PER_MAJOR;
    format!("{sign}{CURRENCY_SYMBOL}{major}.{minor:02}")
}
