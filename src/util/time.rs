//! Locale-aware date formatting.
//!
//! Renders a calendar date as day number, abbreviated month and four-digit
//! year. Month names and the part order come from the locale data shipped
//! with `chrono` (`unstable-locales`): the locale's numeric date (`%x`) is
//! split into its parts and the literal text around them.

use std::fmt::Write as _;

use chrono::{DateTime, Datelike, Locale, NaiveDate, NaiveDateTime, Utc};

use crate::error::{DashfmtError, Result};

/// Locale used when the caller does not name one.
pub const DEFAULT_LOCALE: &str = "en-US";

/// Sentinel returned for input that does not parse as a calendar date.
pub const INVALID_DATE: &str = "Invalid Date";

/// Naive date-time layouts accepted after plain dates and RFC 3339.
const NAIVE_DATE_TIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

/// Region assumed for a tag that names only a language.
///
/// Languages missing here resolve to `{lang}_{LANG}` (`de` -> `de_DE`).
const PRIMARY_REGIONS: &[(&str, &str)] = &[
    ("af", "ZA"),
    ("am", "ET"),
    ("ar", "EG"),
    ("be", "BY"),
    ("bn", "BD"),
    ("bs", "BA"),
    ("ca", "ES"),
    ("cs", "CZ"),
    ("cy", "GB"),
    ("da", "DK"),
    ("el", "GR"),
    ("en", "US"),
    ("et", "EE"),
    ("eu", "ES"),
    ("fa", "IR"),
    ("fil", "PH"),
    ("ga", "IE"),
    ("gl", "ES"),
    ("gu", "IN"),
    ("he", "IL"),
    ("hi", "IN"),
    ("hy", "AM"),
    ("ja", "JP"),
    ("ka", "GE"),
    ("kk", "KZ"),
    ("km", "KH"),
    ("kn", "IN"),
    ("ko", "KR"),
    ("lo", "LA"),
    ("ml", "IN"),
    ("mr", "IN"),
    ("ms", "MY"),
    ("my", "MM"),
    ("nb", "NO"),
    ("ne", "NP"),
    ("nn", "NO"),
    ("pa", "IN"),
    ("pt", "BR"),
    ("si", "LK"),
    ("sl", "SI"),
    ("sq", "AL"),
    ("sr", "RS"),
    ("sv", "SE"),
    ("sw", "TZ"),
    ("ta", "IN"),
    ("te", "IN"),
    ("uk", "UA"),
    ("ur", "PK"),
    ("vi", "VN"),
    ("zh", "CN"),
    ("zu", "ZA"),
];

/// Order in which a locale writes the parts of a date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateOrder {
    /// `15 Jan 2023`
    DayMonthYear,
    /// `Jan 15, 2023`
    MonthDayYear,
    /// `2023年1月15日`: the locale's own markers around unpadded numbers
    YearMonthDay,
}

impl DateOrder {
    /// Read the order from the locale's numeric date representation.
    ///
    /// Year-first only counts when the locale marks the parts with words
    /// (`年`, `년`); a bare ISO layout such as `1999-11-22` reads day-first.
    fn detect(locale: Locale) -> Self {
        let Some(layout) = numeric_layout(locale) else {
            return Self::DayMonthYear;
        };
        let parts: Vec<DatePart> = layout.iter().filter_map(Segment::part).collect();
        let marked = layout.iter().any(Segment::is_marker);

        match parts.as_slice() {
            [DatePart::Month, DatePart::Day, DatePart::Year] => Self::MonthDayYear,
            [DatePart::Year, DatePart::Month, DatePart::Day] if marked => Self::YearMonthDay,
            _ => Self::DayMonthYear,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DatePart {
    Year,
    Month,
    Day,
}

/// One piece of a locale's numeric date.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Part(DatePart),
    Literal(String),
}

impl Segment {
    const fn part(&self) -> Option<DatePart> {
        match self {
            Self::Part(part) => Some(*part),
            Self::Literal(_) => None,
        }
    }

    fn is_marker(&self) -> bool {
        matches!(self, Self::Literal(text) if text.chars().any(char::is_alphabetic))
    }
}

/// Split the locale's `%x` rendering of 1999-11-22 into parts and literals.
///
/// `None` when the locale does not render exactly one year, month and day in
/// ASCII digits.
fn numeric_layout(locale: Locale) -> Option<Vec<Segment>> {
    let probe = NaiveDate::from_ymd_opt(1999, 11, 22)?;
    let mut rendered = String::new();
    write!(rendered, "{}", probe.format_localized("%x", locale)).ok()?;

    let mut segments = Vec::new();
    let mut digits = String::new();
    let mut literal = String::new();
    for ch in rendered.chars() {
        if ch.is_ascii_digit() {
            if !literal.is_empty() {
                segments.push(Segment::Literal(std::mem::take(&mut literal)));
            }
            digits.push(ch);
        } else {
            if !digits.is_empty() {
                segments.push(Segment::Part(probe_part(&std::mem::take(&mut digits))?));
            }
            literal.push(ch);
        }
    }
    if !digits.is_empty() {
        segments.push(Segment::Part(probe_part(&digits)?));
    }
    if !literal.is_empty() {
        segments.push(Segment::Literal(literal));
    }

    let parts = segments.iter().filter_map(Segment::part).count();
    (parts == 3).then_some(segments)
}

fn probe_part(digits: &str) -> Option<DatePart> {
    match digits {
        "1999" | "99" => Some(DatePart::Year),
        "11" => Some(DatePart::Month),
        "22" => Some(DatePart::Day),
        _ => None,
    }
}

/// A locale recognized by the date formatter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateLocale {
    locale: Locale,
    order: DateOrder,
}

impl DateLocale {
    /// Parse a BCP 47 style tag such as `en-US`, `en_gb`, `sr-Latn-RS` or `ja`.
    ///
    /// # Errors
    ///
    /// Returns [`DashfmtError::InvalidLocale`] if the tag names no known locale.
    pub fn parse(tag: &str) -> Result<Self> {
        let locale =
            lookup_locale(tag).ok_or_else(|| DashfmtError::InvalidLocale(tag.to_string()))?;
        Ok(Self {
            locale,
            order: DateOrder::detect(locale),
        })
    }

    /// Parse a tag, falling back to [`DEFAULT_LOCALE`] when it is unknown.
    #[must_use]
    pub fn resolve(tag: &str) -> Self {
        Self::parse(tag).unwrap_or_else(|_| {
            tracing::warn!(
                locale = tag,
                fallback = DEFAULT_LOCALE,
                "Unknown locale, using fallback"
            );
            Self::default()
        })
    }

    /// Underlying locale data.
    #[must_use]
    pub const fn locale(&self) -> Locale {
        self.locale
    }

    /// Day/month/year order of this locale.
    #[must_use]
    pub const fn order(&self) -> DateOrder {
        self.order
    }
}

impl Default for DateLocale {
    fn default() -> Self {
        Self {
            locale: Locale::en_US,
            order: DateOrder::MonthDayYear,
        }
    }
}

/// Map a tag onto the locale table.
fn lookup_locale(tag: &str) -> Option<Locale> {
    let mut parts = tag.trim().split(['-', '_']);
    let language = parts.next()?.to_ascii_lowercase();
    if language.is_empty() {
        return None;
    }

    // Four letters is a script subtag (`Latn`, `Hant`)
    let region = match parts.find(|part| part.len() != 4) {
        Some(region) => region.to_ascii_uppercase(),
        None => PRIMARY_REGIONS
            .iter()
            .find(|(lang, _)| *lang == language)
            .map_or_else(|| language.to_ascii_uppercase(), |(_, region)| (*region).to_string()),
    };

    Locale::try_from(format!("{language}_{region}").as_str()).ok()
}

/// Parse the calendar date out of an ISO 8601 date or date-time string.
///
/// Offset-carrying date-times are converted to UTC first; naive date-times
/// keep the date as written.
#[must_use]
pub fn parse_calendar_date(input: &str) -> Option<NaiveDate> {
    let input = input.trim();

    if let Ok(date) = NaiveDate::parse_from_str(input, "%Y-%m-%d") {
        return Some(date);
    }

    if let Ok(date_time) = DateTime::parse_from_rfc3339(input) {
        return Some(date_time.with_timezone(&Utc).date_naive());
    }

    NAIVE_DATE_TIME_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(input, format).ok())
        .map(|date_time| date_time.date())
}

/// Format a parsed date in the given locale.
#[must_use]
pub fn format_date(date: NaiveDate, locale: DateLocale) -> String {
    let year = date.format("%Y").to_string();

    match locale.order() {
        DateOrder::MonthDayYear => format!(
            "{} {}, {year}",
            month_abbrev(date, locale.locale()),
            date.day()
        ),
        DateOrder::DayMonthYear => format!(
            "{} {} {year}",
            date.day(),
            month_abbrev(date, locale.locale())
        ),
        DateOrder::YearMonthDay => numeric_layout(locale.locale()).map_or_else(
            || format!("{year} {} {}", date.month(), date.day()),
            |layout| {
                layout
                    .iter()
                    .map(|segment| match segment {
                        Segment::Part(DatePart::Year) => year.clone(),
                        Segment::Part(DatePart::Month) => date.month().to_string(),
                        Segment::Part(DatePart::Day) => date.day().to_string(),
                        Segment::Literal(text) => text.clone(),
                    })
                    .collect()
            },
        ),
    }
}

/// Abbreviated month name, without the padding some locales carry (` 1月`).
fn month_abbrev(date: NaiveDate, locale: Locale) -> String {
    date.format_localized("%b", locale).to_string().trim().to_string()
}

/// Format a date string for display in `locale`.
///
/// Never fails: unparseable input yields [`INVALID_DATE`] and an unknown
/// locale falls back to [`DEFAULT_LOCALE`].
///
/// ```
/// use dashfmt::util::format_date_to_local;
///
/// assert_eq!(format_date_to_local("2023-01-15", "en-US"), "Jan 15, 2023");
/// assert_eq!(format_date_to_local("2023-01-15", "en-GB"), "15 Jan 2023");
/// ```
#[must_use]
pub fn format_date_to_local(date_str: &str, locale: &str) -> String {
    let Some(date) = parse_calendar_date(date_str) else {
        tracing::debug!(input = date_str, "Unparseable date");
        return INVALID_DATE.to_string();
    };
    format_date(date, DateLocale::resolve(locale))
}

/// [`format_date_to_local`] with [`DEFAULT_LOCALE`].
#[must_use]
pub fn format_date_to_local_default(date_str: &str) -> String {
    format_date_to_local(date_str, DEFAULT_LOCALE)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing_test::traced_test;

    #[test]
    fn default_locale_is_month_first() {
        assert_eq!(format_date_to_local_default("2023-01-15"), "Jan 15, 2023");
        assert_eq!(format_date_to_local_default("2024-01-12"), "Jan 12, 2024");
    }

    #[test]
    fn british_english_is_day_first() {
        assert_eq!(format_date_to_local("2023-01-15", "en-GB"), "15 Jan 2023");
    }

    #[test]
    fn day_is_not_zero_padded() {
        assert_eq!(format_date_to_local("2023-03-05", "en-US"), "Mar 5, 2023");
        assert_eq!(format_date_to_local("2023-03-05", "en-GB"), "5 Mar 2023");
    }

    #[test]
    fn locale_tags_are_case_and_separator_insensitive() {
        assert_eq!(
            DateLocale::parse("en_gb").unwrap(),
            DateLocale::parse("en-GB").unwrap()
        );
        assert_eq!(DateLocale::parse("EN-us").unwrap().locale(), Locale::en_US);
        assert_eq!(DateLocale::parse("en").unwrap().locale(), Locale::en_US);
    }

    #[test]
    fn detected_orders() {
        let order = |tag: &str| DateLocale::parse(tag).unwrap().order();
        assert_eq!(order("en-US"), DateOrder::MonthDayYear);
        assert_eq!(order("en-GB"), DateOrder::DayMonthYear);
        assert_eq!(order("de-DE"), DateOrder::DayMonthYear);
        assert_eq!(order("ja-JP"), DateOrder::YearMonthDay);
        assert_eq!(order("ko-KR"), DateOrder::YearMonthDay);
        assert_eq!(order("sv-SE"), DateOrder::DayMonthYear);
        assert_eq!(order("lt-LT"), DateOrder::DayMonthYear);
    }

    #[test]
    fn bare_language_uses_primary_region() {
        let locale = |tag: &str| DateLocale::parse(tag).unwrap().locale();
        assert_eq!(locale("ja"), Locale::ja_JP);
        assert_eq!(locale("zh"), Locale::zh_CN);
        assert_eq!(locale("ko"), Locale::ko_KR);
        assert_eq!(locale("sv"), Locale::sv_SE);
        assert_eq!(locale("da"), Locale::da_DK);
        assert_eq!(locale("de"), Locale::de_DE);
        assert_eq!(locale("fr"), Locale::fr_FR);
    }

    #[test]
    fn script_subtags_are_skipped() {
        assert_eq!(DateLocale::parse("sr-Latn-RS").unwrap().locale(), Locale::sr_RS);
        assert_eq!(DateLocale::parse("zh-Hans").unwrap().locale(), Locale::zh_CN);
    }

    #[test]
    fn year_first_locales_keep_their_markers() {
        assert_eq!(format_date_to_local("2023-01-15", "ja-JP"), "2023年1月15日");
        assert_eq!(format_date_to_local("2023-01-15", "ja"), "2023年1月15日");
        assert_eq!(format_date_to_local("2023-01-15", "zh-CN"), "2023年1月15日");
        assert_eq!(format_date_to_local("2023-11-05", "ko-KR"), "2023년 11월 5일");
    }

    #[test]
    fn iso_numeric_locales_write_day_first() {
        assert_eq!(format_date_to_local("2023-01-15", "sv-SE"), "15 jan 2023");
        assert_eq!(format_date_to_local("2023-01-15", "sv"), "15 jan 2023");
        assert_eq!(format_date_to_local("2023-01-15", "lt-LT"), "15 saus. 2023");
        assert_eq!(format_date_to_local("2023-01-15", "da"), "15 jan 2023");
    }

    #[test]
    fn month_names_carry_no_padding() {
        for tag in ["en-US", "en-GB", "de-DE", "fr-FR", "ja-JP", "ko-KR", "sv-SE", "hu-HU"] {
            for date in ["2023-01-15", "2023-10-05"] {
                let out = format_date_to_local(date, tag);
                assert!(!out.contains("  "), "{tag} {date}: {out:?}");
                assert_eq!(out.trim(), out, "{tag} {date}: {out:?}");
            }
        }
    }

    #[test]
    fn numeric_layout_splits_parts_and_markers() {
        let layout = numeric_layout(Locale::ja_JP).unwrap();
        assert_eq!(
            layout,
            [
                Segment::Part(DatePart::Year),
                Segment::Literal("年".to_string()),
                Segment::Part(DatePart::Month),
                Segment::Literal("月".to_string()),
                Segment::Part(DatePart::Day),
                Segment::Literal("日".to_string()),
            ]
        );

        let us = numeric_layout(Locale::en_US).unwrap();
        assert_eq!(us.iter().filter_map(Segment::part).count(), 3);
        assert!(!us.iter().any(Segment::is_marker));
    }

    #[test]
    fn default_date_locale_matches_parsed_default() {
        assert_eq!(DateLocale::default(), DateLocale::parse(DEFAULT_LOCALE).unwrap());
    }

    #[test]
    fn month_names_follow_locale_language() {
        let french = format_date_to_local("2023-08-15", "fr-FR");
        assert!(french.starts_with("15 "), "got {french}");
        assert!(french.ends_with(" 2023"), "got {french}");
        assert!(!french.contains("Aug"), "got {french}");
    }

    #[test]
    fn date_times_are_accepted() {
        let us = |input: &str| format_date_to_local(input, "en-US");
        assert_eq!(us("2023-01-15T10:30:00Z"), "Jan 15, 2023");
        assert_eq!(us("2023-01-15T10:30:00.250"), "Jan 15, 2023");
        assert_eq!(us("  2023-01-15  "), "Jan 15, 2023");
        assert_eq!(
            format_date_to_local("2023-01-15 23:59:59", "en-GB"),
            "15 Jan 2023"
        );
    }

    #[test]
    fn offsets_convert_to_utc_date() {
        assert_eq!(
            format_date_to_local("2023-01-15T23:30:00-05:00", "en-US"),
            "Jan 16, 2023"
        );
    }

    #[test]
    fn invalid_dates_yield_sentinel() {
        assert_eq!(format_date_to_local("not a date", "en-US"), INVALID_DATE);
        assert_eq!(format_date_to_local("2023-02-30", "en-US"), INVALID_DATE);
        assert_eq!(format_date_to_local("", "en-GB"), INVALID_DATE);
    }

    #[test]
    fn unknown_locale_is_an_error_when_parsed_strictly() {
        assert!(matches!(
            DateLocale::parse("zz-ZZ"),
            Err(DashfmtError::InvalidLocale(tag)) if tag == "zz-ZZ"
        ));
        assert!(DateLocale::parse("").is_err());
    }

    #[traced_test]
    #[test]
    fn unknown_locale_falls_back_to_default() {
        assert_eq!(format_date_to_local("2023-01-15", "zz-ZZ"), "Jan 15, 2023");
        assert!(logs_contain("Unknown locale"));
    }

    #[test]
    fn formatting_is_pure() {
        let first = format_date_to_local("2024-12-31", "en-GB");
        let second = format_date_to_local("2024-12-31", "en-GB");
        assert_eq!(first, second);
    }
}
