//! Pure display formatters shared by the section renderers.

use chrono::{DateTime, NaiveDate, NaiveDateTime};

use crate::render::messages::Messages;
use crate::utils::locale::Locale;

/// Highest skill level the API emits.
pub const MAX_SKILL_LEVEL: i64 = 5;

/// Formats a date-like string as a localized "Month Year" label.
///
/// Absent or blank input means the period is still running and yields the
/// locale's "present" sentinel. Input that cannot be read as a calendar date is
/// returned as-is (trimmed).
///
/// # Accepted Formats
///
/// - RFC 3339 timestamps (`2021-06-01T10:00:00Z`, `2021-06-01T10:00:00+02:00`)
/// - Naive timestamps (`2021-06-01T10:00:00`, `2021-06-01T10:00:00.123`, `2021-06-01 10:00:00`)
/// - Dates (`2021-06-01`, `2021/06/01`)
/// - Year and month (`2021-06`)
///
/// # Examples
///
/// ```ignore
/// assert_eq!(format_date(Some("2021-06-01"), Locale::En), "June 2021");
/// assert_eq!(format_date(Some("2021-06-01"), Locale::Es), "junio de 2021");
/// assert_eq!(format_date(None, Locale::En), "Present");
/// ```
pub fn format_date(raw: Option<&str>, locale: Locale) -> String {
    let raw = match raw.map(str::trim) {
        Some(value) if !value.is_empty() => value,
        _ => return Messages::for_locale(locale).present.to_string(),
    };

    match parse_calendar_date(raw) {
        Some(date) => date
            .format_localized(locale.month_year_pattern(), locale.chrono_locale())
            .to_string(),
        None => {
            tracing::warn!(value = raw, "Unparseable date, rendering it verbatim");
            raw.to_string()
        }
    }
}

/// Reads the calendar date out of a date-like string without timezone shifts.
fn parse_calendar_date(raw: &str) -> Option<NaiveDate> {
    if let Ok(timestamp) = DateTime::parse_from_rfc3339(raw) {
        return Some(timestamp.date_naive());
    }

    const DATETIME_PATTERNS: [&str; 4] = [
        "%Y-%m-%dT%H:%M:%S",
        "%Y-%m-%dT%H:%M:%S%.f",
        "%Y-%m-%d %H:%M:%S",
        "%Y-%m-%dT%H:%M",
    ];
    if let Some(timestamp) = DATETIME_PATTERNS
        .iter()
        .find_map(|pattern| NaiveDateTime::parse_from_str(raw, pattern).ok())
    {
        return Some(timestamp.date());
    }

    if let Some(date) = ["%Y-%m-%d", "%Y/%m/%d"]
        .iter()
        .find_map(|pattern| NaiveDate::parse_from_str(raw, pattern).ok())
    {
        return Some(date);
    }

    NaiveDate::parse_from_str(&format!("{raw}-01"), "%Y-%m-%d").ok()
}

/// Maps a 1–5 skill level onto a 20–100 percentage.
///
/// Levels outside the scale are clamped first, so the result always fits a
/// progress bar: `0` and below give `0`, anything above `5` gives `100`.
pub fn skill_percentage(level: i64) -> u8 {
    // Clamped to 0..=5, so the product stays within 0..=100.
    (level.clamp(0, MAX_SKILL_LEVEL) * 20) as u8
}

/// Splits a comma separated technology list into trimmed, non-empty tags.
pub fn split_technologies(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|tag| !tag.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_date_absent_is_present() {
        assert_eq!(format_date(None, Locale::Es), "Presente");
        assert_eq!(format_date(Some(""), Locale::Es), "Presente");
        assert_eq!(format_date(Some("   "), Locale::En), "Present");
    }

    #[test]
    fn test_format_date_plain_date() {
        assert_eq!(format_date(Some("2021-06-01"), Locale::En), "June 2021");
        assert_eq!(format_date(Some("2021-06-01"), Locale::Es), "junio de 2021");
    }

    #[test]
    fn test_format_date_timestamps() {
        assert_eq!(
            format_date(Some("2019-01-15T00:00:00Z"), Locale::En),
            "January 2019"
        );
        assert_eq!(
            format_date(Some("2019-01-15T00:00:00"), Locale::En),
            "January 2019"
        );
        assert_eq!(
            format_date(Some("2019-01-15T08:30:00.000"), Locale::En),
            "January 2019"
        );
    }

    #[test]
    fn test_format_date_does_not_shift_timezone() {
        // Midnight at a negative offset is still the first of the month.
        assert_eq!(
            format_date(Some("2020-03-01T00:00:00-05:00"), Locale::En),
            "March 2020"
        );
    }

    #[test]
    fn test_format_date_year_month() {
        assert_eq!(format_date(Some("2018-11"), Locale::En), "November 2018");
        assert_eq!(format_date(Some("2018/11/05"), Locale::En), "November 2018");
    }

    #[test]
    fn test_format_date_unparseable_is_verbatim() {
        assert_eq!(format_date(Some(" soon "), Locale::En), "soon");
        assert_eq!(format_date(Some("2021-13-40"), Locale::En), "2021-13-40");
    }

    #[test]
    fn test_skill_percentage_scale() {
        for level in 1..=5 {
            assert_eq!(i64::from(skill_percentage(level)), level * 20);
        }
    }

    #[test]
    fn test_skill_percentage_clamps_out_of_range() {
        assert_eq!(skill_percentage(0), 0);
        assert_eq!(skill_percentage(-3), 0);
        assert_eq!(skill_percentage(6), 100);
        assert_eq!(skill_percentage(i64::MAX), 100);
    }

    #[test]
    fn test_split_technologies_trims_tokens() {
        assert_eq!(split_technologies("Go, Rust , TS"), vec!["Go", "Rust", "TS"]);
    }

    #[test]
    fn test_split_technologies_drops_empty_tokens() {
        assert_eq!(split_technologies("Rust,, ,Axum,"), vec!["Rust", "Axum"]);
        assert!(split_technologies("").is_empty());
    }
}
