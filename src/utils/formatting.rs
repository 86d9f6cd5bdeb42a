//! Display formatting helpers for expense values.
//!
//! Dates are always rendered with the same English month abbreviations and
//! in UTC, so the output never depends on the host locale or timezone.

use crate::expenses::DateValue;
use chrono::prelude::*;

/// Text shown for dates that cannot be parsed.
///
pub const INVALID_DATE: &str = "Invalid Date";

/// Month abbreviation followed by the zero-padded day, e.g. "Jan 05".
///
const DISPLAY_FORMAT: &str = "%b %d";

const DATE_TIME_FORMATS: [&str; 3] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
];

const DATE_FORMATS: [&str; 4] = ["%Y-%m-%d", "%Y/%m/%d", "%m/%d/%Y", "%B %d, %Y"];

/// Format a date value as "<short month> <two-digit day>".
///
/// # Returns
/// The formatted date, or `INVALID_DATE` when the value cannot be read.
pub fn format_date(value: &DateValue) -> String {
    parse_date(value)
        .map(|date| date.format(DISPLAY_FORMAT).to_string())
        .unwrap_or_else(|| INVALID_DATE.to_string())
}

/// Read a date value into a calendar date. Timestamps carrying an offset are
/// converted to UTC first.
///
pub fn parse_date(value: &DateValue) -> Option<NaiveDate> {
    match value {
        DateValue::Millis(ms) => Utc
            .timestamp_millis_opt(*ms)
            .single()
            .map(|dt| dt.date_naive()),
        DateValue::Text(text) => parse_date_str(text.trim()),
    }
}

fn parse_date_str(text: &str) -> Option<NaiveDate> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(text) {
        return Some(dt.with_timezone(&Utc).date_naive());
    }
    for format in DATE_TIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(text, format) {
            return Some(dt.date());
        }
    }
    DATE_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(text, format).ok())
}

/// Uppercase the first letter of every whitespace separated word, leaving the
/// remaining letters as they are. Leading punctuation such as an opening
/// parenthesis is skipped.
///
pub fn capitalize_words(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    let mut at_word_start = true;
    for c in text.chars() {
        if c.is_whitespace() {
            at_word_start = true;
            result.push(c);
        } else if at_word_start && c.is_alphanumeric() {
            at_word_start = false;
            result.extend(c.to_uppercase());
        } else {
            result.push(c);
        }
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(s: &str) -> DateValue {
        DateValue::Text(s.to_string())
    }

    #[test]
    fn format_date_only() {
        assert_eq!(format_date(&text("2023-01-05")), "Jan 05");
        assert_eq!(format_date(&text("2023-12-31")), "Dec 31");
    }

    #[test]
    fn format_timestamps() {
        assert_eq!(format_date(&text("2023-03-09T10:15:00")), "Mar 09");
        assert_eq!(format_date(&text("2023-03-09T10:15:00.123Z")), "Mar 09");
        assert_eq!(format_date(&text("2023-03-09 23:59:59")), "Mar 09");
    }

    #[test]
    fn format_offset_is_read_in_utc() {
        assert_eq!(format_date(&text("2023-03-09T23:30:00-05:00")), "Mar 10");
        assert_eq!(format_date(&text("2023-03-10T01:00:00+02:00")), "Mar 09");
    }

    #[test]
    fn format_epoch_millis() {
        // 2023-01-05T00:00:00Z
        assert_eq!(format_date(&DateValue::Millis(1_672_876_800_000)), "Jan 05");
    }

    #[test]
    fn format_other_layouts() {
        assert_eq!(format_date(&text("01/05/2023")), "Jan 05");
        assert_eq!(format_date(&text("January 5, 2023")), "Jan 05");
    }

    #[test]
    fn format_invalid() {
        assert_eq!(format_date(&text("not a date")), INVALID_DATE);
        assert_eq!(format_date(&text("")), INVALID_DATE);
        assert_eq!(format_date(&text("2023-02-30")), INVALID_DATE);
    }

    #[test]
    fn format_is_stable() {
        let value = text("2021-07-04T12:00:00Z");
        let first = format_date(&value);
        for _ in 0..10 {
            assert_eq!(format_date(&value), first);
        }
    }

    #[test]
    fn capitalize() {
        assert_eq!(capitalize_words("travel"), "Travel");
        assert_eq!(capitalize_words("office supplies"), "Office Supplies");
        assert_eq!(capitalize_words("pending  review"), "Pending  Review");
        assert_eq!(capitalize_words("iPhone case"), "IPhone Case");
        assert_eq!(capitalize_words(""), "");
    }

    #[test]
    fn capitalize_skips_leading_punctuation() {
        assert_eq!(capitalize_words("(pending)"), "(Pending)");
        assert_eq!(capitalize_words("\"on hold\""), "\"On Hold\"");
        assert_eq!(capitalize_words("-- travel"), "-- Travel");
    }
}
