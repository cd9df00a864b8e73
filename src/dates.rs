//! Date formatting for the wire payload and for display.

use chrono::{Datelike, NaiveDate};

/// Wire format for booking dates (`yyyy-MM-dd`)
pub const ISO_DATE_FORMAT: &str = "%Y-%m-%d";

/// Format a date as `2025-07-01`
pub fn format_iso(date: NaiveDate) -> String {
    date.format(ISO_DATE_FORMAT).to_string()
}

/// Format a date in long form, e.g. `July 1st, 2025`
pub fn format_long(date: NaiveDate) -> String {
    format!(
        "{} {}{}, {}",
        date.format("%B"),
        date.day(),
        ordinal_suffix(date.day()),
        date.year()
    )
}

fn ordinal_suffix(day: u32) -> &'static str {
    match (day % 10, day % 100) {
        (_, 11..=13) => "th",
        (1, _) => "st",
        (2, _) => "nd",
        (3, _) => "rd",
        _ => "th",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_format_iso_pads_month_and_day() {
        assert_eq!(format_iso(date(2025, 7, 1)), "2025-07-01");
        assert_eq!(format_iso(date(2026, 12, 31)), "2026-12-31");
    }

    #[test]
    fn test_format_long() {
        assert_eq!(format_long(date(2025, 7, 1)), "July 1st, 2025");
        assert_eq!(format_long(date(2025, 3, 22)), "March 22nd, 2025");
        assert_eq!(format_long(date(2025, 10, 3)), "October 3rd, 2025");
        assert_eq!(format_long(date(2025, 2, 14)), "February 14th, 2025");
    }

    #[test]
    fn test_teens_take_th() {
        assert_eq!(ordinal_suffix(11), "th");
        assert_eq!(ordinal_suffix(12), "th");
        assert_eq!(ordinal_suffix(13), "th");
        assert_eq!(ordinal_suffix(21), "st");
        assert_eq!(ordinal_suffix(23), "rd");
        assert_eq!(ordinal_suffix(31), "st");
    }
}
