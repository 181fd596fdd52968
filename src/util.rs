//! Time helpers shared by the views and forms.

use time::macros::format_description;
use time::{OffsetDateTime, PrimitiveDateTime};

/// The current time, which decides whether a show is past or upcoming.
pub fn current_time() -> OffsetDateTime {
    OffsetDateTime::now_utc()
}

/// How much detail to show when displaying a show's start time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateFormat {
    /// `Tuesday May, 21, 2019 at 9:30PM`
    Full,
    /// `Tue 05, 21, 2019 9:30PM`
    Medium,
}

pub fn format_datetime(time: OffsetDateTime, format: DateFormat) -> String {
    let formatted = match format {
        DateFormat::Full => time.format(format_description!(
            "[weekday repr:long] [month repr:long], [day padding:none], [year] at [hour repr:12 padding:none]:[minute][period]"
        )),
        DateFormat::Medium => time.format(format_description!(
            "[weekday repr:short] [month], [day], [year] [hour repr:12 padding:none]:[minute][period]"
        )),
    };

    formatted.unwrap_or_else(|_| time.to_string())
}

/// Parse a show's start time as submitted by the booking form.
///
/// Both the space-separated form (`2035-04-01 20:00:00`) and the one sent by
/// `datetime-local` inputs (`2035-04-01T20:00`) are accepted, with or without
/// seconds. Times carry no offset and are taken to be UTC.
pub fn parse_start_time(text: &str) -> Option<OffsetDateTime> {
    let text = text.trim();
    let formats = [
        format_description!("[year]-[month]-[day] [hour]:[minute]:[second]"),
        format_description!("[year]-[month]-[day] [hour]:[minute]"),
        format_description!("[year]-[month]-[day]T[hour]:[minute]:[second]"),
        format_description!("[year]-[month]-[day]T[hour]:[minute]"),
    ];

    formats
        .iter()
        .find_map(|format| PrimitiveDateTime::parse(text, *format).ok())
        .map(PrimitiveDateTime::assume_utc)
}

#[cfg(test)]
mod tests {
    use time::macros::datetime;

    use super::*;

    #[test]
    fn formats_full_and_medium_dates() {
        let time = datetime!(2019-05-21 21:30 UTC);

        assert_eq!(
            format_datetime(time, DateFormat::Full),
            "Tuesday May, 21, 2019 at 9:30PM"
        );
        assert_eq!(
            format_datetime(time, DateFormat::Medium),
            "Tue 05, 21, 2019 9:30PM"
        );
    }

    #[test]
    fn morning_hours_are_not_padded() {
        let time = datetime!(2035-01-05 09:05 UTC);
        assert_eq!(
            format_datetime(time, DateFormat::Medium),
            "Fri 01, 05, 2035 9:05AM"
        );
    }

    #[test]
    fn parses_form_start_times() {
        let expected = datetime!(2035-04-01 20:00 UTC);

        assert_eq!(parse_start_time("2035-04-01 20:00:00"), Some(expected));
        assert_eq!(parse_start_time("2035-04-01 20:00"), Some(expected));
        assert_eq!(parse_start_time("2035-04-01T20:00"), Some(expected));
        assert_eq!(parse_start_time(" 2035-04-01T20:00:00 "), Some(expected));
    }

    #[test]
    fn rejects_unparseable_start_times() {
        assert_eq!(parse_start_time(""), None);
        assert_eq!(parse_start_time("next tuesday"), None);
        assert_eq!(parse_start_time("2035-13-01 20:00"), None);
    }
}
