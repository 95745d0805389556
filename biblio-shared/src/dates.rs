//! Formatting backend timestamps for display
//!
//! The backend is not consistent about its date serialization, so parsing
//! tries the formats actually observed on the wire. "Now" is always passed
//! in by the caller so the formatting stays testable off the main thread's
//! clock.

use time::format_description::well_known::{Rfc2822, Rfc3339};
use time::macros::format_description;
use time::{Date, OffsetDateTime, PrimitiveDateTime};

fn parse_datetime(raw: &str) -> Option<OffsetDateTime> {
    if let Ok(dt) = OffsetDateTime::parse(raw, &Rfc3339) {
        return Some(dt);
    }
    if let Ok(dt) = OffsetDateTime::parse(raw, &Rfc2822) {
        return Some(dt);
    }
    if let Ok(dt) = PrimitiveDateTime::parse(
        raw,
        format_description!("[year]-[month]-[day]T[hour]:[minute]:[second]"),
    ) {
        return Some(dt.assume_utc());
    }
    if let Ok(date) = Date::parse(raw, format_description!("[year]-[month]-[day]")) {
        return Some(date.midnight().assume_utc());
    }
    None
}

fn parse_date(raw: &str) -> Option<Date> {
    parse_datetime(raw).map(|dt| dt.date())
}

/// dd/mm/yyyy, zero-padded; unparseable input is shown as-is
pub fn short(raw: &str) -> String {
    match parse_date(raw) {
        Some(date) => format!(
            "{:02}/{:02}/{:04}",
            date.day(),
            u8::from(date.month()),
            date.year()
        ),
        None => raw.to_string(),
    }
}

/// "Aug 5, 2025"; unparseable input is shown as-is
pub fn long(raw: &str) -> String {
    match parse_date(raw) {
        Some(date) => {
            let month = format!("{}", date.month());
            format!("{} {}, {}", &month[..3], date.day(), date.year())
        }
        None => raw.to_string(),
    }
}

fn plural(n: i64, unit: &str) -> String {
    if n == 1 {
        format!("1 {unit} ago")
    } else {
        format!("{n} {unit}s ago")
    }
}

/// "n seconds/minutes/hours/days/weeks ago" relative to `now`; anything a
/// month or older falls back to the long date form
pub fn relative(raw: &str, now: OffsetDateTime) -> String {
    const MINUTE: f64 = 60.0;
    const HOUR: f64 = 60.0 * MINUTE;
    const DAY: f64 = 24.0 * HOUR;
    const WEEK: f64 = 7.0 * DAY;
    const MONTH: f64 = 4.0 * WEEK;

    let Some(then) = parse_datetime(raw) else {
        return raw.to_string();
    };

    let secs = ((now - then).whole_seconds() as f64).max(0.0);

    if secs < MINUTE {
        plural(secs.round() as i64, "second")
    } else if secs < HOUR {
        plural((secs / MINUTE).round() as i64, "minute")
    } else if secs < DAY {
        plural((secs / HOUR).round() as i64, "hour")
    } else if secs < WEEK {
        plural((secs / DAY).round() as i64, "day")
    } else if secs < MONTH {
        plural((secs / WEEK).round() as i64, "week")
    } else {
        long(raw)
    }
}

/// [`relative`] against a unix timestamp in milliseconds (what
/// `js_sys::Date::now` returns)
pub fn relative_from_ms(raw: &str, now_unix_ms: f64) -> String {
    match OffsetDateTime::from_unix_timestamp((now_unix_ms / 1000.0) as i64) {
        Ok(now) => relative(raw, now),
        Err(_) => raw.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::datetime;

    #[test]
    fn short_zero_pads_day_and_month() {
        assert_eq!(short("2025-08-05"), "05/08/2025");
        assert_eq!(short("2025-11-23T10:30:00Z"), "23/11/2025");
    }

    #[test]
    fn long_reads_like_a_locale_date() {
        assert_eq!(long("2025-08-05"), "Aug 5, 2025");
        assert_eq!(long("2024-01-31T00:00:00Z"), "Jan 31, 2024");
    }

    #[test]
    fn unparseable_input_passes_through() {
        assert_eq!(short("soon"), "soon");
        assert_eq!(long(""), "");
    }

    #[test]
    fn relative_buckets() {
        let now = datetime!(2025-08-05 12:00:00 UTC);

        assert_eq!(relative("2025-08-05T11:59:30Z", now), "30 seconds ago");
        assert_eq!(relative("2025-08-05T11:55:00Z", now), "5 minutes ago");
        assert_eq!(relative("2025-08-05T09:00:00Z", now), "3 hours ago");
        assert_eq!(relative("2025-08-03T12:00:00Z", now), "2 days ago");
        assert_eq!(relative("2025-07-22T12:00:00Z", now), "2 weeks ago");
    }

    #[test]
    fn relative_singular_units() {
        let now = datetime!(2025-08-05 12:00:00 UTC);
        assert_eq!(relative("2025-08-05T11:59:00Z", now), "1 minute ago");
        assert_eq!(relative("2025-08-04T12:00:00Z", now), "1 day ago");
    }

    #[test]
    fn a_month_or_older_shows_the_date() {
        let now = datetime!(2025-08-05 12:00:00 UTC);
        assert_eq!(relative("2025-05-01T00:00:00Z", now), "May 1, 2025");
    }

    #[test]
    fn future_timestamps_clamp_to_just_now() {
        let now = datetime!(2025-08-05 12:00:00 UTC);
        assert_eq!(relative("2025-08-05T12:00:10Z", now), "0 seconds ago");
    }

    #[test]
    fn rfc2822_wire_dates_parse() {
        assert_eq!(short("Tue, 05 Aug 2025 10:30:00 +0000"), "05/08/2025");
    }
}
