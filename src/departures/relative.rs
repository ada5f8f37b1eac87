//! Human relative-time text ("in 5 minutes", "a few seconds ago").
//!
//! Thresholds match the ones web clients commonly use, so the text reads the
//! same as a browser rendering the same timestamp.

use chrono::{DateTime, FixedOffset, Utc};

/// Upstream timestamp layout, e.g. `2024-05-01T12:34:00+0200`.
const UPSTREAM_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%z";

/// Days in 400 Gregorian years divided by months in 400 years.
const DAYS_PER_MONTH: f64 = 146_097.0 / 4_800.0;

/// Parses an upstream departure timestamp. RFC 3339 is accepted as well.
pub fn parse_departure_time(text: &str) -> Option<DateTime<FixedOffset>> {
    DateTime::parse_from_str(text, UPSTREAM_FORMAT)
        .or_else(|_| DateTime::parse_from_rfc3339(text))
        .ok()
}

/// Relative text for an upstream timestamp seen from `now`.
///
/// Returns an empty string when the timestamp cannot be parsed.
pub fn departing_in(departure_time: &str, now: DateTime<Utc>) -> String {
    parse_departure_time(departure_time)
        .map(|t| humanize(now, t.with_timezone(&Utc)))
        .unwrap_or_default()
}

/// Describes the distance from `from` to `to`, e.g. "in 3 hours" or "a day ago".
pub fn humanize(from: DateTime<Utc>, to: DateTime<Utc>) -> String {
    let diff_ms = (to - from).num_milliseconds();
    let phrase = distance_phrase(diff_ms.unsigned_abs() as f64 / 1000.0);

    if diff_ms > 0 {
        format!("in {phrase}")
    } else {
        format!("{phrase} ago")
    }
}

fn distance_phrase(abs_secs: f64) -> String {
    let days_exact = abs_secs / 86_400.0;
    let months_exact = days_exact / DAYS_PER_MONTH;

    let seconds = abs_secs.round();
    let minutes = (abs_secs / 60.0).round();
    let hours = (abs_secs / 3_600.0).round();
    let days = days_exact.round();
    let months = months_exact.round();
    let years = (months_exact / 12.0).round();

    if seconds < 45.0 {
        "a few seconds".to_string()
    } else if minutes <= 1.0 {
        "a minute".to_string()
    } else if minutes < 45.0 {
        format!("{minutes} minutes")
    } else if hours <= 1.0 {
        "an hour".to_string()
    } else if hours < 22.0 {
        format!("{hours} hours")
    } else if days <= 1.0 {
        "a day".to_string()
    } else if days < 26.0 {
        format!("{days} days")
    } else if months <= 1.0 {
        "a month".to_string()
    } else if months < 11.0 {
        format!("{months} months")
    } else if years <= 1.0 {
        "a year".to_string()
    } else {
        format!("{years} years")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn base() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 5, 1, 10, 0, 0).unwrap()
    }

    fn after(secs: i64) -> String {
        humanize(base(), base() + Duration::seconds(secs))
    }

    #[test]
    fn future_thresholds() {
        assert_eq!(after(10), "in a few seconds");
        assert_eq!(after(44), "in a few seconds");
        assert_eq!(after(45), "in a minute");
        assert_eq!(after(89), "in a minute");
        assert_eq!(after(5 * 60), "in 5 minutes");
        assert_eq!(after(44 * 60), "in 44 minutes");
        assert_eq!(after(45 * 60), "in an hour");
        assert_eq!(after(3 * 3_600), "in 3 hours");
        assert_eq!(after(22 * 3_600), "in a day");
        assert_eq!(after(3 * 86_400), "in 3 days");
        assert_eq!(after(30 * 86_400), "in a month");
        assert_eq!(after(90 * 86_400), "in 3 months");
        assert_eq!(after(365 * 86_400), "in a year");
        assert_eq!(after(3 * 365 * 86_400), "in 3 years");
    }

    #[test]
    fn past_and_now() {
        assert_eq!(after(-120), "2 minutes ago");
        assert_eq!(after(0), "a few seconds ago");
    }

    #[test]
    fn parses_upstream_offset_format() {
        let t = parse_departure_time("2024-05-01T12:34:00+0200").unwrap();
        assert_eq!(t.with_timezone(&Utc), Utc.with_ymd_and_hms(2024, 5, 1, 10, 34, 0).unwrap());
    }

    #[test]
    fn parses_rfc3339() {
        assert!(parse_departure_time("2024-05-01T12:34:00+02:00").is_some());
        assert!(parse_departure_time("not a time").is_none());
    }

    #[test]
    fn departing_in_from_upstream_text() {
        // 12:05+02:00 is 10:05 UTC, five minutes after base()
        assert_eq!(departing_in("2024-05-01T12:05:00+0200", base()), "in 5 minutes");
        assert_eq!(departing_in("", base()), "");
    }
}
