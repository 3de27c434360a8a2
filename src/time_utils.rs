// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Shared helpers for date/time parsing and formatting.

use chrono::{DateTime, Datelike, FixedOffset, Weekday};

const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Format a local timestamp as `YYYY-MM-DD HH:MM:SS+HH:MM`.
pub fn format_local_timestamp(date: &DateTime<FixedOffset>) -> String {
    date.format("%Y-%m-%d %H:%M:%S%:z").to_string()
}

/// Parse a reference time zone: `UTC`, `Z`, or a `+HH:MM` / `-HH:MM` offset.
pub fn parse_time_zone(value: &str) -> Option<FixedOffset> {
    let value = value.trim();
    if value.eq_ignore_ascii_case("utc") || value.eq_ignore_ascii_case("z") {
        return FixedOffset::east_opt(0);
    }

    let (sign, rest) = match *value.as_bytes().first()? {
        b'+' => (1, &value[1..]),
        b'-' => (-1, &value[1..]),
        _ => return None,
    };
    let (hours, minutes) = rest.split_once(':').unwrap_or((rest, "0"));
    let hours: i32 = hours.parse().ok()?;
    let minutes: i32 = minutes.parse().ok()?;
    if !(0..24).contains(&hours) || !(0..60).contains(&minutes) {
        return None;
    }

    FixedOffset::east_opt(sign * (hours * 3600 + minutes * 60))
}

/// English day name, independent of the process locale.
pub fn weekday_name(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

/// English month name for a date.
pub fn month_name<D: Datelike>(date: &D) -> &'static str {
    MONTH_NAMES[date.month0() as usize]
}

/// Month number (1-12) for an English month name, case-insensitive.
pub fn month_from_name(name: &str) -> Option<u32> {
    MONTH_NAMES
        .iter()
        .position(|m| m.eq_ignore_ascii_case(name))
        .map(|i| i as u32 + 1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, TimeZone};

    #[test]
    fn test_parse_time_zone() {
        assert_eq!(parse_time_zone("UTC"), FixedOffset::east_opt(0));
        assert_eq!(parse_time_zone("z"), FixedOffset::east_opt(0));
        assert_eq!(parse_time_zone("+02:00"), FixedOffset::east_opt(7200));
        assert_eq!(parse_time_zone("-05:30"), FixedOffset::west_opt(19800));
        assert_eq!(parse_time_zone("+01"), FixedOffset::east_opt(3600));
        assert_eq!(parse_time_zone("Europe/Amsterdam"), None);
        assert_eq!(parse_time_zone("+25:00"), None);
        assert_eq!(parse_time_zone(""), None);
    }

    #[test]
    fn test_format_local_timestamp() {
        let tz = FixedOffset::east_opt(7200).unwrap();
        let date = tz.with_ymd_and_hms(2022, 4, 1, 10, 0, 0).unwrap();
        assert_eq!(format_local_timestamp(&date), "2022-04-01 10:00:00+02:00");
    }

    #[test]
    fn test_names() {
        let date = NaiveDate::from_ymd_opt(2022, 4, 1).unwrap();
        assert_eq!(weekday_name(date.weekday()), "Friday");
        assert_eq!(month_name(&date), "April");
        assert_eq!(month_from_name("APRIL"), Some(4));
        assert_eq!(month_from_name("december"), Some(12));
        assert_eq!(month_from_name("Smarch"), None);
    }
}
