//! Value type parsers for xCal (RFC 6321 §3.6).
//!
//! xCal values use the extended ISO 8601 forms (`2014-07-01T12:30:00Z`), not
//! the basic forms of the text format.
#![expect(
    clippy::map_err_ignore,
    reason = "Value parsers report the offending text instead of the source error"
)]

use chrono::{NaiveDate, NaiveTime};

use super::error::{ParseError, ParseResult};
use crate::error::RfcError;
use crate::rfc::xcal::core::{DateTime, Duration, Weekday, WeekdayNum};

/// Turns a model validation failure into a parse error.
pub(crate) fn invalid(err: RfcError) -> ParseError {
    match err {
        RfcError::ParseError(e) => e,
        other => ParseError::invalid_value(other.to_string()),
    }
}

/// Parses a DATE value: `YYYY-MM-DD`.
///
/// ## Errors
/// Returns an error if the text is not exactly a valid extended date.
pub fn parse_date(s: &str) -> ParseResult<DateTime> {
    let date = parse_naive_date(s)?;
    DateTime::from_naive(date, None).map_err(invalid)
}

/// Parses a DATE-TIME value: `YYYY-MM-DDTHH:MM:SS[Z]`, qualified by an
/// optional `tzid` parameter.
///
/// ## Errors
/// Returns an error for malformed text, a `Z` value that also carries a
/// timezone, or an unknown timezone.
pub fn parse_date_time(s: &str, tzid: Option<&str>) -> ParseResult<DateTime> {
    let (body, is_utc) = match s.strip_suffix('Z') {
        Some(stripped) => (stripped, true),
        None => (s, false),
    };

    let (date_str, time_str) = body
        .split_once('T')
        .ok_or_else(|| ParseError::invalid_value(format!("invalid date-time: {s:?}")))?;
    let date = parse_naive_date(date_str)?;
    let time = parse_naive_time(time_str)
        .ok_or_else(|| ParseError::invalid_value(format!("invalid date-time: {s:?}")))?;

    let value = DateTime::from_naive(date, Some(time)).map_err(invalid)?;
    match (is_utc, tzid) {
        (true, Some(tz)) => Err(ParseError::invalid_value(format!(
            "UTC date-time {s:?} cannot carry timezone {tz:?}"
        ))),
        (true, None) => value.with_utc().map_err(invalid),
        (false, Some(tz)) => value.with_timezone(tz).map_err(invalid),
        (false, None) => Ok(value),
    }
}

/// Parses a date or date-time by shape, as found in `until`.
///
/// ## Errors
/// Returns an error if the text is neither form.
pub fn parse_date_or_date_time(s: &str) -> ParseResult<DateTime> {
    if s.contains('T') {
        parse_date_time(s, None)
    } else {
        parse_date(s)
    }
}

fn parse_naive_date(s: &str) -> ParseResult<NaiveDate> {
    let b = s.as_bytes();
    let shaped = b.len() == 10
        && b[4] == b'-'
        && b[7] == b'-'
        && b.iter()
            .enumerate()
            .all(|(i, c)| i == 4 || i == 7 || c.is_ascii_digit());
    if !shaped {
        return Err(ParseError::invalid_value(format!("invalid date: {s:?}")));
    }

    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .map_err(|_| ParseError::invalid_value(format!("invalid date: {s:?}")))
}

fn parse_naive_time(s: &str) -> Option<NaiveTime> {
    let b = s.as_bytes();
    let shaped = b.len() == 8
        && b[2] == b':'
        && b[5] == b':'
        && b.iter()
            .enumerate()
            .all(|(i, c)| i == 2 || i == 5 || c.is_ascii_digit());
    if !shaped {
        return None;
    }

    let hour = s[0..2].parse().ok()?;
    let minute = s[3..5].parse().ok()?;
    let second = s[6..8].parse().ok()?;
    NaiveTime::from_hms_opt(hour, minute, second)
}

/// Parses a DURATION value (RFC 5545 §3.3.6).
///
/// Format: `[+|-]P[nW]` or `[+|-]P[nD][T[nH][nM][nS]]`
///
/// ## Errors
/// Returns an error if the string is not a valid duration.
pub fn parse_duration(s: &str) -> ParseResult<Duration> {
    let err = || ParseError::invalid_value(format!("invalid duration: {s:?}"));

    let (negative, rest) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };
    let rest = rest.strip_prefix('P').ok_or_else(err)?;
    if rest.is_empty() {
        return Err(err());
    }

    let mut builder = Duration::builder();
    if negative {
        builder = builder.negative();
    }

    if let Some(weeks) = rest.strip_suffix('W') {
        let weeks = weeks.parse().map_err(|_| err())?;
        return builder.weeks(weeks).build().map_err(invalid);
    }

    let (date_part, time_part) = match rest.split_once('T') {
        Some((d, t)) if !t.is_empty() => (d, Some(t)),
        Some(_) => return Err(err()),
        None => (rest, None),
    };

    if !date_part.is_empty() {
        let days = date_part.strip_suffix('D').ok_or_else(err)?;
        builder = builder.days(days.parse().map_err(|_| err())?);
    }

    if let Some(mut time) = time_part {
        let mut last = 0;
        while !time.is_empty() {
            let end = time
                .find(|c: char| !c.is_ascii_digit())
                .filter(|&i| i > 0)
                .ok_or_else(err)?;
            let n: u32 = time[..end].parse().map_err(|_| err())?;
            let unit = time.as_bytes()[end];
            let rank = match unit {
                b'H' => 1,
                b'M' => 2,
                b'S' => 3,
                _ => return Err(err()),
            };
            if rank <= last {
                return Err(err());
            }
            builder = match unit {
                b'H' => builder.hours(n),
                b'M' => builder.minutes(n),
                _ => builder.seconds(n),
            };
            last = rank;
            time = &time[end + 1..];
        }
    }

    builder.build().map_err(invalid)
}

/// Parses an INTEGER value.
///
/// ## Errors
/// Returns an error if the text is not a decimal integer.
pub fn parse_integer(s: &str) -> ParseResult<i64> {
    s.parse()
        .map_err(|_| ParseError::invalid_value(format!("invalid integer: {s:?}")))
}

/// Parses a BOOLEAN value (`true` / `false`, per XML Schema).
///
/// ## Errors
/// Returns an error for any other text.
pub fn parse_boolean(s: &str) -> ParseResult<bool> {
    match s {
        "true" | "1" => Ok(true),
        "false" | "0" => Ok(false),
        _ => Err(ParseError::invalid_value(format!("invalid boolean: {s:?}"))),
    }
}

/// Parses a single weekday with optional ordinal (e.g., "MO", "1MO", "-1FR").
///
/// ## Errors
/// Returns an unknown-token error for the weekday and an invalid-value error
/// for a bad ordinal.
pub fn parse_weekday_num(s: &str) -> ParseResult<WeekdayNum> {
    if s.len() < 2 || !s.is_char_boundary(s.len() - 2) {
        return Err(ParseError::invalid_value(format!("invalid byday: {s:?}")));
    }

    let (ordinal_str, weekday_str) = s.split_at(s.len() - 2);
    let weekday = parse_weekday(weekday_str)?;

    if ordinal_str.is_empty() {
        return Ok(WeekdayNum::every(weekday));
    }
    let ordinal = ordinal_str
        .parse()
        .map_err(|_| ParseError::invalid_value(format!("invalid byday: {s:?}")))?;
    WeekdayNum::nth(ordinal, weekday).map_err(invalid)
}

/// ## Errors
/// Returns an unknown-token error for anything but `MO`..`SU`.
pub fn parse_weekday(s: &str) -> ParseResult<Weekday> {
    Weekday::from_token(s).ok_or_else(|| ParseError::unknown_token("weekday", s))
}

#[cfg(test)]
mod tests {
    use super::super::error::ParseErrorKind;
    use super::*;

    #[test]
    fn parse_date_basic() {
        let date = parse_date("2014-07-05").unwrap();
        assert!(date.is_date_only());
        assert_eq!((date.year(), date.month(), date.day()), (2014, 7, 5));
    }

    #[test]
    fn parse_date_invalid() {
        assert!(parse_date("20140705").is_err());
        assert!(parse_date("2014-7-05").is_err());
        assert!(parse_date("2014-02-30").is_err());
        assert!(parse_date(" 2014-07-05").is_err());
    }

    #[test]
    fn parse_date_time_forms() {
        let utc = parse_date_time("2014-07-01T12:30:00Z", None).unwrap();
        assert!(utc.is_utc());

        let floating = parse_date_time("2014-07-01T12:30:00", None).unwrap();
        assert!(floating.is_floating());

        let zoned = parse_date_time("2014-07-01T12:30:00", Some("Europe/London")).unwrap();
        assert_eq!(zoned.tzid(), Some("Europe/London"));
        assert_eq!(zoned.minute(), Some(30));
    }

    #[test]
    fn parse_date_time_rejects_bad_zone() {
        let err = parse_date_time("2014-07-01T12:30:00", Some("Mars/Olympus")).unwrap_err();
        assert_eq!(err.kind, ParseErrorKind::InvalidValue);
        assert!(parse_date_time("2014-07-01T12:30:00Z", Some("Europe/London")).is_err());
        assert!(parse_date_time("2014-07-01T24:00:00", None).is_err());
        assert!(parse_date_time("2014-07-01", None).is_err());
    }

    #[test]
    fn parse_duration_weeks() {
        assert_eq!(parse_duration("P2W").unwrap(), Duration::weeks(2));
    }

    #[test]
    fn parse_duration_days_time() {
        let d = parse_duration("P1DT2H30M").unwrap();
        assert_eq!(d.day_count(), 1);
        assert_eq!(d.hour_count(), 2);
        assert_eq!(d.minute_count(), 30);
        assert_eq!(d.to_string(), "P1DT2H30M");
    }

    #[test]
    fn parse_duration_negative() {
        let d = parse_duration("-PT15M").unwrap();
        assert!(d.is_negative());
        assert_eq!(d.as_seconds(), -900);
    }

    #[test]
    fn parse_duration_invalid() {
        for bad in ["", "P", "1D", "PT", "P1H", "PT1D", "PT1M1H", "P1W2D", "PxD"] {
            assert!(parse_duration(bad).is_err(), "{bad} should be rejected");
        }
    }

    #[test]
    fn parse_weekday_num_forms() {
        assert_eq!(
            parse_weekday_num("2MO").unwrap(),
            WeekdayNum::nth(2, Weekday::Monday).unwrap()
        );
        assert_eq!(
            parse_weekday_num("-1FR").unwrap(),
            WeekdayNum::nth(-1, Weekday::Friday).unwrap()
        );
        assert_eq!(
            parse_weekday_num("SU").unwrap(),
            WeekdayNum::every(Weekday::Sunday)
        );
        assert_eq!(
            parse_weekday_num("2XX").unwrap_err().kind,
            ParseErrorKind::UnknownToken
        );
        assert!(parse_weekday_num("0MO").is_err());
    }

    #[test]
    fn parse_boolean_values() {
        assert!(parse_boolean("true").unwrap());
        assert!(!parse_boolean("false").unwrap());
        assert!(parse_boolean("TRUE").is_err());
    }
}
