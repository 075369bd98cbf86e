//! Recurrence rules (RFC 5545 §3.3.10).

use std::fmt;

use super::DateTime;
use crate::error::{RfcError, RfcResult, check_range};

/// Recurrence frequency (`FREQ`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Frequency {
    Yearly,
    Monthly,
    Weekly,
    Daily,
    Hourly,
    Minutely,
    Secondly,
}

impl Frequency {
    #[must_use]
    pub const fn as_token(self) -> &'static str {
        match self {
            Self::Yearly => "YEARLY",
            Self::Monthly => "MONTHLY",
            Self::Weekly => "WEEKLY",
            Self::Daily => "DAILY",
            Self::Hourly => "HOURLY",
            Self::Minutely => "MINUTELY",
            Self::Secondly => "SECONDLY",
        }
    }

    #[must_use]
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "YEARLY" => Some(Self::Yearly),
            "MONTHLY" => Some(Self::Monthly),
            "WEEKLY" => Some(Self::Weekly),
            "DAILY" => Some(Self::Daily),
            "HOURLY" => Some(Self::Hourly),
            "MINUTELY" => Some(Self::Minutely),
            "SECONDLY" => Some(Self::Secondly),
            _ => None,
        }
    }
}

/// Day of the week, as used by `BYDAY` and `WKST`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl Weekday {
    #[must_use]
    pub const fn as_token(self) -> &'static str {
        match self {
            Self::Monday => "MO",
            Self::Tuesday => "TU",
            Self::Wednesday => "WE",
            Self::Thursday => "TH",
            Self::Friday => "FR",
            Self::Saturday => "SA",
            Self::Sunday => "SU",
        }
    }

    #[must_use]
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "MO" => Some(Self::Monday),
            "TU" => Some(Self::Tuesday),
            "WE" => Some(Self::Wednesday),
            "TH" => Some(Self::Thursday),
            "FR" => Some(Self::Friday),
            "SA" => Some(Self::Saturday),
            "SU" => Some(Self::Sunday),
            _ => None,
        }
    }
}

/// A `BYDAY` entry: a weekday with an optional signed occurrence (`2MO`, `-1FR`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WeekdayNum {
    ordinal: Option<i32>,
    weekday: Weekday,
}

impl WeekdayNum {
    /// Every occurrence of `weekday` within the period.
    #[must_use]
    pub const fn every(weekday: Weekday) -> Self {
        Self {
            ordinal: None,
            weekday,
        }
    }

    /// The `ordinal`-th occurrence, counting from the end when negative.
    ///
    /// ## Errors
    /// Returns `RangeError` unless `ordinal` is within ±1..=53.
    pub fn nth(ordinal: i32, weekday: Weekday) -> RfcResult<Self> {
        check_signed_range("byday occurrence", ordinal, 53)?;
        Ok(Self {
            ordinal: Some(ordinal),
            weekday,
        })
    }

    #[must_use]
    pub const fn ordinal(&self) -> Option<i32> {
        self.ordinal
    }

    #[must_use]
    pub const fn weekday(&self) -> Weekday {
        self.weekday
    }
}

impl fmt::Display for WeekdayNum {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(n) = self.ordinal {
            write!(f, "{n}")?;
        }
        f.write_str(self.weekday.as_token())
    }
}

/// How a recurrence ends.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecurrenceEnd {
    /// Last possible occurrence (inclusive).
    Until(DateTime),
    /// Total number of occurrences.
    Count(u32),
}

/// A recurrence rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecurrenceRule {
    frequency: Frequency,
    end: Option<RecurrenceEnd>,
    interval: u32,
    week_start: Option<Weekday>,
    by_second: Vec<i32>,
    by_minute: Vec<i32>,
    by_hour: Vec<i32>,
    by_day: Vec<WeekdayNum>,
    by_month_day: Vec<i32>,
    by_year_day: Vec<i32>,
    by_week_no: Vec<i32>,
    by_month: Vec<i32>,
}

impl RecurrenceRule {
    #[must_use]
    pub const fn new(frequency: Frequency) -> Self {
        Self {
            frequency,
            end: None,
            interval: 1,
            week_start: None,
            by_second: Vec::new(),
            by_minute: Vec::new(),
            by_hour: Vec::new(),
            by_day: Vec::new(),
            by_month_day: Vec::new(),
            by_year_day: Vec::new(),
            by_week_no: Vec::new(),
            by_month: Vec::new(),
        }
    }

    #[must_use]
    pub const fn frequency(&self) -> Frequency {
        self.frequency
    }

    pub fn set_frequency(&mut self, frequency: Frequency) {
        self.frequency = frequency;
    }

    #[must_use]
    pub const fn end(&self) -> Option<&RecurrenceEnd> {
        self.end.as_ref()
    }

    /// Ends the recurrence at `until`.
    ///
    /// ## Errors
    /// Returns `ValidationError` if a count is already set or `until` is a
    /// zoned date-time (only dates, UTC and floating values are allowed).
    pub fn set_until(&mut self, until: DateTime) -> RfcResult<()> {
        if matches!(self.end, Some(RecurrenceEnd::Count(_))) {
            return Err(RfcError::validation(
                "recurrence cannot have both until and count",
            ));
        }
        if until.tzid().is_some() {
            return Err(RfcError::validation(
                "recurrence until must be a date, a UTC or a floating date-time",
            ));
        }
        self.end = Some(RecurrenceEnd::Until(until));
        Ok(())
    }

    /// Ends the recurrence after `count` occurrences.
    ///
    /// ## Errors
    /// Returns `ValidationError` if an until date is already set and
    /// `RangeError` for a zero count.
    pub fn set_count(&mut self, count: u32) -> RfcResult<()> {
        if matches!(self.end, Some(RecurrenceEnd::Until(_))) {
            return Err(RfcError::validation(
                "recurrence cannot have both until and count",
            ));
        }
        check_range("count", i64::from(count), 1, i64::from(u32::MAX))?;
        self.end = Some(RecurrenceEnd::Count(count));
        Ok(())
    }

    /// Makes the recurrence unbounded.
    pub fn clear_end(&mut self) {
        self.end = None;
    }

    #[must_use]
    pub const fn interval(&self) -> u32 {
        self.interval
    }

    /// ## Errors
    /// Returns `RangeError` for a zero interval.
    pub fn set_interval(&mut self, interval: u32) -> RfcResult<()> {
        check_range("interval", i64::from(interval), 1, i64::from(u32::MAX))?;
        self.interval = interval;
        Ok(())
    }

    #[must_use]
    pub const fn week_start(&self) -> Option<Weekday> {
        self.week_start
    }

    pub fn set_week_start(&mut self, week_start: Weekday) {
        self.week_start = Some(week_start);
    }

    #[must_use]
    pub fn by_second(&self) -> &[i32] {
        &self.by_second
    }

    /// ## Errors
    /// Returns `RangeError` for entries outside 0..=60.
    pub fn set_by_second(&mut self, seconds: &[i32]) -> RfcResult<()> {
        self.by_second = checked_list("bysecond", seconds, 0, 60)?;
        Ok(())
    }

    #[must_use]
    pub fn by_minute(&self) -> &[i32] {
        &self.by_minute
    }

    /// ## Errors
    /// Returns `RangeError` for entries outside 0..=59.
    pub fn set_by_minute(&mut self, minutes: &[i32]) -> RfcResult<()> {
        self.by_minute = checked_list("byminute", minutes, 0, 59)?;
        Ok(())
    }

    #[must_use]
    pub fn by_hour(&self) -> &[i32] {
        &self.by_hour
    }

    /// ## Errors
    /// Returns `RangeError` for entries outside 0..=23.
    pub fn set_by_hour(&mut self, hours: &[i32]) -> RfcResult<()> {
        self.by_hour = checked_list("byhour", hours, 0, 23)?;
        Ok(())
    }

    #[must_use]
    pub fn by_day(&self) -> &[WeekdayNum] {
        &self.by_day
    }

    pub fn set_by_day(&mut self, days: &[WeekdayNum]) {
        self.by_day = days.to_vec();
    }

    #[must_use]
    pub fn by_month_day(&self) -> &[i32] {
        &self.by_month_day
    }

    /// ## Errors
    /// Returns `RangeError` for entries outside ±1..=31.
    pub fn set_by_month_day(&mut self, days: &[i32]) -> RfcResult<()> {
        self.by_month_day = checked_signed_list("bymonthday", days, 31)?;
        Ok(())
    }

    #[must_use]
    pub fn by_year_day(&self) -> &[i32] {
        &self.by_year_day
    }

    /// ## Errors
    /// Returns `RangeError` for entries outside ±1..=366.
    pub fn set_by_year_day(&mut self, days: &[i32]) -> RfcResult<()> {
        self.by_year_day = checked_signed_list("byyearday", days, 366)?;
        Ok(())
    }

    #[must_use]
    pub fn by_week_no(&self) -> &[i32] {
        &self.by_week_no
    }

    /// ## Errors
    /// Returns `RangeError` for entries outside ±1..=53.
    pub fn set_by_week_no(&mut self, weeks: &[i32]) -> RfcResult<()> {
        self.by_week_no = checked_signed_list("byweekno", weeks, 53)?;
        Ok(())
    }

    #[must_use]
    pub fn by_month(&self) -> &[i32] {
        &self.by_month
    }

    /// ## Errors
    /// Returns `RangeError` for entries outside 1..=12.
    pub fn set_by_month(&mut self, months: &[i32]) -> RfcResult<()> {
        self.by_month = checked_list("bymonth", months, 1, 12)?;
        Ok(())
    }
}

fn checked_list(field: &'static str, values: &[i32], min: i64, max: i64) -> RfcResult<Vec<i32>> {
    for &v in values {
        check_range(field, i64::from(v), min, max)?;
    }
    Ok(values.to_vec())
}

/// Checks `±1..=max`; zero is never valid.
fn check_signed_range(field: &'static str, value: i32, max: i64) -> RfcResult<()> {
    if value == 0 {
        return Err(RfcError::range(field, 0, -max, max));
    }
    check_range(field, i64::from(value), -max, max)
}

fn checked_signed_list(field: &'static str, values: &[i32], max: i64) -> RfcResult<Vec<i32>> {
    for &v in values {
        check_signed_range(field, v, max)?;
    }
    Ok(values.to_vec())
}
