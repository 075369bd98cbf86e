//! Date and date-time values (RFC 5545 §3.3.4, §3.3.5).

use std::fmt;

use chrono::{Datelike, NaiveDate, NaiveTime, Timelike};
use chrono_tz::Tz;

use crate::error::{RfcError, RfcResult};

/// Years representable in the four-digit xCal date form.
const YEAR_RANGE: std::ops::RangeInclusive<i32> = 0..=9999;

/// Form of a DATE-TIME value.
///
/// All-day dates always report `Floating`; the form only has meaning when a
/// time of day is present.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum DateTimeForm {
    /// Same wall-clock time in any timezone.
    Floating,
    /// Absolute instant, written with a `Z` suffix.
    Utc,
    /// Local time in an IANA (Olson) timezone.
    Zoned {
        /// The IANA timezone identifier.
        tzid: String,
    },
}

/// A calendar date with an optional time of day and timezone form.
///
/// Values are immutable; [`DateTime::with_timezone`] and
/// [`DateTime::with_utc`] return new values.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DateTime {
    date: NaiveDate,
    time: Option<NaiveTime>,
    form: DateTimeForm,
}

impl DateTime {
    /// Creates an all-day date.
    ///
    /// ## Errors
    /// Returns `ValidationError` if the date does not exist or the year is
    /// outside 0..=9999.
    pub fn date(year: i32, month: u32, day: u32) -> RfcResult<Self> {
        Ok(Self {
            date: checked_date(year, month, day)?,
            time: None,
            form: DateTimeForm::Floating,
        })
    }

    /// Creates a floating date-time.
    ///
    /// ## Errors
    /// Returns `ValidationError` if the date or the time of day is invalid.
    pub fn new(
        year: i32,
        month: u32,
        day: u32,
        hour: u32,
        minute: u32,
        second: u32,
    ) -> RfcResult<Self> {
        let time = NaiveTime::from_hms_opt(hour, minute, second).ok_or_else(|| {
            RfcError::validation(format!(
                "invalid time of day {hour:02}:{minute:02}:{second:02}"
            ))
        })?;

        Ok(Self {
            date: checked_date(year, month, day)?,
            time: Some(time),
            form: DateTimeForm::Floating,
        })
    }

    /// Creates a UTC date-time.
    ///
    /// ## Errors
    /// Returns `ValidationError` if the date or the time of day is invalid.
    pub fn utc(
        year: i32,
        month: u32,
        day: u32,
        hour: u32,
        minute: u32,
        second: u32,
    ) -> RfcResult<Self> {
        Self::new(year, month, day, hour, minute, second)?.with_utc()
    }

    /// Creates a floating value from chrono parts; `None` yields an all-day date.
    ///
    /// ## Errors
    /// Returns `ValidationError` for years outside 0..=9999 or times with a
    /// fractional second.
    pub fn from_naive(date: NaiveDate, time: Option<NaiveTime>) -> RfcResult<Self> {
        if !YEAR_RANGE.contains(&date.year()) {
            return Err(RfcError::validation(format!(
                "year {} is outside 0..=9999",
                date.year()
            )));
        }
        if time.is_some_and(|t| t.nanosecond() != 0) {
            return Err(RfcError::validation(
                "fractional seconds are not representable",
            ));
        }

        Ok(Self {
            date,
            time,
            form: DateTimeForm::Floating,
        })
    }

    /// Returns this date-time in the given IANA timezone.
    ///
    /// ## Errors
    /// Returns `ValidationError` for an all-day date or an identifier that is
    /// not a known Olson zone name (`"Z"` and Windows zone names included).
    pub fn with_timezone(self, tzid: &str) -> RfcResult<Self> {
        if self.time.is_none() {
            return Err(RfcError::validation(format!(
                "all-day date {self} cannot carry timezone {tzid:?}"
            )));
        }
        if tzid.parse::<Tz>().is_err() {
            return Err(RfcError::validation(format!(
                "{tzid:?} is not an Olson timezone"
            )));
        }

        Ok(Self {
            form: DateTimeForm::Zoned {
                tzid: tzid.to_string(),
            },
            ..self
        })
    }

    /// Returns this date-time as a UTC instant with the same wall-clock fields.
    ///
    /// ## Errors
    /// Returns `ValidationError` for an all-day date.
    pub fn with_utc(self) -> RfcResult<Self> {
        if self.time.is_none() {
            return Err(RfcError::validation(format!(
                "all-day date {self} cannot be UTC"
            )));
        }

        Ok(Self {
            form: DateTimeForm::Utc,
            ..self
        })
    }

    #[must_use]
    pub fn year(&self) -> i32 {
        self.date.year()
    }

    #[must_use]
    pub fn month(&self) -> u32 {
        self.date.month()
    }

    #[must_use]
    pub fn day(&self) -> u32 {
        self.date.day()
    }

    #[must_use]
    pub fn hour(&self) -> Option<u32> {
        self.time.map(|t| t.hour())
    }

    #[must_use]
    pub fn minute(&self) -> Option<u32> {
        self.time.map(|t| t.minute())
    }

    #[must_use]
    pub fn second(&self) -> Option<u32> {
        self.time.map(|t| t.second())
    }

    /// Returns whether this value is an all-day date.
    #[must_use]
    pub const fn is_date_only(&self) -> bool {
        self.time.is_none()
    }

    #[must_use]
    pub fn is_utc(&self) -> bool {
        matches!(self.form, DateTimeForm::Utc)
    }

    /// Returns whether this is a date-time without UTC marker or timezone.
    #[must_use]
    pub fn is_floating(&self) -> bool {
        self.time.is_some() && matches!(self.form, DateTimeForm::Floating)
    }

    /// Returns the timezone ID if this is a zoned time.
    #[must_use]
    pub fn tzid(&self) -> Option<&str> {
        match &self.form {
            DateTimeForm::Zoned { tzid } => Some(tzid),
            DateTimeForm::Floating | DateTimeForm::Utc => None,
        }
    }

    #[must_use]
    pub const fn form(&self) -> &DateTimeForm {
        &self.form
    }

    #[must_use]
    pub const fn naive_date(&self) -> NaiveDate {
        self.date
    }

    #[must_use]
    pub const fn naive_time(&self) -> Option<NaiveTime> {
        self.time
    }
}

/// Formats the xCal value text: `2014-07-05` or `2014-07-01T12:30:00[Z]`.
///
/// The timezone of a zoned value is not part of the text; the writer emits it
/// as a `tzid` parameter.
impl fmt::Display for DateTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:04}-{:02}-{:02}",
            self.date.year(),
            self.date.month(),
            self.date.day()
        )?;
        if let Some(time) = self.time {
            write!(
                f,
                "T{:02}:{:02}:{:02}",
                time.hour(),
                time.minute(),
                time.second()
            )?;
            if self.is_utc() {
                write!(f, "Z")?;
            }
        }
        Ok(())
    }
}

fn checked_date(year: i32, month: u32, day: u32) -> RfcResult<NaiveDate> {
    if !YEAR_RANGE.contains(&year) {
        return Err(RfcError::validation(format!(
            "year {year} is outside 0..=9999"
        )));
    }
    NaiveDate::from_ymd_opt(year, month, day).ok_or_else(|| {
        RfcError::validation(format!("invalid date {year:04}-{month:02}-{day:02}"))
    })
}
