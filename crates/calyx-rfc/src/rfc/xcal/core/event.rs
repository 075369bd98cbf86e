//! VEVENT component.

use super::incidence::all_day_mismatch;
use super::{DateTime, Duration, Incidence, IncidenceProperties};
use crate::error::{RfcError, RfcResult};

/// A scheduled event.
///
/// The end of an event is given either as an explicit end or as a duration,
/// never both.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Event {
    common: IncidenceProperties,
    end: Option<DateTime>,
    duration: Option<Duration>,
    transparent: bool,
}

impl Event {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn end(&self) -> Option<&DateTime> {
        self.end.as_ref()
    }

    /// ## Errors
    /// Returns `ValidationError` if a duration is already set or `end` and
    /// the start disagree on being all-day.
    pub fn set_end(&mut self, end: DateTime) -> RfcResult<()> {
        if self.duration.is_some() {
            return Err(RfcError::validation(
                "event cannot have both an end and a duration",
            ));
        }
        if all_day_mismatch(&end, self.common.start.as_ref()) {
            return Err(RfcError::validation(
                "event start and end must both be all-day or both carry a time",
            ));
        }
        self.end = Some(end);
        Ok(())
    }

    #[must_use]
    pub const fn duration(&self) -> Option<&Duration> {
        self.duration.as_ref()
    }

    /// ## Errors
    /// Returns `ValidationError` if an end is already set.
    pub fn set_duration(&mut self, duration: Duration) -> RfcResult<()> {
        if self.end.is_some() {
            return Err(RfcError::validation(
                "event cannot have both an end and a duration",
            ));
        }
        self.duration = Some(duration);
        Ok(())
    }

    /// Whether the event does not block time (`TRANSP:TRANSPARENT`).
    #[must_use]
    pub const fn transparent(&self) -> bool {
        self.transparent
    }

    pub fn set_transparent(&mut self, transparent: bool) {
        self.transparent = transparent;
    }
}

impl Incidence for Event {
    fn common(&self) -> &IncidenceProperties {
        &self.common
    }

    fn common_mut(&mut self) -> &mut IncidenceProperties {
        &mut self.common
    }

    fn check_start(&self, start: &DateTime) -> RfcResult<()> {
        if all_day_mismatch(start, self.end.as_ref()) {
            return Err(RfcError::validation(
                "event start and end must both be all-day or both carry a time",
            ));
        }
        Ok(())
    }
}
