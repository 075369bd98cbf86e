//! VTODO component.

use super::incidence::all_day_mismatch;
use super::{DateTime, Incidence, IncidenceProperties, check_text};
use crate::error::{RfcError, RfcResult};

/// A task with an optional due date and completion percentage.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Todo {
    common: IncidenceProperties,
    due: Option<DateTime>,
    percent_complete: u8,
    related_to: Vec<String>,
}

impl Todo {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn due(&self) -> Option<&DateTime> {
        self.due.as_ref()
    }

    /// ## Errors
    /// Returns `ValidationError` if `due` and the start disagree on being
    /// all-day.
    pub fn set_due(&mut self, due: DateTime) -> RfcResult<()> {
        if all_day_mismatch(&due, self.common.start.as_ref()) {
            return Err(RfcError::validation(
                "to-do start and due must both be all-day or both carry a time",
            ));
        }
        self.due = Some(due);
        Ok(())
    }

    #[must_use]
    pub const fn percent_complete(&self) -> u8 {
        self.percent_complete
    }

    /// ## Errors
    /// Returns `RangeError` outside 0..=100; the stored value is unchanged.
    pub fn set_percent_complete(&mut self, percent: i32) -> RfcResult<()> {
        match u8::try_from(percent) {
            Ok(p) if p <= 100 => {
                self.percent_complete = p;
                Ok(())
            }
            _ => Err(RfcError::range("percent-complete", percent, 0, 100)),
        }
    }

    /// Uids of the incidences this to-do relates to (`RELATED-TO`), in order.
    #[must_use]
    pub fn related_to(&self) -> &[String] {
        &self.related_to
    }

    /// ## Errors
    /// Returns `ValidationError` if any uid holds text XML cannot carry; the
    /// stored list is unchanged then.
    pub fn set_related_to(&mut self, related: &[String]) -> RfcResult<()> {
        for uid in related {
            check_text("related-to", uid)?;
        }
        self.related_to = related.to_vec();
        Ok(())
    }

    /// ## Errors
    /// Returns `ValidationError` for text XML cannot carry.
    pub fn add_related_to(&mut self, related: impl Into<String>) -> RfcResult<()> {
        let related = related.into();
        check_text("related-to", &related)?;
        self.related_to.push(related);
        Ok(())
    }
}

impl Incidence for Todo {
    fn common(&self) -> &IncidenceProperties {
        &self.common
    }

    fn common_mut(&mut self) -> &mut IncidenceProperties {
        &mut self.common
    }

    fn check_start(&self, start: &DateTime) -> RfcResult<()> {
        if all_day_mismatch(start, self.due.as_ref()) {
            return Err(RfcError::validation(
                "to-do start and due must both be all-day or both carry a time",
            ));
        }
        Ok(())
    }
}
