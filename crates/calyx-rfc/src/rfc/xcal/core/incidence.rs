//! Properties shared by events and to-dos.
//!
//! RFC 5545 calls VEVENT and VTODO "calendar components"; both carry the
//! same descriptive, scheduling and recurrence properties. [`Incidence`]
//! provides those accessors once, over the common [`IncidenceProperties`]
//! storage each entity owns.

use std::fmt;

use super::{Attendee, ContactReference, DateTime, RecurrenceRule, check_text};
use crate::error::{RfcError, RfcResult};

/// Lifecycle status of an event or to-do (`STATUS`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Status {
    NeedsAction,
    Completed,
    InProcess,
    Cancelled,
    Tentative,
    Confirmed,
    Draft,
    Final,
}

impl Status {
    #[must_use]
    pub const fn as_token(self) -> &'static str {
        match self {
            Self::NeedsAction => "NEEDS-ACTION",
            Self::Completed => "COMPLETED",
            Self::InProcess => "IN-PROCESS",
            Self::Cancelled => "CANCELLED",
            Self::Tentative => "TENTATIVE",
            Self::Confirmed => "CONFIRMED",
            Self::Draft => "DRAFT",
            Self::Final => "FINAL",
        }
    }

    #[must_use]
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "NEEDS-ACTION" => Some(Self::NeedsAction),
            "COMPLETED" => Some(Self::Completed),
            "IN-PROCESS" => Some(Self::InProcess),
            "CANCELLED" => Some(Self::Cancelled),
            "TENTATIVE" => Some(Self::Tentative),
            "CONFIRMED" => Some(Self::Confirmed),
            "DRAFT" => Some(Self::Draft),
            "FINAL" => Some(Self::Final),
            _ => None,
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_token())
    }
}

/// Access classification (`CLASS`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Classification {
    Public,
    Private,
    Confidential,
}

impl Classification {
    #[must_use]
    pub const fn as_token(self) -> &'static str {
        match self {
            Self::Public => "PUBLIC",
            Self::Private => "PRIVATE",
            Self::Confidential => "CONFIDENTIAL",
        }
    }

    #[must_use]
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "PUBLIC" => Some(Self::Public),
            "PRIVATE" => Some(Self::Private),
            "CONFIDENTIAL" => Some(Self::Confidential),
            _ => None,
        }
    }
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_token())
    }
}

/// An application-defined property carried through unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CustomProperty {
    identifier: String,
    value: String,
}

impl CustomProperty {
    /// ## Errors
    /// Returns `ValidationError` for an empty identifier or text XML cannot
    /// carry.
    pub fn new(identifier: impl Into<String>, value: impl Into<String>) -> RfcResult<Self> {
        let identifier = identifier.into();
        let value = value.into();
        if identifier.is_empty() {
            return Err(RfcError::validation(
                "custom property identifier must not be empty",
            ));
        }
        check_text("custom property identifier", &identifier)?;
        check_text("custom property value", &value)?;
        Ok(Self { identifier, value })
    }

    #[must_use]
    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }
}

/// Storage for the properties shared by every incidence type.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IncidenceProperties {
    pub(crate) uid: Option<String>,
    pub(crate) created: Option<DateTime>,
    pub(crate) last_modified: Option<DateTime>,
    pub(crate) sequence: Option<u32>,
    pub(crate) classification: Option<Classification>,
    pub(crate) categories: Vec<String>,
    pub(crate) start: Option<DateTime>,
    pub(crate) recurrence_rule: Option<RecurrenceRule>,
    pub(crate) recurrence_dates: Vec<DateTime>,
    pub(crate) exception_dates: Vec<DateTime>,
    pub(crate) summary: Option<String>,
    pub(crate) description: Option<String>,
    pub(crate) priority: Option<u8>,
    pub(crate) status: Option<Status>,
    pub(crate) location: Option<String>,
    pub(crate) url: Option<String>,
    pub(crate) organizer: Option<ContactReference>,
    pub(crate) attendees: Vec<Attendee>,
    pub(crate) custom_properties: Vec<CustomProperty>,
}

fn require_utc(field: &str, value: &DateTime) -> RfcResult<()> {
    if value.is_utc() {
        Ok(())
    } else {
        Err(RfcError::validation(format!(
            "{field} must be a UTC date-time, got {value}"
        )))
    }
}

/// Accessors shared by [`super::Event`] and [`super::Todo`].
///
/// Setters store owned copies; getters over lists return slices reflecting
/// the last replacement plus any later appends. Text setters reject
/// characters an XML document cannot carry, leaving the field unchanged.
pub trait Incidence {
    fn common(&self) -> &IncidenceProperties;

    fn common_mut(&mut self) -> &mut IncidenceProperties;

    /// Cross-field check run before a new start value is stored.
    ///
    /// ## Errors
    /// Implementations return `ValidationError` when `start` conflicts with
    /// fields already set.
    fn check_start(&self, start: &DateTime) -> RfcResult<()>;

    fn uid(&self) -> Option<&str> {
        self.common().uid.as_deref()
    }

    /// ## Errors
    /// Returns `ValidationError` for text XML cannot carry.
    fn set_uid(&mut self, uid: impl Into<String>) -> RfcResult<()> {
        let uid = uid.into();
        check_text("uid", &uid)?;
        self.common_mut().uid = Some(uid);
        Ok(())
    }

    fn created(&self) -> Option<&DateTime> {
        self.common().created.as_ref()
    }

    /// ## Errors
    /// Returns `ValidationError` unless `created` is a UTC date-time.
    fn set_created(&mut self, created: DateTime) -> RfcResult<()> {
        require_utc("created", &created)?;
        self.common_mut().created = Some(created);
        Ok(())
    }

    fn last_modified(&self) -> Option<&DateTime> {
        self.common().last_modified.as_ref()
    }

    /// ## Errors
    /// Returns `ValidationError` unless `last_modified` is a UTC date-time.
    fn set_last_modified(&mut self, last_modified: DateTime) -> RfcResult<()> {
        require_utc("last-modified", &last_modified)?;
        self.common_mut().last_modified = Some(last_modified);
        Ok(())
    }

    fn sequence(&self) -> Option<u32> {
        self.common().sequence
    }

    fn set_sequence(&mut self, sequence: u32) {
        self.common_mut().sequence = Some(sequence);
    }

    fn classification(&self) -> Option<Classification> {
        self.common().classification
    }

    fn set_classification(&mut self, classification: Classification) {
        self.common_mut().classification = Some(classification);
    }

    fn categories(&self) -> &[String] {
        &self.common().categories
    }

    /// ## Errors
    /// Returns `ValidationError` if any category holds text XML cannot
    /// carry; no category is stored then.
    fn set_categories(&mut self, categories: &[String]) -> RfcResult<()> {
        for category in categories {
            check_text("category", category)?;
        }
        self.common_mut().categories = categories.to_vec();
        Ok(())
    }

    /// ## Errors
    /// Returns `ValidationError` for text XML cannot carry.
    fn add_category(&mut self, category: impl Into<String>) -> RfcResult<()> {
        let category = category.into();
        check_text("category", &category)?;
        self.common_mut().categories.push(category);
        Ok(())
    }

    fn start(&self) -> Option<&DateTime> {
        self.common().start.as_ref()
    }

    /// ## Errors
    /// Returns `ValidationError` when the new start disagrees with the end
    /// or due date on being all-day.
    fn set_start(&mut self, start: DateTime) -> RfcResult<()> {
        self.check_start(&start)?;
        self.common_mut().start = Some(start);
        Ok(())
    }

    fn recurrence_rule(&self) -> Option<&RecurrenceRule> {
        self.common().recurrence_rule.as_ref()
    }

    fn set_recurrence_rule(&mut self, rule: RecurrenceRule) {
        self.common_mut().recurrence_rule = Some(rule);
    }

    fn recurrence_dates(&self) -> &[DateTime] {
        &self.common().recurrence_dates
    }

    fn set_recurrence_dates(&mut self, dates: &[DateTime]) {
        self.common_mut().recurrence_dates = dates.to_vec();
    }

    fn add_recurrence_date(&mut self, date: DateTime) {
        self.common_mut().recurrence_dates.push(date);
    }

    fn exception_dates(&self) -> &[DateTime] {
        &self.common().exception_dates
    }

    /// Replaces the exception dates with a copy of `dates`, keeping order.
    fn set_exception_dates(&mut self, dates: &[DateTime]) {
        self.common_mut().exception_dates = dates.to_vec();
    }

    fn add_exception_date(&mut self, date: DateTime) {
        self.common_mut().exception_dates.push(date);
    }

    fn summary(&self) -> Option<&str> {
        self.common().summary.as_deref()
    }

    /// ## Errors
    /// Returns `ValidationError` for text XML cannot carry.
    fn set_summary(&mut self, summary: impl Into<String>) -> RfcResult<()> {
        let summary = summary.into();
        check_text("summary", &summary)?;
        self.common_mut().summary = Some(summary);
        Ok(())
    }

    fn description(&self) -> Option<&str> {
        self.common().description.as_deref()
    }

    /// ## Errors
    /// Returns `ValidationError` for text XML cannot carry.
    fn set_description(&mut self, description: impl Into<String>) -> RfcResult<()> {
        let description = description.into();
        check_text("description", &description)?;
        self.common_mut().description = Some(description);
        Ok(())
    }

    fn priority(&self) -> Option<u8> {
        self.common().priority
    }

    /// ## Errors
    /// Returns `RangeError` outside 0..=9.
    fn set_priority(&mut self, priority: i32) -> RfcResult<()> {
        match u8::try_from(priority) {
            Ok(p) if p <= 9 => {
                self.common_mut().priority = Some(p);
                Ok(())
            }
            _ => Err(RfcError::range("priority", priority, 0, 9)),
        }
    }

    fn status(&self) -> Option<Status> {
        self.common().status
    }

    fn set_status(&mut self, status: Status) {
        self.common_mut().status = Some(status);
    }

    fn location(&self) -> Option<&str> {
        self.common().location.as_deref()
    }

    /// ## Errors
    /// Returns `ValidationError` for text XML cannot carry.
    fn set_location(&mut self, location: impl Into<String>) -> RfcResult<()> {
        let location = location.into();
        check_text("location", &location)?;
        self.common_mut().location = Some(location);
        Ok(())
    }

    /// Link to an alternative representation of the incidence (`URL`).
    fn url(&self) -> Option<&str> {
        self.common().url.as_deref()
    }

    /// ## Errors
    /// Returns `ValidationError` for an empty URL or text XML cannot carry.
    fn set_url(&mut self, url: impl Into<String>) -> RfcResult<()> {
        let url = url.into();
        if url.trim().is_empty() {
            return Err(RfcError::validation("url must not be empty"));
        }
        check_text("url", &url)?;
        self.common_mut().url = Some(url);
        Ok(())
    }

    fn organizer(&self) -> Option<&ContactReference> {
        self.common().organizer.as_ref()
    }

    fn set_organizer(&mut self, organizer: ContactReference) {
        self.common_mut().organizer = Some(organizer);
    }

    fn attendees(&self) -> &[Attendee] {
        &self.common().attendees
    }

    /// Stores a snapshot of `attendees`; later changes to the caller's values
    /// are not seen by this entity.
    fn set_attendees(&mut self, attendees: &[Attendee]) {
        self.common_mut().attendees = attendees.to_vec();
    }

    fn add_attendee(&mut self, attendee: Attendee) {
        self.common_mut().attendees.push(attendee);
    }

    fn custom_properties(&self) -> &[CustomProperty] {
        &self.common().custom_properties
    }

    fn set_custom_properties(&mut self, properties: &[CustomProperty]) {
        self.common_mut().custom_properties = properties.to_vec();
    }

    fn add_custom_property(&mut self, property: CustomProperty) {
        self.common_mut().custom_properties.push(property);
    }
}

/// Both values are set and exactly one of them is an all-day date.
pub(crate) fn all_day_mismatch(a: &DateTime, b: Option<&DateTime>) -> bool {
    b.is_some_and(|b| a.is_date_only() != b.is_date_only())
}
