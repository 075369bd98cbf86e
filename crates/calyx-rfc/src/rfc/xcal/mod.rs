//! xCal implementation (RFC 6321).
//!
//! This module provides the calendaring object model and its XML
//! representation: events and to-dos are written as complete xCal documents
//! and read back from them.
//!
//! ## Usage
//!
//! ```rust
//! use calyx_rfc::rfc::xcal::{self, Incidence, Todo};
//!
//! let mut todo = Todo::new();
//! todo.set_summary("Review budget").unwrap();
//! todo.set_percent_complete(40).unwrap();
//!
//! let document = xcal::write_todo(&todo);
//! let parsed = xcal::read_todo(&document, true).unwrap();
//! assert_eq!(parsed.summary(), Some("Review budget"));
//! assert_eq!(parsed.percent_complete(), 40);
//! ```
//!
//! ## Round-Trip Fidelity
//!
//! Output is deterministic. Any document produced by the writer reads back
//! into an entity that writes out byte-identical.
//!
//! ## Submodules
//!
//! - [`core`] - Object model (`Event`, `Todo`, `Attendee`, `DateTime`, ...)
//! - [`parse`] - Reader, value parsers and error types
//! - [`names`] - Namespace and element names

mod build;
pub mod core;
pub mod mailto;
pub mod names;
mod options;
pub mod parse;

#[cfg(test)]
mod tests;

pub use core::{
    Attendee, CalendarUserType, Classification, ContactReference, CustomProperty, DateTime,
    DateTimeForm, Duration, DurationBuilder, Event, Frequency, Incidence, IncidenceProperties,
    ParticipationStatus, RecurrenceEnd, RecurrenceRule, Role, Status, Todo, Weekday, WeekdayNum,
};
pub use options::{ReaderOptions, WriterOptions};
pub use parse::{ParseError, ParseErrorKind, ParseResult, ReadState};

use build::{WriteComponent, serialize_component};
use parse::{ReadComponent, XcalReader};

use crate::error::RfcResult;

/// Serializes an event into an xCal document with the default options.
#[must_use]
pub fn write_event(event: &Event) -> String {
    write_event_with(event, &WriterOptions::default())
}

/// Serializes an event into an xCal document.
#[must_use]
#[tracing::instrument(skip_all, fields(uid = event.uid()))]
pub fn write_event_with(event: &Event, options: &WriterOptions) -> String {
    write_component(event, options)
}

/// Serializes a to-do into an xCal document with the default options.
#[must_use]
pub fn write_todo(todo: &Todo) -> String {
    write_todo_with(todo, &WriterOptions::default())
}

/// Serializes a to-do into an xCal document.
#[must_use]
#[tracing::instrument(skip_all, fields(uid = todo.uid()))]
pub fn write_todo_with(todo: &Todo, options: &WriterOptions) -> String {
    write_component(todo, options)
}

/// Reads the single event of an xCal document.
///
/// With `strict` set, unknown elements, a foreign root namespace and
/// calendar versions other than 2.0 are errors; otherwise they are skipped
/// with a warning.
///
/// ## Errors
/// Returns `RfcError::ParseError` carrying the element path for malformed
/// XML, missing or unexpected elements, unknown tokens and values the
/// object model rejects.
pub fn read_event(doc: &str, strict: bool) -> RfcResult<Event> {
    read_event_with(doc, ReaderOptions { strict })
}

/// Reads the single event of an xCal document.
///
/// ## Errors
/// See [`read_event`].
#[tracing::instrument(skip(doc), fields(len = doc.len()))]
pub fn read_event_with(doc: &str, options: ReaderOptions) -> RfcResult<Event> {
    read_component(doc, options)
}

/// Reads the single to-do of an xCal document.
///
/// ## Errors
/// See [`read_event`].
pub fn read_todo(doc: &str, strict: bool) -> RfcResult<Todo> {
    read_todo_with(doc, ReaderOptions { strict })
}

/// Reads the single to-do of an xCal document.
///
/// ## Errors
/// See [`read_event`].
#[tracing::instrument(skip(doc), fields(len = doc.len()))]
pub fn read_todo_with(doc: &str, options: ReaderOptions) -> RfcResult<Todo> {
    read_component(doc, options)
}

#[expect(
    clippy::expect_used,
    reason = "Serializing into an in-memory buffer cannot fail"
)]
fn write_component<C: WriteComponent>(entity: &C, options: &WriterOptions) -> String {
    let document = serialize_component(entity, options)
        .expect("serializing into an in-memory buffer cannot fail");
    tracing::debug!(component = C::TAG, bytes = document.len(), "Wrote xCal document");
    document
}

fn read_component<C: ReadComponent>(doc: &str, options: ReaderOptions) -> RfcResult<C> {
    let entity = XcalReader::new(doc, options).read::<C>()?;
    tracing::debug!(component = C::TAG, "Read xCal document");
    Ok(entity)
}
