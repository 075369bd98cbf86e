//! Round-trip reading and writing tests for xCal.
//!
//! Reading a document produced by the writer and writing the result again
//! must reproduce the document byte for byte.

use super::fixtures::*;
use crate::rfc::xcal::{
    self, Attendee, CalendarUserType, ContactReference, DateTime, Duration, Event, Incidence,
    ParticipationStatus, RecurrenceEnd, Role, Todo, WriterOptions,
};

fn options() -> WriterOptions {
    WriterOptions {
        product_id: PRODUCT_ID.to_string(),
    }
}

/// Read an event document, write it back and compare.
fn event_round_trip(input: &str) -> Result<Event, String> {
    let event = xcal::read_event(input, true).map_err(|e| format!("Read failed: {e}"))?;
    let output = xcal::write_event_with(&event, &options());
    if output != input {
        return Err(format!("Output differs:\n{input}\n{output}"));
    }
    Ok(event)
}

fn todo_round_trip(input: &str) -> Result<Todo, String> {
    let todo = xcal::read_todo(input, true).map_err(|e| format!("Read failed: {e}"))?;
    let output = xcal::write_todo_with(&todo, &options());
    if output != input {
        return Err(format!("Output differs:\n{input}\n{output}"));
    }
    Ok(todo)
}

#[test_log::test]
fn round_trip_minimal_event() {
    let event = event_round_trip(VEVENT_MINIMAL).unwrap();
    assert_eq!(event.uid(), Some("19970901T130000Z-123401@example.com"));
    assert_eq!(event.summary(), Some("Annual Employee Review"));
    assert!(event.start().unwrap().is_utc());
    assert!(event.end().unwrap().is_utc());
}

#[test_log::test]
fn round_trip_recurring_event() {
    let event = event_round_trip(VEVENT_RECURRING).unwrap();

    assert_eq!(event.start().unwrap().tzid(), Some("America/New_York"));
    assert_eq!(event.duration(), Some(&Duration::hours(1)));
    let rule = event.recurrence_rule().unwrap();
    assert_eq!(rule.end(), Some(&RecurrenceEnd::Count(10)));
    assert_eq!(rule.by_day().len(), 1);
    assert_eq!(event.exception_dates().len(), 1);
    assert_eq!(
        event.exception_dates()[0].tzid(),
        Some("America/New_York")
    );
}

#[test_log::test]
fn round_trip_full_event() {
    let event = event_round_trip(VEVENT_FULL).unwrap();

    assert_eq!(event.sequence(), Some(2));
    assert_eq!(event.categories(), ["Business", "Planning"]);
    assert!(event.start().unwrap().is_date_only());
    assert_eq!(event.description(), Some("Budget review & roadmap"));
    assert_eq!(event.priority(), Some(1));
    assert!(event.transparent());
    assert_eq!(event.url(), Some("https://example.com/planning/2014"));

    let organizer = event.organizer().unwrap();
    assert_eq!(organizer.email(), Some("jane@example.com"));
    assert_eq!(organizer.name(), Some("Jane Doe"));
    assert_eq!(organizer.uri(), Some("ldap://example.com/cn=jane"));

    let attendees = event.attendees();
    assert_eq!(attendees.len(), 2);
    assert_eq!(attendees[0].part_stat(), ParticipationStatus::Accepted);
    assert_eq!(attendees[0].role(), Role::Chair);
    assert!(!attendees[0].rsvp());

    let team = &attendees[1];
    assert_eq!(team.contact().email(), None);
    assert_eq!(team.contact().uri(), Some("urn:uuid:ops-team"));
    assert_eq!(team.contact().name(), Some("Ops Team"));
    assert_eq!(team.cutype(), CalendarUserType::Group);
    assert!(team.rsvp());
    assert_eq!(team.delegated_to().len(), 2);
    assert_eq!(team.delegated_to()[0].name(), Some("Bob"));
    assert_eq!(team.delegated_to()[1].uri(), Some("urn:uuid:0d2e5f3a"));

    assert_eq!(event.custom_properties().len(), 1);
    assert_eq!(event.custom_properties()[0].identifier(), "X-PLANNER-COLOR");
}

#[test_log::test]
fn round_trip_todo() {
    let todo = todo_round_trip(VTODO_BASIC).unwrap();
    assert_eq!(todo.percent_complete(), 40);
    assert_eq!(todo.priority(), Some(2));
    assert!(todo.due().unwrap().is_utc());
    assert_eq!(todo.url(), Some("https://example.com/tasks/taxes"));
    assert_eq!(todo.related_to(), ["19970901T130000Z-123400@example.com"]);
}

#[test_log::test]
fn indented_document_normalizes() {
    // The unknown dtstamp is only skipped in lenient mode
    assert!(xcal::read_event(VEVENT_INDENTED_WITH_EXTRA, true).is_err());

    let event = xcal::read_event(VEVENT_INDENTED_WITH_EXTRA, false).unwrap();
    assert_eq!(xcal::write_event_with(&event, &options()), VEVENT_MINIMAL);
}

#[test_log::test]
fn built_event_round_trips() {
    let mut event = Event::new();
    event.set_uid("built-1").unwrap();
    event.set_summary("  padded\n\ttext  ").unwrap();
    event
        .set_start(
            DateTime::new(2014, 7, 1, 12, 30, 0)
                .unwrap()
                .with_timezone("Europe/London")
                .unwrap(),
        )
        .unwrap();
    event.add_exception_date(DateTime::date(2014, 7, 5).unwrap());

    let mut attendee = Attendee::new(
        ContactReference::new("email_1@email.com")
            .and_then(|c| c.with_name("John Doe"))
            .unwrap(),
    );
    attendee.add_delegated_from(
        ContactReference::new("boss@email.com")
            .and_then(|c| c.with_name("The Boss"))
            .unwrap(),
    );
    event.add_attendee(attendee);

    let first = xcal::write_event(&event);
    let parsed = xcal::read_event(&first, true).unwrap();
    assert_eq!(parsed, event);
    assert_eq!(xcal::write_event(&parsed), first);
}

#[test_log::test]
fn default_product_id() {
    let document = xcal::write_todo(&Todo::new());
    assert!(document.contains(&format!(
        "<prodid><text>{}</text></prodid>",
        calyx_core::constants::PRODUCT_ID
    )));
}
