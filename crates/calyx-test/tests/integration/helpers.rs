#![expect(clippy::expect_used, reason = "Fixtures are built from known-good values")]
//! Test helpers for integration tests.
//!
//! Builders for the entities the tests share and write/read cycles through
//! the public codec functions.

use calyx_test::xcal::{self, ContactReference, DateTime, Event, Incidence, Todo};

/// Email contact with a display name.
pub fn contact(email: &str, name: &str) -> ContactReference {
    ContactReference::new(email)
        .and_then(|c| c.with_name(name))
        .expect("valid contact")
}

/// 2014-07-01 12:30:00 in Europe/London.
pub fn london_start() -> DateTime {
    DateTime::new(2014, 7, 1, 12, 30, 0)
        .and_then(|dt| dt.with_timezone("Europe/London"))
        .expect("valid zoned date-time")
}

/// The event "test" starting at [`london_start`] with one all-day exception
/// on 2014-07-05.
pub fn london_event() -> Event {
    let mut event = Event::new();
    event.set_summary("test").expect("summary accepted");
    event.set_start(london_start()).expect("start accepted");
    event.add_exception_date(DateTime::date(2014, 7, 5).expect("valid date"));
    event
}

/// Writes an event and reads it back leniently, returning both.
pub fn cycle_event(event: &Event) -> (String, Event) {
    let document = xcal::write_event(event);
    let parsed = xcal::read_event(&document, false)
        .unwrap_or_else(|e| panic!("read failed: {e}\n{document}"));
    (document, parsed)
}

/// Writes a to-do and reads it back leniently, returning both.
pub fn cycle_todo(todo: &Todo) -> (String, Todo) {
    let document = xcal::write_todo(todo);
    let parsed = xcal::read_todo(&document, false)
        .unwrap_or_else(|e| panic!("read failed: {e}\n{document}"));
    (document, parsed)
}
