//! Write/read cycles through the public codec.

use calyx_test::xcal::{
    self, Attendee, DateTime, Event, Frequency, Incidence, RecurrenceRule, Todo,
};

use super::helpers::{contact, cycle_event, cycle_todo, london_event, london_start};

/// ## Summary
/// Writing the London event twice, with a read in between, yields two
/// identical documents and keeps the single exception date.
#[test_log::test]
fn london_event_scenario() {
    let event = london_event();

    let (first, parsed) = cycle_event(&event);
    assert_eq!(parsed.exception_dates().len(), 1);
    assert!(parsed.exception_dates()[0].is_date_only());

    let (second, reparsed) = cycle_event(&parsed);
    assert_eq!(first, second);
    assert_eq!(reparsed.exception_dates().len(), 1);
    assert_eq!(reparsed.summary(), Some("test"));
    assert_eq!(reparsed.start(), Some(&london_start()));
}

#[test_log::test]
fn event_write_is_deterministic() {
    let event = london_event();
    assert_eq!(xcal::write_event(&event), xcal::write_event(&event.clone()));
}

#[test_log::test]
fn exception_dates_keep_count_and_order() {
    let dates: Vec<DateTime> = (5..=9)
        .map(|day| DateTime::date(2014, 7, day).unwrap())
        .collect();
    let mut event = Event::new();
    event.set_exception_dates(&dates);
    assert_eq!(event.exception_dates().len(), 5);

    let (_, parsed) = cycle_event(&event);
    assert_eq!(parsed.exception_dates(), dates.as_slice());

    // Appends land after the replaced list
    let mut parsed = parsed;
    parsed.add_exception_date(DateTime::date(2014, 8, 1).unwrap());
    parsed.set_exception_dates(&dates[..2]);
    assert_eq!(parsed.exception_dates().len(), 2);
}

#[test_log::test]
fn todo_round_trip() {
    let mut todo = Todo::new();
    todo.set_uid("todo-1").unwrap();
    todo.set_summary("Review budget").unwrap();
    todo.set_url("https://example.org/tasks/1").unwrap();
    todo.add_related_to("project-7").unwrap();
    todo.set_percent_complete(40).unwrap();
    todo.set_start(DateTime::date(2014, 7, 1).unwrap()).unwrap();
    todo.set_due(DateTime::date(2014, 7, 4).unwrap()).unwrap();
    todo.add_attendee(Attendee::new(contact("kim@example.org", "Kim")));

    let (first, parsed) = cycle_todo(&todo);
    assert_eq!(parsed, todo);
    assert_eq!(xcal::write_todo(&parsed), first);
}

#[test_log::test]
fn attendees_keep_order() {
    let names = ["Ann", "Ben", "Cy", "Di"];
    let attendees: Vec<Attendee> = names
        .iter()
        .map(|name| {
            Attendee::new(contact(
                &format!("{}@example.org", name.to_lowercase()),
                name,
            ))
        })
        .collect();

    let mut event = Event::new();
    event.set_attendees(&attendees);

    let (_, parsed) = cycle_event(&event);
    let read: Vec<&str> = parsed
        .attendees()
        .iter()
        .filter_map(|a| a.contact().name())
        .collect();
    assert_eq!(read, names);
}

#[test_log::test]
fn recurring_event_round_trip() {
    let mut rule = RecurrenceRule::new(Frequency::Daily);
    rule.set_until(DateTime::utc(2014, 12, 31, 23, 59, 59).unwrap())
        .unwrap();
    rule.set_by_hour(&[9, 17]).unwrap();

    let mut event = london_event();
    event.set_recurrence_rule(rule);
    event.add_recurrence_date(DateTime::date(2015, 1, 2).unwrap());

    let (first, parsed) = cycle_event(&event);
    assert_eq!(parsed, event);
    assert_eq!(xcal::write_event(&parsed), first);
}

#[test_log::test]
fn empty_entities_round_trip() {
    let (first, event) = cycle_event(&Event::new());
    assert_eq!(event, Event::new());
    assert_eq!(xcal::write_event(&event), first);

    let (first, todo) = cycle_todo(&Todo::new());
    assert_eq!(todo, Todo::new());
    assert_eq!(xcal::write_todo(&todo), first);
}
