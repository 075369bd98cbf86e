//! Enumerated values on the wire.

use calyx_test::error::RfcError;
use calyx_test::xcal::{
    self, Attendee, Incidence, ParseErrorKind, ParticipationStatus, Role, Status, Todo,
};

use super::helpers::{contact, cycle_todo};

const ALL_PART_STATS: [ParticipationStatus; 7] = [
    ParticipationStatus::NeedsAction,
    ParticipationStatus::Accepted,
    ParticipationStatus::Declined,
    ParticipationStatus::Tentative,
    ParticipationStatus::Delegated,
    ParticipationStatus::InProcess,
    ParticipationStatus::Completed,
];

fn in_process_todo() -> Todo {
    let mut attendee = Attendee::new(contact("kim@example.org", "Kim"));
    attendee.set_part_stat(ParticipationStatus::InProcess);
    let mut todo = Todo::new();
    todo.add_attendee(attendee);
    todo
}

fn parse_error_kind(result: Result<Todo, RfcError>) -> ParseErrorKind {
    match result {
        Err(RfcError::ParseError(e)) => e.kind,
        other => panic!("expected a parse error, got {other:?}"),
    }
}

#[test_log::test]
fn in_process_token_is_exact() {
    let document = xcal::write_todo(&in_process_todo());
    assert!(document.contains("<partstat><text>IN-PROCESS</text></partstat>"));

    for variant in ["IN_PROCESS", "in-process", "INPROCESS", "IN-PROCESS "] {
        let altered = document.replace("IN-PROCESS", variant);
        for strict in [false, true] {
            assert_eq!(
                parse_error_kind(xcal::read_todo(&altered, strict)),
                ParseErrorKind::UnknownToken,
                "{variant:?} accepted (strict: {strict})"
            );
        }
    }
}

#[test_log::test]
fn every_part_stat_round_trips() {
    for part_stat in ALL_PART_STATS {
        let mut attendee = Attendee::new(contact("kim@example.org", "Kim"));
        attendee.set_part_stat(part_stat);
        let mut todo = Todo::new();
        todo.add_attendee(attendee);

        let (document, parsed) = cycle_todo(&todo);
        assert!(document.contains(&format!("<text>{}</text>", part_stat.as_token())));
        assert_eq!(parsed.attendees()[0].part_stat(), part_stat);
    }
}

#[test_log::test]
fn unknown_role_fails_in_both_modes() {
    let mut attendee = Attendee::new(contact("kim@example.org", "Kim"));
    attendee.set_role(Role::NonParticipant);
    let mut todo = Todo::new();
    todo.add_attendee(attendee);

    let document = xcal::write_todo(&todo).replace("NON-PARTICIPANT", "OBSERVER");
    for strict in [false, true] {
        let err = xcal::read_todo(&document, strict).unwrap_err();
        let RfcError::ParseError(err) = err else {
            panic!("expected a parse error, got {err:?}");
        };
        assert_eq!(err.kind, ParseErrorKind::UnknownToken);
        assert!(err.path.ends_with("attendee/parameters/role"), "{}", err.path);
    }
}

#[test_log::test]
fn unknown_status_fails() {
    let mut todo = Todo::new();
    todo.set_status(Status::InProcess);
    let document = xcal::write_todo(&todo).replace(
        "<status><text>IN-PROCESS</text></status>",
        "<status><text>STARTED</text></status>",
    );

    assert_eq!(
        parse_error_kind(xcal::read_todo(&document, false)),
        ParseErrorKind::UnknownToken
    );
}
