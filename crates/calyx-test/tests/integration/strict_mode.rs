//! Strict and lenient reading.

use calyx_test::error::RfcError;
use calyx_test::xcal::{
    self, ContactReference, Event, Incidence, ParseError, ParseErrorKind, ReaderOptions, Todo,
};

use super::helpers::london_event;

fn parse_error(result: Result<Event, RfcError>) -> ParseError {
    match result {
        Err(RfcError::ParseError(e)) => e,
        other => panic!("expected a parse error, got {other:?}"),
    }
}

/// The London event with an extra element just before `summary`.
fn document_with(extra: &str) -> String {
    xcal::write_event(&london_event()).replace("<summary>", &format!("{extra}<summary>"))
}

#[test_log::test]
fn unknown_property_strict_vs_lenient() {
    let document = document_with("<x-wr-calname><text>Team</text></x-wr-calname>");

    let err = parse_error(xcal::read_event(&document, true));
    assert_eq!(err.kind, ParseErrorKind::UnexpectedElement);
    assert_eq!(
        err.path,
        "icalendar/vcalendar/components/vevent/properties/x-wr-calname"
    );

    let event = xcal::read_event(&document, false).unwrap();
    assert_eq!(xcal::write_event(&event), xcal::write_event(&london_event()));
}

#[test_log::test]
fn unknown_parameter_strict_vs_lenient() {
    let mut event = london_event();
    event.set_organizer(
        ContactReference::new("jane@example.org")
            .and_then(|c| c.with_name("Jane"))
            .unwrap(),
    );
    let document = xcal::write_event(&event).replace(
        "<cn><text>Jane</text></cn>",
        "<cn><text>Jane</text></cn><language><language-tag>en</language-tag></language>",
    );

    assert!(xcal::read_event(&document, true).is_err());
    let parsed = xcal::read_event(&document, false).unwrap();
    assert_eq!(parsed, event);
}

#[test_log::test]
fn reader_options_select_mode() {
    let document = document_with("<color><text>red</text></color>");

    assert!(xcal::read_event_with(&document, ReaderOptions { strict: true }).is_err());
    assert!(xcal::read_event_with(&document, ReaderOptions::default()).is_ok());
}

#[test_log::test]
fn foreign_namespace() {
    let document = xcal::write_event(&london_event()).replace(
        "urn:ietf:params:xml:ns:icalendar-2.0",
        "urn:example:calendar",
    );

    let err = parse_error(xcal::read_event(&document, true));
    assert_eq!(err.kind, ParseErrorKind::UnsupportedNamespace);
    assert!(xcal::read_event(&document, false).is_ok());
}

#[test_log::test]
fn other_calendar_version() {
    let document = xcal::write_event(&london_event())
        .replace("<version><text>2.0</text></version>", "<version><text>1.0</text></version>");

    let err = parse_error(xcal::read_event(&document, true));
    assert_eq!(err.kind, ParseErrorKind::UnsupportedVersion);
    assert!(xcal::read_event(&document, false).is_ok());
}

#[test_log::test]
fn structural_errors_fail_in_both_modes() {
    let truncated = xcal::write_event(&london_event()).replace("</icalendar>", "");
    let stray_text = document_with("oops");
    let todo = xcal::write_todo(&Todo::new());

    for strict in [false, true] {
        assert!(xcal::read_event(&truncated, strict).is_err());
        assert_eq!(
            parse_error(xcal::read_event(&stray_text, strict)).kind,
            ParseErrorKind::UnexpectedText
        );
        assert_eq!(
            parse_error(xcal::read_event(&todo, strict)).kind,
            ParseErrorKind::UnexpectedElement
        );
    }
}
