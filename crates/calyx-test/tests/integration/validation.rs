//! Validation at the typed API and at the reader.

use calyx_test::error::RfcError;
use calyx_test::xcal::{
    self, ContactReference, CustomProperty, DateTime, Duration, Event, Frequency, Incidence,
    ParseErrorKind, RecurrenceRule, Todo,
};

use super::helpers::{cycle_todo, london_start};

#[test_log::test]
fn percent_complete_range() {
    let mut todo = Todo::new();

    let err = todo.set_percent_complete(140).unwrap_err();
    assert!(matches!(
        err,
        RfcError::RangeError {
            field: "percent-complete",
            value: 140,
            min: 0,
            max: 100
        }
    ));
    assert_eq!(todo.percent_complete(), 0);

    todo.set_percent_complete(40).unwrap();
    assert_eq!(todo.percent_complete(), 40);
    assert!(todo.set_percent_complete(-1).is_err());
    assert_eq!(todo.percent_complete(), 40);

    let (_, parsed) = cycle_todo(&todo);
    assert_eq!(parsed.percent_complete(), 40);
}

#[test_log::test]
fn timezone_names_are_olson() {
    let local = DateTime::new(2014, 7, 1, 12, 30, 0).unwrap();

    for bad in ["Z", "Central European Standard Time", "Europe/Londn", ""] {
        assert!(
            matches!(
                local.clone().with_timezone(bad),
                Err(RfcError::ValidationError(_))
            ),
            "{bad:?} accepted"
        );
    }
    assert!(local.with_timezone("America/New_York").is_ok());
}

#[test_log::test]
fn all_day_dates_carry_no_timezone() {
    let date = DateTime::date(2014, 7, 5).unwrap();
    assert!(date.clone().with_timezone("Europe/London").is_err());
    assert!(date.with_utc().is_err());
    assert!(DateTime::date(2014, 2, 30).is_err());
    assert!(DateTime::new(2014, 7, 1, 24, 0, 0).is_err());
}

#[test_log::test]
fn start_and_end_must_agree_on_all_day() {
    let mut event = Event::new();
    event.set_start(london_start()).unwrap();

    assert!(matches!(
        event.set_end(DateTime::date(2014, 7, 2).unwrap()),
        Err(RfcError::ValidationError(_))
    ));
    assert_eq!(event.end(), None);

    let mut todo = Todo::new();
    todo.set_due(DateTime::date(2014, 7, 2).unwrap()).unwrap();
    assert!(todo.set_start(london_start()).is_err());
    assert_eq!(todo.start(), None);
}

#[test_log::test]
fn end_and_duration_are_exclusive() {
    let mut event = Event::new();
    event.set_start(london_start()).unwrap();
    event.set_duration(Duration::hours(1)).unwrap();

    let end = DateTime::new(2014, 7, 1, 13, 30, 0).unwrap();
    assert!(matches!(
        event.set_end(end),
        Err(RfcError::ValidationError(_))
    ));
}

#[test_log::test]
fn reader_applies_model_rules() {
    let mut event = Event::new();
    event.set_start(london_start()).unwrap();
    event.set_duration(Duration::hours(1)).unwrap();
    let document = xcal::write_event(&event).replace(
        "<duration><duration>PT1H</duration></duration>",
        "<dtend><date>2014-07-02</date></dtend>",
    );

    let Err(RfcError::ParseError(err)) = xcal::read_event(&document, false) else {
        panic!("mismatched dtend accepted");
    };
    assert_eq!(err.kind, ParseErrorKind::InvalidValue);
    assert!(err.path.ends_with("vevent/properties/dtend"), "{}", err.path);
}

#[test_log::test]
fn contact_needs_email_or_uri() {
    assert!(matches!(
        ContactReference::new(""),
        Err(RfcError::ValidationError(_))
    ));
    assert!(ContactReference::from_uri("").is_err());
    assert!(ContactReference::from_uri("mailto:a@example.org").is_err());
}

#[test_log::test]
fn recurrence_rule_ranges() {
    let mut rule = RecurrenceRule::new(Frequency::Monthly);
    assert!(matches!(
        rule.set_by_month(&[13]),
        Err(RfcError::RangeError { field: "bymonth", .. })
    ));
    assert!(rule.set_by_month_day(&[0]).is_err());
    assert!(rule.set_interval(0).is_err());

    rule.set_count(3).unwrap();
    assert!(matches!(
        rule.set_until(DateTime::date(2015, 1, 1).unwrap()),
        Err(RfcError::ValidationError(_))
    ));
    assert!(
        RecurrenceRule::new(Frequency::Daily)
            .set_until(london_start())
            .is_err()
    );
}

#[test_log::test]
fn text_outside_xml_is_rejected_before_writing() {
    let mut event = Event::new();
    assert!(matches!(
        event.set_summary("a\u{1}b"),
        Err(RfcError::ValidationError(_))
    ));
    assert!(matches!(
        CustomProperty::new("X-A", "\u{0}"),
        Err(RfcError::ValidationError(_))
    ));
    assert!(
        ContactReference::new("a@example.org")
            .and_then(|c| c.with_name("\u{FFFE}"))
            .is_err()
    );

    // Everything the model accepts survives a cycle
    event.set_summary("tab\t cr\r lf\n ]]> & <tag>").unwrap();
    event.add_custom_property(CustomProperty::new("X-A", "\u{10FFFF}").unwrap());
    let document = xcal::write_event(&event);
    assert!(!document.contains('\u{1}'));
    let parsed = xcal::read_event(&document, true).unwrap();
    assert_eq!(parsed, event);
}
