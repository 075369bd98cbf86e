//! Delegation chains between attendees.

use calyx_test::xcal::{Attendee, ContactReference, Event, Incidence, ParticipationStatus};

use super::helpers::{contact, cycle_event};

/// ## Summary
/// A delegates to B and B records A as the delegator; both lists survive a
/// write/read cycle independently of each other.
#[test_log::test]
fn delegation_survives_cycle() {
    let a = contact("a@example.org", "Alice");
    let b = contact("b@example.org", "Bob");

    let mut delegator = Attendee::new(a.clone());
    delegator.set_part_stat(ParticipationStatus::Delegated);
    delegator.set_delegated_to(std::slice::from_ref(&b));

    let mut delegate = Attendee::new(b.clone());
    delegate.set_delegated_from(std::slice::from_ref(&a));

    let mut event = Event::new();
    event.set_attendees(&[delegator, delegate]);

    let (_, parsed) = cycle_event(&event);
    let attendees = parsed.attendees();
    assert_eq!(attendees[0].delegated_to(), [b]);
    assert!(attendees[0].delegated_from().is_empty());
    assert_eq!(attendees[1].delegated_from(), [a]);
    assert!(attendees[1].delegated_to().is_empty());
}

#[test_log::test]
fn delegation_kept_whatever_the_status() {
    let mut attendee = Attendee::new(contact("a@example.org", "Alice"));
    attendee.set_part_stat(ParticipationStatus::Accepted);
    attendee.set_delegated_to(&[
        contact("b@example.org", "Bob"),
        ContactReference::new("c@example.org").unwrap(),
    ]);

    let mut event = Event::new();
    event.add_attendee(attendee.clone());

    let (_, parsed) = cycle_event(&event);
    assert_eq!(parsed.attendees(), [attendee]);
}

#[test_log::test]
fn attendees_are_snapshots() {
    let mut attendee = Attendee::new(contact("a@example.org", "Alice"));
    let mut event = Event::new();
    event.set_attendees(std::slice::from_ref(&attendee));

    attendee.add_delegated_to(contact("b@example.org", "Bob"));
    attendee.set_part_stat(ParticipationStatus::Declined);

    let stored = &event.attendees()[0];
    assert!(stored.delegated_to().is_empty());
    assert_eq!(stored.part_stat(), ParticipationStatus::NeedsAction);
}

#[test_log::test]
fn directory_only_delegate() {
    let directory = ContactReference::from_uri("ldap://example.org/cn=ops").unwrap();
    let mut attendee = Attendee::new(contact("a@example.org", "Alice"));
    attendee.add_delegated_from(directory.clone());

    let mut event = Event::new();
    event.add_attendee(attendee);

    let (document, parsed) = cycle_event(&event);
    assert!(document.contains(
        "<delegated-from><cal-address>ldap://example.org/cn=ops</cal-address></delegated-from>"
    ));
    assert_eq!(parsed.attendees()[0].delegated_from(), [directory]);
}
