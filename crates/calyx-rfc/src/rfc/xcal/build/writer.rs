//! xCal document serialization.
//!
//! Output carries no indentation, writes properties in a fixed order and
//! omits every value the entity does not carry, so reading a document and
//! writing it again reproduces it byte for byte.

use std::io::Write;

use quick_xml::Writer;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event as XmlEvent};

use crate::rfc::xcal::WriterOptions;
use crate::rfc::xcal::core::{
    Attendee, CalendarUserType, ContactReference, DateTime, Event, Incidence, RecurrenceEnd,
    RecurrenceRule, Todo,
};
use crate::rfc::xcal::mailto::to_mailto;
use crate::rfc::xcal::names;

type XmlResult = Result<(), quick_xml::Error>;

/// Component types the writer can serialize.
pub(crate) trait WriteComponent: Incidence {
    /// Element name of the component (`vevent`, `vtodo`).
    const TAG: &'static str;

    /// Writes the properties bounding the incidence, right after `dtstart`.
    fn write_bounds<W: Write>(&self, writer: &mut Writer<W>) -> XmlResult;

    /// Writes the component's own flags, right after `url`.
    fn write_flags<W: Write>(&self, writer: &mut Writer<W>) -> XmlResult;
}

impl WriteComponent for Event {
    const TAG: &'static str = names::VEVENT;

    fn write_bounds<W: Write>(&self, writer: &mut Writer<W>) -> XmlResult {
        if let Some(end) = self.end() {
            write_date_property(writer, names::DTEND, end)?;
        }
        if let Some(duration) = self.duration() {
            write_value_property(writer, names::DURATION, names::DURATION, &duration.to_string())?;
        }
        Ok(())
    }

    fn write_flags<W: Write>(&self, writer: &mut Writer<W>) -> XmlResult {
        // OPAQUE is the default and never written
        if self.transparent() {
            write_value_property(writer, names::TRANSP, names::TEXT, names::TRANSPARENT)?;
        }
        Ok(())
    }
}

impl WriteComponent for Todo {
    const TAG: &'static str = names::VTODO;

    fn write_bounds<W: Write>(&self, writer: &mut Writer<W>) -> XmlResult {
        if let Some(due) = self.due() {
            write_date_property(writer, names::DUE, due)?;
        }
        Ok(())
    }

    fn write_flags<W: Write>(&self, writer: &mut Writer<W>) -> XmlResult {
        let percent = self.percent_complete();
        if percent > 0 {
            write_value_property(
                writer,
                names::PERCENT_COMPLETE,
                names::INTEGER,
                &percent.to_string(),
            )?;
        }
        for uid in self.related_to() {
            write_value_property(writer, names::RELATED_TO, names::TEXT, uid)?;
        }
        Ok(())
    }
}

/// Serializes one entity into a complete xCal document.
///
/// ## Errors
/// Returns an error if XML writing fails or the output is not valid UTF-8,
/// neither of which happens when writing into memory.
pub(crate) fn serialize_component<C: WriteComponent>(
    entity: &C,
    options: &WriterOptions,
) -> Result<String, quick_xml::Error> {
    let mut writer = Writer::new(Vec::new());

    writer.write_event(XmlEvent::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;

    let mut root = BytesStart::new(names::ICALENDAR);
    root.push_attribute(("xmlns", names::XCAL_NS));
    writer.write_event(XmlEvent::Start(root))?;
    start(&mut writer, names::VCALENDAR)?;

    start(&mut writer, names::PROPERTIES)?;
    write_value_property(&mut writer, names::PRODID, names::TEXT, &options.product_id)?;
    write_value_property(&mut writer, names::VERSION, names::TEXT, names::ICAL_VERSION)?;
    end(&mut writer, names::PROPERTIES)?;

    start(&mut writer, names::COMPONENTS)?;
    start(&mut writer, C::TAG)?;
    start(&mut writer, names::PROPERTIES)?;
    write_fields(&mut writer, entity)?;
    end(&mut writer, names::PROPERTIES)?;
    end(&mut writer, C::TAG)?;
    end(&mut writer, names::COMPONENTS)?;

    end(&mut writer, names::VCALENDAR)?;
    end(&mut writer, names::ICALENDAR)?;

    let result = writer.into_inner();
    String::from_utf8(result).map_err(|e| {
        tracing::error!("Generated invalid UTF-8 in xCal output: {}", e);
        quick_xml::Error::Io(std::sync::Arc::new(std::io::Error::new(
            std::io::ErrorKind::InvalidData,
            "Invalid UTF-8 in XML output",
        )))
    })
}

/// Writes the component's properties in document order.
fn write_fields<W: Write, C: WriteComponent>(writer: &mut Writer<W>, entity: &C) -> XmlResult {
    if let Some(uid) = entity.uid() {
        write_value_property(writer, names::UID, names::TEXT, uid)?;
    }
    if let Some(created) = entity.created() {
        write_date_property(writer, names::CREATED, created)?;
    }
    if let Some(modified) = entity.last_modified() {
        write_date_property(writer, names::LAST_MODIFIED, modified)?;
    }
    if let Some(sequence) = entity.sequence() {
        write_value_property(writer, names::SEQUENCE, names::INTEGER, &sequence.to_string())?;
    }
    if let Some(class) = entity.classification() {
        write_value_property(writer, names::CLASS, names::TEXT, class.as_token())?;
    }
    if !entity.categories().is_empty() {
        start(writer, names::CATEGORIES)?;
        for category in entity.categories() {
            write_text_element(writer, names::TEXT, category)?;
        }
        end(writer, names::CATEGORIES)?;
    }
    if let Some(dtstart) = entity.start() {
        write_date_property(writer, names::DTSTART, dtstart)?;
    }

    entity.write_bounds(writer)?;

    if let Some(rule) = entity.recurrence_rule() {
        start(writer, names::RRULE)?;
        write_recur(writer, rule)?;
        end(writer, names::RRULE)?;
    }
    for date in entity.recurrence_dates() {
        write_date_property(writer, names::RDATE, date)?;
    }
    for date in entity.exception_dates() {
        write_date_property(writer, names::EXDATE, date)?;
    }

    if let Some(summary) = entity.summary() {
        write_value_property(writer, names::SUMMARY, names::TEXT, summary)?;
    }
    if let Some(description) = entity.description() {
        write_value_property(writer, names::DESCRIPTION, names::TEXT, description)?;
    }
    if let Some(priority) = entity.priority() {
        write_value_property(writer, names::PRIORITY, names::INTEGER, &priority.to_string())?;
    }
    if let Some(status) = entity.status() {
        write_value_property(writer, names::STATUS, names::TEXT, status.as_token())?;
    }
    if let Some(location) = entity.location() {
        write_value_property(writer, names::LOCATION, names::TEXT, location)?;
    }
    if let Some(url) = entity.url() {
        write_value_property(writer, names::URL, names::URI, url)?;
    }

    entity.write_flags(writer)?;

    if let Some(organizer) = entity.organizer() {
        write_organizer(writer, organizer)?;
    }
    for attendee in entity.attendees() {
        write_attendee(writer, attendee)?;
    }
    for property in entity.custom_properties() {
        start(writer, names::X_CUSTOM)?;
        write_text_element(writer, names::IDENTIFIER, property.identifier())?;
        write_text_element(writer, names::VALUE, property.value())?;
        end(writer, names::X_CUSTOM)?;
    }

    Ok(())
}

/// Writes a date property, with its timezone as a `tzid` parameter.
fn write_date_property<W: Write>(
    writer: &mut Writer<W>,
    name: &str,
    value: &DateTime,
) -> XmlResult {
    start(writer, name)?;
    if let Some(tzid) = value.tzid() {
        start(writer, names::PARAMETERS)?;
        write_value_property(writer, names::TZID, names::TEXT, tzid)?;
        end(writer, names::PARAMETERS)?;
    }
    let kind = if value.is_date_only() {
        names::DATE
    } else {
        names::DATE_TIME
    };
    write_text_element(writer, kind, &value.to_string())?;
    end(writer, name)
}

fn write_organizer<W: Write>(writer: &mut Writer<W>, organizer: &ContactReference) -> XmlResult {
    start(writer, names::ORGANIZER)?;
    let name = organizer.name();
    let dir = directory(organizer);
    if name.is_some() || dir.is_some() {
        start(writer, names::PARAMETERS)?;
        write_contact_parameters(writer, name, dir)?;
        end(writer, names::PARAMETERS)?;
    }
    write_text_element(writer, names::CAL_ADDRESS, &primary_address(organizer))?;
    end(writer, names::ORGANIZER)
}

fn write_attendee<W: Write>(writer: &mut Writer<W>, attendee: &Attendee) -> XmlResult {
    let contact = attendee.contact();
    start(writer, names::ATTENDEE)?;

    // partstat and role are always present, so the list is never empty
    start(writer, names::PARAMETERS)?;
    write_contact_parameters(writer, contact.name(), directory(contact))?;
    write_value_property(
        writer,
        names::PARTSTAT,
        names::TEXT,
        attendee.part_stat().as_token(),
    )?;
    write_value_property(writer, names::ROLE, names::TEXT, attendee.role().as_token())?;
    if attendee.rsvp() {
        write_value_property(writer, names::RSVP, names::BOOLEAN, "true")?;
    }
    write_delegation(writer, names::DELEGATED_TO, attendee.delegated_to())?;
    write_delegation(writer, names::DELEGATED_FROM, attendee.delegated_from())?;
    if attendee.cutype() != CalendarUserType::Individual {
        write_value_property(writer, names::CUTYPE, names::TEXT, attendee.cutype().as_token())?;
    }
    end(writer, names::PARAMETERS)?;

    write_text_element(writer, names::CAL_ADDRESS, &primary_address(contact))?;
    end(writer, names::ATTENDEE)
}

fn write_contact_parameters<W: Write>(
    writer: &mut Writer<W>,
    name: Option<&str>,
    dir: Option<&str>,
) -> XmlResult {
    if let Some(name) = name {
        write_value_property(writer, names::CN, names::TEXT, name)?;
    }
    if let Some(dir) = dir {
        write_value_property(writer, names::DIR, names::URI, dir)?;
    }
    Ok(())
}

fn write_delegation<W: Write>(
    writer: &mut Writer<W>,
    name: &str,
    contacts: &[ContactReference],
) -> XmlResult {
    if contacts.is_empty() {
        return Ok(());
    }
    start(writer, name)?;
    for contact in contacts {
        // Delegation entries fold the name into the address
        let address = match contact.email() {
            Some(email) => to_mailto(email, contact.name()),
            None => contact.uri().unwrap_or_default().to_owned(),
        };
        write_text_element(writer, names::CAL_ADDRESS, &address)?;
    }
    end(writer, name)
}

/// The `cal-address` of an organizer or attendee.
fn primary_address(contact: &ContactReference) -> String {
    match contact.email() {
        Some(email) => to_mailto(email, None),
        None => contact.uri().unwrap_or_default().to_owned(),
    }
}

/// The `dir` parameter: only written when the address is an email.
fn directory(contact: &ContactReference) -> Option<&str> {
    contact.email().and(contact.uri())
}

fn write_recur<W: Write>(writer: &mut Writer<W>, rule: &RecurrenceRule) -> XmlResult {
    start(writer, names::RECUR)?;
    write_text_element(writer, names::FREQ, rule.frequency().as_token())?;
    match rule.end() {
        Some(RecurrenceEnd::Until(until)) => {
            write_text_element(writer, names::UNTIL, &until.to_string())?;
        }
        Some(RecurrenceEnd::Count(count)) => {
            write_text_element(writer, names::COUNT, &count.to_string())?;
        }
        None => {}
    }
    if rule.interval() > 1 {
        write_text_element(writer, names::INTERVAL, &rule.interval().to_string())?;
    }
    write_numbers(writer, names::BYSECOND, rule.by_second())?;
    write_numbers(writer, names::BYMINUTE, rule.by_minute())?;
    write_numbers(writer, names::BYHOUR, rule.by_hour())?;
    for day in rule.by_day() {
        write_text_element(writer, names::BYDAY, &day.to_string())?;
    }
    write_numbers(writer, names::BYMONTHDAY, rule.by_month_day())?;
    write_numbers(writer, names::BYYEARDAY, rule.by_year_day())?;
    write_numbers(writer, names::BYWEEKNO, rule.by_week_no())?;
    write_numbers(writer, names::BYMONTH, rule.by_month())?;
    if let Some(week_start) = rule.week_start() {
        write_text_element(writer, names::WKST, week_start.as_token())?;
    }
    end(writer, names::RECUR)
}

fn write_numbers<W: Write>(writer: &mut Writer<W>, name: &str, values: &[i32]) -> XmlResult {
    for value in values {
        write_text_element(writer, name, &value.to_string())?;
    }
    Ok(())
}

/// Writes `<name><kind>text</kind></name>`.
fn write_value_property<W: Write>(
    writer: &mut Writer<W>,
    name: &str,
    kind: &str,
    text: &str,
) -> XmlResult {
    start(writer, name)?;
    write_text_element(writer, kind, text)?;
    end(writer, name)
}

/// Writes a simple text element.
fn write_text_element<W: Write>(writer: &mut Writer<W>, name: &str, text: &str) -> XmlResult {
    writer.write_event(XmlEvent::Start(BytesStart::new(name)))?;
    writer.write_event(XmlEvent::Text(BytesText::new(text)))?;
    writer.write_event(XmlEvent::End(BytesEnd::new(name)))?;
    Ok(())
}

fn start<W: Write>(writer: &mut Writer<W>, name: &str) -> XmlResult {
    writer.write_event(XmlEvent::Start(BytesStart::new(name)))?;
    Ok(())
}

fn end<W: Write>(writer: &mut Writer<W>, name: &str) -> XmlResult {
    writer.write_event(XmlEvent::End(BytesEnd::new(name)))?;
    Ok(())
}
