//! xCal (RFC 6321) namespace and element names.

/// iCalendar XML namespace URI.
pub const XCAL_NS: &str = "urn:ietf:params:xml:ns:icalendar-2.0";

/// The only iCalendar version this codec reads and writes.
pub const ICAL_VERSION: &str = "2.0";

/// `TRANSP` value written for transparent events.
pub const TRANSPARENT: &str = "TRANSPARENT";
/// `TRANSP` value for events that block time; read but never written.
pub const OPAQUE: &str = "OPAQUE";

pub const MAILTO_SCHEME: &str = "mailto:";

// Envelope
pub const ICALENDAR: &str = "icalendar";
pub const VCALENDAR: &str = "vcalendar";
pub const VEVENT: &str = "vevent";
pub const VTODO: &str = "vtodo";
pub const PROPERTIES: &str = "properties";
pub const COMPONENTS: &str = "components";
pub const PARAMETERS: &str = "parameters";
pub const PRODID: &str = "prodid";
pub const VERSION: &str = "version";

// Properties
pub const UID: &str = "uid";
pub const CREATED: &str = "created";
pub const LAST_MODIFIED: &str = "last-modified";
pub const SEQUENCE: &str = "sequence";
pub const CLASS: &str = "class";
pub const CATEGORIES: &str = "categories";
pub const DTSTART: &str = "dtstart";
pub const DTEND: &str = "dtend";
pub const DURATION: &str = "duration";
pub const DUE: &str = "due";
pub const RRULE: &str = "rrule";
pub const RDATE: &str = "rdate";
pub const EXDATE: &str = "exdate";
pub const SUMMARY: &str = "summary";
pub const DESCRIPTION: &str = "description";
pub const PRIORITY: &str = "priority";
pub const STATUS: &str = "status";
pub const LOCATION: &str = "location";
pub const URL: &str = "url";
pub const TRANSP: &str = "transp";
pub const PERCENT_COMPLETE: &str = "percent-complete";
pub const RELATED_TO: &str = "related-to";
pub const ORGANIZER: &str = "organizer";
pub const ATTENDEE: &str = "attendee";
pub const X_CUSTOM: &str = "x-custom";
pub const IDENTIFIER: &str = "identifier";
pub const VALUE: &str = "value";

// Parameters
pub const TZID: &str = "tzid";
pub const CN: &str = "cn";
pub const DIR: &str = "dir";
pub const PARTSTAT: &str = "partstat";
pub const ROLE: &str = "role";
pub const RSVP: &str = "rsvp";
pub const DELEGATED_TO: &str = "delegated-to";
pub const DELEGATED_FROM: &str = "delegated-from";
pub const CUTYPE: &str = "cutype";

// Value types
pub const TEXT: &str = "text";
pub const DATE: &str = "date";
pub const DATE_TIME: &str = "date-time";
pub const INTEGER: &str = "integer";
pub const BOOLEAN: &str = "boolean";
pub const URI: &str = "uri";
pub const CAL_ADDRESS: &str = "cal-address";
pub const RECUR: &str = "recur";

// Recurrence rule parts
pub const FREQ: &str = "freq";
pub const UNTIL: &str = "until";
pub const COUNT: &str = "count";
pub const INTERVAL: &str = "interval";
pub const BYSECOND: &str = "bysecond";
pub const BYMINUTE: &str = "byminute";
pub const BYHOUR: &str = "byhour";
pub const BYDAY: &str = "byday";
pub const BYMONTHDAY: &str = "bymonthday";
pub const BYYEARDAY: &str = "byyearday";
pub const BYWEEKNO: &str = "byweekno";
pub const BYMONTH: &str = "bymonth";
pub const WKST: &str = "wkst";
