//! Calendaring object model with an xCal (RFC 6321) reader and writer.
//!
//! ```rust
//! use calyx_rfc::rfc::xcal::{self, DateTime, Event, Incidence};
//!
//! let mut event = Event::new();
//! event.set_summary("test").unwrap();
//! let start = DateTime::new(2014, 7, 1, 12, 30, 0).unwrap();
//! event.set_start(start.with_timezone("Europe/London").unwrap()).unwrap();
//! event.add_exception_date(DateTime::date(2014, 7, 5).unwrap());
//!
//! let document = xcal::write_event(&event);
//! let parsed = xcal::read_event(&document, false).unwrap();
//! assert_eq!(xcal::write_event(&parsed), document);
//! ```

pub mod error;
pub mod rfc;
