//! Typed calendaring object model.

mod attendee;
mod contact;
mod datetime;
mod duration;
mod event;
mod incidence;
mod recurrence;
mod text;
mod todo;

pub use attendee::{Attendee, CalendarUserType, ParticipationStatus, Role};
pub use contact::ContactReference;
pub use datetime::{DateTime, DateTimeForm};
pub use duration::{Duration, DurationBuilder};
pub use event::Event;
pub use incidence::{Classification, CustomProperty, Incidence, IncidenceProperties, Status};
pub use recurrence::{Frequency, RecurrenceEnd, RecurrenceRule, Weekday, WeekdayNum};
pub use todo::Todo;

pub(crate) use text::check_text;
