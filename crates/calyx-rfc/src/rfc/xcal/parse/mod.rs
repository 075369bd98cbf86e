//! xCal document reading.
//!
//! This module provides parsing for xCal documents using the `quick-xml`
//! crate.

mod cursor;
mod error;
mod reader;
mod values;

pub use error::{ParseError, ParseErrorKind, ParseResult};
pub use reader::ReadState;
pub(crate) use reader::{ReadComponent, XcalReader};
pub use values::{
    parse_boolean, parse_date, parse_date_or_date_time, parse_date_time, parse_duration,
    parse_integer, parse_weekday, parse_weekday_num,
};
