//! xCal document writing.

mod writer;

pub(crate) use writer::{WriteComponent, serialize_component};
