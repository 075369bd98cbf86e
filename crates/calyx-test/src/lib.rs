//! calyx calendaring model - integration test support.
//!
//! This crate re-exports the workspace crates so the integration tests in
//! `tests/` reach everything through the public surface only.

pub use calyx_core::{config, constants};
pub use calyx_rfc::error;
pub use calyx_rfc::rfc::xcal;
