//! Integration test modules.
//!
//! ## Running Tests
//!
//! ```sh
//! cargo test -p calyx-test
//! ```

mod delegation;
mod enum_tokens;
mod helpers;
mod round_trip;
mod settings;
mod strict_mode;
mod validation;
