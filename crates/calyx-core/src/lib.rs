//! Shared building blocks for the calyx workspace: configuration,
//! product constants and the core error type.

pub mod config;
pub mod constants;
pub mod error;
