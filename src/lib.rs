//! Shared library for `ClassTracker`
//! Contains the roster core and the configuration/logging plumbing used by the CLI

pub mod config;
pub mod core;
pub mod logger;

/// Returns the current version of the `class-tracker` crate
#[must_use]
pub const fn get_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
