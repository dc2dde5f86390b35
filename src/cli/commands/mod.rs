//! CLI command handlers for `ClassTracker`.
//!
//! This module provides handlers for various CLI subcommands.
//! Each command is implemented in its own submodule.

pub mod config;
pub mod menu;
pub mod report;
