//! Core module: the roster model, registry, and its collaborators

pub mod error;
pub mod loader;
pub mod models;
pub mod registry;
pub mod report;
