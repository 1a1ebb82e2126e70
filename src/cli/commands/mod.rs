//! CLI command implementations

pub mod classify;
pub mod completions;
pub mod integrations;
pub mod report;
pub mod status;
