//! PMO: project management office dashboard metrics
//!
//! Loads a static PMO dataset (projects, weekly reports, quality KPIs,
//! coordination items, portfolio and integration settings) and derives the
//! summaries a PMO dashboard shows.

pub mod cli;
pub mod core;
pub mod document;
pub mod entities;
pub mod metrics;
