//! Core module - fundamental types and utilities

pub mod config;
pub mod dataset;
pub mod entity;
pub mod integrations;

pub use config::Config;
pub use dataset::{DanglingReference, Dataset, DatasetError};
pub use entity::{Category, Descriptor, Level, Priority};
pub use integrations::IntegrationStore;
