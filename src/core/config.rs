//! Configuration management with layered hierarchy

use chrono::NaiveDate;
use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::metrics::due::parse_date;

/// Name of the per-directory config file
pub const LOCAL_CONFIG_FILE: &str = "pmo.yaml";

/// PMO configuration with layered hierarchy
#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Dataset document to load instead of the embedded sample
    pub dataset: Option<PathBuf>,

    /// Default output format
    pub default_format: Option<String>,

    /// Reference date (YYYY-MM-DD) used instead of the system date
    pub today: Option<String>,
}

impl Config {
    /// Load configuration from all sources, merging in priority order
    pub fn load() -> Self {
        let local = std::env::current_dir()
            .ok()
            .map(|dir| dir.join(LOCAL_CONFIG_FILE));
        Self::load_from(
            Self::global_config_path().as_deref(),
            local.as_deref(),
            |key| std::env::var(key).ok(),
        )
    }

    /// Layered load with explicit sources
    pub fn load_from(
        global: Option<&Path>,
        local: Option<&Path>,
        env: impl Fn(&str) -> Option<String>,
    ) -> Self {
        // 1. Built-in defaults (already in Default impl)
        let mut config = Config::default();

        // 2. Global user config (~/.config/pmo/config.yaml)
        if let Some(global) = global.and_then(Self::read_file) {
            config.merge(global);
        }

        // 3. Local config (./pmo.yaml)
        if let Some(local) = local.and_then(Self::read_file) {
            config.merge(local);
        }

        // 4. Environment variables
        if let Some(dataset) = env("PMO_DATASET").filter(|v| !v.is_empty()) {
            config.dataset = Some(PathBuf::from(dataset));
        }
        if let Some(format) = env("PMO_FORMAT").filter(|v| !v.is_empty()) {
            config.default_format = Some(format);
        }
        if let Some(today) = env("PMO_TODAY").filter(|v| !v.is_empty()) {
            config.today = Some(today);
        }

        config
    }

    fn read_file(path: &Path) -> Option<Config> {
        if !path.exists() {
            return None;
        }
        let contents = std::fs::read_to_string(path).ok()?;
        match serde_yml::from_str::<Config>(&contents) {
            Ok(config) => {
                tracing::debug!(path = %path.display(), "config loaded");
                Some(config)
            }
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "ignoring malformed config file");
                None
            }
        }
    }

    /// Get the path to the global config file
    pub fn global_config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("", "", "pmo")
            .map(|dirs| dirs.config_dir().join("config.yaml"))
    }

    /// Merge another config into this one (other takes precedence)
    fn merge(&mut self, other: Config) {
        if other.dataset.is_some() {
            self.dataset = other.dataset;
        }
        if other.default_format.is_some() {
            self.default_format = other.default_format;
        }
        if other.today.is_some() {
            self.today = other.today;
        }
    }

    /// Configured reference date; a malformed value is ignored
    pub fn today(&self) -> Option<NaiveDate> {
        let raw = self.today.as_deref()?;
        let date = parse_date(raw);
        if date.is_none() {
            tracing::warn!(value = raw, "ignoring malformed reference date in config");
        }
        date
    }
}
