//! In-memory store for editable integration configuration
//!
//! The store has a single owner. Records are keyed by project id and are
//! never persisted; they live as long as the store does.

use std::collections::BTreeMap;

use crate::entities::{ConfigStatus, IntegrationConfig};
use crate::metrics::tally::{tally_by, StatusTally};

#[derive(Debug, Default, Clone)]
pub struct IntegrationStore {
    configs: BTreeMap<String, IntegrationConfig>,
}

impl IntegrationStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a store from dataset records; later duplicates replace earlier ones
    pub fn from_records(records: impl IntoIterator<Item = IntegrationConfig>) -> Self {
        let mut store = Self::new();
        for record in records {
            store.replace(record);
        }
        store
    }

    pub fn get(&self, project_id: &str) -> Option<&IntegrationConfig> {
        self.configs.get(project_id)
    }

    /// Insert or overwrite the record for `config.id`, returning the previous one
    pub fn replace(&mut self, config: IntegrationConfig) -> Option<IntegrationConfig> {
        tracing::debug!(project = %config.id, status = %config.status(), "integration config saved");
        self.configs.insert(config.id.clone(), config)
    }

    /// Records in project id order
    pub fn iter(&self) -> impl Iterator<Item = &IntegrationConfig> {
        self.configs.values()
    }

    pub fn len(&self) -> usize {
        self.configs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.configs.is_empty()
    }

    /// Completeness breakdown across all records
    pub fn status_tally(&self) -> StatusTally<ConfigStatus> {
        tally_by(self.iter(), IntegrationConfig::status)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(id: &str, task_tool: &str) -> IntegrationConfig {
        IntegrationConfig {
            id: id.to_string(),
            task_tool: task_tool.to_string(),
            ..IntegrationConfig::default()
        }
    }

    #[test]
    fn test_replace_returns_previous() {
        let mut store = IntegrationStore::new();
        assert!(store.replace(config("proj-001", "")).is_none());
        let previous = store.replace(config("proj-001", "JIRA")).unwrap();
        assert!(previous.task_tool.is_empty());
        assert_eq!(store.get("proj-001").unwrap().task_tool, "JIRA");
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_status_is_derived_after_replace() {
        let mut store = IntegrationStore::new();
        store.replace(config("proj-002", ""));
        assert_eq!(store.get("proj-002").unwrap().status(), ConfigStatus::NotConfigured);
        store.replace(config("proj-002", "Backlog"));
        assert_eq!(store.get("proj-002").unwrap().status(), ConfigStatus::Partial);
    }

    #[test]
    fn test_unknown_project_has_no_record() {
        let store = IntegrationStore::new();
        assert!(store.is_empty());
        assert!(store.get("proj-999").is_none());
        assert!(store.status_tally().is_empty());
    }

    #[test]
    fn test_iter_in_key_order() {
        let store = IntegrationStore::from_records(vec![config("b", ""), config("a", "")]);
        let ids: Vec<_> = store.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b"]);
    }

    #[test]
    fn test_status_tally() {
        let store = IntegrationStore::from_records(vec![
            config("a", ""),
            config("b", "JIRA"),
            config("c", "Notion"),
        ]);
        let tally = store.status_tally();
        assert_eq!(tally.total, 3);
        assert_eq!(tally.count(ConfigStatus::Partial), 2);
        assert_eq!(tally.count(ConfigStatus::NotConfigured), 1);
        assert_eq!(tally.count(ConfigStatus::Configured), 0);
    }
}
