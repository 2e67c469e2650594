//! In-memory entity store
//!
//! Both collections live behind one lock: relationship edits span an Epic and
//! one or two Teams, so per-collection locking could expose a half-applied
//! move to a concurrent reader. Data is lost when the process terminates.

use std::collections::BTreeMap;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::domain::{DomainError, Epic, Team};

/// The state guarded by the store lock: Epic and Team records keyed by id.
///
/// `BTreeMap` keeps "list all" iteration deterministic (sorted by id).
#[derive(Debug, Default)]
pub struct PlanState {
    epics: BTreeMap<String, Epic>,
    teams: BTreeMap<String, Team>,
}

impl PlanState {
    pub fn epic(&self, id: &str) -> Option<&Epic> {
        self.epics.get(id)
    }

    pub fn epic_mut(&mut self, id: &str) -> Option<&mut Epic> {
        self.epics.get_mut(id)
    }

    pub fn epic_exists(&self, id: &str) -> bool {
        self.epics.contains_key(id)
    }

    /// Inserts or replaces the record under its own id. Duplicate-id policy
    /// is the caller's: services check `epic_exists` under the same guard.
    pub fn put_epic(&mut self, epic: Epic) {
        self.epics.insert(epic.id.clone(), epic);
    }

    pub fn remove_epic(&mut self, id: &str) -> Option<Epic> {
        self.epics.remove(id)
    }

    pub fn epics(&self) -> impl Iterator<Item = &Epic> {
        self.epics.values()
    }

    pub fn team(&self, id: &str) -> Option<&Team> {
        self.teams.get(id)
    }

    pub fn team_mut(&mut self, id: &str) -> Option<&mut Team> {
        self.teams.get_mut(id)
    }

    pub fn team_exists(&self, id: &str) -> bool {
        self.teams.contains_key(id)
    }

    pub fn put_team(&mut self, team: Team) {
        self.teams.insert(team.id.clone(), team);
    }

    pub fn remove_team(&mut self, id: &str) -> Option<Team> {
        self.teams.remove(id)
    }

    pub fn teams(&self) -> impl Iterator<Item = &Team> {
        self.teams.values()
    }
}

/// Thread-safe store handle shared by both entity services
#[derive(Debug, Default)]
pub struct PlanStore {
    state: RwLock<PlanState>,
}

impl PlanStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn read(&self) -> Result<RwLockReadGuard<'_, PlanState>, DomainError> {
        self.state
            .read()
            .map_err(|e| DomainError::internal(format!("Failed to acquire read lock: {e}")))
    }

    /// Acquires the single write guard. Every relationship-touching
    /// read-modify-write sequence runs under one acquisition.
    pub fn write(&self) -> Result<RwLockWriteGuard<'_, PlanState>, DomainError> {
        self.state
            .write()
            .map_err(|e| DomainError::internal(format!("Failed to acquire write lock: {e}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Size;

    fn epic(id: &str) -> Epic {
        Epic {
            id: id.to_string(),
            name: format!("Epic {id}"),
            description: String::new(),
            category: String::new(),
            dri: String::new(),
            links_to_docs: vec![],
            size: Size::S,
            cycle_time: 0.0,
            status: "Pending".to_string(),
            pi: String::new(),
            dependencies: vec![],
            team: String::new(),
        }
    }

    #[test]
    fn test_put_and_get_epic() {
        let mut state = PlanState::default();
        state.put_epic(epic("1"));

        assert!(state.epic_exists("1"));
        assert_eq!(state.epic("1").unwrap().name, "Epic 1");
        assert!(state.epic("2").is_none());
    }

    #[test]
    fn test_put_epic_replaces() {
        let mut state = PlanState::default();
        state.put_epic(epic("1"));

        let mut updated = epic("1");
        updated.status = "Done".to_string();
        state.put_epic(updated);

        assert_eq!(state.epics().count(), 1);
        assert_eq!(state.epic("1").unwrap().status, "Done");
    }

    #[test]
    fn test_remove_epic() {
        let mut state = PlanState::default();
        state.put_epic(epic("1"));

        assert!(state.remove_epic("1").is_some());
        assert!(state.remove_epic("1").is_none());
        assert!(!state.epic_exists("1"));
    }

    #[test]
    fn test_epics_iterate_sorted_by_id() {
        let mut state = PlanState::default();
        state.put_epic(epic("b"));
        state.put_epic(epic("a"));
        state.put_epic(epic("c"));

        let ids: Vec<&str> = state.epics().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_team_crud() {
        let mut state = PlanState::default();
        state.put_team(Team::stub("T1"));

        assert!(state.team_exists("T1"));
        state.team_mut("T1").unwrap().epics.push("1".to_string());
        assert_eq!(state.team("T1").unwrap().epics, vec!["1"]);

        assert!(state.remove_team("T1").is_some());
        assert!(state.remove_team("T1").is_none());
    }

    #[test]
    fn test_store_guards() {
        let store = PlanStore::new();

        store.write().unwrap().put_epic(epic("1"));
        assert!(store.read().unwrap().epic_exists("1"));
    }
}
