//! Epic service

use std::sync::Arc;

use tracing::{debug, info};

use crate::domain::{validate_epic_id, DomainError, Epic};
use crate::infrastructure::linkage;
use crate::infrastructure::store::PlanStore;

/// CRUD operations over epics, funneling every relationship edit through the
/// linkage module under a single store write-guard acquisition
#[derive(Debug)]
pub struct EpicService {
    store: Arc<PlanStore>,
}

impl EpicService {
    pub fn new(store: Arc<PlanStore>) -> Self {
        Self { store }
    }

    /// Create a new epic, linking it to its team first when one is named
    pub fn create(&self, epic: Epic) -> Result<Epic, DomainError> {
        info!(id = %epic.id, team = %epic.team, "Creating epic");

        validate_epic_id(&epic.id).map_err(|e| DomainError::validation(e.to_string()))?;

        let mut state = self.store.write()?;

        if state.epic_exists(&epic.id) {
            return Err(DomainError::conflict(format!(
                "Epic '{}' already exists",
                epic.id
            )));
        }

        if epic.is_assigned() {
            linkage::attach_epic_to_team(&mut state, &epic.team, &epic.id)?;
        }

        state.put_epic(epic.clone());
        Ok(epic)
    }

    pub fn get(&self, id: &str) -> Result<Epic, DomainError> {
        let state = self.store.read()?;
        state
            .epic(id)
            .cloned()
            .ok_or_else(|| DomainError::not_found(format!("Epic '{id}' not found")))
    }

    /// List all epics, or only those owned by `team` when a filter is given.
    ///
    /// A filter matching zero epics is reported as not-found rather than an
    /// empty list; an unfiltered listing of an empty store is just empty.
    pub fn list(&self, team: Option<&str>) -> Result<Vec<Epic>, DomainError> {
        let state = self.store.read()?;

        match team {
            None => Ok(state.epics().cloned().collect()),
            Some(team) => {
                let owned: Vec<Epic> = state
                    .epics()
                    .filter(|epic| epic.team == team)
                    .cloned()
                    .collect();

                if owned.is_empty() {
                    return Err(DomainError::not_found(format!(
                        "No epics found for team '{team}'"
                    )));
                }
                Ok(owned)
            }
        }
    }

    /// Whole-record replace. A changed `team` field runs the move logic
    /// first; if that fails the stored record is left untouched.
    pub fn update(&self, id: &str, mut epic: Epic) -> Result<Epic, DomainError> {
        info!(id, "Updating epic");

        // Ids are immutable; the path wins over whatever the body carries.
        epic.id = id.to_string();

        let mut state = self.store.write()?;

        let current = state
            .epic(id)
            .cloned()
            .ok_or_else(|| DomainError::not_found(format!("Epic '{id}' not found")))?;

        if epic.team != current.team {
            linkage::change_epic_team(&mut state, &current.team, &epic.team, id)?;
        }

        state.put_epic(epic.clone());
        Ok(epic)
    }

    /// Delete an epic, unlinking it from its team first.
    ///
    /// Deleting a missing id is not an error; returns whether a record was
    /// actually removed.
    pub fn delete(&self, id: &str) -> Result<bool, DomainError> {
        info!(id, "Deleting epic");

        let mut state = self.store.write()?;

        let Some(epic) = state.epic(id).cloned() else {
            debug!(id, "Epic already absent, nothing to delete");
            return Ok(false);
        };

        if epic.is_assigned() {
            match linkage::detach_epic_from_team(&mut state, &epic.team, id) {
                Ok(()) => {}
                // A dangling assignment has nothing to detach; the record
                // itself is still deleted.
                Err(e) if e.is_not_found() => {
                    debug!(id, team = %epic.team, "Detach skipped: {e}");
                }
                Err(e) => return Err(e),
            }
        }

        state.remove_epic(id);
        Ok(true)
    }
}
