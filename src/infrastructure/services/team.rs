//! Team service

use std::sync::Arc;

use tracing::{debug, info};

use crate::domain::{validate_team_id, DomainError, Team};
use crate::infrastructure::linkage;
use crate::infrastructure::store::PlanStore;

/// CRUD operations over teams. Bulk edits to a team's epic list are
/// reconciled against the epic records through the linkage module before the
/// record is replaced.
#[derive(Debug)]
pub struct TeamService {
    store: Arc<PlanStore>,
}

impl TeamService {
    pub fn new(store: Arc<PlanStore>) -> Self {
        Self { store }
    }

    /// Create a new team. The submitted `epics` list is trusted as seed
    /// data; no epic records are touched.
    pub fn create(&self, team: Team) -> Result<Team, DomainError> {
        info!(id = %team.id, name = %team.name, "Creating team");

        validate_team_id(&team.id).map_err(|e| DomainError::validation(e.to_string()))?;

        let mut state = self.store.write()?;

        if state.team_exists(&team.id) {
            return Err(DomainError::conflict(format!(
                "Team '{}' already exists",
                team.id
            )));
        }

        state.put_team(team.clone());
        Ok(team)
    }

    pub fn get(&self, id: &str) -> Result<Team, DomainError> {
        let state = self.store.read()?;
        state
            .team(id)
            .cloned()
            .ok_or_else(|| DomainError::not_found(format!("Team '{id}' not found")))
    }

    pub fn list(&self) -> Result<Vec<Team>, DomainError> {
        let state = self.store.read()?;
        Ok(state.teams().cloned().collect())
    }

    /// Whole-record replace. When the epic list changed as a set, the diff
    /// is reconciled onto the epic records first; a reconcile failure aborts
    /// the update.
    pub fn update(&self, id: &str, mut team: Team) -> Result<Team, DomainError> {
        info!(id, "Updating team");

        // Ids are immutable; the path wins over whatever the body carries.
        team.id = id.to_string();

        // Checked here, not only inside reconcile: a duplicated list can be
        // set-equal to the stored one and would otherwise skip the diff and
        // be stored as-is.
        linkage::ensure_unique_epic_ids(&team.epics)?;

        let mut state = self.store.write()?;

        let current = state
            .team(id)
            .cloned()
            .ok_or_else(|| DomainError::not_found(format!("Team '{id}' not found")))?;

        if !current.same_epic_set(&team.epics) {
            linkage::reconcile_team_epics(&mut state, &current.epics, &team.epics, id)?;
        }

        state.put_team(team.clone());
        Ok(team)
    }

    /// Delete a team, orphaning its epics (their `team` field is cleared,
    /// the records stay).
    ///
    /// Deleting a missing id is not an error; returns whether a record was
    /// actually removed.
    pub fn delete(&self, id: &str) -> Result<bool, DomainError> {
        info!(id, "Deleting team");

        let mut state = self.store.write()?;

        let Some(team) = state.team(id).cloned() else {
            debug!(id, "Team already absent, nothing to delete");
            return Ok(false);
        };

        // Check before the first write so a broken backward list aborts the
        // whole delete instead of orphaning half the epics.
        for epic_id in &team.epics {
            if !state.epic_exists(epic_id) {
                return Err(DomainError::invariant(format!(
                    "Epic '{epic_id}' listed by team '{id}' does not exist"
                )));
            }
        }

        for epic_id in &team.epics {
            if let Some(epic) = state.epic_mut(epic_id) {
                epic.team.clear();
            }
        }

        state.remove_team(id);
        Ok(true)
    }
}
