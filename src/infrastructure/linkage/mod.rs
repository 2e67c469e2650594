//! Relationship maintenance between `Epic.team` and `Team.epics`
//!
//! The reference is stored twice (forward on the epic, backward-list on the
//! team) and neither copy is authoritative; these operations mutate both
//! sides together. Every function takes `&mut PlanState`, so the caller
//! already holds the store write lock and intermediate states are never
//! observable. Error paths return before the first write.

use std::collections::HashSet;

use tracing::debug;

use crate::domain::{DomainError, Team};
use crate::infrastructure::store::PlanState;

/// Appends `epic_id` to the team's epic list, creating a stub team on demand
/// when `team_id` names no existing team.
///
/// Does not touch the epic record; the caller is responsible for having set
/// `epic.team` to `team_id`.
pub fn attach_epic_to_team(
    state: &mut PlanState,
    team_id: &str,
    epic_id: &str,
) -> Result<(), DomainError> {
    if !state.team_exists(team_id) {
        debug!(team_id, "Auto-creating stub team");
        state.put_team(Team::stub(team_id));
    }

    let team = state
        .team_mut(team_id)
        .ok_or_else(|| DomainError::invariant(format!("Team '{team_id}' vanished after create")))?;

    team.epics.push(epic_id.to_string());
    Ok(())
}

/// Removes `epic_id` from the team's epic list.
///
/// Removal is swap-with-last; the order of the remaining ids is not
/// preserved, which the data model documents as insignificant.
pub fn detach_epic_from_team(
    state: &mut PlanState,
    team_id: &str,
    epic_id: &str,
) -> Result<(), DomainError> {
    let team = state
        .team_mut(team_id)
        .ok_or_else(|| DomainError::not_found(format!("Team '{team_id}' does not exist")))?;

    let position = team.epics.iter().position(|id| id == epic_id).ok_or_else(|| {
        DomainError::not_found(format!("Epic '{epic_id}' not assigned to team '{team_id}'"))
    })?;

    team.epics.swap_remove(position);
    Ok(())
}

/// Moves `epic_id` from one team's list to another's.
///
/// Both teams must already exist, even when `old_team_id` is the empty
/// "unassigned" sentinel; a previously unassigned epic is attached, not
/// moved. All checks run before the first write, so a failed move leaves
/// both team records untouched.
pub fn move_epic_between_teams(
    state: &mut PlanState,
    old_team_id: &str,
    new_team_id: &str,
    epic_id: &str,
) -> Result<(), DomainError> {
    if !state.team_exists(old_team_id) {
        return Err(DomainError::not_found(format!(
            "Team '{old_team_id}' does not exist"
        )));
    }
    if !state.team_exists(new_team_id) {
        return Err(DomainError::not_found(format!(
            "Team '{new_team_id}' does not exist"
        )));
    }

    let old_team = state
        .team_mut(old_team_id)
        .ok_or_else(|| DomainError::invariant(format!("Team '{old_team_id}' vanished")))?;
    let position = old_team.epics.iter().position(|id| id == epic_id).ok_or_else(|| {
        DomainError::not_found(format!(
            "Epic '{epic_id}' not assigned to team '{old_team_id}'"
        ))
    })?;
    old_team.epics.swap_remove(position);

    let new_team = state
        .team_mut(new_team_id)
        .ok_or_else(|| DomainError::invariant(format!("Team '{new_team_id}' vanished")))?;
    new_team.epics.push(epic_id.to_string());

    Ok(())
}

/// Epic-side entry point for a `team` field change
pub fn change_epic_team(
    state: &mut PlanState,
    old_team_id: &str,
    new_team_id: &str,
    epic_id: &str,
) -> Result<(), DomainError> {
    debug!(epic_id, old_team_id, new_team_id, "Changing epic team");

    if old_team_id.is_empty() {
        attach_epic_to_team(state, new_team_id, epic_id)
    } else {
        move_epic_between_teams(state, old_team_id, new_team_id, epic_id)
    }
}

/// Rejects a submitted epic id list containing the same id twice.
///
/// A duplicated id would make the backward list disagree with itself: a
/// later swap-remove takes out one occurrence and leaves the other behind
/// pointing at an epic that has already moved on. Callers check before any
/// write, and before any set comparison that would mask the repetition.
pub fn ensure_unique_epic_ids(ids: &[String]) -> Result<(), DomainError> {
    let mut seen: HashSet<&str> = HashSet::new();
    for id in ids {
        if !seen.insert(id) {
            return Err(DomainError::validation(format!(
                "Duplicate epic id '{id}' in team epic list"
            )));
        }
    }
    Ok(())
}

/// Synchronizes `Epic.team` fields after a team's epic list is bulk-edited.
///
/// Applies the set-membership diff of the two lists: removed ids get their
/// epic's `team` cleared, added ids get it set to `team_id`, unchanged ids
/// are left alone so unrelated epic fields are never touched. Duplicate ids
/// in the submitted list are rejected, and every id in the diff must name an
/// existing epic; all checks run before the first write.
pub fn reconcile_team_epics(
    state: &mut PlanState,
    old_ids: &[String],
    new_ids: &[String],
    team_id: &str,
) -> Result<(), DomainError> {
    ensure_unique_epic_ids(new_ids)?;

    let removed = difference(old_ids, new_ids);
    let added = difference(new_ids, old_ids);

    for id in &added {
        if !state.epic_exists(id) {
            return Err(DomainError::not_found(format!("Epic '{id}' does not exist")));
        }
    }
    for id in &removed {
        if !state.epic_exists(id) {
            // The old list came from the store, so its ids must resolve.
            return Err(DomainError::invariant(format!(
                "Epic '{id}' listed by team '{team_id}' does not exist"
            )));
        }
    }

    debug!(
        team_id,
        removed = removed.len(),
        added = added.len(),
        "Reconciling team epic list"
    );

    for id in &removed {
        if let Some(epic) = state.epic_mut(id) {
            epic.team.clear();
        }
    }
    for id in &added {
        if let Some(epic) = state.epic_mut(id) {
            epic.team = team_id.to_string();
        }
    }

    Ok(())
}

/// Ids present in `left` but absent from `right`, by set membership
fn difference<'a>(left: &'a [String], right: &[String]) -> Vec<&'a str> {
    let right: HashSet<&str> = right.iter().map(String::as_str).collect();
    left.iter()
        .map(String::as_str)
        .filter(|id| !right.contains(id))
        .collect()
}
