//! Shared application state

use std::sync::Arc;

use crate::infrastructure::{EpicService, PlanStore, TeamService};

/// State handed to every handler: both services share one store so the
/// cross-entity relationship stays under a single lock.
#[derive(Clone)]
pub struct AppState {
    pub epic_service: Arc<EpicService>,
    pub team_service: Arc<TeamService>,
}

impl AppState {
    pub fn new() -> Self {
        let store = Arc::new(PlanStore::new());
        Self {
            epic_service: Arc::new(EpicService::new(store.clone())),
            team_service: Arc::new(TeamService::new(store)),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
