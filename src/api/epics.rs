//! Epic endpoints

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use serde::Deserialize;
use tracing::debug;

use crate::api::state::AppState;
use crate::api::types::{ApiError, Json, MessageResponse};
use crate::domain::Epic;

#[derive(Debug, Clone, Deserialize)]
pub struct EpicListQuery {
    pub team: Option<String>,
}

/// GET /epics[?team=ID]
pub async fn list_epics(
    State(state): State<AppState>,
    Query(query): Query<EpicListQuery>,
) -> Result<Json<Vec<Epic>>, ApiError> {
    debug!(team = ?query.team, "Listing epics");

    // An empty ?team= is the same as no filter.
    let team = query.team.as_deref().filter(|t| !t.is_empty());

    let epics = state.epic_service.list(team)?;
    Ok(Json(epics))
}

/// GET /epics/{id}
pub async fn get_epic(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Epic>, ApiError> {
    debug!(id, "Getting epic");

    let epic = state.epic_service.get(&id)?;
    Ok(Json(epic))
}

/// POST /epics
pub async fn create_epic(
    State(state): State<AppState>,
    Json(epic): Json<Epic>,
) -> Result<(StatusCode, Json<Epic>), ApiError> {
    let epic = state.epic_service.create(epic)?;
    Ok((StatusCode::CREATED, Json(epic)))
}

/// PATCH /epics/{id}
pub async fn update_epic(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(epic): Json<Epic>,
) -> Result<Json<Epic>, ApiError> {
    let epic = state.epic_service.update(&id, epic)?;
    Ok(Json(epic))
}

/// DELETE /epics/{id}
pub async fn delete_epic(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<MessageResponse>, ApiError> {
    let deleted = state.epic_service.delete(&id)?;

    let message = if deleted {
        format!("Epic '{id}' deleted")
    } else {
        format!("Epic '{id}' does not exist, nothing to delete")
    };
    Ok(Json(MessageResponse::new(message)))
}
