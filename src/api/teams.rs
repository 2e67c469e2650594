//! Team endpoints

use axum::extract::{Path, State};
use axum::http::StatusCode;
use tracing::debug;

use crate::api::state::AppState;
use crate::api::types::{ApiError, Json, MessageResponse};
use crate::domain::Team;

/// GET /teams
pub async fn list_teams(State(state): State<AppState>) -> Result<Json<Vec<Team>>, ApiError> {
    debug!("Listing teams");

    let teams = state.team_service.list()?;
    Ok(Json(teams))
}

/// GET /teams/{id}
pub async fn get_team(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Team>, ApiError> {
    debug!(id, "Getting team");

    let team = state.team_service.get(&id)?;
    Ok(Json(team))
}

/// POST /teams
pub async fn create_team(
    State(state): State<AppState>,
    Json(team): Json<Team>,
) -> Result<(StatusCode, Json<Team>), ApiError> {
    let team = state.team_service.create(team)?;
    Ok((StatusCode::CREATED, Json(team)))
}

/// PATCH /teams/{id}
pub async fn update_team(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(team): Json<Team>,
) -> Result<Json<Team>, ApiError> {
    let team = state.team_service.update(&id, team)?;
    Ok(Json(team))
}

/// DELETE /teams/{id}
pub async fn delete_team(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<MessageResponse>, ApiError> {
    let deleted = state.team_service.delete(&id)?;

    let message = if deleted {
        format!("Team '{id}' deleted")
    } else {
        format!("Team '{id}' does not exist, nothing to delete")
    };
    Ok(Json(MessageResponse::new(message)))
}
