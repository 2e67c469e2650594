use axum::{routing::get, Router};
use tower_http::trace::TraceLayer;

use super::epics;
use super::health;
use super::state::AppState;
use super::teams;

/// Create the full router with application state
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/live", get(health::live_check))
        .route("/epics", get(epics::list_epics).post(epics::create_epic))
        .route(
            "/epics/{id}",
            get(epics::get_epic)
                .patch(epics::update_epic)
                .delete(epics::delete_epic),
        )
        .route("/teams", get(teams::list_teams).post(teams::create_team))
        .route(
            "/teams/{id}",
            get(teams::get_team)
                .patch(teams::update_team)
                .delete(teams::delete_team),
        )
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}
