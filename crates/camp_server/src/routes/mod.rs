//! Route table for the camp API.

use crate::state::AppState;
use axum::routing::{delete, get};
use axum::Router;

pub mod activities;
pub mod campers;
pub mod signups;

/// Builds the application router over shared state.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(home))
        .route(
            "/campers",
            get(campers::list_campers).post(campers::create_camper),
        )
        .route(
            "/campers/:id",
            get(campers::get_camper).patch(campers::update_camper),
        )
        .route("/activities", get(activities::list_activities))
        .route("/activities/:id", delete(activities::delete_activity))
        .route(
            "/signups",
            get(signups::list_signups).post(signups::create_signup),
        )
        .with_state(state)
}

async fn home() -> &'static str {
    ""
}
