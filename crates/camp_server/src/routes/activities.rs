//! Activity endpoints.

use crate::error::{ApiError, ACTIVITY_NOT_FOUND};
use crate::state::{activity_service, AppState};
use axum::extract::rejection::PathRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use camp_core::{summaries, ActivityId, ActivitySummary, EntityKind, RepoError};

pub async fn list_activities(
    State(state): State<AppState>,
) -> Result<Json<Vec<ActivitySummary>>, ApiError> {
    let conn = state
        .connection()
        .map_err(|err| ApiError::internal("activity_list", err))?;
    let activities = activity_service(&conn)
        .list_activities()
        .map_err(|err| ApiError::internal("activity_list", err))?;
    Ok(Json(summaries(&activities)))
}

/// Deletes an activity and its signups; 204 with an empty body.
pub async fn delete_activity(
    State(state): State<AppState>,
    id: Result<Path<ActivityId>, PathRejection>,
) -> Result<StatusCode, ApiError> {
    let Path(id) = id.map_err(|_| ApiError::NotFound(ACTIVITY_NOT_FOUND))?;

    let conn = state
        .connection()
        .map_err(|err| ApiError::internal("activity_delete", err))?;
    match activity_service(&conn).delete_activity(id) {
        Ok(_) => Ok(StatusCode::NO_CONTENT),
        Err(RepoError::NotFound(EntityKind::Activity, _)) => {
            Err(ApiError::NotFound(ACTIVITY_NOT_FOUND))
        }
        Err(err) => Err(ApiError::internal("activity_delete", err)),
    }
}
