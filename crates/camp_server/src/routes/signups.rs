//! Signup endpoints.
//!
//! # Contract
//! - `GET /signups` -> 200, detail view array.
//! - `POST /signups` -> 201, detail view; 400 when a field is missing or out
//!   of range, or when the camper or activity does not exist.

use crate::error::{ApiError, REQUEST_INVALID};
use crate::state::{signup_service, AppState};
use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use camp_core::{
    require, summaries, ActivityId, CamperId, NewSignup, SignupDetail, ValidationError,
};
use serde::Deserialize;

#[derive(Debug, Default, Deserialize)]
pub struct SignupPayload {
    #[serde(default)]
    pub camper_id: Option<CamperId>,
    #[serde(default)]
    pub activity_id: Option<ActivityId>,
    #[serde(default)]
    pub time: Option<i64>,
}

impl SignupPayload {
    fn into_new_signup(self) -> Result<NewSignup, ValidationError> {
        NewSignup::new(
            require(self.camper_id, "camper_id")?,
            require(self.activity_id, "activity_id")?,
            require(self.time, "time")?,
        )
    }
}

pub async fn list_signups(
    State(state): State<AppState>,
) -> Result<Json<Vec<SignupDetail>>, ApiError> {
    let conn = state
        .connection()
        .map_err(|err| ApiError::internal("signup_list", err))?;
    let signups = signup_service(&conn)
        .list_signups()
        .map_err(|err| ApiError::internal("signup_list", err))?;
    Ok(Json(summaries(&signups)))
}

pub async fn create_signup(
    State(state): State<AppState>,
    payload: Result<Json<SignupPayload>, JsonRejection>,
) -> Result<(StatusCode, Json<SignupDetail>), ApiError> {
    let reject =
        |err: &dyn std::fmt::Display| ApiError::rejected("signup_create", REQUEST_INVALID, err);

    let Json(payload) = payload.map_err(|err| reject(&err))?;
    let signup = payload.into_new_signup().map_err(|err| reject(&err))?;

    let conn = state.connection().map_err(|err| reject(&err))?;
    let record = signup_service(&conn)
        .create_signup(&signup)
        .map_err(|err| reject(&err))?;

    Ok((StatusCode::CREATED, Json(SignupDetail::from(&record))))
}
