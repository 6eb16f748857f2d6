//! Camper endpoints.
//!
//! # Contract
//! - `GET /campers` -> 200, list view array.
//! - `POST /campers` -> 201, list view of the new camper; 400 on any failure.
//! - `GET /campers/:id` -> 200, detail view; 404 when absent.
//! - `PATCH /campers/:id` -> 202, list view; 404 when absent, 400 when any
//!   provided field is invalid (nothing is written then).

use crate::error::{ApiError, CAMPER_CREATE_INVALID, CAMPER_NOT_FOUND, REQUEST_INVALID};
use crate::state::{camper_service, AppState};
use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use camp_core::{
    require, summaries, CamperDetail, CamperId, CamperPatch, CamperSummary, EntityKind,
    NewCamper, RepoError, ValidationError,
};
use serde::Deserialize;

/// Body accepted by create and update; absent keys and `null` are both "not provided".
#[derive(Debug, Default, Deserialize)]
pub struct CamperPayload {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub age: Option<i64>,
}

impl CamperPayload {
    fn into_new_camper(self) -> Result<NewCamper, ValidationError> {
        NewCamper::new(require(self.name, "name")?, require(self.age, "age")?)
    }

    fn into_patch(self) -> CamperPatch {
        CamperPatch {
            name: self.name,
            age: self.age,
        }
    }
}

pub async fn list_campers(
    State(state): State<AppState>,
) -> Result<Json<Vec<CamperSummary>>, ApiError> {
    let conn = state
        .connection()
        .map_err(|err| ApiError::internal("camper_list", err))?;
    let campers = camper_service(&conn)
        .list_campers()
        .map_err(|err| ApiError::internal("camper_list", err))?;
    Ok(Json(summaries(&campers)))
}

pub async fn create_camper(
    State(state): State<AppState>,
    payload: Result<Json<CamperPayload>, JsonRejection>,
) -> Result<(StatusCode, Json<CamperSummary>), ApiError> {
    let reject = |err: &dyn std::fmt::Display| {
        ApiError::rejected("camper_create", CAMPER_CREATE_INVALID, err)
    };

    let Json(payload) = payload.map_err(|err| reject(&err))?;
    let camper = payload.into_new_camper().map_err(|err| reject(&err))?;

    let conn = state.connection().map_err(|err| reject(&err))?;
    let created = camper_service(&conn)
        .create_camper(&camper)
        .map_err(|err| reject(&err))?;

    Ok((StatusCode::CREATED, Json(CamperSummary::from(&created))))
}

pub async fn get_camper(
    State(state): State<AppState>,
    id: Result<Path<CamperId>, PathRejection>,
) -> Result<Json<CamperDetail>, ApiError> {
    let Path(id) = id.map_err(|_| ApiError::NotFound(CAMPER_NOT_FOUND))?;

    let conn = state
        .connection()
        .map_err(|err| ApiError::internal("camper_get", err))?;
    let detail = camper_service(&conn)
        .get_camper_detail(id)
        .map_err(|err| ApiError::internal("camper_get", err))?
        .ok_or(ApiError::NotFound(CAMPER_NOT_FOUND))?;

    Ok(Json(CamperDetail::from(&detail)))
}

pub async fn update_camper(
    State(state): State<AppState>,
    id: Result<Path<CamperId>, PathRejection>,
    payload: Result<Json<CamperPayload>, JsonRejection>,
) -> Result<(StatusCode, Json<CamperSummary>), ApiError> {
    let reject =
        |err: &dyn std::fmt::Display| ApiError::rejected("camper_update", REQUEST_INVALID, err);

    let Path(id) = id.map_err(|_| ApiError::NotFound(CAMPER_NOT_FOUND))?;

    let conn = state.connection().map_err(|err| reject(&err))?;
    let service = camper_service(&conn);
    // Existence is checked before the body so a missing camper is always 404.
    match service.get_camper(id) {
        Ok(Some(_)) => {}
        Ok(None) => return Err(ApiError::NotFound(CAMPER_NOT_FOUND)),
        Err(err) => return Err(reject(&err)),
    }

    let Json(payload) = payload.map_err(|err| reject(&err))?;
    let patch = payload.into_patch();

    match service.update_camper(id, &patch) {
        Ok(camper) => Ok((StatusCode::ACCEPTED, Json(CamperSummary::from(&camper)))),
        Err(RepoError::NotFound(EntityKind::Camper, _)) => {
            Err(ApiError::NotFound(CAMPER_NOT_FOUND))
        }
        Err(err) => Err(reject(&err)),
    }
}
