//! Camper use-case service.
//!
//! # Responsibility
//! - Create, read, update and delete campers.
//! - Assemble camper detail records (camper plus hydrated signups).
//!
//! # Invariants
//! - Updates check existence before mutating, so a missing camper never
//!   produces a partial write.
//! - Validation happens on the loaded camper before anything is persisted.

use crate::model::activity::Activity;
use crate::model::camper::{Camper, CamperId, CamperPatch, NewCamper};
use crate::model::signup::SignupRecord;
use crate::model::EntityKind;
use crate::repo::camper_repo::CamperRepository;
use crate::repo::signup_repo::SignupRepository;
use crate::repo::{RepoError, RepoResult};
use log::info;

/// Camper with every signup it owns, each hydrated with its activity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CamperDetailRecord {
    pub camper: Camper,
    pub signups: Vec<SignupRecord>,
}

/// Use-case service wrapper for camper operations.
pub struct CamperService<C: CamperRepository, S: SignupRepository> {
    campers: C,
    signups: S,
}

impl<C: CamperRepository, S: SignupRepository> CamperService<C, S> {
    pub fn new(campers: C, signups: S) -> Self {
        Self { campers, signups }
    }

    pub fn list_campers(&self) -> RepoResult<Vec<Camper>> {
        self.campers.list_campers()
    }

    /// Persists a validated camper and returns it with its generated id.
    pub fn create_camper(&self, camper: &NewCamper) -> RepoResult<Camper> {
        let created = self.campers.create_camper(camper)?;
        info!(
            "event=camper_create module=service status=ok camper_id={}",
            created.id()
        );
        Ok(created)
    }

    pub fn get_camper(&self, id: CamperId) -> RepoResult<Option<Camper>> {
        self.campers.get_camper(id)
    }

    /// Loads a camper together with its signups.
    ///
    /// Returns `Ok(None)` when the camper does not exist.
    pub fn get_camper_detail(&self, id: CamperId) -> RepoResult<Option<CamperDetailRecord>> {
        let Some(camper) = self.campers.get_camper(id)? else {
            return Ok(None);
        };
        let signups = self.signups.list_signup_records_for_camper(id)?;
        Ok(Some(CamperDetailRecord { camper, signups }))
    }

    /// Applies a partial update.
    ///
    /// # Errors
    /// - `RepoError::NotFound` when the camper does not exist.
    /// - `RepoError::Validation` when any provided field is invalid; the
    ///   stored camper is left unchanged.
    pub fn update_camper(&self, id: CamperId, patch: &CamperPatch) -> RepoResult<Camper> {
        let mut camper = self
            .campers
            .get_camper(id)?
            .ok_or(RepoError::NotFound(EntityKind::Camper, id))?;

        camper.apply(patch)?;
        self.campers.update_camper(&camper)?;

        info!(
            "event=camper_update module=service status=ok camper_id={} name_changed={} age_changed={}",
            id,
            patch.name.is_some(),
            patch.age.is_some()
        );
        Ok(camper)
    }

    /// Deletes a camper and cascades to its signups.
    pub fn delete_camper(&self, id: CamperId) -> RepoResult<usize> {
        self.campers.delete_camper(id)
    }

    /// Activities reachable from the camper through its signups.
    pub fn activities_for_camper(&self, id: CamperId) -> RepoResult<Vec<Activity>> {
        self.campers.list_activities_for_camper(id)
    }
}
