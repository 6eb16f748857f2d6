//! Signup use-case service.
//!
//! # Invariants
//! - A created signup is returned hydrated, read back after commit.

use crate::model::activity::ActivityId;
use crate::model::signup::{NewSignup, SignupRecord};
use crate::model::EntityKind;
use crate::repo::signup_repo::SignupRepository;
use crate::repo::{RepoError, RepoResult};
use log::info;

/// Use-case service wrapper for signup operations.
pub struct SignupService<R: SignupRepository> {
    repo: R,
}

impl<R: SignupRepository> SignupService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    pub fn list_signups(&self) -> RepoResult<Vec<SignupRecord>> {
        self.repo.list_signup_records()
    }

    pub fn list_signups_for_activity(&self, id: ActivityId) -> RepoResult<Vec<SignupRecord>> {
        self.repo.list_signup_records_for_activity(id)
    }

    /// Persists a signup whose camper and activity must already exist.
    ///
    /// # Errors
    /// - `RepoError::Validation(UnknownReference)` when either parent is missing.
    pub fn create_signup(&self, signup: &NewSignup) -> RepoResult<SignupRecord> {
        let created = self.repo.create_signup(signup)?;
        let record = self
            .repo
            .get_signup_record(created.id())?
            .ok_or(RepoError::NotFound(EntityKind::Signup, created.id()))?;

        info!(
            "event=signup_create module=service status=ok signup_id={} camper_id={} activity_id={}",
            created.id(),
            created.camper_id(),
            created.activity_id()
        );
        Ok(record)
    }
}
