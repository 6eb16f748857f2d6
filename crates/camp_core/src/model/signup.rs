//! Signup domain model.
//!
//! # Responsibility
//! - Define the join record linking one camper to one activity at one hour.
//! - Provide the hydrated `SignupRecord` used by detail views.
//!
//! # Invariants
//! - `time` is within `[0, 23]`.
//! - Reference existence is checked by the repository inside the insert
//!   transaction; the model only carries the ids.

use crate::model::activity::{Activity, ActivityId};
use crate::model::camper::{Camper, CamperId};
use crate::model::validation::{validate_time, ValidationError};

/// Store-generated signup identifier.
pub type SignupId = i64;

/// Validated signup that has not been persisted yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NewSignup {
    camper_id: CamperId,
    activity_id: ActivityId,
    time: i64,
}

impl NewSignup {
    pub fn new(
        camper_id: CamperId,
        activity_id: ActivityId,
        time: i64,
    ) -> Result<Self, ValidationError> {
        validate_time(time)?;
        Ok(Self {
            camper_id,
            activity_id,
            time,
        })
    }

    pub fn camper_id(&self) -> CamperId {
        self.camper_id
    }

    pub fn activity_id(&self) -> ActivityId {
        self.activity_id
    }

    pub fn time(&self) -> i64 {
        self.time
    }

    pub(crate) fn into_signup(self, id: SignupId) -> Signup {
        Signup {
            id,
            camper_id: self.camper_id,
            activity_id: self.activity_id,
            time: self.time,
        }
    }
}

/// Persisted signup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Signup {
    id: SignupId,
    camper_id: CamperId,
    activity_id: ActivityId,
    time: i64,
}

impl Signup {
    pub fn new(
        id: SignupId,
        camper_id: CamperId,
        activity_id: ActivityId,
        time: i64,
    ) -> Result<Self, ValidationError> {
        Ok(NewSignup::new(camper_id, activity_id, time)?.into_signup(id))
    }

    pub fn id(&self) -> SignupId {
        self.id
    }

    pub fn camper_id(&self) -> CamperId {
        self.camper_id
    }

    pub fn activity_id(&self) -> ActivityId {
        self.activity_id
    }

    pub fn time(&self) -> i64 {
        self.time
    }

    pub fn set_time(&mut self, time: i64) -> Result<(), ValidationError> {
        validate_time(time)?;
        self.time = time;
        Ok(())
    }
}

/// Signup joined with the camper and activity it references.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignupRecord {
    pub signup: Signup,
    pub camper: Camper,
    pub activity: Activity,
}
