//! Camper domain model.
//!
//! # Responsibility
//! - Define the unsaved (`NewCamper`) and persisted (`Camper`) camper shapes.
//! - Validate name and age on construction and on every assignment.
//!
//! # Invariants
//! - `name` is non-empty after trimming.
//! - `age` is within `[8, 18]`.
//! - A failed update leaves the camper unchanged.

use crate::model::validation::{validate_age, validate_name, ValidationError};

/// Store-generated camper identifier.
pub type CamperId = i64;

/// Validated camper that has not been persisted yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCamper {
    name: String,
    age: i64,
}

impl NewCamper {
    /// Validates fields for a camper about to be inserted.
    pub fn new(name: impl Into<String>, age: i64) -> Result<Self, ValidationError> {
        let name = name.into();
        validate_name(&name)?;
        validate_age(age)?;
        Ok(Self { name, age })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn age(&self) -> i64 {
        self.age
    }

    /// Attaches the id assigned by the store.
    pub(crate) fn into_camper(self, id: CamperId) -> Camper {
        Camper {
            id,
            name: self.name,
            age: self.age,
        }
    }
}

/// Persisted camper.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Camper {
    id: CamperId,
    name: String,
    age: i64,
}

/// Partial update; `None` leaves the field untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CamperPatch {
    pub name: Option<String>,
    pub age: Option<i64>,
}

impl Camper {
    /// Rebuilds a camper from stored fields, re-checking invariants.
    pub fn new(id: CamperId, name: impl Into<String>, age: i64) -> Result<Self, ValidationError> {
        Ok(NewCamper::new(name, age)?.into_camper(id))
    }

    pub fn id(&self) -> CamperId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn age(&self) -> i64 {
        self.age
    }

    pub fn set_name(&mut self, name: impl Into<String>) -> Result<(), ValidationError> {
        let name = name.into();
        validate_name(&name)?;
        self.name = name;
        Ok(())
    }

    pub fn set_age(&mut self, age: i64) -> Result<(), ValidationError> {
        validate_age(age)?;
        self.age = age;
        Ok(())
    }

    /// Applies every provided field, or none of them.
    ///
    /// All fields are validated before the first assignment, so a bad `age`
    /// cannot leave a new `name` behind.
    pub fn apply(&mut self, patch: &CamperPatch) -> Result<(), ValidationError> {
        if let Some(name) = patch.name.as_deref() {
            validate_name(name)?;
        }
        if let Some(age) = patch.age {
            validate_age(age)?;
        }

        if let Some(name) = patch.name.as_ref() {
            self.set_name(name.clone())?;
        }
        if let Some(age) = patch.age {
            self.set_age(age)?;
        }
        Ok(())
    }
}
