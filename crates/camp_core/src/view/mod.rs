//! Response shapes for campers, activities and signups.
//!
//! # Responsibility
//! - Turn domain entities into serializable payloads with a fixed field
//!   order (declaration order).
//! - Pick list or detail visibility per endpoint.
//!
//! # Invariants
//! - A relationship that leads back to its origin is pruned one hop past
//!   the origin: a camper's signups carry no `camper`, and the camper and
//!   activity nested in a signup carry no `signups`.

use crate::model::activity::{Activity, ActivityId};
use crate::model::camper::{Camper, CamperId};
use crate::model::signup::{SignupId, SignupRecord};
use crate::service::camper_service::CamperDetailRecord;
use serde::{Deserialize, Serialize};

/// List view of a camper.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CamperSummary {
    pub id: CamperId,
    pub name: String,
    pub age: i64,
}

/// List view of an activity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivitySummary {
    pub id: ActivityId,
    pub name: String,
    pub difficulty: i64,
}

/// Detail view of a camper with its signups.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CamperDetail {
    pub id: CamperId,
    pub name: String,
    pub age: i64,
    pub signups: Vec<CamperSignup>,
}

/// Signup as seen from its camper: the camper back-reference is dropped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CamperSignup {
    pub id: SignupId,
    pub time: i64,
    pub camper_id: CamperId,
    pub activity_id: ActivityId,
    pub activity: ActivitySummary,
}

/// Detail view of a signup with both parents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignupDetail {
    pub id: SignupId,
    pub time: i64,
    pub camper_id: CamperId,
    pub activity_id: ActivityId,
    pub camper: CamperSummary,
    pub activity: ActivitySummary,
}

impl From<&Camper> for CamperSummary {
    fn from(camper: &Camper) -> Self {
        Self {
            id: camper.id(),
            name: camper.name().to_string(),
            age: camper.age(),
        }
    }
}

impl From<&Activity> for ActivitySummary {
    fn from(activity: &Activity) -> Self {
        Self {
            id: activity.id(),
            name: activity.name().to_string(),
            difficulty: activity.difficulty(),
        }
    }
}

impl From<&SignupRecord> for CamperSignup {
    fn from(record: &SignupRecord) -> Self {
        Self {
            id: record.signup.id(),
            time: record.signup.time(),
            camper_id: record.signup.camper_id(),
            activity_id: record.signup.activity_id(),
            activity: ActivitySummary::from(&record.activity),
        }
    }
}

impl From<&SignupRecord> for SignupDetail {
    fn from(record: &SignupRecord) -> Self {
        Self {
            id: record.signup.id(),
            time: record.signup.time(),
            camper_id: record.signup.camper_id(),
            activity_id: record.signup.activity_id(),
            camper: CamperSummary::from(&record.camper),
            activity: ActivitySummary::from(&record.activity),
        }
    }
}

impl From<&CamperDetailRecord> for CamperDetail {
    fn from(detail: &CamperDetailRecord) -> Self {
        Self {
            id: detail.camper.id(),
            name: detail.camper.name().to_string(),
            age: detail.camper.age(),
            signups: detail.signups.iter().map(CamperSignup::from).collect(),
        }
    }
}

/// Maps a slice of entities into their list view.
pub fn summaries<'a, T, V>(items: &'a [T]) -> Vec<V>
where
    V: From<&'a T>,
{
    items.iter().map(V::from).collect()
}
