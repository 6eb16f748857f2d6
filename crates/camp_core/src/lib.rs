//! Core domain logic for the camp signup API.
//! This crate is the single source of truth for camper, activity, and signup
//! invariants.

pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;
pub mod view;

pub use logging::{default_log_level, init_logging, init_stderr_logging};
pub use model::activity::{Activity, ActivityId, NewActivity};
pub use model::camper::{Camper, CamperId, CamperPatch, NewCamper};
pub use model::signup::{NewSignup, Signup, SignupId, SignupRecord};
pub use model::validation::{require, ValidationError};
pub use model::EntityKind;
pub use repo::activity_repo::{ActivityRepository, SqliteActivityRepository};
pub use repo::camper_repo::{CamperRepository, SqliteCamperRepository};
pub use repo::signup_repo::{SignupRepository, SqliteSignupRepository};
pub use repo::{ensure_connection_ready, RepoError, RepoResult};
pub use service::activity_service::ActivityService;
pub use service::camper_service::{CamperDetailRecord, CamperService};
pub use service::signup_service::SignupService;
pub use view::{
    summaries, ActivitySummary, CamperDetail, CamperSignup, CamperSummary, SignupDetail,
};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
