//! Shared handler state.
//!
//! One SQLite connection guarded by a mutex; each request holds the lock for
//! its single unit of work and releases it before responding.

use camp_core::{
    ensure_connection_ready, ActivityService, CamperService, RepoResult, SignupService,
    SqliteActivityRepository, SqliteCamperRepository, SqliteSignupRepository,
};
use rusqlite::Connection;
use std::sync::{Arc, Mutex, MutexGuard};

const CONNECTION_POISONED: &str = "connection mutex poisoned";

pub type CamperHandle<'conn> =
    CamperService<SqliteCamperRepository<'conn>, SqliteSignupRepository<'conn>>;

#[derive(Clone)]
pub struct AppState {
    conn: Arc<Mutex<Connection>>,
}

impl AppState {
    /// Wraps a connection opened through `camp_core::db`.
    ///
    /// The schema is verified once here, so handlers can build repositories
    /// without re-checking it per request.
    pub fn new(conn: Connection) -> RepoResult<Self> {
        ensure_connection_ready(&conn)?;
        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    /// Locks the shared connection.
    ///
    /// A poisoned lock is reported as a message; callers map it to the
    /// status their path uses for storage failures.
    pub fn connection(&self) -> Result<MutexGuard<'_, Connection>, &'static str> {
        self.conn.lock().map_err(|_| CONNECTION_POISONED)
    }
}

pub fn camper_service(conn: &Connection) -> CamperHandle<'_> {
    CamperService::new(
        SqliteCamperRepository::new(conn),
        SqliteSignupRepository::new(conn),
    )
}

pub fn activity_service(conn: &Connection) -> ActivityService<SqliteActivityRepository<'_>> {
    ActivityService::new(SqliteActivityRepository::new(conn))
}

pub fn signup_service(conn: &Connection) -> SignupService<SqliteSignupRepository<'_>> {
    SignupService::new(SqliteSignupRepository::new(conn))
}
