//! Signup repository contract and SQLite implementation.
//!
//! # Responsibility
//! - Insert signups after confirming both references exist.
//! - Read signups hydrated with their camper and activity.
//!
//! # Invariants
//! - Reference checks and the insert share one immediate transaction.
//! - Hydrated reads use inner joins, so a signup is never returned without
//!   both of its parents.

use crate::model::activity::{Activity, ActivityId};
use crate::model::camper::{Camper, CamperId};
use crate::model::signup::{NewSignup, Signup, SignupId, SignupRecord};
use crate::model::validation::ValidationError;
use crate::model::EntityKind;
use crate::repo::{ensure_connection_ready, invalid_row, row_exists, RepoResult};
use rusqlite::{params, Connection, Row, ToSql, Transaction, TransactionBehavior};

const SIGNUP_RECORD_SELECT_SQL: &str = "SELECT
    s.id AS signup_id,
    s.time AS signup_time,
    s.camper_id AS camper_id,
    s.activity_id AS activity_id,
    c.name AS camper_name,
    c.age AS camper_age,
    a.name AS activity_name,
    a.difficulty AS activity_difficulty
FROM signups s
JOIN campers c ON c.id = s.camper_id
JOIN activities a ON a.id = s.activity_id";

/// Repository interface for signup operations.
pub trait SignupRepository {
    fn create_signup(&self, signup: &NewSignup) -> RepoResult<Signup>;
    fn get_signup_record(&self, id: SignupId) -> RepoResult<Option<SignupRecord>>;
    fn list_signup_records(&self) -> RepoResult<Vec<SignupRecord>>;
    fn list_signup_records_for_camper(&self, camper_id: CamperId)
        -> RepoResult<Vec<SignupRecord>>;
    fn list_signup_records_for_activity(
        &self,
        activity_id: ActivityId,
    ) -> RepoResult<Vec<SignupRecord>>;
}

/// SQLite-backed signup repository.
pub struct SqliteSignupRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteSignupRepository<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }

    pub fn try_new(conn: &'conn Connection) -> RepoResult<Self> {
        ensure_connection_ready(conn)?;
        Ok(Self { conn })
    }

    fn query_records(&self, filter: &str, args: &[&dyn ToSql]) -> RepoResult<Vec<SignupRecord>> {
        let mut stmt = self.conn.prepare(&format!(
            "{SIGNUP_RECORD_SELECT_SQL} {filter} ORDER BY s.id ASC;"
        ))?;
        let mut rows = stmt.query(args)?;
        let mut records = Vec::new();
        while let Some(row) = rows.next()? {
            records.push(parse_signup_record_row(row)?);
        }
        Ok(records)
    }
}

impl SignupRepository for SqliteSignupRepository<'_> {
    fn create_signup(&self, signup: &NewSignup) -> RepoResult<Signup> {
        let tx = Transaction::new_unchecked(self.conn, TransactionBehavior::Immediate)?;
        if !row_exists(&tx, "campers", signup.camper_id())? {
            return Err(ValidationError::UnknownReference {
                kind: EntityKind::Camper,
                id: signup.camper_id(),
            }
            .into());
        }
        if !row_exists(&tx, "activities", signup.activity_id())? {
            return Err(ValidationError::UnknownReference {
                kind: EntityKind::Activity,
                id: signup.activity_id(),
            }
            .into());
        }

        tx.execute(
            "INSERT INTO signups (time, camper_id, activity_id) VALUES (?1, ?2, ?3);",
            params![signup.time(), signup.camper_id(), signup.activity_id()],
        )?;
        let id = tx.last_insert_rowid();
        tx.commit()?;

        Ok(signup.into_signup(id))
    }

    fn get_signup_record(&self, id: SignupId) -> RepoResult<Option<SignupRecord>> {
        Ok(self
            .query_records("WHERE s.id = ?1", &[&id])?
            .into_iter()
            .next())
    }

    fn list_signup_records(&self) -> RepoResult<Vec<SignupRecord>> {
        self.query_records("", &[])
    }

    fn list_signup_records_for_camper(
        &self,
        camper_id: CamperId,
    ) -> RepoResult<Vec<SignupRecord>> {
        self.query_records("WHERE s.camper_id = ?1", &[&camper_id])
    }

    fn list_signup_records_for_activity(
        &self,
        activity_id: ActivityId,
    ) -> RepoResult<Vec<SignupRecord>> {
        self.query_records("WHERE s.activity_id = ?1", &[&activity_id])
    }
}

fn parse_signup_record_row(row: &Row<'_>) -> RepoResult<SignupRecord> {
    let signup_id: SignupId = row.get("signup_id")?;
    let camper_id: CamperId = row.get("camper_id")?;
    let activity_id: ActivityId = row.get("activity_id")?;

    let signup = Signup::new(signup_id, camper_id, activity_id, row.get("signup_time")?)
        .map_err(|err| invalid_row("signups", signup_id, err))?;
    let camper = Camper::new(
        camper_id,
        row.get::<_, String>("camper_name")?,
        row.get("camper_age")?,
    )
    .map_err(|err| invalid_row("campers", camper_id, err))?;
    let activity = Activity::new(
        activity_id,
        row.get::<_, String>("activity_name")?,
        row.get("activity_difficulty")?,
    );

    Ok(SignupRecord {
        signup,
        camper,
        activity,
    })
}
