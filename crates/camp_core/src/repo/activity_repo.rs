//! Activity repository contract and SQLite implementation.
//!
//! # Invariants
//! - Deleting an activity removes its signups first, in the same
//!   transaction, so no orphan signup is ever visible.

use crate::model::activity::{Activity, ActivityId, NewActivity};
use crate::model::camper::Camper;
use crate::model::EntityKind;
use crate::repo::camper_repo::parse_camper_row;
use crate::repo::{ensure_connection_ready, row_exists, RepoError, RepoResult};
use log::info;
use rusqlite::{params, Connection, Row, Transaction, TransactionBehavior};

const ACTIVITY_SELECT_SQL: &str = "SELECT id, name, difficulty FROM activities";

/// Repository interface for activity operations.
pub trait ActivityRepository {
    fn create_activity(&self, activity: &NewActivity) -> RepoResult<Activity>;
    fn get_activity(&self, id: ActivityId) -> RepoResult<Option<Activity>>;
    fn list_activities(&self) -> RepoResult<Vec<Activity>>;
    /// Deletes the activity and its signups; returns the number of signups removed.
    fn delete_activity(&self, id: ActivityId) -> RepoResult<usize>;
    /// Distinct campers signed up for the activity, ordered by id.
    fn list_campers_for_activity(&self, id: ActivityId) -> RepoResult<Vec<Camper>>;
}

/// SQLite-backed activity repository.
pub struct SqliteActivityRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteActivityRepository<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }

    pub fn try_new(conn: &'conn Connection) -> RepoResult<Self> {
        ensure_connection_ready(conn)?;
        Ok(Self { conn })
    }
}

impl ActivityRepository for SqliteActivityRepository<'_> {
    fn create_activity(&self, activity: &NewActivity) -> RepoResult<Activity> {
        self.conn.execute(
            "INSERT INTO activities (name, difficulty) VALUES (?1, ?2);",
            params![activity.name(), activity.difficulty()],
        )?;
        let id = self.conn.last_insert_rowid();
        Ok(activity.clone().into_activity(id))
    }

    fn get_activity(&self, id: ActivityId) -> RepoResult<Option<Activity>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{ACTIVITY_SELECT_SQL} WHERE id = ?1;"))?;
        let mut rows = stmt.query([id])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(parse_activity_row(row)?));
        }
        Ok(None)
    }

    fn list_activities(&self) -> RepoResult<Vec<Activity>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{ACTIVITY_SELECT_SQL} ORDER BY id ASC;"))?;
        let mut rows = stmt.query([])?;
        let mut activities = Vec::new();
        while let Some(row) = rows.next()? {
            activities.push(parse_activity_row(row)?);
        }
        Ok(activities)
    }

    fn delete_activity(&self, id: ActivityId) -> RepoResult<usize> {
        let tx = Transaction::new_unchecked(self.conn, TransactionBehavior::Immediate)?;
        if !row_exists(&tx, "activities", id)? {
            return Err(RepoError::NotFound(EntityKind::Activity, id));
        }

        let removed_signups = tx.execute("DELETE FROM signups WHERE activity_id = ?1;", [id])?;
        tx.execute("DELETE FROM activities WHERE id = ?1;", [id])?;
        tx.commit()?;

        info!(
            "event=activity_delete module=repo status=ok activity_id={} removed_signups={}",
            id, removed_signups
        );
        Ok(removed_signups)
    }

    fn list_campers_for_activity(&self, id: ActivityId) -> RepoResult<Vec<Camper>> {
        let mut stmt = self.conn.prepare(
            "SELECT DISTINCT c.id AS id, c.name AS name, c.age AS age
             FROM campers c
             JOIN signups s ON s.camper_id = c.id
             WHERE s.activity_id = ?1
             ORDER BY c.id ASC;",
        )?;
        let mut rows = stmt.query([id])?;
        let mut campers = Vec::new();
        while let Some(row) = rows.next()? {
            campers.push(parse_camper_row(row)?);
        }
        Ok(campers)
    }
}

pub(crate) fn parse_activity_row(row: &Row<'_>) -> RepoResult<Activity> {
    Ok(Activity::new(
        row.get("id")?,
        row.get::<_, String>("name")?,
        row.get("difficulty")?,
    ))
}
