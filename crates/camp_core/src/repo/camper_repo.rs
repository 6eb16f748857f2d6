//! Camper repository contract and SQLite implementation.
//!
//! # Responsibility
//! - Provide CRUD APIs over the `campers` table.
//! - Delete a camper together with its signups in one transaction.
//! - Expose the derived activities-of-camper view.
//!
//! # Invariants
//! - Write paths only accept values that already passed model validation.
//! - Read paths reject stored rows that violate camper invariants.

use crate::model::activity::Activity;
use crate::model::camper::{Camper, CamperId, NewCamper};
use crate::model::EntityKind;
use crate::repo::activity_repo::parse_activity_row;
use crate::repo::{ensure_connection_ready, invalid_row, row_exists, RepoError, RepoResult};
use log::info;
use rusqlite::{params, Connection, Row, Transaction, TransactionBehavior};

const CAMPER_SELECT_SQL: &str = "SELECT id, name, age FROM campers";

/// Repository interface for camper operations.
pub trait CamperRepository {
    fn create_camper(&self, camper: &NewCamper) -> RepoResult<Camper>;
    fn update_camper(&self, camper: &Camper) -> RepoResult<()>;
    fn get_camper(&self, id: CamperId) -> RepoResult<Option<Camper>>;
    fn list_campers(&self) -> RepoResult<Vec<Camper>>;
    /// Deletes the camper and its signups; returns the number of signups removed.
    fn delete_camper(&self, id: CamperId) -> RepoResult<usize>;
    /// Distinct activities the camper is signed up for, ordered by id.
    fn list_activities_for_camper(&self, id: CamperId) -> RepoResult<Vec<Activity>>;
}

/// SQLite-backed camper repository.
pub struct SqliteCamperRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteCamperRepository<'conn> {
    /// Creates repository from a connection already known to be migrated.
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }

    /// Creates repository after verifying the connection schema.
    pub fn try_new(conn: &'conn Connection) -> RepoResult<Self> {
        ensure_connection_ready(conn)?;
        Ok(Self { conn })
    }
}

impl CamperRepository for SqliteCamperRepository<'_> {
    fn create_camper(&self, camper: &NewCamper) -> RepoResult<Camper> {
        self.conn.execute(
            "INSERT INTO campers (name, age) VALUES (?1, ?2);",
            params![camper.name(), camper.age()],
        )?;
        let id = self.conn.last_insert_rowid();
        Ok(camper.clone().into_camper(id))
    }

    fn update_camper(&self, camper: &Camper) -> RepoResult<()> {
        let changed = self.conn.execute(
            "UPDATE campers SET name = ?1, age = ?2 WHERE id = ?3;",
            params![camper.name(), camper.age(), camper.id()],
        )?;

        if changed == 0 {
            return Err(RepoError::NotFound(EntityKind::Camper, camper.id()));
        }

        Ok(())
    }

    fn get_camper(&self, id: CamperId) -> RepoResult<Option<Camper>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{CAMPER_SELECT_SQL} WHERE id = ?1;"))?;
        let mut rows = stmt.query([id])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(parse_camper_row(row)?));
        }
        Ok(None)
    }

    fn list_campers(&self) -> RepoResult<Vec<Camper>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{CAMPER_SELECT_SQL} ORDER BY id ASC;"))?;
        let mut rows = stmt.query([])?;
        let mut campers = Vec::new();
        while let Some(row) = rows.next()? {
            campers.push(parse_camper_row(row)?);
        }
        Ok(campers)
    }

    fn delete_camper(&self, id: CamperId) -> RepoResult<usize> {
        let tx = Transaction::new_unchecked(self.conn, TransactionBehavior::Immediate)?;
        if !row_exists(&tx, "campers", id)? {
            return Err(RepoError::NotFound(EntityKind::Camper, id));
        }

        let removed_signups = tx.execute("DELETE FROM signups WHERE camper_id = ?1;", [id])?;
        tx.execute("DELETE FROM campers WHERE id = ?1;", [id])?;
        tx.commit()?;

        info!(
            "event=camper_delete module=repo status=ok camper_id={} removed_signups={}",
            id, removed_signups
        );
        Ok(removed_signups)
    }

    fn list_activities_for_camper(&self, id: CamperId) -> RepoResult<Vec<Activity>> {
        let mut stmt = self.conn.prepare(
            "SELECT DISTINCT a.id AS id, a.name AS name, a.difficulty AS difficulty
             FROM activities a
             JOIN signups s ON s.activity_id = a.id
             WHERE s.camper_id = ?1
             ORDER BY a.id ASC;",
        )?;
        let mut rows = stmt.query([id])?;
        let mut activities = Vec::new();
        while let Some(row) = rows.next()? {
            activities.push(parse_activity_row(row)?);
        }
        Ok(activities)
    }
}

pub(crate) fn parse_camper_row(row: &Row<'_>) -> RepoResult<Camper> {
    let id: CamperId = row.get("id")?;
    let name: String = row.get("name")?;
    let age: i64 = row.get("age")?;
    Camper::new(id, name, age).map_err(|err| invalid_row("campers", id, err))
}
