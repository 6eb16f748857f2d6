use camp_core::db::open_db_in_memory;
use camp_core::{
    ActivityRepository, ActivityService, CamperRepository, EntityKind, NewActivity, NewCamper,
    NewSignup, RepoError, SignupRepository, SqliteActivityRepository, SqliteCamperRepository,
    SqliteSignupRepository,
};
use rusqlite::Connection;

struct Fixture {
    zoe: i64,
    max: i64,
    archery: i64,
    canoe: i64,
}

fn seed(conn: &Connection) -> Fixture {
    let campers = SqliteCamperRepository::try_new(conn).unwrap();
    let activities = SqliteActivityRepository::try_new(conn).unwrap();
    let signups = SqliteSignupRepository::try_new(conn).unwrap();

    let zoe = campers.create_camper(&NewCamper::new("Zoe", 11).unwrap()).unwrap().id();
    let max = campers.create_camper(&NewCamper::new("Max", 12).unwrap()).unwrap().id();
    let archery = activities
        .create_activity(&NewActivity::new("Archery", 2))
        .unwrap()
        .id();
    let canoe = activities
        .create_activity(&NewActivity::new("Canoe", 3))
        .unwrap()
        .id();

    for (camper, activity, time) in [(zoe, archery, 9), (max, archery, 10), (zoe, canoe, 11)] {
        signups
            .create_signup(&NewSignup::new(camper, activity, time).unwrap())
            .unwrap();
    }

    Fixture {
        zoe,
        max,
        archery,
        canoe,
    }
}

fn count(conn: &Connection, sql: &str, id: i64) -> i64 {
    conn.query_row(sql, [id], |row| row.get(0)).unwrap()
}

#[test]
fn deleting_activity_removes_all_its_signups() {
    let conn = open_db_in_memory().unwrap();
    let fixture = seed(&conn);
    let service = ActivityService::new(SqliteActivityRepository::try_new(&conn).unwrap());

    let removed = service.delete_activity(fixture.archery).unwrap();
    assert_eq!(removed, 2);

    assert!(service.get_activity(fixture.archery).unwrap().is_none());
    assert_eq!(
        count(&conn, "SELECT COUNT(*) FROM signups WHERE activity_id = ?1;", fixture.archery),
        0
    );
    assert_eq!(
        count(&conn, "SELECT COUNT(*) FROM signups WHERE activity_id = ?1;", fixture.canoe),
        1
    );
}

#[test]
fn deleting_camper_removes_all_its_signups() {
    let conn = open_db_in_memory().unwrap();
    let fixture = seed(&conn);
    let campers = SqliteCamperRepository::try_new(&conn).unwrap();
    let signups = SqliteSignupRepository::try_new(&conn).unwrap();

    let removed = campers.delete_camper(fixture.zoe).unwrap();
    assert_eq!(removed, 2);

    assert!(campers.get_camper(fixture.zoe).unwrap().is_none());
    let remaining = signups.list_signup_records().unwrap();
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].camper.id(), fixture.max);
}

#[test]
fn deleting_missing_activity_is_not_found_and_changes_nothing() {
    let conn = open_db_in_memory().unwrap();
    seed(&conn);
    let activities = SqliteActivityRepository::try_new(&conn).unwrap();

    let err = activities.delete_activity(999).unwrap_err();
    assert!(matches!(err, RepoError::NotFound(EntityKind::Activity, 999)));
    assert_eq!(activities.list_activities().unwrap().len(), 2);
    assert_eq!(
        count(&conn, "SELECT COUNT(*) FROM signups WHERE id > ?1;", 0),
        3
    );
}

#[test]
fn no_orphan_signups_remain_after_deleting_everything() {
    let conn = open_db_in_memory().unwrap();
    let fixture = seed(&conn);
    let activities = SqliteActivityRepository::try_new(&conn).unwrap();
    let campers = SqliteCamperRepository::try_new(&conn).unwrap();

    activities.delete_activity(fixture.canoe).unwrap();
    campers.delete_camper(fixture.max).unwrap();

    let orphans: i64 = conn
        .query_row(
            "SELECT COUNT(*)
             FROM signups s
             LEFT JOIN campers c ON c.id = s.camper_id
             LEFT JOIN activities a ON a.id = s.activity_id
             WHERE c.id IS NULL OR a.id IS NULL;",
            [],
            |row| row.get(0),
        )
        .unwrap();
    assert_eq!(orphans, 0);
    assert_eq!(
        count(&conn, "SELECT COUNT(*) FROM signups WHERE id > ?1;", 0),
        1
    );
}
