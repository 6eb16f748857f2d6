use camp_core::db::open_db_in_memory;
use camp_core::{
    summaries, Activity, ActivityRepository, ActivitySummary, Camper, CamperDetail,
    CamperRepository, CamperService, CamperSummary, NewActivity, NewCamper, NewSignup,
    SignupDetail, SignupRepository, SqliteActivityRepository, SqliteCamperRepository,
    SqliteSignupRepository,
};
use serde_json::{json, Value};

#[test]
fn camper_list_view_has_id_name_age_in_order() {
    let camper = Camper::new(3, "Zoe", 11).unwrap();
    let encoded = serde_json::to_string(&CamperSummary::from(&camper)).unwrap();
    assert_eq!(encoded, r#"{"id":3,"name":"Zoe","age":11}"#);
}

#[test]
fn activity_list_view_has_no_signups() {
    let activities = vec![Activity::new(1, "Archery", 2), Activity::new(2, "Canoe", 4)];
    let views: Vec<ActivitySummary> = summaries(&activities);
    assert_eq!(
        serde_json::to_value(&views).unwrap(),
        json!([
            {"id": 1, "name": "Archery", "difficulty": 2},
            {"id": 2, "name": "Canoe", "difficulty": 4}
        ])
    );
}

#[test]
fn detail_views_prune_back_references() {
    let conn = open_db_in_memory().unwrap();
    let campers = SqliteCamperRepository::try_new(&conn).unwrap();
    let activities = SqliteActivityRepository::try_new(&conn).unwrap();
    let signups = SqliteSignupRepository::try_new(&conn).unwrap();

    let camper = campers
        .create_camper(&NewCamper::new("Zoe", 11).unwrap())
        .unwrap();
    let activity = activities
        .create_activity(&NewActivity::new("Archery", 2))
        .unwrap();
    signups
        .create_signup(&NewSignup::new(camper.id(), activity.id(), 9).unwrap())
        .unwrap();

    let records = signups.list_signup_records().unwrap();
    let signup_views: Vec<SignupDetail> = summaries(&records);
    let signup_json = serde_json::to_value(&signup_views).unwrap();
    assert_eq!(
        signup_json,
        json!([{
            "id": 1,
            "time": 9,
            "camper_id": camper.id(),
            "activity_id": activity.id(),
            "camper": {"id": camper.id(), "name": "Zoe", "age": 11},
            "activity": {"id": activity.id(), "name": "Archery", "difficulty": 2}
        }])
    );

    let service = CamperService::new(campers, signups);
    let detail = service.get_camper_detail(camper.id()).unwrap().unwrap();
    let detail_json: Value = serde_json::to_value(CamperDetail::from(&detail)).unwrap();
    assert_eq!(
        detail_json,
        json!({
            "id": camper.id(),
            "name": "Zoe",
            "age": 11,
            "signups": [{
                "id": 1,
                "time": 9,
                "camper_id": camper.id(),
                "activity_id": activity.id(),
                "activity": {"id": activity.id(), "name": "Archery", "difficulty": 2}
            }]
        })
    );
    assert!(detail_json["signups"][0].get("camper").is_none());
}

#[test]
fn detail_view_field_order_is_stable() {
    let detail = CamperDetail {
        id: 1,
        name: "Zoe".to_string(),
        age: 11,
        signups: Vec::new(),
    };
    assert_eq!(
        serde_json::to_string(&detail).unwrap(),
        r#"{"id":1,"name":"Zoe","age":11,"signups":[]}"#
    );
}
