//! Serialization tests for fiber-model records.

use fiber_model::{LocationCategory, Project, ProjectLocation, ProjectStatus, WorkProgress};

const PROJECT_JSON: &str = r#"{
    "id": "FO-SBY-007",
    "name": "Rungkut Backbone Ring",
    "client": "Telkom Regional V",
    "location": "Rungkut, Surabaya",
    "status": "Pada Jadwal",
    "progress": 45,
    "category": "backbone",
    "startDate": "2024-02-01",
    "targetDate": "2024-09-30",
    "manager": "Dewi Lestari"
}"#;

#[test]
fn project_deserializes_from_camel_case_json() {
    let project: Project = serde_json::from_str(PROJECT_JSON).expect("parse project");
    assert_eq!(project.id.as_str(), "FO-SBY-007");
    assert_eq!(project.area_code(), "SBY");
    assert_eq!(project.status, ProjectStatus::OnSchedule);
    assert_eq!(project.status.progress(), WorkProgress::InProgress);
    assert_eq!(project.category, LocationCategory::Backbone);
    assert!(project.validate().is_ok());
}

#[test]
fn project_rejects_malformed_id() {
    let json = PROJECT_JSON.replace("FO-SBY-007", "SBY-007");
    let err = serde_json::from_str::<Project>(&json).expect_err("id must be rejected");
    assert!(err.to_string().contains("invalid project id"));
}

#[test]
fn project_progress_over_100_fails_validation() {
    let json = PROJECT_JSON.replace("\"progress\": 45", "\"progress\": 140");
    let project: Project = serde_json::from_str(&json).expect("parse project");
    assert!(project.validate().is_err());
}

#[test]
fn status_serializes_with_field_label() {
    let json = serde_json::to_string(&ProjectStatus::NotStarted).expect("serialize");
    assert_eq!(json, "\"Belum Dimulai\"");
}

#[test]
fn location_position_is_a_two_element_array() {
    let json = r#"{
        "id": "LOC-1",
        "projectId": "FO-JKT-001",
        "name": "ODC Kemang",
        "location": "Kemang, Jakarta Selatan",
        "status": "Selesai",
        "position": [-6.2615, 106.8106],
        "isDocumented": true,
        "category": "distribution"
    }"#;
    let location: ProjectLocation = serde_json::from_str(json).expect("parse location");
    assert_eq!(location.latitude(), -6.2615);
    assert_eq!(location.longitude(), 106.8106);
    assert!(location.has_valid_position());
    assert_eq!(location.area_code(), "JKT");

    let round = serde_json::to_value(&location).expect("serialize location");
    assert_eq!(round["position"], serde_json::json!([-6.2615, 106.8106]));
    assert_eq!(round["isDocumented"], serde_json::json!(true));
}
