use super::*;

#[test]
fn identity_accepts_backend_user_id_field() {
    let user: Identity =
        serde_json::from_value(serde_json::json!({ "user_id": 7, "name": "Ada", "email": "ada@example.com" }))
            .expect("identity");
    assert_eq!(user.id, 7);
    assert_eq!(user.name, "Ada");
}

#[test]
fn identity_serializes_with_id_field() {
    let user = Identity { id: 3, name: "Bo".to_owned(), email: "bo@example.com".to_owned() };
    let value = serde_json::to_value(&user).expect("serialize");
    assert_eq!(value, serde_json::json!({ "id": 3, "name": "Bo", "email": "bo@example.com" }));
}

#[test]
fn priority_parse_is_case_insensitive() {
    assert_eq!(Priority::parse("HIGH"), Some(Priority::High));
    assert_eq!(Priority::parse(" medium "), Some(Priority::Medium));
    assert_eq!(Priority::parse("Low"), Some(Priority::Low));
    assert_eq!(Priority::parse("urgent"), None);
}

#[test]
fn task_status_parse_accepts_backend_and_client_spellings() {
    assert_eq!(TaskStatus::parse("To-Do"), Some(TaskStatus::Todo));
    assert_eq!(TaskStatus::parse("todo"), Some(TaskStatus::Todo));
    assert_eq!(TaskStatus::parse("In Progress"), Some(TaskStatus::InProgress));
    assert_eq!(TaskStatus::parse("in-progress"), Some(TaskStatus::InProgress));
    assert_eq!(TaskStatus::parse("Completed"), Some(TaskStatus::Completed));
    assert_eq!(TaskStatus::parse("done"), Some(TaskStatus::Completed));
    assert_eq!(TaskStatus::parse("blocked"), None);
}

#[test]
fn enums_serialize_in_backend_form() {
    assert_eq!(serde_json::to_value(Priority::High).expect("priority"), serde_json::json!("High"));
    assert_eq!(
        serde_json::to_value(TaskStatus::InProgress).expect("status"),
        serde_json::json!("In Progress")
    );
}

#[test]
fn task_row_with_nulls_decodes_with_defaults() {
    let task: Task = serde_json::from_value(serde_json::json!({
        "task_id": 11,
        "project_id": 2,
        "title": "Wire up login",
        "description": null,
        "assignee_id": null,
        "status": "weird",
        "priority": null,
        "due_date": "2025-01-10",
        "image_url": null
    }))
    .expect("task");
    assert_eq!(task.description, "");
    assert_eq!(task.status, TaskStatus::Todo);
    assert_eq!(task.priority, Priority::Medium);
    assert_eq!(task.due_date.as_deref(), Some("2025-01-10"));
}

#[test]
fn project_tag_list_splits_wire_tags() {
    let project: Project = serde_json::from_value(serde_json::json!({
        "project_id": 1,
        "name": "Site redesign",
        "description": "New look",
        "priority": "high",
        "tags": "React, UI/UX, ,TypeScript",
        "created_by": 4
    }))
    .expect("project");
    assert_eq!(project.priority, Priority::High);
    assert_eq!(project.tag_list(), vec!["React", "UI/UX", "TypeScript"]);
}

#[test]
fn status_count_accepts_string_counts() {
    let row: StatusCount =
        serde_json::from_value(serde_json::json!({ "status": "Completed", "count": "4" })).expect("row");
    assert_eq!(row.status, TaskStatus::Completed);
    assert_eq!(row.count, 4);
}

#[test]
fn status_count_rejects_negative_counts() {
    let result = serde_json::from_value::<StatusCount>(serde_json::json!({ "status": "To-Do", "count": -1 }));
    assert!(result.is_err());
}

#[test]
fn member_payload_omits_missing_role() {
    let value = serde_json::to_value(MemberPayload { user_id: 5, role: None }).expect("payload");
    assert_eq!(value, serde_json::json!({ "user_id": 5 }));
}
