use dragboard_core::{filter_by_status, Project, ProjectStatus};
use uuid::Uuid;

#[test]
fn new_project_starts_active_with_a_stable_id() {
    let project = Project::new("Build shed", "Wood shed", 3);

    assert!(!project.id.is_nil());
    assert_eq!(project.title, "Build shed");
    assert_eq!(project.description, "Wood shed");
    assert_eq!(project.people, 3);
    assert_eq!(project.status, ProjectStatus::Active);
    assert!(project.is_active());
}

#[test]
fn each_project_gets_a_distinct_id() {
    let first = Project::new("a", "aaaaa", 1);
    let second = Project::new("b", "bbbbb", 1);
    assert_ne!(first.id, second.id);
}

#[test]
fn serialization_uses_expected_wire_fields() {
    let id = Uuid::parse_str("11111111-2222-4333-8444-555555555555").unwrap();
    let mut project = Project::with_id(id, "Paint fence", "White paint, two coats", 2);
    project.status = ProjectStatus::Finished;

    let json = serde_json::to_value(&project).unwrap();
    assert_eq!(json["id"], id.to_string());
    assert_eq!(json["title"], "Paint fence");
    assert_eq!(json["description"], "White paint, two coats");
    assert_eq!(json["people"], 2);
    assert_eq!(json["status"], "finished");

    let decoded: Project = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, project);
}

#[test]
fn status_string_forms_round_trip() {
    for status in [ProjectStatus::Active, ProjectStatus::Finished] {
        assert_eq!(ProjectStatus::parse(status.as_str()), Some(status));
    }
    assert_eq!(ProjectStatus::parse("archived"), None);
}

#[test]
fn filter_by_status_keeps_board_order() {
    let mut done = Project::new("b", "second", 1);
    done.status = ProjectStatus::Finished;
    let projects = vec![
        Project::new("a", "first", 1),
        done,
        Project::new("c", "third", 1),
    ];

    let active = filter_by_status(&projects, ProjectStatus::Active);
    let titles: Vec<&str> = active.iter().map(|p| p.title.as_str()).collect();
    assert_eq!(titles, ["a", "c"]);

    let finished = filter_by_status(&projects, ProjectStatus::Finished);
    assert_eq!(finished.len(), 1);
    assert_eq!(finished[0].title, "b");
}
