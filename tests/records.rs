use float_cmp::approx_eq;
use pbl_progress_engine::model::records::{GroupRecord, StudentRecord};
use pbl_progress_engine::model::student::Student;
use pbl_progress_engine::model::team::{PhaseStatus, ProjectStatus, Team};
use serde_json::{Value, json};

mod helpers;
use helpers::at;

fn student_row(overrides: Value) -> StudentRecord {
    let mut row = json!({
        "id": "s1",
        "email": "alex@school.test",
        "full_name": "Alex Smith",
        "avatar_url": "https://cdn.school.test/alex.png",
        "mastery_scores": {
            "math": 70,
            "science": 80,
            "creativity": 75,
            "leadership": 75,
            "average_score": null
        },
        "personal_xp": 120,
        "joined_at": "2026-01-12T08:00:00Z"
    });
    if let (Some(row), Value::Object(overrides)) = (row.as_object_mut(), overrides) {
        row.extend(overrides);
    }
    serde_json::from_value(row).expect("Failed to parse student row")
}

fn group_row() -> GroupRecord {
    serde_json::from_value(json!({
        "id": "group-7",
        "name": "Team Orca",
        "project_status": "active",
        "progress": 140,
        "xp": 550,
        "students": [],
        "projects": {
            "topic": "Ocean Plastic",
            "driving_question": "How can we keep plastic out of the ocean?",
            "description": "Reduce plastic waste",
            "project_phases": [
                {
                    "id": "phase-b",
                    "title": "Investigation",
                    "description": "",
                    "status": "locked",
                    "deadline": null,
                    "phase_order": 2,
                    "tasks": []
                },
                {
                    "id": "phase-a",
                    "title": "Research",
                    "description": "",
                    "status": "active",
                    "deadline": "2026-03-20T17:00:00Z",
                    "phase_order": 1,
                    "tasks": [
                        {
                            "id": "task-2",
                            "title": "Interview",
                            "completed": false,
                            "deadline": null,
                            "is_overdue": null,
                            "task_order": 2
                        },
                        {
                            "id": "task-1",
                            "title": "Read",
                            "completed": true,
                            "deadline": "2026-03-01T17:00:00Z",
                            "is_overdue": true,
                            "task_order": 1
                        }
                    ]
                }
            ],
            "project_resources": [
                { "title": "Guide", "uri": "https://guide.test", "resource_order": 2 },
                { "title": "Video", "uri": "https://video.test", "resource_order": 1 }
            ]
        },
        "group_badges": [
            { "id": "first-step", "name": "First Step", "icon": "footprints", "description": "", "color": "blue" },
            { "id": "momentum", "name": "Momentum", "icon": "zap", "description": "", "color": "yellow" },
            { "id": "first-step", "name": "First Step", "icon": "footprints", "description": "", "color": "blue" }
        ]
    }))
    .expect("Failed to parse group row")
}

// students

#[test]
fn test_student_row_maps_fields() {
    let student = Student::from(student_row(json!({})));

    assert_eq!(student.id, "s1");
    assert_eq!(student.name, "Alex Smith");
    assert_eq!(student.avatar, "https://cdn.school.test/alex.png");
    assert_eq!(student.scores.science, 80);
    assert!(approx_eq!(f64, student.average_score, 75.0, ulps = 2));
    assert_eq!(student.personal_xp, 120);
    assert!(student.activity_log.is_empty());
    assert!(student.personal_badges.is_empty());
    assert_eq!(student.joined_at, at("2026-01-12T08:00:00Z"));
}

#[test]
fn test_student_name_falls_back_to_email() {
    let student = Student::from(student_row(json!({ "full_name": null })));

    assert_eq!(student.name, "alex@school.test");
}

#[test]
fn test_student_avatar_falls_back_to_generated_url() {
    let student = Student::from(student_row(json!({ "avatar_url": null })));

    assert_eq!(
        student.avatar,
        "https://ui-avatars.com/api/?name=Alex+Smith"
    );
}

#[test]
fn test_student_blank_name_and_avatar_fall_back() {
    let student = Student::from(student_row(json!({
        "full_name": "",
        "avatar_url": ""
    })));

    assert_eq!(student.name, "alex@school.test");
    assert_eq!(
        student.avatar,
        "https://ui-avatars.com/api/?name=alex%40school.test"
    );
}

#[test]
fn test_student_without_mastery_row_gets_zero_scores() {
    let student = Student::from(student_row(json!({
        "mastery_scores": null,
        "personal_xp": null
    })));

    assert_eq!(student.scores.math, 0);
    assert_eq!(student.scores.leadership, 0);
    assert!(approx_eq!(f64, student.average_score, 0.0, ulps = 2));
    assert_eq!(student.personal_xp, 0);
}

#[test]
fn test_persisted_average_wins_over_recomputed_mean() {
    let student = Student::from(student_row(json!({
        "mastery_scores": {
            "math": 70,
            "science": 80,
            "creativity": 75,
            "leadership": 75,
            "average_score": 77.5
        }
    })));

    assert!(approx_eq!(f64, student.average_score, 77.5, ulps = 2));
}

#[test]
fn test_out_of_range_scores_are_clamped() {
    let student = Student::from(student_row(json!({
        "mastery_scores": {
            "math": 140,
            "science": -5,
            "creativity": 100,
            "leadership": 0,
            "average_score": null
        }
    })));

    assert_eq!(student.scores.math, 100);
    assert_eq!(student.scores.science, 0);
    assert!(approx_eq!(f64, student.average_score, 50.0, ulps = 2));
}

// groups

#[test]
fn test_group_row_orders_phases_tasks_and_resources() {
    let team = Team::from(group_row());

    let project = team.project.as_ref().unwrap();
    let phase_ids: Vec<&str> = project.phases.iter().map(|phase| phase.id.as_str()).collect();
    assert_eq!(phase_ids, vec!["phase-a", "phase-b"]);
    assert_eq!(project.phases[0].status, PhaseStatus::Active);
    assert_eq!(project.phases[1].status, PhaseStatus::Locked);

    let task_ids: Vec<&str> = project.phases[0]
        .tasks
        .iter()
        .map(|task| task.id.as_str())
        .collect();
    assert_eq!(task_ids, vec!["task-1", "task-2"]);
    assert!(project.phases[0].tasks[0].is_overdue);
    assert!(!project.phases[0].tasks[1].is_overdue);
    assert!(project.phases[0].tasks[1].submission.is_none());

    let resources: Vec<&str> = project
        .resources
        .iter()
        .map(|resource| resource.title.as_str())
        .collect();
    assert_eq!(resources, vec!["Video", "Guide"]);
}

#[test]
fn test_group_row_dedupes_badges_and_clamps_progress() {
    let team = Team::from(group_row());

    let badges: Vec<&str> = team.badges.iter().map(|badge| badge.id.as_str()).collect();
    assert_eq!(badges, vec!["first-step", "momentum"]);
    assert_eq!(team.progress, 100);
    assert_eq!(team.xp, 550);
    assert_eq!(team.project_status, ProjectStatus::Active);
}

#[test]
fn test_group_row_without_project_or_badges() {
    let record: GroupRecord = serde_json::from_value(json!({
        "id": "group-8",
        "name": "Team Kelp",
        "project_status": "pending_topic",
        "progress": 0,
        "xp": 0,
        "projects": null
    }))
    .expect("Failed to parse group row");

    let team = Team::from(record);

    assert!(team.project.is_none());
    assert!(team.members.is_empty());
    assert!(team.badges.is_empty());
    assert_eq!(team.project_status, ProjectStatus::PendingTopic);
}
