#![allow(dead_code)]

use axum::Router;
pub(crate) use axum_test::TestServer;
use chrono::{DateTime, Duration, Utc};
use pbl_progress_engine::engine::config::EngineConfig;
use pbl_progress_engine::engine::project::{assign_project, project_template};
use pbl_progress_engine::init_test_router;
use pbl_progress_engine::model::student::{ActivityAction, ActivityEntry, MasteryScores, Student};
use pbl_progress_engine::model::team::{
    Feedback, Phase, PhaseStatus, Project, Rubric, RubricCriterion, Submission, SubmissionKind,
    SubmissionStatus, Task, Team,
};

// test infra setup

pub fn setup_test_environment() -> TestServer {
    let app: Router = init_test_router(EngineConfig::default());
    TestServer::new(app).expect("Failed to create TestServer")
}

// time

pub fn now() -> DateTime<Utc> {
    "2026-03-10T12:00:00Z"
        .parse()
        .expect("Failed to parse reference time")
}

pub fn at(value: &str) -> DateTime<Utc> {
    value.parse().expect("Failed to parse timestamp")
}

pub fn days_ago(days: i64) -> DateTime<Utc> {
    now() - Duration::days(days)
}

// students

pub fn create_test_student(id: &str, score: u8) -> Student {
    Student::new(
        id,
        format!("Student {id}"),
        format!("https://avatars.test/{id}.png"),
        MasteryScores {
            math: score,
            science: score,
            creativity: score,
            leadership: score,
        },
        days_ago(30),
    )
}

pub fn create_test_roster(scores: &[u8]) -> Vec<Student> {
    scores
        .iter()
        .enumerate()
        .map(|(i, score)| create_test_student(&format!("student-{i}"), *score))
        .collect()
}

pub fn activity(action: ActivityAction, timestamp: DateTime<Utc>) -> ActivityEntry {
    ActivityEntry {
        id: format!("activity-{}", timestamp.timestamp()),
        timestamp,
        action,
        task_id: None,
        phase_id: None,
        details: None,
    }
}

// teams and projects

pub fn create_test_task(id: &str) -> Task {
    Task::new(id, format!("Task {id}"))
}

pub fn create_test_phase(id: &str, status: PhaseStatus, task_ids: &[&str]) -> Phase {
    Phase {
        id: id.to_string(),
        title: format!("Phase {id}"),
        description: String::new(),
        tasks: task_ids.iter().map(|task_id| create_test_task(task_id)).collect(),
        status,
        deadline: None,
    }
}

pub fn create_test_team(id: &str, members: Vec<Student>, phases: Vec<Phase>) -> Team {
    let mut team = Team::new(id, format!("Team {id}"), members);
    team.project = Some(Project {
        topic: "Water".to_string(),
        driving_question: "How can we save water?".to_string(),
        description: String::new(),
        phases,
        resources: Vec::new(),
    });
    team
}

/// Phase one (`p1`: `t1`, `t2`) active, phase two (`p2`: `t3`, `t4`) locked.
pub fn two_phase_team() -> Team {
    create_test_team(
        "team-1",
        vec![create_test_student("s1", 80)],
        vec![
            create_test_phase("p1", PhaseStatus::Active, &["t1", "t2"]),
            create_test_phase("p2", PhaseStatus::Locked, &["t3", "t4"]),
        ],
    )
}

/// A team working on the standard four-phase, twelve-task template.
pub fn template_team(id: &str) -> Team {
    let project = project_template("Renewable Energy").expect("Template should build");
    let team = Team::new(id, format!("Team {id}"), vec![create_test_student("s1", 70)]);
    assign_project(&[team], &project).remove(0)
}

pub fn submission(status: SubmissionStatus) -> Submission {
    Submission {
        id: "sub-1".to_string(),
        kind: SubmissionKind::Github,
        url: "https://github.com/class/team".to_string(),
        status,
        feedback: None,
        submitted_at: days_ago(1),
        reviewed_at: None,
        revision_count: None,
    }
}

pub fn rubric(max_score: f64) -> Rubric {
    Rubric {
        criteria: vec![RubricCriterion {
            name: "Quality".to_string(),
            description: String::new(),
            max_points: max_score,
        }],
        max_score,
    }
}

pub fn scored_submission(score: f64) -> Submission {
    Submission {
        feedback: Some(Feedback {
            teacher_comment: "Nice".to_string(),
            rubric_score: Some(score),
            created_at: days_ago(1),
        }),
        ..submission(SubmissionStatus::Approved)
    }
}

pub fn find_task<'a>(team: &'a Team, phase_id: &str, task_id: &str) -> &'a Task {
    team.project
        .as_ref()
        .expect("Team should have a project")
        .phases
        .iter()
        .find(|phase| phase.id == phase_id)
        .expect("Phase should exist")
        .tasks
        .iter()
        .find(|task| task.id == task_id)
        .expect("Task should exist")
}

pub fn phase_status(team: &Team, phase_id: &str) -> PhaseStatus {
    team.project
        .as_ref()
        .expect("Team should have a project")
        .phases
        .iter()
        .find(|phase| phase.id == phase_id)
        .expect("Phase should exist")
        .status
}

pub fn set_task<F>(team: &mut Team, phase_id: &str, task_id: &str, change: F)
where
    F: FnOnce(&mut Task),
{
    let task = team
        .project
        .as_mut()
        .expect("Team should have a project")
        .phases
        .iter_mut()
        .find(|phase| phase.id == phase_id)
        .expect("Phase should exist")
        .tasks
        .iter_mut()
        .find(|task| task.id == task_id)
        .expect("Task should exist");
    change(task);
}
