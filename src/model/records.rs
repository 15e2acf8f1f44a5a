//! Row shapes handed over by the persistence layer, and their conversion into the
//! in-memory model.
//!
//! Defaulting rules live here and nowhere else:
//! * missing mastery scores become all-zero scores with a zero average;
//!   a persisted `average_score` wins over the recomputed mean
//! * the display name is `full_name`, falling back to `email` when missing or empty
//! * the avatar is `avatar_url`, falling back to a generated ui-avatars URL when
//!   missing or empty
//! * missing personal XP is 0; activity logs and personal badges start empty
//! * phases, tasks and resources are ordered by their `*_order` column
//! * a missing project stays `None`, missing badges become an empty set and
//!   repeated badge rows are collapsed to the first one

use crate::model::badge::Badge;
use crate::model::student::{MasteryScores, Student};
use crate::model::team::{Phase, PhaseStatus, Project, ProjectStatus, Resource, Task, Team};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

const AVATAR_FALLBACK_BASE: &str = "https://ui-avatars.com/api/?name=";

#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct MasteryRecord {
    pub math: i32,
    pub science: i32,
    pub creativity: i32,
    pub leadership: i32,
    pub average_score: Option<f64>,
}

#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct StudentRecord {
    pub id: String,
    pub email: String,
    pub full_name: Option<String>,
    pub avatar_url: Option<String>,
    pub mastery_scores: Option<MasteryRecord>,
    pub personal_xp: Option<u32>,
    pub joined_at: DateTime<Utc>,
}

#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct TaskRecord {
    pub id: String,
    pub title: String,
    pub completed: bool,
    pub deadline: Option<DateTime<Utc>>,
    pub is_overdue: Option<bool>,
    pub task_order: i32,
}

#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct PhaseRecord {
    pub id: String,
    pub title: String,
    pub description: String,
    pub status: PhaseStatus,
    pub deadline: Option<DateTime<Utc>>,
    pub phase_order: i32,
    #[serde(default)]
    pub tasks: Vec<TaskRecord>,
}

#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct ResourceRecord {
    pub title: String,
    pub uri: String,
    pub resource_order: i32,
}

#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct ProjectRecord {
    pub topic: String,
    pub driving_question: String,
    pub description: String,
    #[serde(default)]
    pub project_phases: Vec<PhaseRecord>,
    #[serde(default)]
    pub project_resources: Vec<ResourceRecord>,
}

#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct GroupRecord {
    pub id: String,
    pub name: String,
    pub project_status: ProjectStatus,
    pub progress: u8,
    pub xp: u32,
    #[serde(default)]
    pub students: Vec<StudentRecord>,
    pub projects: Option<ProjectRecord>,
    #[serde(default)]
    pub group_badges: Vec<Badge>,
}

fn clamp_score(value: i32) -> u8 {
    value.clamp(0, 100) as u8
}

fn fallback_avatar(name: &str) -> String {
    let encoded: String = url::form_urlencoded::byte_serialize(name.as_bytes()).collect();
    format!("{AVATAR_FALLBACK_BASE}{encoded}")
}

impl From<MasteryRecord> for MasteryScores {
    fn from(record: MasteryRecord) -> Self {
        MasteryScores {
            math: clamp_score(record.math),
            science: clamp_score(record.science),
            creativity: clamp_score(record.creativity),
            leadership: clamp_score(record.leadership),
        }
    }
}

impl From<StudentRecord> for Student {
    fn from(record: StudentRecord) -> Self {
        let name = record
            .full_name
            .filter(|name| !name.is_empty())
            .unwrap_or(record.email);
        let avatar = record
            .avatar_url
            .filter(|avatar| !avatar.is_empty())
            .unwrap_or_else(|| fallback_avatar(&name));

        let (scores, average_score) = match record.mastery_scores {
            Some(mastery) => {
                let persisted_average = mastery.average_score;
                let scores = MasteryScores::from(mastery);
                (scores, persisted_average.unwrap_or_else(|| scores.mean()))
            }
            None => (MasteryScores::default(), 0.0),
        };

        Student {
            id: record.id,
            name,
            avatar,
            scores,
            average_score,
            personal_xp: record.personal_xp.unwrap_or(0),
            personal_badges: Vec::new(),
            activity_log: Vec::new(),
            joined_at: record.joined_at,
        }
    }
}

impl From<TaskRecord> for Task {
    fn from(record: TaskRecord) -> Self {
        Task {
            id: record.id,
            title: record.title,
            completed: record.completed,
            submission: None,
            deadline: record.deadline,
            is_overdue: record.is_overdue.unwrap_or(false),
            rubric: None,
        }
    }
}

impl From<PhaseRecord> for Phase {
    fn from(record: PhaseRecord) -> Self {
        let mut tasks = record.tasks;
        tasks.sort_by_key(|task| task.task_order);

        Phase {
            id: record.id,
            title: record.title,
            description: record.description,
            tasks: tasks.into_iter().map(Task::from).collect(),
            status: record.status,
            deadline: record.deadline,
        }
    }
}

impl From<ProjectRecord> for Project {
    fn from(record: ProjectRecord) -> Self {
        let mut phases = record.project_phases;
        phases.sort_by_key(|phase| phase.phase_order);
        let mut resources = record.project_resources;
        resources.sort_by_key(|resource| resource.resource_order);

        Project {
            topic: record.topic,
            driving_question: record.driving_question,
            description: record.description,
            phases: phases.into_iter().map(Phase::from).collect(),
            resources: resources
                .into_iter()
                .map(|resource| Resource {
                    title: resource.title,
                    uri: resource.uri,
                })
                .collect(),
        }
    }
}

impl From<GroupRecord> for Team {
    fn from(record: GroupRecord) -> Self {
        let mut badges: Vec<Badge> = Vec::with_capacity(record.group_badges.len());
        for badge in record.group_badges {
            if !badges.iter().any(|earned| earned.id == badge.id) {
                badges.push(badge);
            }
        }

        Team {
            id: record.id,
            name: record.name,
            members: record.students.into_iter().map(Student::from).collect(),
            project: record.projects.map(Project::from),
            project_status: record.project_status,
            progress: record.progress.min(100),
            xp: record.xp,
            badges,
        }
    }
}
