use crate::model::badge::Badge;
use crate::model::student::Student;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum ProjectStatus {
    #[default]
    PendingTopic,
    Active,
}

#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum PhaseStatus {
    Locked,
    Active,
    Completed,
}

#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum SubmissionKind {
    Github,
    Image,
}

#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum SubmissionStatus {
    Pending,
    Approved,
    Rejected,
    NeedsRevision,
}

impl SubmissionStatus {
    /// Whether a new submission for the task counts as a revision.
    pub fn is_returned(self) -> bool {
        matches!(self, SubmissionStatus::Rejected | SubmissionStatus::NeedsRevision)
    }
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct Feedback {
    pub teacher_comment: String,
    pub rubric_score: Option<f64>,
    pub created_at: DateTime<Utc>,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct Submission {
    pub id: String,
    pub kind: SubmissionKind,
    pub url: String,
    pub status: SubmissionStatus,
    pub feedback: Option<Feedback>,
    pub submitted_at: DateTime<Utc>,
    pub reviewed_at: Option<DateTime<Utc>>,
    pub revision_count: Option<u32>,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct RubricCriterion {
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub max_points: f64,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct Rubric {
    pub criteria: Vec<RubricCriterion>,
    pub max_score: f64,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct Task {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub completed: bool,
    pub submission: Option<Submission>,
    pub deadline: Option<DateTime<Utc>>,
    #[serde(default)]
    pub is_overdue: bool,
    pub rubric: Option<Rubric>,
}

impl Task {
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Task {
            id: id.into(),
            title: title.into(),
            completed: false,
            submission: None,
            deadline: None,
            is_overdue: false,
            rubric: None,
        }
    }

    pub fn submission_status(&self) -> Option<SubmissionStatus> {
        self.submission.as_ref().map(|submission| submission.status)
    }

    /// Rubric score on a 0-100 scale, if the task has both a rubric and a scored review.
    /// Scores outside `0..=max_score` are clamped.
    pub fn scored_quality(&self) -> Option<f64> {
        let rubric = self.rubric.as_ref()?;
        let score = self.submission.as_ref()?.feedback.as_ref()?.rubric_score?;
        if rubric.max_score <= 0.0 {
            return None;
        }
        Some((100.0 * score / rubric.max_score).clamp(0.0, 100.0))
    }
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct Phase {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub tasks: Vec<Task>,
    pub status: PhaseStatus,
    pub deadline: Option<DateTime<Utc>>,
}

impl Phase {
    pub fn completed_tasks(&self) -> usize {
        self.tasks.iter().filter(|task| task.completed).count()
    }

    pub fn all_tasks_completed(&self) -> bool {
        self.tasks.iter().all(|task| task.completed)
    }
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct Resource {
    pub title: String,
    pub uri: String,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct Project {
    pub topic: String,
    pub driving_question: String,
    #[serde(default)]
    pub description: String,
    pub phases: Vec<Phase>,
    #[serde(default)]
    pub resources: Vec<Resource>,
}

impl Project {
    pub fn tasks(&self) -> impl Iterator<Item = &Task> {
        self.phases.iter().flat_map(|phase| phase.tasks.iter())
    }

    pub fn total_tasks(&self) -> usize {
        self.phases.iter().map(|phase| phase.tasks.len()).sum()
    }

    pub fn completed_tasks(&self) -> usize {
        self.phases.iter().map(Phase::completed_tasks).sum()
    }

    pub fn completed_phases(&self) -> usize {
        self.phases
            .iter()
            .filter(|phase| phase.status == PhaseStatus::Completed)
            .count()
    }
}

/// A team ("group") of students working through one project.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct Team {
    pub id: String,
    pub name: String,
    pub members: Vec<Student>,
    pub project: Option<Project>,
    #[serde(default)]
    pub project_status: ProjectStatus,
    #[serde(default)]
    pub progress: u8,
    #[serde(default)]
    pub xp: u32,
    // earn order, no duplicates
    #[serde(default)]
    pub badges: Vec<Badge>,
}

impl Team {
    pub fn new(id: impl Into<String>, name: impl Into<String>, members: Vec<Student>) -> Self {
        Team {
            id: id.into(),
            name: name.into(),
            members,
            project: None,
            project_status: ProjectStatus::PendingTopic,
            progress: 0,
            xp: 0,
            badges: Vec::new(),
        }
    }

    /// All tasks of the team's project; empty when no project is assigned.
    pub fn tasks(&self) -> Vec<&Task> {
        self.project
            .as_ref()
            .map(|project| project.tasks().collect())
            .unwrap_or_default()
    }

    pub fn total_tasks(&self) -> usize {
        self.project.as_ref().map_or(0, Project::total_tasks)
    }

    pub fn has_badge(&self, badge_id: &str) -> bool {
        self.badges.iter().any(|badge| badge.id == badge_id)
    }
}
