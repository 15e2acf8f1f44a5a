use crate::engine::progress::ReviewDecision;
use crate::model::student::ActivityAction;
use crate::model::team::{SubmissionKind, Team};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Deserialize, Serialize, Debug)]
pub struct ToggleTaskPayload {
    pub teams: Vec<Team>,
    pub team_id: String,
    pub phase_id: String,
    pub task_id: String,
}

#[derive(Deserialize, Serialize, Debug)]
pub struct SubmitEvidencePayload {
    pub teams: Vec<Team>,
    pub team_id: String,
    pub phase_id: String,
    pub task_id: String,
    pub kind: SubmissionKind,
    pub url: String,
    pub student_id: Option<String>,
    pub now: Option<DateTime<Utc>>,
}

#[derive(Deserialize, Serialize, Debug)]
pub struct ReviewSubmissionPayload {
    pub teams: Vec<Team>,
    pub team_id: String,
    pub phase_id: String,
    pub task_id: String,
    pub decision: ReviewDecision,
    pub comment: Option<String>,
    pub rubric_score: Option<f64>,
    pub now: Option<DateTime<Utc>>,
}

#[derive(Deserialize, Serialize, Debug)]
pub struct RecordActivityPayload {
    pub teams: Vec<Team>,
    pub team_id: String,
    pub student_id: String,
    pub action: ActivityAction,
    pub task_id: Option<String>,
    pub phase_id: Option<String>,
    pub details: Option<String>,
    pub now: Option<DateTime<Utc>>,
}

#[derive(Deserialize, Serialize, Debug)]
pub struct LeaderboardPayload {
    pub teams: Vec<Team>,
}
