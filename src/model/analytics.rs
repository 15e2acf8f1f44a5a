use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Per-student metrics, derived on demand from a student and their team.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct StudentAnalytics {
    pub student_id: String,
    pub team_id: String,
    pub tasks_completed: u32,
    // minutes
    pub time_spent: i64,
    pub submission_quality: u32,
    pub contribution_score: u32,
    pub last_active: DateTime<Utc>,
    pub pending_tasks: u32,
    pub overdue_tasks_count: u32,
}

#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct SubmissionStats {
    pub pending: u32,
    pub approved: u32,
    pub rejected: u32,
    pub needs_revision: u32,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct ClassMetrics {
    pub total_students: u32,
    pub total_teams: u32,
    pub average_progress: u32,
    pub total_tasks_completed: u32,
    pub average_submission_quality: u32,
    pub stuck_students_count: u32,
    pub submission_stats: SubmissionStats,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct LeaderboardEntry {
    pub rank: u32,
    pub team_id: String,
    pub team_name: String,
    pub xp: u32,
    pub progress: u8,
    pub badge_count: u32,
}
