use crate::model::badge::Badge;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MasteryScores {
    pub math: u8,
    pub science: u8,
    pub creativity: u8,
    pub leadership: u8,
}

impl MasteryScores {
    pub fn mean(&self) -> f64 {
        let sum = self.math as f64
            + self.science as f64
            + self.creativity as f64
            + self.leadership as f64;
        sum / 4.0
    }
}

#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum ActivityAction {
    TaskStarted,
    TaskCompleted,
    SubmissionMade,
    PhaseUnlocked,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct ActivityEntry {
    pub id: String,
    pub timestamp: DateTime<Utc>,
    pub action: ActivityAction,
    pub task_id: Option<String>,
    pub phase_id: Option<String>,
    pub details: Option<String>,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct Student {
    pub id: String,
    pub name: String,
    pub avatar: String,
    pub scores: MasteryScores,
    // fixed at creation; not recomputed when `scores` change
    pub average_score: f64,
    #[serde(default)]
    pub personal_xp: u32,
    #[serde(default)]
    pub personal_badges: Vec<Badge>,
    // chronological
    #[serde(default)]
    pub activity_log: Vec<ActivityEntry>,
    pub joined_at: DateTime<Utc>,
}

impl Student {
    /// Creates a student at roster import, deriving `average_score` from the mastery scores.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        avatar: impl Into<String>,
        scores: MasteryScores,
        joined_at: DateTime<Utc>,
    ) -> Self {
        Student {
            id: id.into(),
            name: name.into(),
            avatar: avatar.into(),
            scores,
            average_score: scores.mean(),
            personal_xp: 0,
            personal_badges: Vec::new(),
            activity_log: Vec::new(),
            joined_at,
        }
    }

    /// Timestamp of the latest activity, falling back to the join time.
    pub fn last_active(&self) -> DateTime<Utc> {
        self.activity_log
            .last()
            .map(|entry| entry.timestamp)
            .unwrap_or(self.joined_at)
    }

    pub fn count_actions(&self, action: ActivityAction) -> usize {
        self.activity_log
            .iter()
            .filter(|entry| entry.action == action)
            .count()
    }
}
