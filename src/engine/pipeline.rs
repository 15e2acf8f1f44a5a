//! Composes the state machine and the gamification rules into single transitions over
//! the whole class, so callers never see a team whose phases moved but whose XP and
//! badges did not.

use crate::engine::config::XpRules;
use crate::engine::gamification::{compute_badges, compute_xp};
use crate::engine::progress::{self, FeedbackInput, NewSubmission, ReviewDecision};
use crate::model::badge::Badge;
use crate::model::student::{ActivityAction, ActivityEntry};
use crate::model::team::Team;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// The class after one event, and the badge to announce for it, if any.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct Transition {
    pub teams: Vec<Team>,
    pub new_badge: Option<Badge>,
}

impl Transition {
    fn unchanged(teams: &[Team]) -> Self {
        Transition {
            teams: teams.to_vec(),
            new_badge: None,
        }
    }
}

/// Recomputes XP and badges for a team snapshot.
pub fn refresh_team(team: &Team, rules: &XpRules) -> (Team, Option<Badge>) {
    let xp = compute_xp(team, rules);
    let award = compute_badges(team, &team.badges);

    let refreshed = Team {
        xp,
        badges: award.badges,
        ..team.clone()
    };
    (refreshed, award.latest)
}

fn apply<F>(teams: &[Team], team_id: &str, rules: &XpRules, step: F) -> Transition
where
    F: FnOnce(&Team) -> Team,
{
    let Some(index) = teams.iter().position(|team| team.id == team_id) else {
        debug!("Team {} not found, class unchanged", team_id);
        return Transition::unchanged(teams);
    };

    let stepped = step(&teams[index]);
    if stepped == teams[index] {
        return Transition::unchanged(teams);
    }
    let (refreshed, new_badge) = refresh_team(&stepped, rules);

    let mut next = teams.to_vec();
    next[index] = refreshed;
    Transition {
        teams: next,
        new_badge,
    }
}

pub fn apply_toggle(
    teams: &[Team],
    team_id: &str,
    phase_id: &str,
    task_id: &str,
    rules: &XpRules,
) -> Transition {
    apply(teams, team_id, rules, |team| {
        progress::toggle_task(team, phase_id, task_id)
    })
}

/// Attaches evidence and, when `student_id` names a member, logs the submission
/// in that student's activity log.
#[allow(clippy::too_many_arguments)]
pub fn apply_submission(
    teams: &[Team],
    team_id: &str,
    phase_id: &str,
    task_id: &str,
    submission: NewSubmission,
    student_id: Option<&str>,
    now: DateTime<Utc>,
    rules: &XpRules,
) -> Transition {
    apply(teams, team_id, rules, |team| {
        let submission_id = submission.id.clone();
        let submitted = progress::submit_evidence(team, phase_id, task_id, submission, now);
        match student_id {
            Some(student_id) if submitted != *team => {
                let entry = ActivityEntry {
                    id: format!("activity-{submission_id}"),
                    timestamp: now,
                    action: ActivityAction::SubmissionMade,
                    task_id: Some(task_id.to_string()),
                    phase_id: Some(phase_id.to_string()),
                    details: None,
                };
                progress::record_activity(&submitted, student_id, entry)
            }
            _ => submitted,
        }
    })
}

#[allow(clippy::too_many_arguments)]
pub fn apply_review(
    teams: &[Team],
    team_id: &str,
    phase_id: &str,
    task_id: &str,
    decision: ReviewDecision,
    feedback: Option<FeedbackInput>,
    now: DateTime<Utc>,
    rules: &XpRules,
) -> Transition {
    apply(teams, team_id, rules, |team| {
        progress::review_submission(team, phase_id, task_id, decision, feedback, now)
    })
}

pub fn apply_activity(
    teams: &[Team],
    team_id: &str,
    student_id: &str,
    entry: ActivityEntry,
) -> Vec<Team> {
    teams
        .iter()
        .map(|team| {
            if team.id == team_id {
                progress::record_activity(team, student_id, entry.clone())
            } else {
                team.clone()
            }
        })
        .collect()
}
