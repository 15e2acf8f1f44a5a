use crate::engine::config::XpRules;
use crate::model::analytics::LeaderboardEntry;
use crate::model::badge::{Badge, BadgeKind};
use crate::model::team::{PhaseStatus, Team};
use tracing::info;

/// Badge set after evaluation, plus the last badge this evaluation added.
#[derive(Debug, Clone, PartialEq)]
pub struct BadgeAward {
    pub badges: Vec<Badge>,
    pub latest: Option<Badge>,
}

/// XP for the team's current snapshot: `per_phase` per completed phase plus
/// `per_task` per completed task, tasks of completed phases included.
pub fn compute_xp(team: &Team, rules: &XpRules) -> u32 {
    let Some(project) = team.project.as_ref() else {
        return 0;
    };

    project
        .phases
        .iter()
        .map(|phase| {
            let phase_bonus = if phase.status == PhaseStatus::Completed {
                rules.per_phase
            } else {
                0
            };
            phase_bonus + phase.completed_tasks() as u32 * rules.per_task
        })
        .sum()
}

fn qualifies(
    kind: BadgeKind,
    completed_tasks: usize,
    completed_phases: usize,
    fraction: f64,
) -> bool {
    match kind {
        BadgeKind::FirstStep => completed_tasks >= 1,
        BadgeKind::Momentum => completed_tasks >= 3,
        BadgeKind::PhaseMaster => completed_phases >= 1,
        BadgeKind::Halfway => fraction >= 0.5,
        BadgeKind::Champion => fraction >= 1.0,
    }
}

/// Adds every newly qualifying catalog badge to `previous`. Badges are never taken
/// away, even when the condition that earned them no longer holds.
pub fn compute_badges(team: &Team, previous: &[Badge]) -> BadgeAward {
    let mut badges = previous.to_vec();
    let Some(project) = team.project.as_ref() else {
        return BadgeAward {
            badges,
            latest: None,
        };
    };

    let completed_tasks = project.completed_tasks();
    let completed_phases = project.completed_phases();
    let fraction = completed_tasks as f64 / project.total_tasks().max(1) as f64;

    let mut latest = None;
    for kind in BadgeKind::ALL {
        if badges.iter().any(|badge| badge.id == kind.id()) {
            continue;
        }
        if qualifies(kind, completed_tasks, completed_phases, fraction) {
            let badge = kind.badge();
            info!("Team {} earned badge {}", team.id, badge.id);
            badges.push(badge.clone());
            latest = Some(badge);
        }
    }

    BadgeAward { badges, latest }
}

/// Teams ranked by XP, highest first; equal XP keeps input order.
pub fn leaderboard(teams: &[Team]) -> Vec<LeaderboardEntry> {
    let mut ranked: Vec<&Team> = teams.iter().collect();
    ranked.sort_by(|a, b| b.xp.cmp(&a.xp));

    ranked
        .into_iter()
        .enumerate()
        .map(|(position, team)| LeaderboardEntry {
            rank: position as u32 + 1,
            team_id: team.id.clone(),
            team_name: team.name.clone(),
            xp: team.xp,
            progress: team.progress,
            badge_count: team.badges.len() as u32,
        })
        .collect()
}
