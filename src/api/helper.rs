use crate::model::team::{Task, Team};
use chrono::{DateTime, Utc};
use tracing::debug;

/// The engine never reads the clock; requests without an explicit `now` get the server time.
pub(super) fn resolve_now(now: Option<DateTime<Utc>>) -> DateTime<Utc> {
    match now {
        Some(now) => now,
        None => {
            let now = Utc::now();
            debug!("No reference time supplied, using server time {}", now);
            now
        }
    }
}

/// Owned copies of every task of `team_id`; empty when the team or its project is missing.
pub(super) fn team_tasks(teams: &[Team], team_id: &str) -> Vec<Task> {
    teams
        .iter()
        .find(|team| team.id == team_id)
        .map(|team| team.tasks().into_iter().cloned().collect())
        .unwrap_or_default()
}
