use super::helper;
use crate::engine::config::EngineConfig;
use crate::engine::deadline::{self, DeadlineStatus};
use crate::errors::AppError;
use crate::model::team::Task;
use crate::payloads::deadlines::{DeadlineStatusPayload, TeamDeadlinesPayload};
use crate::response::ApiResponse;
use axum::extract::State;
use axum::response::Json;
use tracing::{info, instrument};

/// Classifies a single deadline.
///
/// Request Body: `DeadlineStatusPayload`
///
/// Returns (wrapped in `ApiResponse`)
/// * `DeadlineStatus`: Urgency, overdue flag, countdown and display label (200 OK).
#[instrument(skip(payload))]
pub async fn get_deadline_status(
    Json(payload): Json<DeadlineStatusPayload>,
) -> Result<ApiResponse<DeadlineStatus>, AppError> {
    let now = helper::resolve_now(payload.now);
    Ok(ApiResponse::ok(deadline::deadline_status(payload.deadline, now)))
}

/// Lists a team's tasks due within the look-ahead window, soonest first.
///
/// Request Body: `TeamDeadlinesPayload` (`window_days` falls back to the configured default)
///
/// Returns (wrapped in `ApiResponse`)
/// * `Vec<Task>`: The upcoming tasks (200 OK). Unknown teams yield an empty list.
#[instrument(skip(config, payload))]
pub async fn get_upcoming_deadlines(
    State(config): State<EngineConfig>,
    Json(payload): Json<TeamDeadlinesPayload>,
) -> Result<ApiResponse<Vec<Task>>, AppError> {
    let now = helper::resolve_now(payload.now);
    let window_days = payload.window_days.unwrap_or(config.upcoming_window_days);
    let tasks = helper::team_tasks(&payload.teams, &payload.team_id);

    let upcoming = deadline::upcoming_deadlines(&tasks, now, window_days);

    info!(
        "Team {} has {} tasks due within {} days",
        payload.team_id,
        upcoming.len(),
        window_days
    );
    Ok(ApiResponse::ok(upcoming))
}

/// Lists a team's incomplete tasks whose deadline has passed, with refreshed overdue flags.
///
/// Request Body: `TeamDeadlinesPayload`
///
/// Returns (wrapped in `ApiResponse`)
/// * `Vec<Task>`: The overdue tasks (200 OK). Unknown teams yield an empty list.
#[instrument(skip(payload))]
pub async fn get_overdue_tasks(
    Json(payload): Json<TeamDeadlinesPayload>,
) -> Result<ApiResponse<Vec<Task>>, AppError> {
    let now = helper::resolve_now(payload.now);
    let tasks = deadline::refresh_overdue_flags(
        &helper::team_tasks(&payload.teams, &payload.team_id),
        now,
    );

    let overdue = deadline::overdue_tasks(&tasks, now);

    info!("Team {} has {} overdue tasks", payload.team_id, overdue.len());
    Ok(ApiResponse::ok(overdue))
}
