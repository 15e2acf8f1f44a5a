use super::helper;
use crate::engine::config::EngineConfig;
use crate::engine::gamification;
use crate::engine::pipeline::{self, Transition};
use crate::engine::progress::{FeedbackInput, NewSubmission};
use crate::errors::AppError;
use crate::model::analytics::LeaderboardEntry;
use crate::model::student::ActivityEntry;
use crate::model::team::Team;
use crate::payloads::progress::{
    LeaderboardPayload, RecordActivityPayload, ReviewSubmissionPayload, SubmitEvidencePayload,
    ToggleTaskPayload,
};
use crate::response::ApiResponse;
use axum::extract::State;
use axum::response::Json;
use tracing::{debug, info, instrument};
use uuid::Uuid;

fn log_badge(transition: &Transition) {
    if let Some(badge) = transition.new_badge.as_ref() {
        info!("Transition earned badge '{}'", badge.name);
    }
}

/// Flips a task's completion and recomputes phases, progress, XP and badges.
///
/// Request Body: `ToggleTaskPayload`
///
/// Returns (wrapped in `ApiResponse`)
/// * `Transition`: The updated class and the newly earned badge, if any (200 OK).
///   Unknown team, phase or task ids return the class unchanged.
#[instrument(skip(config, payload))]
pub async fn toggle_task(
    State(config): State<EngineConfig>,
    Json(payload): Json<ToggleTaskPayload>,
) -> Result<ApiResponse<Transition>, AppError> {
    info!(
        "Toggling task {} in phase {} for team {}",
        payload.task_id, payload.phase_id, payload.team_id
    );

    let transition = pipeline::apply_toggle(
        &payload.teams,
        &payload.team_id,
        &payload.phase_id,
        &payload.task_id,
        &config.xp,
    );

    log_badge(&transition);
    Ok(ApiResponse::ok(transition))
}

/// Attaches evidence (GitHub link or image reference) to a task as a pending submission.
///
/// Request Body: `SubmitEvidencePayload`
///
/// Returns (wrapped in `ApiResponse`)
/// * `Transition`: The updated class (200 OK). Completed tasks, locked phases and
///   unknown ids leave the class unchanged.
#[instrument(skip(config, payload))]
pub async fn submit_evidence(
    State(config): State<EngineConfig>,
    Json(payload): Json<SubmitEvidencePayload>,
) -> Result<ApiResponse<Transition>, AppError> {
    let now = helper::resolve_now(payload.now);
    let submission = NewSubmission {
        id: format!("sub-{}", Uuid::new_v4()),
        kind: payload.kind,
        url: payload.url,
    };
    info!(
        "Submitting evidence {} for task {} in team {}",
        submission.id, payload.task_id, payload.team_id
    );

    let transition = pipeline::apply_submission(
        &payload.teams,
        &payload.team_id,
        &payload.phase_id,
        &payload.task_id,
        submission,
        payload.student_id.as_deref(),
        now,
        &config.xp,
    );

    Ok(ApiResponse::ok(transition))
}

/// Approves, rejects or requests a revision of a task's submission.
///
/// Request Body: `ReviewSubmissionPayload`
///
/// Returns (wrapped in `ApiResponse`)
/// * `Transition`: The updated class and the newly earned badge, if any (200 OK).
///   Tasks without a submission and unknown ids leave the class unchanged.
#[instrument(skip(config, payload))]
pub async fn review_submission(
    State(config): State<EngineConfig>,
    Json(payload): Json<ReviewSubmissionPayload>,
) -> Result<ApiResponse<Transition>, AppError> {
    let now = helper::resolve_now(payload.now);
    info!(
        "Reviewing task {} in team {}: {:?}",
        payload.task_id, payload.team_id, payload.decision
    );

    let feedback = match (payload.comment, payload.rubric_score) {
        (None, None) => None,
        (comment, rubric_score) => Some(FeedbackInput {
            comment: comment.unwrap_or_default(),
            rubric_score,
        }),
    };

    let transition = pipeline::apply_review(
        &payload.teams,
        &payload.team_id,
        &payload.phase_id,
        &payload.task_id,
        payload.decision,
        feedback,
        now,
        &config.xp,
    );

    log_badge(&transition);
    Ok(ApiResponse::ok(transition))
}

/// Appends an entry to a student's activity log.
///
/// Request Body: `RecordActivityPayload`
///
/// Returns (wrapped in `ApiResponse`)
/// * `Vec<Team>`: The updated class (200 OK). Unknown team or student ids leave it unchanged.
#[instrument(skip(payload))]
pub async fn record_activity(
    Json(payload): Json<RecordActivityPayload>,
) -> Result<ApiResponse<Vec<Team>>, AppError> {
    let now = helper::resolve_now(payload.now);
    debug!(
        "Recording {:?} for student {} in team {}",
        payload.action, payload.student_id, payload.team_id
    );

    let entry = ActivityEntry {
        id: format!("activity-{}", Uuid::new_v4()),
        timestamp: now,
        action: payload.action,
        task_id: payload.task_id,
        phase_id: payload.phase_id,
        details: payload.details,
    };

    let teams = pipeline::apply_activity(
        &payload.teams,
        &payload.team_id,
        &payload.student_id,
        entry,
    );
    Ok(ApiResponse::ok(teams))
}

/// Ranks teams by XP.
///
/// Request Body: `LeaderboardPayload`
///
/// Returns (wrapped in `ApiResponse`)
/// * `Vec<LeaderboardEntry>`: Teams sorted by XP, highest first (200 OK).
#[instrument(skip(payload))]
pub async fn leaderboard(
    Json(payload): Json<LeaderboardPayload>,
) -> Result<ApiResponse<Vec<LeaderboardEntry>>, AppError> {
    info!("Ranking {} teams", payload.teams.len());
    Ok(ApiResponse::ok(gamification::leaderboard(&payload.teams)))
}
