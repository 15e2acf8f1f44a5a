use super::helper;
use crate::engine::analytics;
use crate::engine::config::EngineConfig;
use crate::errors::AppError;
use crate::model::analytics::{ClassMetrics, StudentAnalytics};
use crate::payloads::analytics::AnalyticsPayload;
use crate::response::{ApiResponse, CsvDownload};
use axum::extract::State;
use axum::response::Json;
use tracing::{info, instrument};

/// Computes per-student metrics for every member of every team.
///
/// Request Body: `AnalyticsPayload`
///
/// Returns (wrapped in `ApiResponse`)
/// * `Vec<StudentAnalytics>`: One entry per student, in team and member order (200 OK).
#[instrument(skip(payload))]
pub async fn get_student_analytics(
    Json(payload): Json<AnalyticsPayload>,
) -> Result<ApiResponse<Vec<StudentAnalytics>>, AppError> {
    let now = helper::resolve_now(payload.now);
    let entries = analytics::all_student_analytics(&payload.teams, now);

    info!("Computed analytics for {} students", entries.len());
    Ok(ApiResponse::ok(entries))
}

/// Lists students with pending work and no recent activity.
///
/// Request Body: `AnalyticsPayload` (`days_threshold` falls back to the configured default)
///
/// Returns (wrapped in `ApiResponse`)
/// * `Vec<StudentAnalytics>`: The stuck students (200 OK).
#[instrument(skip(config, payload))]
pub async fn get_stuck_students(
    State(config): State<EngineConfig>,
    Json(payload): Json<AnalyticsPayload>,
) -> Result<ApiResponse<Vec<StudentAnalytics>>, AppError> {
    let now = helper::resolve_now(payload.now);
    let days_threshold = payload.days_threshold.unwrap_or(config.stuck_days_threshold);

    let stuck = analytics::detect_stuck_students(&payload.teams, now, days_threshold);

    info!(
        "Found {} stuck students (threshold {} days)",
        stuck.len(),
        days_threshold
    );
    Ok(ApiResponse::ok(stuck))
}

/// Summarises the whole class.
///
/// Request Body: `AnalyticsPayload` (`days_threshold` falls back to the configured default)
///
/// Returns (wrapped in `ApiResponse`)
/// * `ClassMetrics`: Totals, averages, stuck count and submission breakdown (200 OK).
#[instrument(skip(config, payload))]
pub async fn get_class_metrics(
    State(config): State<EngineConfig>,
    Json(payload): Json<AnalyticsPayload>,
) -> Result<ApiResponse<ClassMetrics>, AppError> {
    let now = helper::resolve_now(payload.now);
    let days_threshold = payload.days_threshold.unwrap_or(config.stuck_days_threshold);

    let metrics = analytics::class_metrics(&payload.teams, now, days_threshold);

    info!(
        "Class metrics: {} students in {} teams, average progress {}%",
        metrics.total_students, metrics.total_teams, metrics.average_progress
    );
    Ok(ApiResponse::ok(metrics))
}

/// Exports per-student analytics as a CSV download (`student_analytics.csv`).
///
/// Request Body: `AnalyticsPayload`
///
/// Returns
/// * `text/csv` attachment with a header row and one row per student (200 OK).
#[instrument(skip(payload))]
pub async fn export_csv(Json(payload): Json<AnalyticsPayload>) -> Result<CsvDownload, AppError> {
    let now = helper::resolve_now(payload.now);
    let body = analytics::export_csv(&payload.teams, now);

    info!("Exported analytics CSV ({} bytes)", body.len());
    Ok(CsvDownload::new(body))
}
