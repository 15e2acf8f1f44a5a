use crate::engine::balancer::form_balanced_teams;
use crate::engine::config::EngineConfig;
use crate::engine::project::{assign_project as assign_project_to_teams, project_template};
use crate::errors::AppError;
use crate::model::team::Team;
use crate::payloads::setup::{AssignProjectPayload, FormTeamsPayload, ImportGroupsPayload};
use crate::response::ApiResponse;
use axum::extract::State;
use axum::response::Json;
use tracing::{debug, info, instrument};

/// Returns the configuration the engine runs with.
///
/// Returns (wrapped in `ApiResponse`)
/// * `EngineConfig`: The active configuration (200 OK).
#[instrument(skip(config))]
pub async fn get_config(
    State(config): State<EngineConfig>,
) -> Result<ApiResponse<EngineConfig>, AppError> {
    debug!("Serving engine configuration: {:?}", config);
    Ok(ApiResponse::ok(config))
}

/// Partitions a roster into skill-balanced teams using a snake draft.
///
/// Request Body: `FormTeamsPayload` (`team_size` falls back to the configured default)
///
/// Returns (wrapped in `ApiResponse`)
/// * `Vec<Team>`: `ceil(N / team_size)` fresh teams named Team A, Team B, ... (200 OK).
/// * `400 Bad Request`: If the team size is below 1.
#[instrument(skip(config, payload))]
pub async fn form_teams(
    State(config): State<EngineConfig>,
    Json(payload): Json<FormTeamsPayload>,
) -> Result<ApiResponse<Vec<Team>>, AppError> {
    let team_size = payload
        .team_size
        .unwrap_or(config.default_team_size as i64);
    info!(
        "Forming teams of {} from a roster of {} students",
        team_size,
        payload.roster.len()
    );

    let teams = form_balanced_teams(&payload.roster, team_size)?;

    info!("Successfully formed {} teams", teams.len());
    Ok(ApiResponse::ok(teams))
}

/// Assigns the standard project template for a topic to every team.
///
/// Request Body: `AssignProjectPayload`
///
/// Returns (wrapped in `ApiResponse`)
/// * `Vec<Team>`: The teams, each with its own project copy and status `active` (200 OK).
/// * `400 Bad Request`: If the topic is blank.
#[instrument(skip(payload))]
pub async fn assign_project(
    Json(payload): Json<AssignProjectPayload>,
) -> Result<ApiResponse<Vec<Team>>, AppError> {
    info!(
        "Assigning topic '{}' to {} teams",
        payload.topic,
        payload.teams.len()
    );

    let project = project_template(&payload.topic)?;
    let teams = assign_project_to_teams(&payload.teams, &project);

    Ok(ApiResponse::ok(teams))
}

/// Maps persisted group rows into team snapshots.
///
/// Request Body: `ImportGroupsPayload`
///
/// Returns (wrapped in `ApiResponse`)
/// * `Vec<Team>`: One team per record, in record order (200 OK).
#[instrument(skip(payload))]
pub async fn import_groups(
    Json(payload): Json<ImportGroupsPayload>,
) -> Result<ApiResponse<Vec<Team>>, AppError> {
    info!("Importing {} group records", payload.records.len());

    let teams: Vec<Team> = payload.records.into_iter().map(Team::from).collect();

    debug!(
        "Imported teams: {:?}",
        teams.iter().map(|team| &team.id).collect::<Vec<_>>()
    );
    Ok(ApiResponse::ok(teams))
}
