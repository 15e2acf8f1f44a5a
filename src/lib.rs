use crate::cli::Args;
use crate::engine::config::EngineConfig;
use axum::Router;
use axum::routing::{get, post};
use tracing::info;

pub mod api;
pub mod cli;
pub mod engine;
pub mod errors;
pub mod model;
pub mod payloads;
pub mod response;

pub fn init_router(args: &Args) -> Router {
    let config = EngineConfig::from(args);
    info!("Initializing router with engine configuration: {:?}", config);
    init_router_internal(config)
}

pub fn init_test_router(config: EngineConfig) -> Router {
    init_router_internal(config)
}

fn init_router_internal(config: EngineConfig) -> Router {
    Router::new()
        .route("/config", get(api::setup::get_config))
        .nest("/setup", setup_routes())
        .nest("/progress", progress_routes())
        .nest("/deadlines", deadline_routes())
        .nest("/analytics", analytics_routes())
        .with_state(config)
}

fn setup_routes() -> Router<EngineConfig> {
    Router::new()
        .route("/form_teams", post(api::setup::form_teams))
        .route("/assign_project", post(api::setup::assign_project))
        .route("/import_groups", post(api::setup::import_groups))
}

fn progress_routes() -> Router<EngineConfig> {
    Router::new()
        .route("/toggle_task", post(api::progress::toggle_task))
        .route("/submit_evidence", post(api::progress::submit_evidence))
        .route(
            "/review_submission",
            post(api::progress::review_submission),
        )
        .route("/record_activity", post(api::progress::record_activity))
        .route("/leaderboard", post(api::progress::leaderboard))
}

fn deadline_routes() -> Router<EngineConfig> {
    Router::new()
        .route("/status", post(api::deadlines::get_deadline_status))
        .route("/upcoming", post(api::deadlines::get_upcoming_deadlines))
        .route("/overdue", post(api::deadlines::get_overdue_tasks))
}

fn analytics_routes() -> Router<EngineConfig> {
    Router::new()
        .route("/students", post(api::analytics::get_student_analytics))
        .route("/stuck", post(api::analytics::get_stuck_students))
        .route("/class", post(api::analytics::get_class_metrics))
        .route("/export", post(api::analytics::export_csv))
}
