use anyhow::Context;
use axum::Router;
use clap::Parser;
use pbl_progress_engine::cli::Args;
use std::net::SocketAddr;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    init_tracing(&args.log_level)?;

    info!(
        "Starting progress engine service (xp {}/task, {}/phase; stuck after {} days)",
        args.xp_per_task, args.xp_per_phase, args.stuck_days_threshold
    );
    let router = pbl_progress_engine::init_router(&args);

    run(router, args.server_address)
        .await
        .context("Server failed to run")?;

    Ok(())
}

fn init_tracing(log_level: &str) -> anyhow::Result<()> {
    fmt().with_env_filter(EnvFilter::try_new(log_level)?).init();
    Ok(())
}

async fn run(router: Router, addr: SocketAddr) -> anyhow::Result<()> {
    info!("Listening on {}", addr);
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind to address {}", addr))?;
    axum::serve(listener, router.into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Axum server error")?;
    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Shutdown signal received"),
        Err(err) => warn!("Failed to listen for shutdown signal: {}", err),
    }
}
