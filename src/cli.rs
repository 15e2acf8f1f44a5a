use crate::engine::config::{EngineConfig, XpRules};
use clap::Parser;
use std::net::SocketAddr;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Server listen address and port (e.g., "127.0.0.1:3000")
    /// Can also be set using the SERVER_ADDRESS environment variable.
    /// Default value: 127.0.0.1:3000
    #[arg(long, env = "SERVER_ADDRESS", default_value = "127.0.0.1:3000")]
    pub server_address: SocketAddr,

    /// Team size used when a request does not specify one
    /// Can also be set using the DEFAULT_TEAM_SIZE environment variable.
    /// Default value: 4
    #[arg(
        long,
        env = "DEFAULT_TEAM_SIZE",
        default_value = "4",
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    pub default_team_size: u64,

    /// Days without activity (with pending work) before a student counts as stuck
    /// Can also be set using the STUCK_DAYS_THRESHOLD environment variable.
    /// Default value: 3
    #[arg(long, env = "STUCK_DAYS_THRESHOLD", default_value = "3")]
    pub stuck_days_threshold: u32,

    /// Look-ahead window in days for upcoming deadlines
    /// Can also be set using the UPCOMING_WINDOW_DAYS environment variable.
    /// Default value: 7
    #[arg(long, env = "UPCOMING_WINDOW_DAYS", default_value = "7")]
    pub upcoming_window_days: u32,

    /// XP awarded per completed task
    /// Can also be set using the XP_PER_TASK environment variable.
    /// Default value: 50
    #[arg(long, env = "XP_PER_TASK", default_value = "50")]
    pub xp_per_task: u32,

    /// XP awarded per completed phase
    /// Can also be set using the XP_PER_PHASE environment variable.
    /// Default value: 500
    #[arg(long, env = "XP_PER_PHASE", default_value = "500")]
    pub xp_per_phase: u32,

    /// Log level (e.g., "info")
    /// Can also be set using the RUST_LOG environment variable.
    /// Default value: info
    #[arg(long, env = "RUST_LOG", default_value = "info")]
    pub log_level: String,
}

impl From<&Args> for EngineConfig {
    fn from(args: &Args) -> Self {
        EngineConfig {
            xp: XpRules {
                per_task: args.xp_per_task,
                per_phase: args.xp_per_phase,
            },
            stuck_days_threshold: args.stuck_days_threshold,
            upcoming_window_days: args.upcoming_window_days,
            default_team_size: args.default_team_size as usize,
        }
    }
}
