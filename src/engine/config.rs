use serde::{Deserialize, Serialize};

pub const DEFAULT_XP_PER_TASK: u32 = 50;
pub const DEFAULT_XP_PER_PHASE: u32 = 500;
pub const DEFAULT_STUCK_DAYS_THRESHOLD: u32 = 3;
pub const DEFAULT_UPCOMING_WINDOW_DAYS: u32 = 7;
pub const DEFAULT_TEAM_SIZE: usize = 4;

#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct XpRules {
    pub per_task: u32,
    pub per_phase: u32,
}

impl Default for XpRules {
    fn default() -> Self {
        XpRules {
            per_task: DEFAULT_XP_PER_TASK,
            per_phase: DEFAULT_XP_PER_PHASE,
        }
    }
}

/// Tunables handed to the engine by its host. Nothing in the engine reads these implicitly.
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngineConfig {
    pub xp: XpRules,
    pub stuck_days_threshold: u32,
    pub upcoming_window_days: u32,
    pub default_team_size: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        EngineConfig {
            xp: XpRules::default(),
            stuck_days_threshold: DEFAULT_STUCK_DAYS_THRESHOLD,
            upcoming_window_days: DEFAULT_UPCOMING_WINDOW_DAYS,
            default_team_size: DEFAULT_TEAM_SIZE,
        }
    }
}
