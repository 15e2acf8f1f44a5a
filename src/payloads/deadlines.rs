use crate::model::team::Team;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Deserialize, Serialize, Debug)]
pub struct DeadlineStatusPayload {
    pub deadline: Option<DateTime<Utc>>,
    pub now: Option<DateTime<Utc>>,
}

#[derive(Deserialize, Serialize, Debug)]
pub struct TeamDeadlinesPayload {
    pub teams: Vec<Team>,
    pub team_id: String,
    pub window_days: Option<u32>,
    pub now: Option<DateTime<Utc>>,
}
