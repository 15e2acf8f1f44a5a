use crate::model::team::Team;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Deserialize, Serialize, Debug)]
pub struct AnalyticsPayload {
    pub teams: Vec<Team>,
    pub days_threshold: Option<u32>,
    pub now: Option<DateTime<Utc>>,
}
