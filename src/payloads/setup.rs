use crate::model::records::GroupRecord;
use crate::model::student::Student;
use crate::model::team::Team;
use serde::{Deserialize, Serialize};

#[derive(Deserialize, Serialize, Debug)]
pub struct FormTeamsPayload {
    pub roster: Vec<Student>,
    pub team_size: Option<i64>,
}

#[derive(Deserialize, Serialize, Debug)]
pub struct AssignProjectPayload {
    pub teams: Vec<Team>,
    pub topic: String,
}

#[derive(Deserialize, Serialize, Debug)]
pub struct ImportGroupsPayload {
    pub records: Vec<GroupRecord>,
}
