use super::deserialize_id;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    #[serde(deserialize_with = "deserialize_id", alias = "employeeId", alias = "_id")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub department: Option<String>,
    #[serde(default)]
    pub position: Option<String>,
    #[serde(default, alias = "teamLeader")]
    pub team_leader: Option<String>,
    #[serde(default)]
    pub avatar: Option<String>,
}
