use serde::{Deserialize, Serialize};
use crate::domain::dto::users::UserResponse;
use crate::domain::entities::teams::Team;

/// 팀 응답 본문
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamResponse {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub object_id: Option<String>,
    pub name: String,
    pub members: Vec<UserResponse>,
}

impl From<Team> for TeamResponse {
    fn from(team: Team) -> Self {
        let object_id = team.id_string();

        Self {
            object_id,
            name: team.name,
            members: team.members.into_iter().map(UserResponse::from).collect(),
        }
    }
}
