//! Team Entity Implementation

use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};
use crate::domain::entities::users::User;

/// 팀 엔티티
///
/// 팀 구성 시점의 사용자 문서를 그대로 복사해 `members`에 내장합니다.
/// 이후 사용자 정보가 바뀌어도 이미 만들어진 팀에는 반영되지 않습니다.
///
/// 한 팀 안에서 두 멤버가 같은 `domain`을 가질 수 없으며, 생성 이후에는
/// 수정되지 않습니다. 팀 이름의 중복은 허용합니다.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Team {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub object_id: Option<ObjectId>,
    pub name: String,
    pub members: Vec<User>,
}

impl Team {
    pub fn new(name: String, members: Vec<User>) -> Self {
        Self {
            object_id: None,
            name,
            members,
        }
    }

    /// ID 문자열로 변환
    pub fn id_string(&self) -> Option<String> {
        self.object_id.as_ref().map(|id| id.to_hex())
    }
}
