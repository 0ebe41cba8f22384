use serde::{Deserialize, Serialize};
use crate::domain::entities::users::User;

/// 사용자 응답 본문
///
/// 내부 식별자 `_id`는 16진수 문자열로 내보냅니다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserResponse {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub object_id: Option<String>,
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub gender: String,
    pub avatar: String,
    pub domain: String,
    pub available: bool,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        let object_id = user.id_string();
        let User {
            id,
            first_name,
            last_name,
            email,
            gender,
            avatar,
            domain,
            available,
            ..
        } = user;

        Self {
            object_id,
            id,
            first_name,
            last_name,
            email,
            gender,
            avatar,
            domain,
            available,
        }
    }
}
