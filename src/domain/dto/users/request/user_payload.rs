//! 사용자 생성/수정 요청 DTO
//!
//! `POST /api/users`와 `PUT /api/users/{id}`가 공유하는 요청 본문입니다.
//! 알 수 없는 필드, 누락된 필드, 타입이 맞지 않는 필드는 역직렬화 단계에서
//! 거부되고, 형식 검증은 `validator`가 담당합니다.

use serde::{Deserialize, Serialize};
use validator::Validate;
use crate::domain::entities::users::User;

/// 사용자 전체 필드를 담는 요청 본문
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct UserPayload {
    /// 논리 식별자
    pub id: i64,

    #[validate(length(min = 1, message = "first_name must not be empty"))]
    pub first_name: String,

    #[validate(length(min = 1, message = "last_name must not be empty"))]
    pub last_name: String,

    #[validate(email(message = "email must be a valid email address"))]
    pub email: String,

    #[validate(length(min = 1, message = "gender must not be empty"))]
    pub gender: String,

    #[validate(url(message = "avatar must be a valid URL"))]
    pub avatar: String,

    #[validate(length(min = 1, message = "domain must not be empty"))]
    pub domain: String,

    pub available: bool,
}

impl From<UserPayload> for User {
    fn from(payload: UserPayload) -> Self {
        let UserPayload {
            id,
            first_name,
            last_name,
            email,
            gender,
            avatar,
            domain,
            available,
        } = payload;

        Self {
            object_id: None,
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
