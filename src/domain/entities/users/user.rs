//! User Entity Implementation
//!
//! 사용자 디렉터리에 저장되는 사용자 문서와, 경로 파라미터로 전달된 사용자
//! 식별자를 해석하는 [`UserKey`]를 정의합니다.

use mongodb::bson::{doc, oid::ObjectId, Document};
use serde::{Deserialize, Serialize};

/// 사용자 엔티티
///
/// `users` 컬렉션의 문서 구조와 1:1로 대응합니다. 시드 파일이나 과거 데이터에
/// 일부 필드가 빠져 있어도 읽을 수 있도록 누락 필드는 기본값으로 채웁니다.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct User {
    /// MongoDB 내부 식별자
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub object_id: Option<ObjectId>,
    /// 논리 식별자 (시드 데이터의 `id`)
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    /// 팀 구성 시 후보 선택 키
    pub email: String,
    pub gender: String,
    pub avatar: String,
    /// 직무 도메인. 팀 내에서 중복될 수 없는 값입니다.
    pub domain: String,
    pub available: bool,
}

impl User {
    /// ID 문자열로 변환
    pub fn id_string(&self) -> Option<String> {
        self.object_id.as_ref().map(|id| id.to_hex())
    }

    /// 도메인 값이 비어 있으면 팀 구성 대상에서 제외됩니다.
    pub fn has_domain(&self) -> bool {
        !self.domain.trim().is_empty()
    }
}

/// 경로 파라미터 `{id}`가 가리키는 사용자 식별자
///
/// 24자리 16진수 문자열은 내부 식별자(`_id`)로, 정수는 논리 식별자(`id`)로
/// 해석합니다.
#[derive(Debug, Clone, PartialEq)]
pub enum UserKey {
    Internal(ObjectId),
    Logical(i64),
}

impl UserKey {
    /// 문자열을 해석합니다. 어느 형식에도 맞지 않으면 `None`을 반환합니다.
    pub fn parse(raw: &str) -> Option<Self> {
        let raw = raw.trim();

        if raw.len() == 24 {
            if let Ok(object_id) = ObjectId::parse_str(raw) {
                return Some(UserKey::Internal(object_id));
            }
        }

        raw.parse::<i64>().ok().map(UserKey::Logical)
    }

    /// MongoDB 조회 필터
    pub fn to_filter(&self) -> Document {
        match self {
            UserKey::Internal(object_id) => doc! { "_id": *object_id },
            UserKey::Logical(id) => doc! { "id": *id },
        }
    }

    pub fn matches(&self, user: &User) -> bool {
        match self {
            UserKey::Internal(object_id) => user.object_id.as_ref() == Some(object_id),
            UserKey::Logical(id) => user.id == *id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_key_parses_object_id() {
        let object_id = ObjectId::new();
        let key = UserKey::parse(&object_id.to_hex()).unwrap();

        assert_eq!(key, UserKey::Internal(object_id));
        assert_eq!(key.to_filter(), doc! { "_id": object_id });
    }

    #[test]
    fn test_user_key_parses_logical_id() {
        let key = UserKey::parse("42").unwrap();

        assert_eq!(key, UserKey::Logical(42));
        assert_eq!(key.to_filter(), doc! { "id": 42_i64 });
    }

    #[test]
    fn test_user_key_rejects_garbage() {
        assert!(UserKey::parse("not-an-id").is_none());
        assert!(UserKey::parse("").is_none());
    }

    #[test]
    fn test_user_deserializes_seed_record() {
        let json = r#"{
            "id": 1,
            "first_name": "Anet",
            "last_name": "Doe",
            "email": "adoe0@comcast.net",
            "gender": "Female",
            "avatar": "https://robohash.org/sintessequaerat.png?size=50x50&set=set1",
            "domain": "Sales",
            "available": false
        }"#;

        let user: User = serde_json::from_str(json).unwrap();

        assert_eq!(user.object_id, None);
        assert_eq!(user.id, 1);
        assert_eq!(user.domain, "Sales");
        assert!(!user.available);
    }

    #[test]
    fn test_missing_domain_is_absent() {
        let user: User = serde_json::from_str(r#"{"id": 7, "email": "x@y.z", "available": true}"#).unwrap();

        assert!(!user.has_domain());
    }
}
