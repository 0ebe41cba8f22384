//! # 사용자 디렉터리 서비스
//!
//! 사용자 CRUD와 필터 목록 조회를 담당합니다. 경로 파라미터 `{id}`는
//! [`UserKey`]로 해석되며, 해석할 수 없는 값은 존재하지 않는 사용자와 같이
//! 404로 처리합니다.

use std::sync::Arc;
use log::info;
use validator::Validate;
use crate::{
    domain::{
        dto::users::{UserListQuery, UserPayload},
        entities::users::{User, UserKey},
    },
    errors::{AppError, AppResult},
    repositories::UserDirectory,
};

pub const USER_NOT_FOUND: &str = "User not found";

pub struct UserService {
    users: Arc<dyn UserDirectory>,
}

impl UserService {
    pub fn new(users: Arc<dyn UserDirectory>) -> Self {
        Self { users }
    }

    fn resolve_key(id: &str) -> AppResult<UserKey> {
        UserKey::parse(id).ok_or_else(|| AppError::NotFound(USER_NOT_FOUND.to_string()))
    }

    fn not_found() -> AppError {
        AppError::NotFound(USER_NOT_FOUND.to_string())
    }

    pub async fn list_users(&self, query: &UserListQuery) -> AppResult<Vec<User>> {
        self.users.list(&query.filter(), query.pagination()).await
    }

    pub async fn get_user(&self, id: &str) -> AppResult<User> {
        let key = Self::resolve_key(id)?;

        self.users
            .find_by_key(&key)
            .await?
            .ok_or_else(Self::not_found)
    }

    pub async fn create_user(&self, payload: UserPayload) -> AppResult<User> {
        payload.validate()?;

        let created = self.users.create(User::from(payload)).await?;
        info!("👤 사용자 생성: id={}, email={}", created.id, created.email);

        Ok(created)
    }

    /// 전체 필드를 교체하고 교체 후 상태를 반환합니다.
    pub async fn update_user(&self, id: &str, payload: UserPayload) -> AppResult<User> {
        let key = Self::resolve_key(id)?;
        payload.validate()?;

        let updated = self
            .users
            .replace(&key, User::from(payload))
            .await?
            .ok_or_else(Self::not_found)?;
        info!("👤 사용자 수정: id={}", updated.id);

        Ok(updated)
    }

    /// 삭제된 사용자를 반환합니다.
    pub async fn delete_user(&self, id: &str) -> AppResult<User> {
        let key = Self::resolve_key(id)?;

        let deleted = self.users.delete(&key).await?.ok_or_else(Self::not_found)?;
        info!("👤 사용자 삭제: id={}", deleted.id);

        Ok(deleted)
    }
}
