//! 사용자 데이터 액세스 계층
//!
//! 서비스 계층은 [`UserDirectory`] trait에만 의존하고, 실제 MongoDB 구현은
//! [`UserRepository`](user_repo::UserRepository)가 담당합니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use crate::repositories::users::{UserDirectory, user_repo::UserRepository};
//!
//! let directory: Arc<dyn UserDirectory> = Arc::new(UserRepository::new(&database));
//! let users = directory.find_available_by_emails(&emails).await?;
//! ```

use async_trait::async_trait;
use crate::domain::entities::users::{User, UserKey};
use crate::domain::models::{Pagination, UserFilter};
use crate::errors::AppResult;

pub mod user_repo;

/// 사용자 디렉터리 포트
///
/// 모든 목록 조회는 내부 식별자(`_id`) 오름차순, 즉 삽입 순서로 결과를
/// 반환해야 합니다. 팀 구성의 "도메인별 첫 번째 사용자" 선택이 이 순서에
/// 의존합니다.
#[async_trait]
pub trait UserDirectory: Send + Sync {
    /// `email ∈ emails` 이고 `available == true`인 사용자
    async fn find_available_by_emails(&self, emails: &[String]) -> AppResult<Vec<User>>;

    async fn list(&self, filter: &UserFilter, pagination: Pagination) -> AppResult<Vec<User>>;

    async fn find_by_key(&self, key: &UserKey) -> AppResult<Option<User>>;

    /// 저장 후 내부 식별자가 채워진 사용자를 반환합니다.
    async fn create(&self, user: User) -> AppResult<User>;

    /// 전체 필드를 교체하고 교체 후 상태를 반환합니다. 대상이 없으면 `None`.
    async fn replace(&self, key: &UserKey, user: User) -> AppResult<Option<User>>;

    /// 삭제된 사용자를 반환합니다. 대상이 없으면 `None`.
    async fn delete(&self, key: &UserKey) -> AppResult<Option<User>>;

    async fn count(&self) -> AppResult<u64>;

    async fn insert_many(&self, users: Vec<User>) -> AppResult<usize>;
}
