//! 팀 데이터 액세스 계층
//!
//! 팀은 생성 이후 수정/삭제되지 않으므로 포트에는 생성과 조회만 있습니다.

use async_trait::async_trait;
use crate::domain::entities::teams::Team;
use crate::errors::AppResult;

pub mod team_repo;

/// 팀 저장소 포트
#[async_trait]
pub trait TeamStore: Send + Sync {
    /// 저장 후 내부 식별자가 채워진 팀을 반환합니다.
    async fn create(&self, team: Team) -> AppResult<Team>;

    /// 내부 식별자 오름차순 전체 목록
    async fn list_all(&self) -> AppResult<Vec<Team>>;

    /// 잘못된 형식의 식별자는 `None`으로 취급합니다.
    async fn find_by_id(&self, id: &str) -> AppResult<Option<Team>>;
}
