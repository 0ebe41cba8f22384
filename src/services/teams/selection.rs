//! 도메인별 팀원 선택 알고리즘
//!
//! 후보 목록을 주어진 순서(디렉터리 스캔 순서, `_id` 오름차순)대로 훑으면서
//! 각 도메인에서 처음 만난 사용자 한 명만 남깁니다. 품질 점수 같은 기준은
//! 없으며, 결과 순서는 "도메인이 처음 등장한 순서"입니다.

use std::collections::HashSet;
use crate::domain::entities::users::User;

/// 도메인마다 최대 한 명을 선택합니다.
///
/// 도메인은 앞뒤 공백을 제거한 값으로 비교하며, 비어 있는 사용자는 건너뜁니다.
pub fn select_one_per_domain(candidates: Vec<User>) -> Vec<User> {
    let mut seen_domains = HashSet::new();

    candidates
        .into_iter()
        .filter(|user| user.has_domain() && seen_domains.insert(user.domain.trim().to_string()))
        .collect()
}
