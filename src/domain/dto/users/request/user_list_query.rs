//! 사용자 목록 조회 쿼리 DTO

use serde::Deserialize;
use crate::domain::models::{NameSearch, Pagination, UserFilter, DEFAULT_LIMIT, DEFAULT_PAGE};
use crate::utils::string_utils::{clean_optional_string, parse_positive_or, parse_strict_bool};

/// `GET /api/users`의 쿼리 파라미터
///
/// 모든 값을 문자열로 받아 관대하게 해석합니다. 잘못된 `page`/`limit`은
/// 기본값으로, `"true"`/`"false"` 이외의 `available`은 무시됩니다.
/// `domain`과 `gender`는 앞뒤 공백을 제거한 뒤 정확히 일치하는 값만 찾으며,
/// 공백뿐인 값은 필터로 쓰지 않습니다.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UserListQuery {
    pub page: Option<String>,
    pub limit: Option<String>,
    pub domain: Option<String>,
    pub available: Option<String>,
    pub gender: Option<String>,
    pub search: Option<String>,
}

impl UserListQuery {
    pub fn pagination(&self) -> Pagination {
        Pagination::new(
            parse_positive_or(self.page.as_deref(), DEFAULT_PAGE),
            parse_positive_or(self.limit.as_deref(), DEFAULT_LIMIT),
        )
    }

    pub fn filter(&self) -> UserFilter {
        UserFilter {
            domain: clean_optional_string(self.domain.clone()),
            gender: clean_optional_string(self.gender.clone()),
            available: parse_strict_bool(self.available.as_deref()),
            name: self.search.as_deref().and_then(NameSearch::parse),
        }
    }
}
