//! 사용자 목록 조회 조건
//!
//! `GET /api/users`의 쿼리 파라미터를 해석한 결과입니다. 리포지토리는 이
//! 값을 MongoDB 필터로 변환해서 사용합니다.

use mongodb::bson::{doc, Document};

pub const DEFAULT_PAGE: u64 = 1;
pub const DEFAULT_LIMIT: u64 = 20;

/// 디렉터리 스캔 순서: 내부 식별자(`_id`) 오름차순, 즉 삽입 순서
///
/// 팀 구성의 "도메인별 첫 번째 사용자"와 목록 페이지 순서가 모두 이 정렬을
/// 따릅니다.
pub fn scan_order() -> Document {
    doc! { "_id": 1 }
}

/// 이름 검색 조건
///
/// 검색어를 공백으로 나눈 앞의 두 토큰만 사용합니다. 첫 번째 토큰은
/// `first_name`, 두 번째 토큰은 `last_name`에 대해 대소문자를 무시한
/// 부분 일치로 비교합니다. 두 번째 토큰이 없으면 성(last name)은 조건에서
/// 제외합니다.
#[derive(Debug, Clone, PartialEq)]
pub struct NameSearch {
    pub first_name: String,
    pub last_name: Option<String>,
}

impl NameSearch {
    pub fn parse(search: &str) -> Option<Self> {
        let mut tokens = search.split_whitespace();
        let first_name = tokens.next()?.to_string();
        let last_name = tokens.next().map(str::to_string);

        Some(Self { first_name, last_name })
    }

    /// 토큰은 정규식 메타문자를 이스케이프하여 문자 그대로 비교합니다.
    fn to_conditions(&self) -> Vec<Document> {
        let mut conditions = vec![doc! {
            "first_name": { "$regex": regex::escape(&self.first_name), "$options": "i" }
        }];

        if let Some(last_name) = &self.last_name {
            conditions.push(doc! {
                "last_name": { "$regex": regex::escape(last_name), "$options": "i" }
            });
        }

        conditions
    }
}

/// 사용자 목록 필터
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UserFilter {
    pub domain: Option<String>,
    pub gender: Option<String>,
    pub available: Option<bool>,
    pub name: Option<NameSearch>,
}

impl UserFilter {
    /// 팀 구성 후보 조회 필터 (`email ∈ emails` 이고 `available == true`)
    pub fn available_by_emails(emails: &[String]) -> Document {
        doc! {
            "email": { "$in": emails.to_vec() },
            "available": true,
        }
    }

    pub fn to_document(&self) -> Document {
        let mut filter = Document::new();

        if let Some(domain) = &self.domain {
            filter.insert("domain", domain.as_str());
        }
        if let Some(gender) = &self.gender {
            filter.insert("gender", gender.as_str());
        }
        if let Some(available) = self.available {
            filter.insert("available", available);
        }
        if let Some(name) = &self.name {
            filter.insert("$and", name.to_conditions());
        }

        filter
    }
}

/// skip/limit 방식의 페이지 정보 (1부터 시작)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pagination {
    pub page: u64,
    pub limit: u64,
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            limit: DEFAULT_LIMIT,
        }
    }
}

impl Pagination {
    /// 0은 허용하지 않으며 기본값으로 대체합니다.
    pub fn new(page: u64, limit: u64) -> Self {
        Self {
            page: if page == 0 { DEFAULT_PAGE } else { page },
            limit: if limit == 0 { DEFAULT_LIMIT } else { limit },
        }
    }

    pub fn skip(&self) -> u64 {
        self.page.saturating_sub(1).saturating_mul(self.limit)
    }
}
