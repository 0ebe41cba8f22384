//! 팀 구성 요청 DTO

use serde::{Deserialize, Serialize};
use serde_json::Value;
use crate::errors::{AppError, AppResult};

pub const INVALID_MEMBER_EMAILS: &str = "Invalid memberEmails format";

/// `POST /api/team` 요청 본문
///
/// `memberEmails`는 원시 JSON 값으로 받아 [`FormTeamRequest::member_emails`]에서
/// "문자열 배열"인지 검사합니다. 누락된 경우에도 같은 400 응답을 돌려줍니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FormTeamRequest {
    /// 팀 이름. 중복 여부는 검사하지 않습니다.
    pub name: String,

    #[serde(rename = "memberEmails", default)]
    pub member_emails: Value,
}

impl FormTeamRequest {
    /// 후보 이메일 목록을 꺼냅니다.
    ///
    /// 배열이 아니거나 문자열이 아닌 원소가 하나라도 있으면
    /// `ValidationError`를 반환합니다.
    pub fn member_emails(&self) -> AppResult<Vec<String>> {
        let invalid = || AppError::ValidationError(INVALID_MEMBER_EMAILS.to_string());

        self.member_emails
            .as_array()
            .ok_or_else(invalid)?
            .iter()
            .map(|email| email.as_str().map(str::to_string).ok_or_else(invalid))
            .collect()
    }
}
