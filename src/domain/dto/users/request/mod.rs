//! # 사용자 관련 요청 DTO 모듈
//!
//! 클라이언트로부터 받은 JSON 본문과 쿼리 문자열을 구조화된 Rust 타입으로
//! 변환합니다.
//!
//! 1. **구문 검증**: `serde` 역직렬화 (`deny_unknown_fields` 포함)
//! 2. **형식 검증**: `validator`를 통한 이메일, URL, 길이 규칙
//!
//! 검증 실패는 HTTP 400 `{ "error": message }` 응답으로 변환됩니다.

pub mod user_payload;
pub mod user_list_query;

pub use user_payload::UserPayload;
pub use user_list_query::UserListQuery;
