//! # HTTP Request Handlers Module
//!
//! HTTP 요청을 처리하는 핸들러 함수들을 정의하는 모듈입니다.
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//!   Handlers (이 모듈) - HTTP 엔드포인트 처리         ← Web Layer
//! ├─────────────────────────────────────────────┤
//!   Services - 팀 구성, 사용자 CRUD                 ← Service Layer
//! ├─────────────────────────────────────────────┤
//!   Repositories - MongoDB 접근                    ← Repository Layer
//! └─────────────────────────────────────────────┘
//! ```
//!
//! 핸들러는 `Result<HttpResponse, AppError>`를 반환하고, 에러는
//! [`AppError`]의 `ResponseError` 구현이 `{ "error": message }`로 변환합니다.
//! 본문/쿼리 추출 실패도 같은 형식의 400 응답이 되도록 [`json_config`],
//! [`query_config`]를 등록합니다.

use actix_web::{error, web, HttpRequest};
use crate::errors::AppError;

pub mod users;
pub mod teams;

/// JSON 본문 추출 설정
///
/// 잘못된 JSON, 누락/알 수 없는 필드, 타입 불일치를 400 `ValidationError`로
/// 변환합니다.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(json_error_handler)
}

/// 쿼리 문자열 추출 설정
pub fn query_config() -> web::QueryConfig {
    web::QueryConfig::default().error_handler(query_error_handler)
}

fn json_error_handler(err: error::JsonPayloadError, req: &HttpRequest) -> actix_web::Error {
    log::debug!("JSON 본문 파싱 실패 ({}): {}", req.path(), err);
    AppError::ValidationError(format!("Invalid request body: {}", err)).into()
}

fn query_error_handler(err: error::QueryPayloadError, req: &HttpRequest) -> actix_web::Error {
    log::debug!("쿼리 파싱 실패 ({}): {}", req.path(), err);
    AppError::ValidationError(format!("Invalid query string: {}", err)).into()
}
