//! # Domain Models
//!
//! 컬렉션에 저장되지 않는 도메인 값 객체들입니다.

pub mod user_query;

pub use user_query::{scan_order, NameSearch, Pagination, UserFilter, DEFAULT_LIMIT, DEFAULT_PAGE};
