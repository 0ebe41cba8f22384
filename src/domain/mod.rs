//! # Domain Layer
//!
//! 엔티티(저장 문서), 값 객체(조회 조건), DTO(HTTP 계약)를 묶는 모듈입니다.
//!
//! ```text
//! domain/
//! ├── entities/   # User, Team (MongoDB 문서)
//! ├── models/     # UserFilter, Pagination, NameSearch
//! └── dto/        # 요청/응답 본문
//! ```

pub mod entities;
pub mod dto;
pub mod models;

pub use entities::{Team, User, UserKey};
pub use models::{NameSearch, Pagination, UserFilter};
