//! # Data Transfer Objects (DTO) Module
//!
//! API 경계에서 데이터를 전송하기 위한 객체들을 정의하는 모듈입니다.
//! 엔티티와 DTO를 분리하여 MongoDB 내부 표현(`ObjectId` 등)이
//! HTTP 응답에 그대로 노출되지 않도록 합니다.
//!
//! ```text
//! dto/
//! ├── users/
//! │   ├── request/    # UserPayload, UserListQuery
//! │   └── response/   # UserResponse
//! └── teams/
//!     ├── request.rs  # FormTeamRequest
//!     └── response.rs # TeamResponse
//! ```

pub mod users;
pub mod teams;

pub use users::{UserListQuery, UserPayload, UserResponse};
pub use teams::{FormTeamRequest, TeamResponse};
