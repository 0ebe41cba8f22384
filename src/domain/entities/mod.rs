//! # Domain Entities
//!
//! MongoDB 컬렉션에 저장되는 문서 구조를 정의합니다.
//!
//! | 엔티티 | 컬렉션 | 설명 |
//! |--------|--------|------|
//! | [`User`](users::User) | `users` | 사용자 디렉터리 레코드 |
//! | [`Team`](teams::Team) | `teams` | 사용자 스냅샷을 내장한 팀 |

pub mod users;
pub mod teams;

pub use users::{User, UserKey};
pub use teams::Team;
