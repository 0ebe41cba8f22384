//! 데이터 액세스 계층을 담당하는 리포지토리 모듈
//!
//! 각 하위 모듈은 서비스가 의존하는 포트(trait)와 그 MongoDB 구현을 함께
//! 제공합니다. 테스트에서는 [`memory`] 모듈의 인메모리 구현으로 대체합니다.
//!
//! | 포트 | MongoDB 구현 | 컬렉션 |
//! |------|--------------|--------|
//! | [`UserDirectory`](users::UserDirectory) | [`UserRepository`](users::user_repo::UserRepository) | `users` |
//! | [`TeamStore`](teams::TeamStore) | [`TeamRepository`](teams::team_repo::TeamRepository) | `teams` |

pub mod users;
pub mod teams;

#[cfg(test)]
pub mod memory;

pub use users::{user_repo::UserRepository, UserDirectory};
pub use teams::{team_repo::TeamRepository, TeamStore};
