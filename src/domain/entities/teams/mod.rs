//! Teams Entity Module
//!
//! 도메인별로 한 명씩 선택된 사용자 스냅샷의 묶음인 [`Team`]을 정의합니다.

pub mod team;

pub use team::Team;
