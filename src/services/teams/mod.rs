//! 팀 구성 서비스 모듈
//!
//! - [`selection`] - 도메인별 첫 번째 사용자 선택 알고리즘
//! - [`team_service`] - 디렉터리 조회, 선택, 저장을 묶는 서비스

pub mod selection;
pub mod team_service;

pub use team_service::{TeamService, TEAM_NOT_FOUND};
