//! 사용자 디렉터리 서비스 모듈

pub mod user_service;

pub use user_service::{UserService, USER_NOT_FOUND};
