//! 비즈니스 로직을 담당하는 서비스 계층 모듈
//!
//! 서비스는 리포지토리 포트(`Arc<dyn ...>`)를 생성자로 주입받으며,
//! `main`에서 한 번 만들어 `web::Data`로 핸들러에 공유합니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use crate::services::{teams::TeamService, users::UserService};
//!
//! let user_service = Arc::new(UserService::new(user_directory.clone()));
//! let team_service = Arc::new(TeamService::new(user_directory, team_store));
//! ```

pub mod users;
pub mod teams;
