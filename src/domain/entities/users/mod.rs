//! Users Entity Module
//!
//! 사용자 디렉터리의 핵심 엔티티를 정의하는 모듈입니다.
//!
//! # 사용 예제
//!
//! ```rust,ignore
//! use crate::domain::entities::users::{User, UserKey};
//!
//! let key = UserKey::parse("17").expect("논리 식별자");
//! let filter = key.to_filter(); // { "id": 17 }
//! ```

pub mod user;

pub use user::{User, UserKey};
