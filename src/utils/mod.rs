//! 공통 유틸리티 함수 모듈
//!
//! # Modules
//!
//! - [`string_utils`] - 쿼리 문자열 정리 및 관대한 숫자/불리언 파싱

pub mod string_utils;
