//! 팀 디렉터리 서비스 백엔드
//!
//! 사용자 디렉터리 CRUD와 "도메인별 한 명" 규칙의 팀 구성 API를 제공하는
//! actix-web + MongoDB 서비스입니다.
//!
//! # Features
//!
//! - **사용자 디렉터리**: 생성, 조회, 교체, 삭제, 필터/검색/페이지 목록
//! - **팀 구성**: 후보 이메일 중 사용 가능한 사용자를 도메인별로 한 명씩 선택
//! - **MongoDB**: `users`, `teams` 컬렉션 영구 저장
//! - **초기 데이터**: `users` 컬렉션이 비어 있을 때 JSON 시드 적재
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │   HTTP Routes   │ ← REST API 엔드포인트
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Handlers     │ ← 요청/응답 처리
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Services     │ ← 팀 구성 알고리즘, CRUD 규칙
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │  Repositories   │ ← UserDirectory / TeamStore 포트
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │     MongoDB     │ ← 저장소
//! └─────────────────┘
//! ```

pub mod config;
pub mod db;
pub mod domain;
pub mod repositories;
pub mod services;
pub mod utils;
pub mod routes;
pub mod handlers;
pub mod errors;
