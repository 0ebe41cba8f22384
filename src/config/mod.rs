//! # Configuration Module
//!
//! 환경 변수 기반의 설정값들을 중앙집중식으로 관리합니다.
//! 모든 값은 기본값을 가지므로 `.env` 파일 없이도 로컬 개발이 가능합니다.
//!
//! ## 환경 변수 설정 가이드
//!
//! ```bash
//! # 서버 설정
//! export HOST="0.0.0.0"
//! export PORT="3001"
//! export WORKERS="4"
//!
//! # MongoDB
//! export MONGO_DB="mongodb://localhost:27017"
//! export DATABASE_NAME="heliverse"
//!
//! # 초기 사용자 데이터 (users 컬렉션이 비어 있을 때만 적재)
//! export SEED_FILE="./heliverse_mock_data.json"
//!
//! # Rate Limiting
//! export RATE_LIMIT_PER_SECOND="100"
//! export RATE_LIMIT_BURST_SIZE="200"
//! ```

pub mod data_config;

pub use data_config::*;
