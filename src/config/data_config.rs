//! 데이터 및 서버 설정 관리 모듈
//!
//! 서버 바인딩, MongoDB 연결, 초기 데이터 시딩, Rate Limiting 설정을 관리합니다.

use std::env;

/// 서버 바인딩 설정
pub struct ServerConfig;

impl ServerConfig {
    /// 서버가 바인딩할 포트를 반환합니다.
    ///
    /// # Environment Variables
    ///
    /// - `PORT`: 커스텀 포트 설정 (기본값: 3001)
    pub fn port() -> u16 {
        env::var("PORT")
            .unwrap_or_else(|_| "3001".to_string())
            .parse()
            .unwrap_or(3001)
    }

    /// 서버가 바인딩할 호스트 주소를 반환합니다.
    ///
    /// # Environment Variables
    ///
    /// - `HOST`: 커스텀 호스트 설정 (기본값: "0.0.0.0")
    pub fn host() -> String {
        env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string())
    }

    /// 워커 스레드 수 (`WORKERS`, 기본값: 4)
    pub fn workers() -> usize {
        env::var("WORKERS")
            .ok()
            .and_then(|v| v.parse::<usize>().ok())
            .filter(|w| *w > 0)
            .unwrap_or(4)
    }

    pub fn bind_address() -> String {
        format!("{}:{}", Self::host(), Self::port())
    }
}

/// MongoDB 연결 설정
pub struct DatabaseConfig;

impl DatabaseConfig {
    /// MongoDB 연결 문자열
    ///
    /// `MONGO_DB`를 우선 사용하고, 없으면 `MONGODB_URI`를 확인합니다.
    /// 둘 다 없으면 로컬 MongoDB(`mongodb://localhost:27017`)에 연결합니다.
    pub fn uri() -> String {
        env::var("MONGO_DB")
            .or_else(|_| env::var("MONGODB_URI"))
            .unwrap_or_else(|_| "mongodb://localhost:27017".to_string())
    }

    /// 사용할 데이터베이스 이름 (`DATABASE_NAME`, 기본값: "heliverse")
    pub fn database_name() -> String {
        env::var("DATABASE_NAME").unwrap_or_else(|_| "heliverse".to_string())
    }
}

/// 초기 사용자 데이터 시딩 설정
pub struct SeedConfig;

impl SeedConfig {
    /// 시드 JSON 파일 경로 (`SEED_FILE`, 기본값: "./heliverse_mock_data.json")
    pub fn file_path() -> String {
        env::var("SEED_FILE").unwrap_or_else(|_| "./heliverse_mock_data.json".to_string())
    }
}

/// Rate Limiting 설정
#[derive(Debug, Clone, PartialEq)]
pub struct RateLimitConfig {
    pub per_second: u64,
    pub burst_size: u32,
}

impl Default for RateLimitConfig {
    fn default() -> Self {
        Self {
            per_second: 100,
            burst_size: 200,
        }
    }
}

impl RateLimitConfig {
    /// 환경변수에서 Rate Limiting 설정을 로드합니다
    ///
    /// * `RATE_LIMIT_PER_SECOND` - 초당 허용 요청 수 (기본값: 100)
    /// * `RATE_LIMIT_BURST_SIZE` - 버스트 허용량 (기본값: 200)
    ///
    /// 파싱에 실패하거나 0인 값은 기본값으로 대체됩니다.
    pub fn from_env() -> Self {
        let defaults = Self::default();

        let per_second = env::var("RATE_LIMIT_PER_SECOND")
            .ok()
            .map(|v| {
                v.parse::<u64>().unwrap_or_else(|e| {
                    log::error!("RATE_LIMIT_PER_SECOND 파싱 실패: {}. 기본값 {} 사용", e, defaults.per_second);
                    defaults.per_second
                })
            })
            .filter(|v| *v > 0)
            .unwrap_or(defaults.per_second);

        let burst_size = env::var("RATE_LIMIT_BURST_SIZE")
            .ok()
            .map(|v| {
                v.parse::<u32>().unwrap_or_else(|e| {
                    log::error!("RATE_LIMIT_BURST_SIZE 파싱 실패: {}. 기본값 {} 사용", e, defaults.burst_size);
                    defaults.burst_size
                })
            })
            .filter(|v| *v > 0)
            .unwrap_or(defaults.burst_size);

        let config = Self { per_second, burst_size };
        log::info!("Rate Limiting 설정 로드됨: {:?}", config);
        config
    }
}
