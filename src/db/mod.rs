//! Database Connection Management Module
//!
//! MongoDB 연결의 생명주기를 담당하는 모듈입니다. 연결은 `main`에서
//! [`Database::connect`]로 명시적으로 만들고, 리포지토리에 주입한 뒤
//! 서버 종료 시 [`Database::shutdown`]으로 정리합니다.
//!
//! # 기본 사용법
//!
//! ```rust,ignore
//! use crate::db::Database;
//! use crate::config::DatabaseConfig;
//!
//! let database = Database::connect(&DatabaseConfig::uri(), &DatabaseConfig::database_name()).await?;
//! let users = UserRepository::new(&database);
//! // ... 서버 실행 ...
//! database.shutdown().await;
//! ```

use mongodb::{Client, options::ClientOptions};
use log::info;
use crate::errors::AppResult;

pub mod seed;

/// MongoDB 데이터베이스 연결 래퍼
#[derive(Clone)]
pub struct Database {
    /// MongoDB 클라이언트 인스턴스
    client: Client,
    /// 사용할 데이터베이스 이름
    database_name: String,
}

impl Database {
    /// 새 MongoDB 데이터베이스 연결을 생성합니다.
    ///
    /// 클라이언트를 만든 뒤 `ping` 명령으로 연결 상태를 검증합니다.
    pub async fn connect(uri: &str, database_name: &str) -> AppResult<Self> {
        let mut client_options = ClientOptions::parse(uri).await?;

        // 애플리케이션 이름 설정 (서버 측 로그에서 식별용)
        client_options.app_name = Some("team_directory_service".to_string());

        let client = Client::with_options(client_options)?;

        client
            .database(database_name)
            .run_command(mongodb::bson::doc! { "ping": 1 })
            .await?;

        info!("✅ MongoDB 연결 성공: {}", database_name);

        Ok(Self {
            client,
            database_name: database_name.to_string(),
        })
    }

    /// MongoDB 데이터베이스 인스턴스를 반환합니다.
    pub fn get_database(&self) -> mongodb::Database {
        self.client.database(&self.database_name)
    }

    /// 진행 중인 작업이 끝나기를 기다린 뒤 연결 풀을 닫습니다.
    pub async fn shutdown(self) {
        info!("🔌 MongoDB 연결 종료: {}", self.database_name);
        self.client.shutdown().await;
    }
}
