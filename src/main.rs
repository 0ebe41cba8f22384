//! 팀 디렉터리 서비스 메인 애플리케이션
//!
//! MongoDB 연결을 만들고 초기 데이터를 적재한 뒤 Actix-web HTTP 서버를
//! 구동합니다. 서버가 종료되면 MongoDB 연결을 정리합니다.

use std::io;
use std::path::Path;
use std::sync::Arc;
use actix_cors::Cors;
use actix_web::{middleware, web, App, HttpServer};
use actix_governor::{Governor, GovernorConfigBuilder};
use dotenv::dotenv;
use env_logger::Env;
use log::{error, info, warn};
use team_directory_service::config::{DatabaseConfig, RateLimitConfig, SeedConfig, ServerConfig};
use team_directory_service::db::Database;
use team_directory_service::db::seed::seed_users_if_empty;
use team_directory_service::repositories::{TeamRepository, TeamStore, UserDirectory, UserRepository};
use team_directory_service::routes::configure_all_routes;
use team_directory_service::services::{teams::TeamService, users::UserService};

#[actix_web::main]
async fn main() -> io::Result<()> {
    // 환경 설정 및 로깅 초기화
    load_env_file();
    init_logging();

    info!("🚀 팀 디렉터리 서비스 시작중...");

    info!("📡 데이터베이스 연결 중...");
    let database = Database::connect(&DatabaseConfig::uri(), &DatabaseConfig::database_name())
        .await
        .map_err(|e| io::Error::other(format!("데이터베이스 연결 실패: {}", e)))?;

    let user_repo = UserRepository::new(&database);
    if let Err(e) = user_repo.create_indexes().await {
        warn!("⚠️ users 인덱스 생성 실패: {}", e);
    }

    let user_directory: Arc<dyn UserDirectory> = Arc::new(user_repo);
    let team_store: Arc<dyn TeamStore> = Arc::new(TeamRepository::new(&database));

    // 초기 사용자 데이터 적재 (컬렉션이 비어 있을 때만)
    let seed_path = SeedConfig::file_path();
    if let Err(e) = seed_users_if_empty(user_directory.as_ref(), Path::new(&seed_path)).await {
        error!("❌ 시드 데이터 적재 실패: {}", e);
    }

    let user_service = Arc::new(UserService::new(user_directory.clone()));
    let team_service = Arc::new(TeamService::new(user_directory, team_store));

    let result = start_http_server(user_service, team_service).await;

    database.shutdown().await;
    result
}

/// HTTP 서버를 구성하고 실행합니다
///
/// Rate Limiting, CORS, 로깅, 경로 정규화 미들웨어를 포함합니다.
async fn start_http_server(user_service: Arc<UserService>, team_service: Arc<TeamService>) -> io::Result<()> {
    let bind_address = ServerConfig::bind_address();

    info!("🌐 서버가 http://{} 에서 실행중입니다", bind_address);
    info!("📍 Health check: http://{}/health", bind_address);

    let rate_limit_config = RateLimitConfig::from_env();
    let governor_conf = GovernorConfigBuilder::default()
        .requests_per_second(rate_limit_config.per_second)
        .burst_size(rate_limit_config.burst_size)
        .use_headers()
        .finish()
        .ok_or_else(|| io::Error::other("Rate Limiting 설정이 올바르지 않습니다"))?;

    info!(
        "🛡️ Rate Limiting 활성화: 초당 {}요청, 버스트 {}개",
        rate_limit_config.per_second,
        rate_limit_config.burst_size
    );

    let user_data = web::Data::from(user_service);
    let team_data = web::Data::from(team_service);

    HttpServer::new(move || {
        App::new()
            // Rate Limiting 미들웨어 (가장 먼저 적용)
            .wrap(Governor::new(&governor_conf))
            .wrap(Cors::permissive())
            .wrap(middleware::Logger::default())
            .wrap(middleware::NormalizePath::trim())
            .app_data(user_data.clone())
            .app_data(team_data.clone())
            .configure(configure_all_routes)
    })
        .bind(bind_address)?
        .workers(ServerConfig::workers())
        .run()
        .await
}

/// 환경별 설정 파일을 로드합니다
///
/// * `PROFILE=dev` - .env.dev 파일 로드
/// * `PROFILE=prod` - .env.prod 파일 로드
/// * 기타/미설정 - 기본 .env 파일 로드
fn load_env_file() {
    let profile = std::env::var("PROFILE").unwrap_or_default();

    match profile.as_str() {
        "prod" => {
            if let Err(e) = dotenv::from_filename(".env.prod") {
                eprintln!(".env.prod 파일 로드 실패: {}", e);
            }
        }
        "dev" => {
            if let Err(e) = dotenv::from_filename(".env.dev") {
                eprintln!(".env.dev 파일 로드 실패: {}", e);
            }
        }
        _ => {
            dotenv().ok();
        }
    }
}

/// 로깅 시스템을 초기화합니다
///
/// * `RUST_LOG` - 로깅 레벨 설정 (기본값: "info,actix_web=info")
fn init_logging() {
    env_logger::init_from_env(Env::default().default_filter_or("info,actix_web=info"));
}
