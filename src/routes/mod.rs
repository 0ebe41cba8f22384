//! API 라우트 설정 모듈
//!
//! 사용자 디렉터리, 팀 구성 라우트와 헬스체크 엔드포인트를 등록합니다.
//! 인증은 적용하지 않습니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use actix_web::{web, App};
//!
//! let app = App::new()
//!     .app_data(web::Data::from(user_service))
//!     .app_data(web::Data::from(team_service))
//!     .configure(configure_all_routes);
//! ```

use crate::handlers;
use actix_web::web;
use serde_json::json;

/// 모든 라우트를 설정합니다
///
/// JSON/쿼리 추출 에러 핸들러도 함께 등록하므로, 서비스(`web::Data`)만
/// 주입하면 테스트에서도 운영과 같은 구성을 사용할 수 있습니다.
pub fn configure_all_routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(handlers::json_config())
        .app_data(handlers::query_config());

    // Health check endpoint
    cfg.service(health_check);

    configure_user_routes(cfg);
    configure_team_routes(cfg);
}

/// 사용자 디렉터리 라우트
///
/// - `GET /api/users` - 목록 (page, limit, domain, available, gender, search)
/// - `GET /api/users/{id}` - 단건 조회
/// - `POST /api/users` - 생성
/// - `PUT /api/users/{id}` - 전체 교체
/// - `DELETE /api/users/{id}` - 삭제
///
/// ```bash
/// curl "http://localhost:3001/api/users?page=2&limit=5&domain=IT&available=true&search=anet%20doe"
/// ```
fn configure_user_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/users")
            .service(handlers::users::list_users)
            .service(handlers::users::create_user)
            .service(handlers::users::get_user)
            .service(handlers::users::update_user)
            .service(handlers::users::delete_user)
    );
}

/// 팀 구성 라우트
///
/// - `POST /api/team` - 팀 구성 (`{ "name": ..., "memberEmails": [...] }`)
/// - `GET /api/team` - 전체 팀 목록
/// - `GET /api/team/{id}` - 단건 조회
///
/// ```bash
/// curl -X POST http://localhost:3001/api/team \
///   -H "Content-Type: application/json" \
///   -d '{"name":"Alpha","memberEmails":["adoe0@comcast.net","hlindenbaum1@boston.com"]}'
/// ```
fn configure_team_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/team")
            .service(handlers::teams::form_team)
            .service(handlers::teams::list_teams)
            .service(handlers::teams::get_team)
    );
}

/// 서비스 상태를 확인하는 헬스체크 엔드포인트
///
/// ```bash
/// curl http://localhost:3001/health
/// ```
#[actix_web::get("/health")]
async fn health_check() -> actix_web::HttpResponse {
    actix_web::HttpResponse::Ok().json(json!({
        "status": "healthy",
        "service": "team_directory_service",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}
