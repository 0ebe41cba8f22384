//! # Team Formation HTTP Handlers
//!
//! | 메서드 | 경로 | 설명 | 상태 코드 |
//! |--------|------|------|-----------|
//! | `POST` | `/api/team` | 팀 구성 | 201 / 400 |
//! | `GET` | `/api/team` | 전체 목록 | 200 |
//! | `GET` | `/api/team/{id}` | 단건 조회 | 200 / 404 |

use actix_web::{get, post, web, HttpResponse};
use crate::domain::dto::teams::{FormTeamRequest, TeamResponse};
use crate::errors::AppError;
use crate::services::teams::TeamService;

#[post("")]
pub async fn form_team(
    service: web::Data<TeamService>,
    payload: web::Json<FormTeamRequest>,
) -> Result<HttpResponse, AppError> {
    // 형식 검사는 디렉터리 조회보다 먼저 수행됩니다.
    let member_emails = payload.member_emails()?;
    let FormTeamRequest { name, .. } = payload.into_inner();

    let team = service.form_team(name, member_emails).await?;

    Ok(HttpResponse::Created().json(TeamResponse::from(team)))
}

#[get("")]
pub async fn list_teams(service: web::Data<TeamService>) -> Result<HttpResponse, AppError> {
    let teams = service.list_teams().await?;
    let body: Vec<TeamResponse> = teams.into_iter().map(TeamResponse::from).collect();

    Ok(HttpResponse::Ok().json(body))
}

#[get("/{team_id}")]
pub async fn get_team(
    service: web::Data<TeamService>,
    team_id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let team = service.get_team(&team_id).await?;

    Ok(HttpResponse::Ok().json(TeamResponse::from(team)))
}
