//! # User Directory HTTP Handlers
//!
//! | 메서드 | 경로 | 설명 | 상태 코드 |
//! |--------|------|------|-----------|
//! | `GET` | `/api/users` | 필터/페이지 목록 | 200 |
//! | `GET` | `/api/users/{id}` | 단건 조회 | 200 / 404 |
//! | `POST` | `/api/users` | 생성 | 201 / 400 |
//! | `PUT` | `/api/users/{id}` | 전체 교체 | 200 / 400 / 404 |
//! | `DELETE` | `/api/users/{id}` | 삭제 (삭제된 사용자 반환) | 200 / 404 |
//!
//! `{id}`는 논리 식별자(정수) 또는 내부 식별자(24자리 16진수)입니다.

use actix_web::{delete, get, post, put, web, HttpResponse};
use crate::domain::dto::users::{UserListQuery, UserPayload, UserResponse};
use crate::errors::AppError;
use crate::services::users::UserService;

#[get("")]
pub async fn list_users(
    service: web::Data<UserService>,
    query: web::Query<UserListQuery>,
) -> Result<HttpResponse, AppError> {
    let users = service.list_users(&query).await?;
    let body: Vec<UserResponse> = users.into_iter().map(UserResponse::from).collect();

    Ok(HttpResponse::Ok().json(body))
}

#[get("/{user_id}")]
pub async fn get_user(
    service: web::Data<UserService>,
    user_id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let user = service.get_user(&user_id).await?;

    Ok(HttpResponse::Ok().json(UserResponse::from(user)))
}

#[post("")]
pub async fn create_user(
    service: web::Data<UserService>,
    payload: web::Json<UserPayload>,
) -> Result<HttpResponse, AppError> {
    let user = service.create_user(payload.into_inner()).await?;

    Ok(HttpResponse::Created().json(UserResponse::from(user)))
}

#[put("/{user_id}")]
pub async fn update_user(
    service: web::Data<UserService>,
    user_id: web::Path<String>,
    payload: web::Json<UserPayload>,
) -> Result<HttpResponse, AppError> {
    let user = service.update_user(&user_id, payload.into_inner()).await?;

    Ok(HttpResponse::Ok().json(UserResponse::from(user)))
}

#[delete("/{user_id}")]
pub async fn delete_user(
    service: web::Data<UserService>,
    user_id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let user = service.delete_user(&user_id).await?;

    Ok(HttpResponse::Ok().json(UserResponse::from(user)))
}
