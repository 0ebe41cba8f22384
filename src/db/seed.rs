//! 초기 사용자 데이터 시딩
//!
//! `users` 컬렉션이 비어 있을 때만 JSON 파일의 사용자 목록을 적재합니다.
//! 문서 수는 반드시 조회 결과를 기다린 뒤 판단합니다.

use std::path::Path;
use log::{info, warn};
use crate::domain::entities::users::User;
use crate::errors::{AppResult, ErrorContext};
use crate::repositories::UserDirectory;

/// 시딩 결과
#[derive(Debug, Clone, PartialEq)]
pub enum SeedOutcome {
    /// 파일의 사용자 N명을 적재함
    Seeded(usize),
    /// 컬렉션에 이미 문서가 있어 건너뜀
    AlreadyPopulated(u64),
    /// 시드 파일이 없어 건너뜀
    MissingFile,
}

/// 시드 파일을 읽어 사용자 목록으로 변환합니다.
pub fn load_seed_users(path: &Path) -> AppResult<Vec<User>> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("시드 파일 읽기 실패 ({})", path.display()))?;

    let users: Vec<User> = serde_json::from_str(&raw)
        .with_context(|| format!("시드 파일 파싱 실패 ({})", path.display()))?;

    Ok(users)
}

/// 컬렉션이 비어 있으면 시드 파일을 적재합니다.
pub async fn seed_users_if_empty(directory: &dyn UserDirectory, path: &Path) -> AppResult<SeedOutcome> {
    let count = directory.count().await?;

    if count > 0 {
        info!("📋 users 컬렉션에 {}건이 이미 존재하여 시딩을 건너뜁니다", count);
        return Ok(SeedOutcome::AlreadyPopulated(count));
    }

    if !path.exists() {
        warn!("⚠️ 시드 파일이 없습니다: {}", path.display());
        return Ok(SeedOutcome::MissingFile);
    }

    let users = load_seed_users(path)?;
    let inserted = directory.insert_many(users).await?;

    info!("✅ 시드 사용자 {}명 적재 완료", inserted);
    Ok(SeedOutcome::Seeded(inserted))
}
