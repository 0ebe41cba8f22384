//! # 팀 리포지토리 구현
//!
//! `teams` 컬렉션에 대한 MongoDB 기반 [`TeamStore`] 구현입니다.

use async_trait::async_trait;
use futures_util::TryStreamExt;
use mongodb::{
    bson::{doc, oid::ObjectId},
    Collection,
};
use crate::{
    db::Database,
    domain::{entities::teams::Team, models::scan_order},
    errors::{AppError, AppResult},
    repositories::teams::TeamStore,
};

pub const TEAMS_COLLECTION: &str = "teams";

#[derive(Clone)]
pub struct TeamRepository {
    collection: Collection<Team>,
}

impl TeamRepository {
    pub fn new(database: &Database) -> Self {
        Self {
            collection: database.get_database().collection::<Team>(TEAMS_COLLECTION),
        }
    }
}

#[async_trait]
impl TeamStore for TeamRepository {
    async fn create(&self, mut team: Team) -> AppResult<Team> {
        team.object_id = None;

        let result = self.collection.insert_one(&team).await?;

        team.object_id = Some(
            result
                .inserted_id
                .as_object_id()
                .ok_or_else(|| AppError::DatabaseError("inserted _id is not an ObjectId".to_string()))?,
        );

        Ok(team)
    }

    async fn list_all(&self) -> AppResult<Vec<Team>> {
        let cursor = self.collection.find(doc! {}).sort(scan_order()).await?;
        let teams: Vec<Team> = cursor.try_collect().await?;

        Ok(teams)
    }

    async fn find_by_id(&self, id: &str) -> AppResult<Option<Team>> {
        let Ok(object_id) = ObjectId::parse_str(id) else {
            return Ok(None);
        };

        let team = self.collection.find_one(doc! { "_id": object_id }).await?;

        Ok(team)
    }
}
