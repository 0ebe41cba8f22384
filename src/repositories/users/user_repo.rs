//! # 사용자 리포지토리 구현
//!
//! `users` 컬렉션에 대한 MongoDB 기반 [`UserDirectory`] 구현입니다.

use async_trait::async_trait;
use futures_util::TryStreamExt;
use mongodb::{
    bson::{doc, Document},
    options::{FindOneAndReplaceOptions, IndexOptions, ReturnDocument},
    Collection, IndexModel,
};
use crate::{
    db::Database,
    domain::{
        entities::users::{User, UserKey},
        models::{scan_order, Pagination, UserFilter},
    },
    errors::{AppError, AppResult},
    repositories::users::UserDirectory,
};

pub const USERS_COLLECTION: &str = "users";

/// 사용자 데이터 액세스 리포지토리
///
/// ## 인덱스
///
/// - `email` (조회 키, 유니크 아님)
/// - `domain` (목록 필터)
/// - `id` (논리 식별자)
///
/// 이메일 중복은 데이터 정책상 허용되므로 유니크 인덱스를 만들지 않습니다.
#[derive(Clone)]
pub struct UserRepository {
    collection: Collection<User>,
}

impl UserRepository {
    pub fn new(database: &Database) -> Self {
        Self {
            collection: database.get_database().collection::<User>(USERS_COLLECTION),
        }
    }

    /// 내부 식별자 오름차순 커서를 끝까지 읽습니다.
    async fn find_ordered(&self, filter: Document, pagination: Option<Pagination>) -> AppResult<Vec<User>> {
        let mut find = self.collection.find(filter).sort(scan_order());

        if let Some(pagination) = pagination {
            find = find
                .skip(pagination.skip())
                .limit(i64::try_from(pagination.limit).unwrap_or(i64::MAX));
        }

        let cursor = find.await?;
        let users: Vec<User> = cursor.try_collect().await?;

        Ok(users)
    }

    /// 데이터베이스 인덱스 생성
    ///
    /// 애플리케이션 초기화 시점에 한 번 실행합니다. 이미 같은 정의의 인덱스가
    /// 있으면 MongoDB가 무시합니다.
    pub async fn create_indexes(&self) -> AppResult<()> {
        let email_index = IndexModel::builder()
            .keys(doc! { "email": 1 })
            .options(IndexOptions::builder().name("email_asc".to_string()).build())
            .build();

        let domain_index = IndexModel::builder()
            .keys(doc! { "domain": 1 })
            .options(IndexOptions::builder().name("domain_asc".to_string()).build())
            .build();

        let logical_id_index = IndexModel::builder()
            .keys(doc! { "id": 1 })
            .options(IndexOptions::builder().name("logical_id_asc".to_string()).build())
            .build();

        self.collection
            .create_indexes([email_index, domain_index, logical_id_index])
            .await?;

        Ok(())
    }
}

#[async_trait]
impl UserDirectory for UserRepository {
    async fn find_available_by_emails(&self, emails: &[String]) -> AppResult<Vec<User>> {
        self.find_ordered(UserFilter::available_by_emails(emails), None).await
    }

    async fn list(&self, filter: &UserFilter, pagination: Pagination) -> AppResult<Vec<User>> {
        self.find_ordered(filter.to_document(), Some(pagination)).await
    }

    async fn find_by_key(&self, key: &UserKey) -> AppResult<Option<User>> {
        let user = self.collection.find_one(key.to_filter()).await?;

        Ok(user)
    }

    async fn create(&self, mut user: User) -> AppResult<User> {
        user.object_id = None;

        let result = self.collection.insert_one(&user).await?;

        user.object_id = Some(
            result
                .inserted_id
                .as_object_id()
                .ok_or_else(|| AppError::DatabaseError("inserted _id is not an ObjectId".to_string()))?,
        );

        Ok(user)
    }

    async fn replace(&self, key: &UserKey, mut user: User) -> AppResult<Option<User>> {
        user.object_id = None;

        let options = FindOneAndReplaceOptions::builder()
            .return_document(ReturnDocument::After)
            .build();

        let replaced = self
            .collection
            .find_one_and_replace(key.to_filter(), &user)
            .with_options(options)
            .await?;

        Ok(replaced)
    }

    async fn delete(&self, key: &UserKey) -> AppResult<Option<User>> {
        let deleted = self.collection.find_one_and_delete(key.to_filter()).await?;

        Ok(deleted)
    }

    async fn count(&self) -> AppResult<u64> {
        let count = self.collection.count_documents(doc! {}).await?;

        Ok(count)
    }

    async fn insert_many(&self, users: Vec<User>) -> AppResult<usize> {
        if users.is_empty() {
            return Ok(0);
        }

        let result = self.collection.insert_many(&users).await?;

        Ok(result.inserted_ids.len())
    }
}
