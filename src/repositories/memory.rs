//! 테스트용 인메모리 리포지토리
//!
//! MongoDB 구현과 같은 순서 규칙(삽입 순서)을 따르며, 호출 횟수를 세어
//! "조회/저장이 일어나지 않았음"을 검증할 수 있게 합니다.

use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;
use crate::domain::entities::teams::Team;
use crate::domain::entities::users::{User, UserKey};
use crate::domain::models::{Pagination, UserFilter};
use crate::errors::{AppError, AppResult};
use crate::repositories::{TeamStore, UserDirectory};

fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

fn matches_filter(user: &User, filter: &UserFilter) -> bool {
    if let Some(domain) = &filter.domain {
        if &user.domain != domain {
            return false;
        }
    }
    if let Some(gender) = &filter.gender {
        if &user.gender != gender {
            return false;
        }
    }
    if let Some(available) = filter.available {
        if user.available != available {
            return false;
        }
    }
    if let Some(name) = &filter.name {
        if !contains_ignore_case(&user.first_name, &name.first_name) {
            return false;
        }
        if let Some(last_name) = &name.last_name {
            if !contains_ignore_case(&user.last_name, last_name) {
                return false;
            }
        }
    }
    true
}

#[derive(Default)]
pub struct InMemoryUserDirectory {
    users: Mutex<Vec<User>>,
    queries: AtomicUsize,
    failing: bool,
}

impl InMemoryUserDirectory {
    /// 주어진 순서대로 내부 식별자를 부여해 저장합니다.
    pub fn with_users(users: Vec<User>) -> Self {
        let users = users
            .into_iter()
            .map(|mut user| {
                user.object_id = Some(ObjectId::new());
                user
            })
            .collect();

        Self {
            users: Mutex::new(users),
            ..Default::default()
        }
    }

    /// 모든 호출이 `DatabaseError`로 실패합니다.
    pub fn failing() -> Self {
        Self {
            failing: true,
            ..Default::default()
        }
    }

    pub fn query_count(&self) -> usize {
        self.queries.load(Ordering::SeqCst)
    }

    pub fn snapshot(&self) -> Vec<User> {
        self.users.lock().unwrap().clone()
    }

    fn touch(&self) -> AppResult<()> {
        self.queries.fetch_add(1, Ordering::SeqCst);
        if self.failing {
            return Err(AppError::DatabaseError("user directory unavailable".to_string()));
        }
        Ok(())
    }
}

#[async_trait]
impl UserDirectory for InMemoryUserDirectory {
    async fn find_available_by_emails(&self, emails: &[String]) -> AppResult<Vec<User>> {
        self.touch()?;
        let users = self.users.lock().unwrap();

        Ok(users
            .iter()
            .filter(|user| user.available && emails.contains(&user.email))
            .cloned()
            .collect())
    }

    async fn list(&self, filter: &UserFilter, pagination: Pagination) -> AppResult<Vec<User>> {
        self.touch()?;
        let users = self.users.lock().unwrap();

        Ok(users
            .iter()
            .filter(|user| matches_filter(user, filter))
            .skip(pagination.skip() as usize)
            .take(pagination.limit as usize)
            .cloned()
            .collect())
    }

    async fn find_by_key(&self, key: &UserKey) -> AppResult<Option<User>> {
        self.touch()?;
        let users = self.users.lock().unwrap();

        Ok(users.iter().find(|user| key.matches(user)).cloned())
    }

    async fn create(&self, mut user: User) -> AppResult<User> {
        self.touch()?;
        user.object_id = Some(ObjectId::new());
        self.users.lock().unwrap().push(user.clone());

        Ok(user)
    }

    async fn replace(&self, key: &UserKey, mut user: User) -> AppResult<Option<User>> {
        self.touch()?;
        let mut users = self.users.lock().unwrap();

        Ok(users.iter_mut().find(|existing| key.matches(existing)).map(|existing| {
            user.object_id = existing.object_id;
            *existing = user;
            existing.clone()
        }))
    }

    async fn delete(&self, key: &UserKey) -> AppResult<Option<User>> {
        self.touch()?;
        let mut users = self.users.lock().unwrap();

        Ok(users
            .iter()
            .position(|user| key.matches(user))
            .map(|index| users.remove(index)))
    }

    async fn count(&self) -> AppResult<u64> {
        self.touch()?;

        Ok(self.users.lock().unwrap().len() as u64)
    }

    async fn insert_many(&self, users: Vec<User>) -> AppResult<usize> {
        self.touch()?;
        let inserted = users.len();
        let mut stored = self.users.lock().unwrap();

        for mut user in users {
            user.object_id = Some(ObjectId::new());
            stored.push(user);
        }

        Ok(inserted)
    }
}

#[derive(Default)]
pub struct InMemoryTeamStore {
    teams: Mutex<Vec<Team>>,
    writes: AtomicUsize,
    failing: bool,
}

impl InMemoryTeamStore {
    pub fn failing() -> Self {
        Self {
            failing: true,
            ..Default::default()
        }
    }

    pub fn write_count(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }

    pub fn snapshot(&self) -> Vec<Team> {
        self.teams.lock().unwrap().clone()
    }
}

#[async_trait]
impl TeamStore for InMemoryTeamStore {
    async fn create(&self, mut team: Team) -> AppResult<Team> {
        self.writes.fetch_add(1, Ordering::SeqCst);
        if self.failing {
            return Err(AppError::DatabaseError("team store unavailable".to_string()));
        }

        team.object_id = Some(ObjectId::new());
        self.teams.lock().unwrap().push(team.clone());

        Ok(team)
    }

    async fn list_all(&self) -> AppResult<Vec<Team>> {
        if self.failing {
            return Err(AppError::DatabaseError("team store unavailable".to_string()));
        }

        Ok(self.teams.lock().unwrap().clone())
    }

    async fn find_by_id(&self, id: &str) -> AppResult<Option<Team>> {
        if self.failing {
            return Err(AppError::DatabaseError("team store unavailable".to_string()));
        }
        let Ok(object_id) = ObjectId::parse_str(id) else {
            return Ok(None);
        };

        Ok(self
            .teams
            .lock()
            .unwrap()
            .iter()
            .find(|team| team.object_id == Some(object_id))
            .cloned())
    }
}
