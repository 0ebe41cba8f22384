//! # 팀 구성 서비스
//!
//! 후보 이메일 목록에서 도메인별로 한 명씩 골라 팀을 만들고 저장합니다.
//!
//! ## 처리 흐름
//!
//! ```text
//! form_team(name, emails)
//!   ├─ UserDirectory::find_available_by_emails   (email ∈ emails, available = true)
//!   ├─ select_one_per_domain                      (도메인별 첫 번째 사용자)
//!   └─ TeamStore::create                          (스냅샷 저장)
//! ```
//!
//! 존재하지 않거나 `available = false`인 이메일은 조용히 제외됩니다.
//! 일치하는 사용자가 없어도 에러가 아니며, 멤버가 비어 있는 팀이 저장됩니다.
//!
//! 동시에 들어온 두 요청이 같은 사용자를 서로 다른 팀에 넣을 수 있습니다.
//! 팀은 독립적인 스냅샷이므로 사용자를 예약하지 않습니다.

use std::sync::Arc;
use log::{debug, info};
use crate::{
    domain::entities::teams::Team,
    errors::{AppError, AppResult},
    repositories::{TeamStore, UserDirectory},
    services::teams::selection::select_one_per_domain,
};

pub const TEAM_NOT_FOUND: &str = "Team not found";

pub struct TeamService {
    users: Arc<dyn UserDirectory>,
    teams: Arc<dyn TeamStore>,
}

impl TeamService {
    pub fn new(users: Arc<dyn UserDirectory>, teams: Arc<dyn TeamStore>) -> Self {
        Self { users, teams }
    }

    /// 팀을 구성하고 저장합니다.
    ///
    /// 팀 이름은 그대로 저장되며 중복 이름도 허용합니다.
    pub async fn form_team(&self, name: String, member_emails: Vec<String>) -> AppResult<Team> {
        let candidates = if member_emails.is_empty() {
            Vec::new()
        } else {
            self.users.find_available_by_emails(&member_emails).await?
        };

        debug!(
            "팀 '{}' 후보 {}명 중 사용 가능한 사용자 {}명",
            name,
            member_emails.len(),
            candidates.len()
        );

        let members = select_one_per_domain(candidates);
        let team = self.teams.create(Team::new(name, members)).await?;

        info!(
            "✅ 팀 생성: '{}' (id={}, 멤버 {}명)",
            team.name,
            team.id_string().unwrap_or_default(),
            team.members.len()
        );

        Ok(team)
    }

    pub async fn list_teams(&self) -> AppResult<Vec<Team>> {
        self.teams.list_all().await
    }

    pub async fn get_team(&self, id: &str) -> AppResult<Team> {
        self.teams
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(TEAM_NOT_FOUND.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use crate::domain::entities::users::User;
    use crate::repositories::memory::{InMemoryTeamStore, InMemoryUserDirectory};

    fn user(id: i64, email: &str, domain: &str, available: bool) -> User {
        User {
            id,
            first_name: format!("First{}", id),
            last_name: format!("Last{}", id),
            email: email.to_string(),
            gender: "Female".to_string(),
            avatar: format!("https://robohash.org/{}.png", id),
            domain: domain.to_string(),
            available,
            ..Default::default()
        }
    }

    fn emails(list: &[&str]) -> Vec<String> {
        list.iter().map(|e| e.to_string()).collect()
    }

    fn service(users: Vec<User>) -> (TeamService, Arc<InMemoryUserDirectory>, Arc<InMemoryTeamStore>) {
        let directory = Arc::new(InMemoryUserDirectory::with_users(users));
        let store = Arc::new(InMemoryTeamStore::default());
        let service = TeamService::new(directory.clone(), store.clone());
        (service, directory, store)
    }

    #[actix_web::test]
    async fn test_one_member_per_domain_first_seen() {
        let (service, _, store) = service(vec![
            user(1, "e1@x.io", "A", true),
            user(2, "e2@x.io", "A", true),
            user(3, "e3@x.io", "B", true),
        ]);

        let team = service
            .form_team("Alpha".to_string(), emails(&["e1@x.io", "e2@x.io", "e3@x.io"]))
            .await
            .unwrap();

        let member_emails: Vec<_> = team.members.iter().map(|m| m.email.as_str()).collect();
        assert_eq!(member_emails, vec!["e1@x.io", "e3@x.io"]);
        assert!(team.object_id.is_some());
        assert_eq!(store.snapshot(), vec![team]);
    }

    #[actix_web::test]
    async fn test_candidate_order_does_not_change_selection() {
        let (service, _, _) = service(vec![
            user(1, "e1@x.io", "A", true),
            user(2, "e2@x.io", "A", true),
        ]);

        let team = service
            .form_team("Beta".to_string(), emails(&["e2@x.io", "e1@x.io"]))
            .await
            .unwrap();

        assert_eq!(team.members.len(), 1);
        assert_eq!(team.members[0].email, "e1@x.io");
    }

    #[actix_web::test]
    async fn test_unavailable_candidate_yields_empty_team() {
        let (service, _, store) = service(vec![user(4, "e4@x.io", "C", false)]);

        let team = service.form_team("Gamma".to_string(), emails(&["e4@x.io"])).await.unwrap();

        assert!(team.members.is_empty());
        assert_eq!(store.write_count(), 1);
    }

    #[actix_web::test]
    async fn test_unknown_emails_are_ignored() {
        let (service, _, _) = service(vec![user(1, "e1@x.io", "A", true)]);

        let team = service
            .form_team("Delta".to_string(), emails(&["ghost@x.io", "e1@x.io"]))
            .await
            .unwrap();

        assert_eq!(team.members.len(), 1);
    }

    #[actix_web::test]
    async fn test_empty_emails_skip_directory_and_persist_empty_team() {
        let (service, directory, store) = service(vec![user(1, "e1@x.io", "A", true)]);

        let team = service.form_team("Empty".to_string(), Vec::new()).await.unwrap();

        assert!(team.members.is_empty());
        assert_eq!(directory.query_count(), 0);
        assert_eq!(store.write_count(), 1);
    }

    #[actix_web::test]
    async fn test_duplicate_team_names_are_allowed() {
        let (service, _, store) = service(vec![user(1, "e1@x.io", "A", true)]);

        service.form_team("Same".to_string(), emails(&["e1@x.io"])).await.unwrap();
        service.form_team("Same".to_string(), emails(&["e1@x.io"])).await.unwrap();

        assert_eq!(store.snapshot().len(), 2);
    }

    #[actix_web::test]
    async fn test_members_are_snapshots() {
        let (service, directory, _) = service(vec![user(1, "e1@x.io", "A", true)]);
        let team = service.form_team("Snap".to_string(), emails(&["e1@x.io"])).await.unwrap();

        let key = crate::domain::entities::users::UserKey::Logical(1);
        directory
            .replace(&key, user(1, "e1@x.io", "Z", false))
            .await
            .unwrap();

        let stored = service.get_team(&team.id_string().unwrap()).await.unwrap();
        assert_eq!(stored.members[0].domain, "A");
        assert!(stored.members[0].available);
    }

    #[actix_web::test]
    async fn test_domain_uniqueness_across_mixed_pool() {
        let domains = ["Sales", "IT", "Sales", "Finance", "IT", "Marketing", "Finance"];
        let users: Vec<User> = domains
            .iter()
            .enumerate()
            .map(|(i, d)| user(i as i64, &format!("u{}@x.io", i), d, i % 3 != 2))
            .collect();
        let all_emails: Vec<String> = users.iter().map(|u| u.email.clone()).collect();
        let (service, _, _) = service(users);

        let team = service.form_team("Mixed".to_string(), all_emails).await.unwrap();
        let unique: HashSet<_> = team.members.iter().map(|m| m.domain.clone()).collect();

        assert_eq!(unique.len(), team.members.len());
        assert!(team.members.iter().all(|m| m.available));
    }

    #[actix_web::test]
    async fn test_persistence_failure_surfaces() {
        let directory = Arc::new(InMemoryUserDirectory::with_users(vec![user(1, "e1@x.io", "A", true)]));
        let service = TeamService::new(directory, Arc::new(InMemoryTeamStore::failing()));

        let err = service.form_team("Broken".to_string(), emails(&["e1@x.io"])).await.unwrap_err();

        assert!(matches!(err, AppError::DatabaseError(_)));
    }

    #[actix_web::test]
    async fn test_get_team_not_found() {
        let (service, _, _) = service(Vec::new());

        let err = service.get_team("65f000000000000000000000").await.unwrap_err();
        assert!(matches!(err, AppError::NotFound(ref msg) if msg == TEAM_NOT_FOUND));

        assert!(service.get_team("garbage").await.is_err());
    }
}
