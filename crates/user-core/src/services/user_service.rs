//! User service: owns the in-memory record sequence and persists it after every mutation.
//!
//! A single `RwLock` serializes writers, so the uniqueness check and the write that
//! follows it can never interleave with another mutation.

use std::sync::Arc;
use tokio::sync::{RwLock, RwLockReadGuard};
use tracing::{debug, info, warn};

use crate::domain::{User, UserInput, UserPage, UserStats};
use crate::error::DomainError;
use crate::repositories::{LoadOutcome, UserRepository};
use crate::services::query;

/// `max(id) + 1`, or `1` for an empty sequence. Fails once `i64::MAX` is taken.
pub fn next_id(users: &[User]) -> Result<i64, DomainError> {
    match users.iter().map(|u| u.id).max() {
        None => Ok(1),
        Some(max) => max
            .checked_add(1)
            .ok_or_else(|| DomainError::Storage("id space exhausted".to_string())),
    }
}

pub struct UserService {
    repo: Arc<dyn UserRepository>,
    users: RwLock<Vec<User>>,
    recovered: bool,
}

impl UserService {
    /// Reads the persisted snapshot once. A corrupt file yields an empty store and
    /// is remembered so health checks can report it.
    pub async fn load(repo: Arc<dyn UserRepository>) -> Result<Self, DomainError> {
        let outcome = repo.load().await?;
        let recovered = outcome.is_recovered();

        match &outcome {
            LoadOutcome::Missing => info!("No data file yet, starting with an empty store"),
            LoadOutcome::Loaded(users) => info!("Loaded {} users", users.len()),
            LoadOutcome::Recovered { reason } => {
                warn!("Data file is malformed, starting with an empty store: {}", reason)
            }
        }

        Ok(Self {
            repo,
            users: RwLock::new(outcome.into_users()),
            recovered,
        })
    }

    pub fn recovered_from_corrupt(&self) -> bool {
        self.recovered
    }

    pub async fn data_file_exists(&self) -> bool {
        self.repo.exists().await
    }

    pub async fn count(&self) -> usize {
        self.users.read().await.len()
    }

    /// Holds off writers for as long as the guard lives.
    pub async fn read_guard(&self) -> RwLockReadGuard<'_, Vec<User>> {
        self.users.read().await
    }

    pub async fn list(&self, skip: usize, limit: usize, search: Option<&str>) -> UserPage {
        let users = self.users.read().await;
        query::paginate(&users, skip, limit, search)
    }

    pub async fn get(&self, id: i64) -> Result<User, DomainError> {
        let users = self.users.read().await;
        query::find_by_id(&users, id)
            .cloned()
            .ok_or(DomainError::UserNotFound(id))
    }

    pub async fn search(&self, keyword: &str) -> Vec<User> {
        let users = self.users.read().await;
        query::filter_by_keyword(&users, keyword)
            .into_iter()
            .cloned()
            .collect()
    }

    pub async fn list_active(&self) -> Vec<User> {
        query::active_users(&self.users.read().await)
    }

    pub async fn stats(&self) -> UserStats {
        query::compute_stats(&self.users.read().await)
    }

    pub async fn create(&self, input: UserInput) -> Result<User, DomainError> {
        let mut users = self.users.write().await;

        if users.iter().any(|u| u.username == input.username) {
            warn!("Create rejected: username already exists: {}", input.username);
            return Err(DomainError::UsernameAlreadyExists(input.username));
        }
        if users.iter().any(|u| u.email == input.email) {
            warn!("Create rejected: email already exists: {}", input.email);
            return Err(DomainError::EmailAlreadyExists(input.email));
        }

        let user = User::from_input(next_id(&users)?, input);
        let mut next = users.clone();
        next.push(user.clone());

        self.repo.save(&next).await?;
        *users = next;

        info!("Created user {} ({})", user.id, user.username);
        Ok(user)
    }

    /// Full replace: the id is kept, every other field comes from `input`.
    pub async fn update(&self, id: i64, input: UserInput) -> Result<User, DomainError> {
        let mut users = self.users.write().await;

        let position = users
            .iter()
            .position(|u| u.id == id)
            .ok_or(DomainError::UserNotFound(id))?;

        if users.iter().any(|u| u.id != id && u.username == input.username) {
            warn!("Update of {} rejected: username taken: {}", id, input.username);
            return Err(DomainError::UsernameAlreadyExists(input.username));
        }
        if users.iter().any(|u| u.id != id && u.email == input.email) {
            warn!("Update of {} rejected: email taken: {}", id, input.email);
            return Err(DomainError::EmailAlreadyExists(input.email));
        }

        let user = User::from_input(id, input);
        let mut next = users.clone();
        next[position] = user.clone();

        self.repo.save(&next).await?;
        *users = next;

        info!("Updated user {}", id);
        Ok(user)
    }

    pub async fn delete(&self, id: i64) -> Result<User, DomainError> {
        let mut users = self.users.write().await;

        let position = users
            .iter()
            .position(|u| u.id == id)
            .ok_or(DomainError::UserNotFound(id))?;

        let mut next = users.clone();
        let removed = next.remove(position);

        self.repo.save(&next).await?;
        *users = next;

        debug!("{} users remain", users.len());
        info!("Deleted user {} ({})", removed.id, removed.username);
        Ok(removed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repositories::MockUserRepository;

    fn alice() -> UserInput {
        UserInput::new("alice", "a@x.com")
    }

    fn bob() -> UserInput {
        UserInput::new("bob", "b@y.com")
    }

    async fn service(existing: Vec<User>, saves: usize) -> UserService {
        let mut repo = MockUserRepository::new();
        repo.expect_load()
            .times(1)
            .returning(move || Ok(LoadOutcome::Loaded(existing.clone())));
        repo.expect_save().times(saves).returning(|_| Ok(()));
        UserService::load(Arc::new(repo)).await.unwrap()
    }

    #[test]
    fn test_next_id() {
        assert_eq!(next_id(&[]).unwrap(), 1);
        let users = vec![
            User::from_input(4, alice()),
            User::from_input(2, bob()),
        ];
        assert_eq!(next_id(&users).unwrap(), 5);
    }

    #[tokio::test]
    async fn test_create_after_max_id_fails_without_saving() {
        let svc = service(vec![User::from_input(i64::MAX, bob())], 0).await;

        let err = svc.create(alice()).await.unwrap_err();
        assert!(matches!(err, DomainError::Storage(ref msg) if msg == "id space exhausted"));
        assert_eq!(svc.count().await, 1);
    }

    #[tokio::test]
    async fn test_create_assigns_max_plus_one() {
        let svc = service(vec![User::from_input(7, bob())], 1).await;
        let created = svc.create(alice()).await.unwrap();
        assert_eq!(created.id, 8);
        assert_eq!(svc.count().await, 2);
    }

    #[tokio::test]
    async fn test_create_on_empty_store_starts_at_one() {
        let svc = service(Vec::new(), 1).await;
        assert_eq!(svc.create(alice()).await.unwrap().id, 1);
    }

    #[tokio::test]
    async fn test_duplicate_username_conflicts_and_leaves_store_unchanged() {
        let svc = service(Vec::new(), 1).await;
        svc.create(alice()).await.unwrap();

        let err = svc
            .create(UserInput::new("alice", "other@x.com"))
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::UsernameAlreadyExists(ref name) if name == "alice"));
        assert!(err.is_conflict());
        assert_eq!(svc.count().await, 1);
    }

    #[tokio::test]
    async fn test_duplicate_email_conflicts() {
        let svc = service(vec![User::from_input(1, alice())], 0).await;
        let err = svc
            .create(UserInput::new("alicia", "a@x.com"))
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::EmailAlreadyExists(_)));
    }

    #[tokio::test]
    async fn test_update_replaces_all_fields_and_keeps_id() {
        let existing = vec![User::from_input(
            1,
            alice().with_full_name("Alice").with_phone("123"),
        )];
        let svc = service(existing, 1).await;

        let input = UserInput::new("alice2", "a2@x.com").inactive();
        let updated = svc.update(1, input.clone()).await.unwrap();
        assert_eq!(updated, User::from_input(1, input));

        let fetched = svc.get(1).await.unwrap();
        assert_eq!(fetched.id, 1);
        assert_eq!(fetched.username, "alice2");
        assert_eq!(fetched.full_name, None);
        assert_eq!(fetched.phone, None);
        assert!(!fetched.is_active);
    }

    #[tokio::test]
    async fn test_update_may_keep_own_username_and_email() {
        let svc = service(vec![User::from_input(1, alice())], 1).await;
        let updated = svc.update(1, alice().with_phone("555")).await.unwrap();
        assert_eq!(updated.phone.as_deref(), Some("555"));
    }

    #[tokio::test]
    async fn test_update_conflicts_with_other_record() {
        let existing = vec![User::from_input(1, alice()), User::from_input(2, bob())];
        let svc = service(existing, 0).await;

        let err = svc
            .update(2, UserInput::new("alice", "b@y.com"))
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::UsernameAlreadyExists(_)));

        let err = svc
            .update(2, UserInput::new("bob", "a@x.com"))
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::EmailAlreadyExists(_)));
        assert_eq!(svc.get(2).await.unwrap().username, "bob");
    }

    #[tokio::test]
    async fn test_update_unknown_id() {
        let svc = service(Vec::new(), 0).await;
        let err = svc.update(42, alice()).await.unwrap_err();
        assert!(matches!(err, DomainError::UserNotFound(42)));
    }

    #[tokio::test]
    async fn test_delete_then_get_is_not_found() {
        let existing = vec![User::from_input(1, alice()), User::from_input(2, bob())];
        let svc = service(existing, 1).await;

        let removed = svc.delete(1).await.unwrap();
        assert_eq!(removed.username, "alice");
        assert_eq!(svc.count().await, 1);
        assert!(matches!(svc.get(1).await, Err(DomainError::UserNotFound(1))));
        assert!(matches!(svc.delete(1).await, Err(DomainError::UserNotFound(1))));
    }

    #[tokio::test]
    async fn test_failed_save_leaves_memory_untouched() {
        let mut repo = MockUserRepository::new();
        repo.expect_load()
            .returning(|| Ok(LoadOutcome::Loaded(Vec::new())));
        repo.expect_save()
            .returning(|_| Err(DomainError::Storage("disk full".to_string())));
        let svc = UserService::load(Arc::new(repo)).await.unwrap();

        let err = svc.create(alice()).await.unwrap_err();
        assert!(matches!(err, DomainError::Storage(_)));
        assert_eq!(svc.count().await, 0);
    }

    #[tokio::test]
    async fn test_recovered_load_starts_empty_and_is_flagged() {
        let mut repo = MockUserRepository::new();
        repo.expect_load().returning(|| {
            Ok(LoadOutcome::Recovered {
                reason: "expected value at line 1 column 1".to_string(),
            })
        });
        let svc = UserService::load(Arc::new(repo)).await.unwrap();

        assert!(svc.recovered_from_corrupt());
        assert_eq!(svc.count().await, 0);
    }

    #[tokio::test]
    async fn test_queued_creates_with_same_username_admit_one() {
        let svc = Arc::new(service(Vec::new(), 1).await);

        // Park both writers behind a reader so they contend for the lock in order.
        let guard = svc.read_guard().await;
        let first = tokio::spawn({
            let svc = svc.clone();
            async move { svc.create(UserInput::new("dup", "one@x.com")).await }
        });
        tokio::task::yield_now().await;
        let second = tokio::spawn({
            let svc = svc.clone();
            async move { svc.create(UserInput::new("dup", "two@x.com")).await }
        });
        for _ in 0..3 {
            tokio::task::yield_now().await;
        }
        assert!(!first.is_finished());
        assert!(!second.is_finished());
        drop(guard);

        let first = first.await.unwrap();
        let second = second.await.unwrap();
        assert_eq!(first.unwrap().email, "one@x.com");
        assert!(matches!(second, Err(DomainError::UsernameAlreadyExists(_))));
        assert_eq!(svc.count().await, 1);
    }
}
