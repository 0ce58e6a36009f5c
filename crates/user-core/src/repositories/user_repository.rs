//! User repository trait (port)

use async_trait::async_trait;
use crate::domain::User;
use crate::error::DomainError;

/// What a load from durable storage found.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadOutcome {
    /// Nothing persisted yet.
    Missing,
    Loaded(Vec<User>),
    /// Storage existed but could not be parsed; the store starts empty.
    Recovered { reason: String },
}

impl LoadOutcome {
    pub fn into_users(self) -> Vec<User> {
        match self {
            LoadOutcome::Loaded(users) => users,
            LoadOutcome::Missing | LoadOutcome::Recovered { .. } => Vec::new(),
        }
    }

    pub fn is_recovered(&self) -> bool {
        matches!(self, LoadOutcome::Recovered { .. })
    }
}

/// Whole-sequence persistence: every save overwrites the previous snapshot.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn load(&self) -> Result<LoadOutcome, DomainError>;
    async fn save(&self, users: &[User]) -> Result<(), DomainError>;
    async fn exists(&self) -> bool;
}
