//! Domain errors

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DomainError {
    #[error("User not found: {0}")]
    UserNotFound(i64),

    #[error("Username already exists: {0}")]
    UsernameAlreadyExists(String),

    #[error("Email already exists: {0}")]
    EmailAlreadyExists(String),

    #[error("Data file does not exist: {}", .0.display())]
    BackupSourceMissing(PathBuf),

    #[error("Storage error: {0}")]
    Storage(String),
}

impl DomainError {
    /// Uniqueness violations on username or email.
    pub fn is_conflict(&self) -> bool {
        matches!(
            self,
            DomainError::UsernameAlreadyExists(_) | DomainError::EmailAlreadyExists(_)
        )
    }
}

impl From<std::io::Error> for DomainError {
    fn from(err: std::io::Error) -> Self {
        DomainError::Storage(err.to_string())
    }
}

impl From<serde_json::Error> for DomainError {
    fn from(err: serde_json::Error) -> Self {
        DomainError::Storage(err.to_string())
    }
}
