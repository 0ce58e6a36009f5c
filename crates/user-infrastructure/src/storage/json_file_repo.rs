// ============================================================================
// User Infrastructure - JSON File User Repository
// File: crates/user-infrastructure/src/storage/json_file_repo.rs
// ============================================================================

use async_trait::async_trait;
use std::io::ErrorKind;
use std::path::PathBuf;
use tracing::{debug, error, warn};

use user_core::domain::User;
use user_core::error::DomainError;
use user_core::repositories::{LoadOutcome, UserRepository};

/// Persists the whole user array as one pretty-printed JSON document.
///
/// Writes overwrite the file in place and are not atomic: a crash mid-write can
/// leave a truncated file, which the next load reports as `Recovered`.
pub struct JsonFileUserRepository {
    path: PathBuf,
}

impl JsonFileUserRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl UserRepository for JsonFileUserRepository {
    async fn load(&self) -> Result<LoadOutcome, DomainError> {
        let bytes = match tokio::fs::read(&self.path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!("Data file {} not found", self.path.display());
                return Ok(LoadOutcome::Missing);
            }
            Err(e) => {
                error!("Failed to read {}: {}", self.path.display(), e);
                return Err(e.into());
            }
        };

        match serde_json::from_slice::<Vec<User>>(&bytes) {
            Ok(users) => Ok(LoadOutcome::Loaded(users)),
            Err(e) => {
                warn!("Ignoring malformed data file {}: {}", self.path.display(), e);
                Ok(LoadOutcome::Recovered {
                    reason: e.to_string(),
                })
            }
        }
    }

    async fn save(&self, users: &[User]) -> Result<(), DomainError> {
        let body = serde_json::to_vec_pretty(users)?;

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent).await?;
        }

        tokio::fs::write(&self.path, body).await.map_err(|e| {
            error!("Failed to write {}: {}", self.path.display(), e);
            DomainError::from(e)
        })?;

        debug!("Saved {} users to {}", users.len(), self.path.display());
        Ok(())
    }

    async fn exists(&self) -> bool {
        tokio::fs::try_exists(&self.path).await.unwrap_or(false)
    }
}
