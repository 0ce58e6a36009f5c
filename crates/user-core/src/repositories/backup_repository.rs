//! Backup repository trait (port)

use async_trait::async_trait;
use crate::domain::BackupReport;
use crate::error::DomainError;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BackupRepository: Send + Sync {
    /// Copies the current data file to a timestamped backup and lists all backups.
    async fn create_backup(&self) -> Result<BackupReport, DomainError>;
}
