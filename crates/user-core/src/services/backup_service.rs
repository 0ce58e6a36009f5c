use std::sync::Arc;
use tracing::{error, info};

use crate::domain::BackupReport;
use crate::error::DomainError;
use crate::repositories::BackupRepository;
use crate::services::UserService;

pub struct BackupService {
    repo: Arc<dyn BackupRepository>,
}

impl BackupService {
    pub fn new(repo: Arc<dyn BackupRepository>) -> Self {
        Self { repo }
    }

    /// Copies the data file while writers are held off, so the copy is never torn.
    pub async fn create_backup(&self, users: &UserService) -> Result<BackupReport, DomainError> {
        let _guard = users.read_guard().await;

        match self.repo.create_backup().await {
            Ok(report) => {
                info!(
                    "Backup written to {} ({} backups on disk)",
                    report.backup_file, report.total_backups
                );
                Ok(report)
            }
            Err(e) => {
                error!("Backup failed: {}", e);
                Err(e)
            }
        }
    }
}
