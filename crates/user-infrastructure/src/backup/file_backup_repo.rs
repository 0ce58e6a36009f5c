// ============================================================================
// User Infrastructure - File Backup Repository
// File: crates/user-infrastructure/src/backup/file_backup_repo.rs
// ============================================================================

use async_trait::async_trait;
use chrono::{DateTime, Local};
use std::io::ErrorKind;
use std::path::PathBuf;
use tracing::{debug, error};

use user_core::domain::{BackupEntry, BackupReport};
use user_core::error::DomainError;
use user_core::repositories::BackupRepository;
use user_shared::constants::BACKUP_TIMESTAMP_FORMAT;

/// Copies the data file into `backup_dir` as `<prefix><YYYYMMDD_HHMMSS>.json`.
/// No retention policy: backups accumulate until removed by hand.
pub struct FileBackupRepository {
    data_file: PathBuf,
    backup_dir: PathBuf,
    prefix: String,
}

impl FileBackupRepository {
    pub fn new(
        data_file: impl Into<PathBuf>,
        backup_dir: impl Into<PathBuf>,
        prefix: impl Into<String>,
    ) -> Self {
        Self {
            data_file: data_file.into(),
            backup_dir: backup_dir.into(),
            prefix: prefix.into(),
        }
    }

    /// Every file in the backup directory carrying the prefix, newest first.
    pub async fn list_backups(&self) -> Result<Vec<BackupEntry>, DomainError> {
        let mut entries = Vec::new();
        let mut dir = tokio::fs::read_dir(&self.backup_dir).await?;

        while let Some(entry) = dir.next_entry().await? {
            let name = entry.file_name().to_string_lossy().into_owned();
            if !name.starts_with(&self.prefix) {
                continue;
            }

            let metadata = entry.metadata().await?;
            if !metadata.is_file() {
                continue;
            }

            // Not every filesystem records birth time.
            let created = metadata.created().or_else(|_| metadata.modified())?;

            entries.push(BackupEntry {
                name,
                size: metadata.len(),
                created: DateTime::<Local>::from(created),
            });
        }

        entries.sort_by(|a, b| b.created.cmp(&a.created).then_with(|| b.name.cmp(&a.name)));
        Ok(entries)
    }
}

#[async_trait]
impl BackupRepository for FileBackupRepository {
    async fn create_backup(&self) -> Result<BackupReport, DomainError> {
        if !tokio::fs::try_exists(&self.data_file).await.unwrap_or(false) {
            error!("Cannot back up {}: file does not exist", self.data_file.display());
            return Err(DomainError::BackupSourceMissing(self.data_file.clone()));
        }

        tokio::fs::create_dir_all(&self.backup_dir).await?;

        let timestamp = Local::now().format(BACKUP_TIMESTAMP_FORMAT);
        let target = self
            .backup_dir
            .join(format!("{}{}.json", self.prefix, timestamp));

        // Same-second reruns replace the file so it carries a fresh creation time.
        match tokio::fs::remove_file(&target).await {
            Ok(()) => debug!("Replacing existing backup {}", target.display()),
            Err(e) if e.kind() == ErrorKind::NotFound => {}
            Err(e) => return Err(e.into()),
        }

        let copied = tokio::fs::copy(&self.data_file, &target).await?;
        debug!("Copied {} bytes to {}", copied, target.display());

        let backups = self.list_backups().await?;

        Ok(BackupReport {
            backup_file: target.display().to_string(),
            total_backups: backups.len(),
            backups,
        })
    }
}
