//! Backup listing types

use chrono::{DateTime, Local};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BackupEntry {
    pub name: String,
    /// Size in bytes.
    pub size: u64,
    pub created: DateTime<Local>,
}

/// Result of a backup run: the new copy plus every backup on disk, newest first.
#[derive(Debug, Clone, Serialize)]
pub struct BackupReport {
    pub backup_file: String,
    pub total_backups: usize,
    pub backups: Vec<BackupEntry>,
}
