//! Backup adapters

pub mod file_backup_repo;

pub use file_backup_repo::FileBackupRepository;
