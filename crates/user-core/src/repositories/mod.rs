//! Repository traits (ports)

pub mod user_repository;
pub mod backup_repository;

pub use user_repository::{LoadOutcome, UserRepository};
pub use backup_repository::BackupRepository;

#[cfg(test)]
pub use user_repository::MockUserRepository;
#[cfg(test)]
pub use backup_repository::MockBackupRepository;
