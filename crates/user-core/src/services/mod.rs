//! Domain services

pub mod query;
pub mod user_service;
pub mod backup_service;

pub use user_service::{next_id, UserService};
pub use backup_service::BackupService;
