use std::sync::Arc;
use user_core::services::{BackupService, UserService};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub users: Arc<UserService>,
    pub backups: Arc<BackupService>,
}

impl AppState {
    pub fn new(users: UserService, backups: BackupService) -> Self {
        Self {
            users: Arc::new(users),
            backups: Arc::new(backups),
        }
    }
}
