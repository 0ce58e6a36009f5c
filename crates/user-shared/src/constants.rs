//! Application-wide constants

pub const SERVICE_VERSION: &str = "2.0";
pub const DEFAULT_SKIP: usize = 0;
pub const DEFAULT_LIMIT: usize = 100;
pub const DEFAULT_DATA_FILE: &str = "users_data.json";
pub const DEFAULT_BACKUP_DIR: &str = "backups";
pub const DEFAULT_BACKUP_PREFIX: &str = "users_backup_";
pub const BACKUP_TIMESTAMP_FORMAT: &str = "%Y%m%d_%H%M%S";
