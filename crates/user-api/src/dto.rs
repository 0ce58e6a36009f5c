//! Request and response payloads

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use user_core::domain::{BackupEntry, User};
use user_shared::constants::{DEFAULT_LIMIT, DEFAULT_SKIP};

fn default_skip() -> usize {
    DEFAULT_SKIP
}

fn default_limit() -> usize {
    DEFAULT_LIMIT
}

/// Query string of `GET /users`
#[derive(Debug, Deserialize)]
pub struct ListUsersQuery {
    #[serde(default = "default_skip")]
    pub skip: usize,
    #[serde(default = "default_limit")]
    pub limit: usize,
    pub search: Option<String>,
}

/// Mutation result: a human-readable message plus the affected record.
#[derive(Debug, Serialize)]
pub struct UserEnvelope {
    pub message: String,
    pub user: User,
}

impl UserEnvelope {
    pub fn new(message: &str, user: User) -> Self {
        Self {
            message: message.to_string(),
            user,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct EndpointInfo {
    pub method: &'static str,
    pub path: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Serialize)]
pub struct ServiceInfo {
    pub message: String,
    pub version: String,
    pub total_users: usize,
    pub endpoints: Vec<EndpointInfo>,
}

#[derive(Debug, Serialize)]
pub struct BackupResponse {
    pub message: String,
    pub backup_file: String,
    pub total_backups: usize,
    pub backups: Vec<BackupEntry>,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: DateTime<Local>,
    pub users_count: usize,
    pub data_file_exists: bool,
    pub store_recovered: bool,
}
