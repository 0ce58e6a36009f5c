use chrono::{DateTime, Local};
use serde::Serialize;
use std::collections::BTreeMap;

/// Aggregate counters over the whole store.
#[derive(Debug, Clone, Serialize)]
pub struct UserStats {
    pub total_users: usize,
    pub active_users: usize,
    pub inactive_users: usize,
    pub email_domains: BTreeMap<String, usize>,
    pub generated_at: DateTime<Local>,
}
