//! # User Core - Domain Module

pub mod user;
pub mod stats;
pub mod backup;

pub use user::{User, UserInput, UserPage};
pub use stats::UserStats;
pub use backup::{BackupEntry, BackupReport};
