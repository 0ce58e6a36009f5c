//! # User Infrastructure
//! 
//! Filesystem implementations (adapters) of the user-core repository ports.

pub mod storage;
pub mod backup;

pub use storage::JsonFileUserRepository;
pub use backup::FileBackupRepository;
