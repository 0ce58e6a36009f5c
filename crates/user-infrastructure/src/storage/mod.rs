//! JSON file storage adapters

pub mod json_file_repo;

pub use json_file_repo::JsonFileUserRepository;
