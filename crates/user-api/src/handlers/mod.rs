pub mod root;
pub mod users;
pub mod stats;
pub mod backup;
pub mod health;
