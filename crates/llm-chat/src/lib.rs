//! One-shot chat completions against an OpenAI-compatible endpoint.

pub mod client;
pub mod config;
pub mod error;
pub mod models;

pub use client::ChatClient;
pub use config::LlmConfig;
pub use error::LlmError;
pub use models::ChatMessage;
