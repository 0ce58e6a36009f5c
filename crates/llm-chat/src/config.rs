use config::{Config, Environment, File};
use serde::Deserialize;

use crate::error::LlmError;

#[derive(Debug, Deserialize, Clone)]
pub struct LlmConfig {
    /// Base URL of the OpenAI-compatible API; `/chat/completions` is appended.
    pub base_url: String,
    pub api_key: String,
    pub model: String,
    pub temperature: f32,
    pub max_tokens: u32,
    pub timeout_seconds: u64,
}

impl LlmConfig {
    /// Defaults, then `config/llm`, then `LLM_*` environment variables
    /// (`LLM_BASE_URL`, `LLM_API_KEY`, `LLM_MODEL`, ...). `api_key` has no default.
    pub fn load() -> Result<Self, LlmError> {
        dotenvy::dotenv().ok();

        let config = Config::builder()
            .set_default("base_url", "https://models.inference.ai.azure.com")?
            .set_default("model", "gpt-4o-mini")?
            .set_default("temperature", 0.7)?
            .set_default("max_tokens", 1000)?
            .set_default("timeout_seconds", 60)?
            .add_source(File::with_name("config/llm").required(false))
            .add_source(
                Environment::with_prefix("LLM")
                    .prefix_separator("_")
                    .try_parsing(true),
            )
            .build()?;

        Ok(config.try_deserialize()?)
    }
}
