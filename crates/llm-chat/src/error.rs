use thiserror::Error;

#[derive(Error, Debug)]
pub enum LlmError {
    #[error("Configuration error: {0}")]
    ConfigError(#[from] config::ConfigError),

    #[error("HTTP error: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("LLM API error: {status} - {body}")]
    ApiError { status: u16, body: String },

    #[error("No choices returned from LLM")]
    EmptyResponse,
}
