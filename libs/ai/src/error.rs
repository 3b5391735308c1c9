use thiserror::Error;

#[derive(Debug, Error)]
pub enum AiError {
    #[error("Embedding unavailable: {0}")]
    EmbeddingUnavailable(String),

    #[error("Chat unavailable: {0}")]
    ChatUnavailable(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

pub type AiResult<T> = Result<T, AiError>;

impl From<core_config::ConfigError> for AiError {
    fn from(err: core_config::ConfigError) -> Self {
        AiError::Config(err.to_string())
    }
}
