use core_config::{ConfigError, FromEnv, env_parse};

/// AI-related behaviour of the course service
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchConfig {
    /// Number of nearest courses handed to the chat model
    pub top_k: u32,
    /// Embed course text inside `create_course`
    pub embed_on_create: bool,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            top_k: 5,
            embed_on_create: true,
        }
    }
}

impl FromEnv for SearchConfig {
    /// Reads `SEARCH_TOP_K` and `EMBED_ON_CREATE`.
    fn from_env() -> Result<Self, ConfigError> {
        let top_k = env_parse("SEARCH_TOP_K", 5u32)?;
        if top_k == 0 {
            return Err(ConfigError::ParseError {
                key: "SEARCH_TOP_K".to_string(),
                details: "must be at least 1".to_string(),
            });
        }

        Ok(Self {
            top_k,
            embed_on_create: env_parse("EMBED_ON_CREATE", true)?,
        })
    }
}
