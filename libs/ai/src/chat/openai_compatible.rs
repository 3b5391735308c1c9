//! Chat completions against any OpenAI-compatible endpoint.
//!
//! Defaults target the Hugging Face inference router.

use async_trait::async_trait;
use core_config::{ConfigError, FromEnv, env_first, env_or_default, env_parse};
use reqwest::Client;
use serde_json::json;
use std::time::Duration;
use tracing::{debug, instrument};

use super::{ChatMessage, ChatProvider, ChatReply};
use crate::error::{AiError, AiResult};

#[derive(Debug, Clone)]
pub struct ChatConfig {
    pub base_url: String,
    pub api_key: Option<String>,
    pub model: String,
    pub timeout: Duration,
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            base_url: "https://router.huggingface.co/v1".to_string(),
            api_key: None,
            model: "openai/gpt-oss-120b:novita".to_string(),
            timeout: Duration::from_secs(60),
        }
    }
}

impl ChatConfig {
    pub fn completions_url(&self) -> String {
        format!("{}/chat/completions", self.base_url.trim_end_matches('/'))
    }
}

impl FromEnv for ChatConfig {
    fn from_env() -> Result<Self, ConfigError> {
        let defaults = Self::default();
        Ok(Self {
            base_url: env_or_default("CHAT_BASE_URL", &defaults.base_url),
            api_key: env_first(&["HF_TOKEN"]),
            model: env_or_default("XAVIER_MODEL", &defaults.model),
            timeout: Duration::from_secs(env_parse("AI_TIMEOUT_SECS", 60u64)?),
        })
    }
}

fn parse_completion(body: &serde_json::Value) -> AiResult<ChatReply> {
    let choice = body["choices"]
        .get(0)
        .ok_or_else(|| AiError::ChatUnavailable("completion has no choices".to_string()))?;
    Ok(ChatReply::from_content(choice["message"]["content"].as_str()))
}

pub struct OpenAICompatibleChat {
    client: Client,
    config: ChatConfig,
}

impl OpenAICompatibleChat {
    pub fn new(config: ChatConfig) -> AiResult<Self> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| AiError::Config(format!("failed to build HTTP client: {e}")))?;
        Ok(Self { client, config })
    }

    pub fn from_env() -> AiResult<Self> {
        Self::new(ChatConfig::from_env()?)
    }
}

#[async_trait]
impl ChatProvider for OpenAICompatibleChat {
    #[instrument(skip_all, fields(model = %self.config.model, messages = messages.len()))]
    async fn chat(&self, messages: &[ChatMessage]) -> AiResult<ChatReply> {
        let mut request = self.client.post(self.config.completions_url()).json(&json!({
            "model": self.config.model,
            "messages": messages,
        }));
        if let Some(key) = &self.config.api_key {
            request = request.bearer_auth(key);
        }

        let response = request
            .send()
            .await
            .map_err(|e| AiError::ChatUnavailable(format!("request failed: {e}")))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(AiError::ChatUnavailable(format!("{status}: {body}")));
        }

        let body: serde_json::Value = response
            .json()
            .await
            .map_err(|e| AiError::ChatUnavailable(format!("failed to parse response: {e}")))?;

        let reply = parse_completion(&body)?;
        debug!(empty = matches!(reply, ChatReply::Empty), "Chat completion received");
        Ok(reply)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_completion_answer() {
        let body = json!({"choices": [{"message": {"role": "assistant", "content": "¡Hola!"}}]});
        assert_eq!(parse_completion(&body).unwrap(), ChatReply::Answer("¡Hola!".into()));
    }

    #[test]
    fn test_parse_completion_null_content_is_empty() {
        let body = json!({"choices": [{"message": {"role": "assistant", "content": null}}]});
        assert_eq!(parse_completion(&body).unwrap(), ChatReply::Empty);
    }

    #[test]
    fn test_parse_completion_without_choices_is_unavailable() {
        for body in [json!({}), json!({"choices": []}), json!({"error": "rate limited"})] {
            assert!(matches!(parse_completion(&body), Err(AiError::ChatUnavailable(_))));
        }
    }

    #[test]
    fn test_completions_url_trims_slash() {
        let config = ChatConfig {
            base_url: "http://localhost:11434/v1/".to_string(),
            ..ChatConfig::default()
        };
        assert_eq!(config.completions_url(), "http://localhost:11434/v1/chat/completions");
    }

    #[test]
    fn test_config_from_env_defaults() {
        temp_env::with_vars(
            [
                ("CHAT_BASE_URL", None),
                ("XAVIER_MODEL", None),
                ("HF_TOKEN", Some("hf_abc")),
                ("AI_TIMEOUT_SECS", Some("5")),
            ],
            || {
                let config = ChatConfig::from_env().unwrap();
                assert_eq!(config.base_url, "https://router.huggingface.co/v1");
                assert_eq!(config.model, "openai/gpt-oss-120b:novita");
                assert_eq!(config.api_key.as_deref(), Some("hf_abc"));
                assert_eq!(config.timeout, Duration::from_secs(5));
            },
        );
    }
}
