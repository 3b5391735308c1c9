use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{AiError, AiResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    System,
    User,
    Assistant,
}

impl fmt::Display for ChatRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ChatRole::System => "system",
            ChatRole::User => "user",
            ChatRole::Assistant => "assistant",
        })
    }
}

impl FromStr for ChatRole {
    type Err = AiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "system" => Ok(ChatRole::System),
            "user" => Ok(ChatRole::User),
            "assistant" => Ok(ChatRole::Assistant),
            other => Err(AiError::InvalidInput(format!("unknown chat role '{other}'"))),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: ChatRole,
    pub content: String,
}

impl ChatMessage {
    pub fn new(role: ChatRole, content: impl Into<String>) -> Self {
        Self {
            role,
            content: content.into(),
        }
    }

    pub fn system(content: impl Into<String>) -> Self {
        Self::new(ChatRole::System, content)
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self::new(ChatRole::User, content)
    }
}

/// What the model said. A reachable model that produced no text is
/// [`ChatReply::Empty`]; an unreachable one is [`AiError::ChatUnavailable`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChatReply {
    Answer(String),
    Empty,
}

impl ChatReply {
    pub fn from_content(content: Option<&str>) -> Self {
        match content.map(str::trim) {
            Some(text) if !text.is_empty() => ChatReply::Answer(text.to_string()),
            _ => ChatReply::Empty,
        }
    }

    pub fn into_answer(self) -> Option<String> {
        match self {
            ChatReply::Answer(text) => Some(text),
            ChatReply::Empty => None,
        }
    }
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ChatProvider: Send + Sync {
    async fn chat(&self, messages: &[ChatMessage]) -> AiResult<ChatReply>;
}
