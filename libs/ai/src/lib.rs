//! Outbound AI collaborators.
//!
//! ```text
//! ┌──────────────────────┐        ┌─────────────────────────────┐
//! │  EmbeddingProvider   │◄───────│  VertexAIProvider (:predict) │
//! └──────────────────────┘        └─────────────────────────────┘
//! ┌──────────────────────┐        ┌─────────────────────────────┐
//! │     ChatProvider     │◄───────│  OpenAICompatibleChat        │
//! └──────────────────────┘        │  (/chat/completions)         │
//!                                 └─────────────────────────────┘
//! ```
//!
//! Both traits are object safe so callers hold them as `Arc<dyn ...>`.

pub mod chat;
pub mod embedding;
pub mod error;

pub use chat::{ChatConfig, ChatMessage, ChatProvider, ChatReply, ChatRole, OpenAICompatibleChat};
pub use embedding::{Embedding, EmbeddingProvider, VertexAIConfig, VertexAIProvider};
pub use error::{AiError, AiResult};
