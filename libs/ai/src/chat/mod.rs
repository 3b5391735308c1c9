mod openai_compatible;
mod provider;

pub use openai_compatible::{ChatConfig, OpenAICompatibleChat};
pub use provider::{ChatMessage, ChatProvider, ChatReply, ChatRole};
