mod provider;
mod vertexai;

pub use provider::{Embedding, EmbeddingProvider, join_fragments};
pub use vertexai::{VertexAIConfig, VertexAIProvider};
