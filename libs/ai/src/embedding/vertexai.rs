//! Vertex AI text embeddings (`publishers/google/models/{model}:predict`).
//!
//! Authentication uses `GOOGLE_ACCESS_TOKEN` when set, otherwise the GCE/GKE
//! metadata server token of the workload's service account.

use async_trait::async_trait;
use core_config::{ConfigError, FromEnv, env_first, env_or_default, env_parse};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, instrument};

use super::{Embedding, EmbeddingProvider, join_fragments};
use crate::error::{AiError, AiResult};

const METADATA_TOKEN_URL: &str =
    "http://metadata.google.internal/computeMetadata/v1/instance/service-accounts/default/token";

#[derive(Debug, Clone)]
pub struct VertexAIConfig {
    pub project_id: String,
    pub location: String,
    pub model: String,
    pub access_token: Option<String>,
    /// Number of values every embedding must have
    pub dimension: usize,
    pub timeout: Duration,
}

impl VertexAIConfig {
    pub fn new(project_id: impl Into<String>, location: impl Into<String>) -> Self {
        Self {
            project_id: project_id.into(),
            location: location.into(),
            model: "text-multilingual-embedding-002".to_string(),
            access_token: None,
            dimension: 768,
            timeout: Duration::from_secs(30),
        }
    }

    pub fn with_access_token(mut self, token: impl Into<String>) -> Self {
        self.access_token = Some(token.into());
        self
    }

    pub fn endpoint_url(&self) -> String {
        format!(
            "https://{loc}-aiplatform.googleapis.com/v1/projects/{project}/locations/{loc}/publishers/google/models/{model}:predict",
            loc = self.location,
            project = self.project_id,
            model = self.model
        )
    }
}

impl FromEnv for VertexAIConfig {
    fn from_env() -> Result<Self, ConfigError> {
        let project_id = env_first(&["GCP_PROJECT_ID", "GOOGLE_CLOUD_PROJECT"])
            .ok_or_else(|| ConfigError::MissingEnvVar("GCP_PROJECT_ID".to_string()))?;
        let location = env_first(&["GCP_LOCATION", "VERTEX_AI_LOCATION"])
            .unwrap_or_else(|| "us-central1".to_string());

        Ok(Self {
            project_id,
            location,
            model: env_or_default("GCP_MODEL", "text-multilingual-embedding-002"),
            access_token: env_first(&["GOOGLE_ACCESS_TOKEN"]),
            dimension: env_parse("EMBEDDING_DIMENSION", 768usize)?,
            timeout: Duration::from_secs(env_parse("AI_TIMEOUT_SECS", 30u64)?),
        })
    }
}

#[derive(Debug, Serialize)]
struct PredictRequest<'a> {
    instances: [TextInstance<'a>; 1],
}

#[derive(Debug, Serialize)]
struct TextInstance<'a> {
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct PredictResponse {
    #[serde(default)]
    predictions: Vec<Prediction>,
}

#[derive(Debug, Deserialize)]
struct Prediction {
    embeddings: PredictionEmbeddings,
}

#[derive(Debug, Deserialize)]
struct PredictionEmbeddings {
    values: Vec<f32>,
}

fn parse_predict_response(body: &str, model: &str, dimension: usize) -> AiResult<Embedding> {
    let response: PredictResponse = serde_json::from_str(body)
        .map_err(|e| AiError::EmbeddingUnavailable(format!("malformed predict response: {e}")))?;

    let values = response
        .predictions
        .into_iter()
        .next()
        .map(|p| p.embeddings.values)
        .ok_or_else(|| AiError::EmbeddingUnavailable("predict response has no predictions".to_string()))?;

    Embedding::from_raw(model, values, dimension)
}

pub struct VertexAIProvider {
    client: Client,
    config: VertexAIConfig,
}

impl VertexAIProvider {
    pub fn new(config: VertexAIConfig) -> AiResult<Self> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| AiError::Config(format!("failed to build HTTP client: {e}")))?;
        Ok(Self { client, config })
    }

    pub fn from_env() -> AiResult<Self> {
        Self::new(VertexAIConfig::from_env()?)
    }

    pub fn config(&self) -> &VertexAIConfig {
        &self.config
    }

    async fn access_token(&self) -> AiResult<String> {
        if let Some(token) = &self.config.access_token {
            return Ok(token.clone());
        }

        #[derive(Deserialize)]
        struct TokenResponse {
            access_token: String,
        }

        let response = self
            .client
            .get(METADATA_TOKEN_URL)
            .header("Metadata-Flavor", "Google")
            .send()
            .await
            .map_err(|e| {
                AiError::EmbeddingUnavailable(format!(
                    "metadata server unreachable ({e}); set GOOGLE_ACCESS_TOKEN for local development"
                ))
            })?;

        if !response.status().is_success() {
            return Err(AiError::EmbeddingUnavailable(format!(
                "metadata server returned {}",
                response.status()
            )));
        }

        let token: TokenResponse = response
            .json()
            .await
            .map_err(|e| AiError::EmbeddingUnavailable(format!("bad token response: {e}")))?;
        Ok(token.access_token)
    }
}

#[async_trait]
impl EmbeddingProvider for VertexAIProvider {
    #[instrument(skip_all, fields(model = %self.config.model, fragments = fragments.len()))]
    async fn embed(&self, fragments: &[String]) -> AiResult<Embedding> {
        let content = join_fragments(fragments)
            .ok_or_else(|| AiError::InvalidInput("nothing to embed".to_string()))?;
        let token = self.access_token().await?;

        let response = self
            .client
            .post(self.config.endpoint_url())
            .bearer_auth(token)
            .json(&PredictRequest {
                instances: [TextInstance { content: &content }],
            })
            .send()
            .await
            .map_err(|e| AiError::EmbeddingUnavailable(format!("request failed: {e}")))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| AiError::EmbeddingUnavailable(format!("failed to read body: {e}")))?;

        if !status.is_success() {
            return Err(AiError::EmbeddingUnavailable(format!(
                "Vertex AI returned {status}: {body}"
            )));
        }

        let embedding = parse_predict_response(&body, &self.config.model, self.config.dimension)?;
        debug!(dimension = embedding.dimension, "Embedding generated");
        Ok(embedding)
    }
}
