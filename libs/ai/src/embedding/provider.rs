use async_trait::async_trait;
use serde::Serialize;
use std::fmt::Write;

use crate::error::{AiError, AiResult};

/// A unit-length text embedding.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Embedding {
    pub model: String,
    pub dimension: usize,
    pub values: Vec<f32>,
    /// False only for the all-zero vector, which cannot be scaled
    pub normalized: bool,
}

impl Embedding {
    /// Validates the length of raw model output and L2-normalizes it.
    pub fn from_raw(
        model: impl Into<String>,
        values: Vec<f32>,
        expected_dimension: usize,
    ) -> AiResult<Self> {
        if values.len() != expected_dimension {
            return Err(AiError::EmbeddingUnavailable(format!(
                "expected {} values, got {}",
                expected_dimension,
                values.len()
            )));
        }
        if values.iter().any(|v| !v.is_finite()) {
            return Err(AiError::EmbeddingUnavailable(
                "embedding contains non-finite values".to_string(),
            ));
        }

        let norm = values.iter().map(|v| v * v).sum::<f32>().sqrt();
        let (values, normalized) = if norm == 0.0 {
            (values, false)
        } else {
            (values.into_iter().map(|v| v / norm).collect(), true)
        };

        Ok(Self {
            model: model.into(),
            dimension: expected_dimension,
            values,
            normalized,
        })
    }

    /// pgvector text literal, e.g. `[0.6,0.8]`, for binding as `$n::vector`.
    pub fn to_pgvector(&self) -> String {
        let mut out = String::with_capacity(self.values.len() * 12 + 2);
        out.push('[');
        for (i, v) in self.values.iter().enumerate() {
            if i > 0 {
                out.push(',');
            }
            let _ = write!(out, "{v}");
        }
        out.push(']');
        out
    }
}

/// Drops blank fragments and joins the rest with a single space.
pub fn join_fragments<S: AsRef<str>>(fragments: &[S]) -> Option<String> {
    let joined = fragments
        .iter()
        .map(|f| f.as_ref().trim())
        .filter(|f| !f.is_empty())
        .collect::<Vec<_>>()
        .join(" ");
    (!joined.is_empty()).then_some(joined)
}

/// Produces one embedding for a set of text fragments.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EmbeddingProvider: Send + Sync {
    /// Embeds the fragments joined by [`join_fragments`].
    async fn embed(&self, fragments: &[String]) -> AiResult<Embedding>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_raw_normalizes() {
        let embedding = Embedding::from_raw("m", vec![3.0, 4.0], 2).unwrap();
        assert_eq!(embedding.values, vec![0.6, 0.8]);
        assert!(embedding.normalized);
        assert_eq!(embedding.dimension, 2);
        assert_eq!(embedding.to_pgvector(), "[0.6,0.8]");
    }

    #[test]
    fn test_from_raw_rejects_wrong_dimension() {
        let err = Embedding::from_raw("m", vec![0.1; 512], 768).unwrap_err();
        assert!(matches!(err, AiError::EmbeddingUnavailable(msg) if msg.contains("512")));
    }

    #[test]
    fn test_from_raw_keeps_zero_vector() {
        let embedding = Embedding::from_raw("m", vec![0.0; 3], 3).unwrap();
        assert_eq!(embedding.values, vec![0.0; 3]);
        assert!(!embedding.normalized);
    }

    #[test]
    fn test_from_raw_rejects_nan() {
        assert!(Embedding::from_raw("m", vec![f32::NAN, 1.0], 2).is_err());
    }

    #[test]
    fn test_join_fragments() {
        assert_eq!(
            join_fragments(&["Rust", "", "  ", " para todos "]).as_deref(),
            Some("Rust para todos")
        );
        assert!(join_fragments::<&str>(&[]).is_none());
        assert!(join_fragments(&["", " "]).is_none());
    }
}
