//! Blocking embeddings client for OpenAI-compatible `/embeddings` endpoints.

use anyhow::{Context, Result};
use reqwest::blocking::Client;
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::Config;
use crate::embedding::{normalize, Embedder};
use crate::pathway::error::PathwayError;

/// Embedding collaborator backed by a remote model.
///
/// Must be built and dropped outside the async executor (`reqwest::blocking` owns its own
/// runtime); `main` constructs it inside `spawn_blocking`.
pub struct HttpEmbedder {
    client: Client,
    endpoint: String,
    model: String,
    dimensions: Option<usize>,
}

impl HttpEmbedder {
    pub fn new(config: &Config) -> Result<Self> {
        anyhow::ensure!(
            !config.embedding_model.trim().is_empty(),
            "missing embedding model name"
        );
        let mut headers = HeaderMap::new();
        let auth = format!("Bearer {}", config.embedding_api_key.trim());
        headers.insert(
            AUTHORIZATION,
            HeaderValue::from_str(&auth).context("invalid embedding API key")?,
        );
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        let client = Client::builder()
            .timeout(config.embedding_timeout)
            .default_headers(headers)
            .build()
            .context("failed to build embedding HTTP client")?;

        Ok(Self {
            client,
            endpoint: format!("{}/embeddings", config.embedding_api_url.trim_end_matches('/')),
            model: config.embedding_model.clone(),
            dimensions: config.embedding_dimensions,
        })
    }

    pub fn model(&self) -> &str {
        &self.model
    }
}

impl Embedder for HttpEmbedder {
    fn encode(&self, text: &str) -> Result<Vec<f32>, PathwayError> {
        let request = EmbeddingRequest {
            model: &self.model,
            input: [text],
            dimensions: self.dimensions,
        };

        let response = self
            .client
            .post(&self.endpoint)
            .json(&request)
            .send()
            .map_err(|e| PathwayError::UpstreamUnavailable(format!("embedding request failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .unwrap_or_else(|_| "<body unavailable>".to_string());
            return Err(PathwayError::UpstreamUnavailable(format!(
                "embedding endpoint returned {status}: {body}"
            )));
        }

        let parsed: EmbeddingResponse = response.json().map_err(|e| {
            PathwayError::UpstreamUnavailable(format!("failed to parse embedding response: {e}"))
        })?;

        let mut embedding = parsed
            .data
            .into_iter()
            .next()
            .map(|entry| entry.embedding)
            .ok_or_else(|| {
                PathwayError::UpstreamUnavailable("embedding response contained no vectors".to_string())
            })?;

        normalize(&mut embedding);
        debug!("Encoded {} chars into {} dims", text.len(), embedding.len());
        Ok(embedding)
    }
}

#[derive(Serialize)]
struct EmbeddingRequest<'a> {
    model: &'a str,
    input: [&'a str; 1],
    #[serde(skip_serializing_if = "Option::is_none")]
    dimensions: Option<usize>,
}

#[derive(Debug, Deserialize)]
struct EmbeddingResponse {
    data: Vec<EmbeddingData>,
}

#[derive(Debug, Deserialize)]
struct EmbeddingData {
    embedding: Vec<f32>,
}
