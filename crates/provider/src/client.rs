use async_trait::async_trait;
use reqwest::Client;
use sewna_common::{AppConfig, Result, SewnaError};
use std::time::Duration;
use tracing::{debug, info};

use crate::provider_trait::EmbeddingProvider;
use crate::types::{EmbedRequest, EmbedResponse};

/// Jina embeddings API client
#[derive(Debug, Clone)]
pub struct JinaClient {
    api_url: String,
    api_key: String,
    model: String,
    client: Client,
}

impl JinaClient {
    /// Create new Jina client
    pub fn new(
        api_url: impl Into<String>,
        api_key: impl Into<String>,
        model: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self> {
        let api_url = api_url.into();
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| anyhow::anyhow!("Failed to create HTTP client: {}", e))?;

        info!("Jina embedding client initialized: {}", api_url);
        Ok(Self {
            api_url,
            api_key: api_key.into(),
            model: model.into(),
            client,
        })
    }

    /// Build a client from configuration, `None` when no API key is set
    pub fn from_config(config: &AppConfig) -> Result<Option<Self>> {
        let api_key = match config.jina_api_key.as_deref() {
            Some(key) if config.provider_enabled() => key.trim(),
            _ => {
                debug!("No embedding API key configured, remote provider disabled");
                return Ok(None);
            }
        };

        Self::new(
            config.jina_api_url.clone(),
            api_key,
            config.jina_model.clone(),
            Duration::from_secs(config.provider_timeout_secs),
        )
        .map(Some)
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    /// Single attempt; retry policy is left to callers
    async fn try_embed(&self, request: &EmbedRequest) -> Result<Vec<f64>> {
        let response = self
            .client
            .post(&self.api_url)
            .bearer_auth(&self.api_key)
            .json(request)
            .send()
            .await
            .map_err(|e| SewnaError::network(format!("Failed to send embedding request: {}", e)))?
            .error_for_status()
            .map_err(|e| SewnaError::provider(format!("Embedding API error: {}", e)))?;

        let result: EmbedResponse = response
            .json()
            .await
            .map_err(|e| SewnaError::provider(format!("Failed to parse embedding response: {}", e)))?;

        match result.into_first() {
            Some(embedding) if !embedding.is_empty() => Ok(embedding),
            _ => Err(SewnaError::provider("Empty embedding from provider")),
        }
    }
}

#[async_trait]
impl EmbeddingProvider for JinaClient {
    async fn embed(&self, text: &str) -> Result<Vec<f64>> {
        debug!(
            "Requesting remote embedding - Model: {}, Text length: {}",
            self.model,
            text.len()
        );

        let request = EmbedRequest {
            input: vec![text.to_string()],
            model: self.model.clone(),
        };

        let embedding = self.try_embed(&request).await?;
        debug!("Received embedding - Dimension: {}", embedding.len());
        Ok(embedding)
    }

    fn name(&self) -> &str {
        "jina"
    }
}
