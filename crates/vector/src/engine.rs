use sewna_common::{AppConfig, Result};
use sewna_provider::{EmbeddingProvider, JinaClient};
use std::sync::Arc;
use tracing::{debug, error, info, warn};

use crate::ranker::{rank_top_k, MatchResult};
use crate::similarity::reconcile_dimension;
use crate::synth::VectorSynthesizer;
use crate::types::{Embedding, EMBEDDING_DIMENSION};

/// Query embedding and ranking front end
///
/// Uses the remote provider when one is configured and falls back to the
/// local [`VectorSynthesizer`] whenever it is absent or fails.
#[derive(Clone)]
pub struct MatchEngine {
    provider: Option<Arc<dyn EmbeddingProvider>>,
    synthesizer: VectorSynthesizer,
}

impl MatchEngine {
    /// Create engine with an optional remote provider
    pub fn new(provider: Option<Arc<dyn EmbeddingProvider>>) -> Self {
        Self {
            provider,
            synthesizer: VectorSynthesizer::new(),
        }
    }

    /// Engine that never leaves the process
    pub fn offline() -> Self {
        Self::new(None)
    }

    /// Create engine from configuration (remote provider only with an API key)
    pub fn from_config(config: &AppConfig) -> Result<Self> {
        let provider = JinaClient::from_config(config)?
            .map(|client| Arc::new(client) as Arc<dyn EmbeddingProvider>);

        match &provider {
            Some(p) => info!("Match engine using remote provider: {}", p.name()),
            None => info!("Match engine using local synthesizer"),
        }

        Ok(Self::new(provider))
    }

    pub fn synthesizer(&self) -> &VectorSynthesizer {
        &self.synthesizer
    }

    pub fn has_provider(&self) -> bool {
        self.provider.is_some()
    }

    /// Embed a query, never failing
    pub async fn embed_query(&self, text: &str) -> Embedding {
        let Some(provider) = &self.provider else {
            return self.synthesizer.generate_from_text(text);
        };

        match provider.embed(text).await {
            Ok(raw) => {
                debug!(
                    "Provider {} returned dimension {}",
                    provider.name(),
                    raw.len()
                );
                reconcile_dimension(&raw, EMBEDDING_DIMENSION)
            }
            Err(e) if e.is_provider_failure() => {
                warn!(
                    "Embedding provider {} unavailable, using local synthesizer: {}",
                    provider.name(),
                    e
                );
                self.synthesizer.generate_from_text(text)
            }
            Err(e) => {
                error!(
                    "Unexpected error from embedding provider {}, using local synthesizer: {}",
                    provider.name(),
                    e
                );
                self.synthesizer.generate_from_text(text)
            }
        }
    }

    /// Embed `text` and rank `catalog` against it
    pub async fn rank<T, E>(
        &self,
        text: &str,
        catalog: impl IntoIterator<Item = (T, E)>,
        k: usize,
    ) -> Vec<MatchResult<T>>
    where
        E: AsRef<[f64]>,
    {
        let query = self.embed_query(text).await;
        rank_top_k(&query, catalog, k)
    }
}

impl Default for MatchEngine {
    fn default() -> Self {
        Self::offline()
    }
}

impl std::fmt::Debug for MatchEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MatchEngine")
            .field("provider", &self.provider.as_ref().map(|p| p.name()))
            .finish()
    }
}
