use async_trait::async_trait;
use sewna_common::Result;

/// Source of text embeddings outside the local synthesizer
///
/// Returned vectors are in the provider's native dimension.
#[async_trait]
pub trait EmbeddingProvider: Send + Sync {
    /// Generate embedding for text
    async fn embed(&self, text: &str) -> Result<Vec<f64>>;

    /// Provider name for logs
    fn name(&self) -> &str;
}
