use serde::{Deserialize, Serialize};

/// Embedding request body
#[derive(Debug, Clone, Serialize)]
pub struct EmbedRequest {
    /// Texts to embed
    pub input: Vec<String>,

    /// Model name (e.g., "jina-embeddings-v2-base-en")
    pub model: String,
}

/// One embedding in the response payload
#[derive(Debug, Clone, Deserialize)]
pub struct EmbedData {
    pub embedding: Vec<f64>,

    #[serde(default)]
    pub index: usize,
}

/// Embedding response body
#[derive(Debug, Clone, Deserialize)]
pub struct EmbedResponse {
    #[serde(default)]
    pub model: Option<String>,

    pub data: Vec<EmbedData>,
}

impl EmbedResponse {
    /// First embedding of the batch, if any
    pub fn into_first(self) -> Option<Vec<f64>> {
        self.data.into_iter().next().map(|d| d.embedding)
    }
}
