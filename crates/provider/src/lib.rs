//! Sewna remote embedding provider
//!
//! Optional Jina-compatible HTTP client. Callers fall back to the local
//! synthesizer whenever this is unconfigured or fails.

mod client;
mod provider_trait;
mod types;

pub use client::JinaClient;
pub use provider_trait::EmbeddingProvider;
pub use types::{EmbedData, EmbedRequest, EmbedResponse};
