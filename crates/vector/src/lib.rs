//! Sewna vector engine
//!
//! Deterministic style embeddings, dimension reconciliation and
//! cosine ranking of designer profiles against free-text queries.

mod engine;
pub mod keywords;
mod ranker;
mod similarity;
mod synth;
mod types;

pub use engine::MatchEngine;
pub use ranker::{rank_top_k, MatchResult};
pub use similarity::{cosine_similarity, l2_norm, l2_normalize, reconcile_dimension, SIMILARITY_BOOST};
pub use synth::{noise_seed, text_hash, VectorSynthesizer};
pub use types::{Embedding, StyleWeights, EMBEDDING_DIMENSION};
