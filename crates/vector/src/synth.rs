use std::collections::HashMap;
use tracing::trace;

use crate::keywords::{STYLE_CLUSTERS, STYLE_KEYWORDS};
use crate::similarity::l2_normalize;
use crate::types::{Embedding, StyleWeights, EMBEDDING_DIMENSION};

/// Starting value of every dimension before keywords and noise
const BASELINE: f64 = 0.1;

/// Noise amplitude on the query path
const QUERY_NOISE: f64 = 0.1;

/// Noise amplitude when seeding catalog profiles
const PROFILE_NOISE: f64 = 0.05;

/// Extra weight per keyword occurrence
const OCCURRENCE_BONUS: f64 = 0.2;

/// Deterministic keyword-cluster embedding generator
///
/// Holds no state; both entry points are pure functions of their input and
/// produce vectors of length [`EMBEDDING_DIMENSION`] with unit L2 norm.
#[derive(Debug, Clone, Copy, Default)]
pub struct VectorSynthesizer;

impl VectorSynthesizer {
    pub fn new() -> Self {
        Self
    }

    /// Embed free text (query path). Case-insensitive.
    pub fn generate_from_text(&self, text: &str) -> Embedding {
        let text = text.to_lowercase();
        let mut embedding = vec![BASELINE; EMBEDDING_DIMENSION];

        let scores = keyword_scores(&text);
        trace!("Keyword scores: {:?}", scores);
        let score = |keyword: &str| scores.get(keyword).copied().unwrap_or(0.0);

        for cluster in &STYLE_CLUSTERS {
            let triggered = cluster.triggers.iter().any(|&k| score(k) != 0.0)
                || cluster.hints.iter().any(|&hint| text.contains(hint));
            if !triggered {
                continue;
            }

            let base: f64 = cluster.query_terms.iter().map(|&k| score(k)).sum();
            add_to_range(&mut embedding, cluster.dimensions.clone(), base * cluster.weight);
        }

        add_noise(&mut embedding, &text, QUERY_NOISE);
        l2_normalize(&mut embedding);
        embedding
    }

    /// Embed an authored style profile (catalog seeding path)
    ///
    /// `seed_text` keys the noise, usually the designer's name.
    pub fn generate_from_weights(&self, weights: &StyleWeights, seed_text: &str) -> Embedding {
        let mut embedding = vec![BASELINE; EMBEDDING_DIMENSION];

        for cluster in &STYLE_CLUSTERS {
            if !cluster.triggers.iter().any(|&k| weights.get(k) != 0.0) {
                continue;
            }

            let base: f64 = cluster.triggers.iter().map(|&k| weights.get(k)).sum();
            add_to_range(&mut embedding, cluster.dimensions.clone(), base * cluster.weight);
        }

        add_noise(&mut embedding, seed_text, PROFILE_NOISE);
        l2_normalize(&mut embedding);
        embedding
    }
}

/// Score every vocabulary keyword present in `text`
///
/// score = strength * (1 + 0.2 * non-overlapping occurrences)
fn keyword_scores(text: &str) -> HashMap<&'static str, f64> {
    STYLE_KEYWORDS
        .iter()
        .filter_map(|&(keyword, strength)| {
            let count = text.matches(keyword).count();
            (count > 0).then(|| (keyword, strength * (1.0 + count as f64 * OCCURRENCE_BONUS)))
        })
        .collect()
}

fn add_to_range(embedding: &mut [f64], range: std::ops::Range<usize>, amount: f64) {
    for value in &mut embedding[range] {
        *value += amount;
    }
}

/// 32-bit polynomial string hash over UTF-16 code units (`h = h * 31 + c`)
pub fn text_hash(text: &str) -> i32 {
    text.encode_utf16()
        .fold(0i32, |hash, unit| hash.wrapping_mul(31).wrapping_add(i32::from(unit)))
}

/// Per-dimension noise seed, `(hash + i) * 9301 + 49297` in wrapping i32
pub fn noise_seed(hash: i32, index: usize) -> i32 {
    hash.wrapping_add(index as i32)
        .wrapping_mul(9301)
        .wrapping_add(49297)
}

/// Add `sin(seed) * amplitude` to each dimension, keyed off `text`
fn add_noise(embedding: &mut [f64], text: &str, amplitude: f64) {
    let hash = text_hash(text);
    for (i, value) in embedding.iter_mut().enumerate() {
        *value += f64::from(noise_seed(hash, i)).sin() * amplitude;
    }
}
