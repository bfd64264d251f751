use serde::Serialize;
use std::cmp::Ordering;
use tracing::debug;

use crate::similarity::cosine_similarity;

/// A catalog entity paired with its similarity to a query
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MatchResult<T> {
    pub entity: T,

    /// Similarity score (0.0 to 1.0)
    pub similarity: f64,
}

impl<T> MatchResult<T> {
    pub fn new(entity: T, similarity: f64) -> Self {
        Self { entity, similarity }
    }

    /// Similarity as a rounded whole percentage
    pub fn percent(&self) -> u8 {
        (self.similarity * 100.0).round().clamp(0.0, 100.0) as u8
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> MatchResult<U> {
        MatchResult::new(f(self.entity), self.similarity)
    }
}

/// Score every catalog entry against `query` and keep the best `k`
///
/// Sorted by descending similarity. Entries with equal scores keep their
/// catalog order. `k` larger than the catalog returns everything.
pub fn rank_top_k<T, E>(
    query: &[f64],
    catalog: impl IntoIterator<Item = (T, E)>,
    k: usize,
) -> Vec<MatchResult<T>>
where
    E: AsRef<[f64]>,
{
    let mut results: Vec<MatchResult<T>> = catalog
        .into_iter()
        .map(|(entity, embedding)| {
            let similarity = cosine_similarity(query, embedding.as_ref());
            MatchResult::new(entity, similarity)
        })
        .collect();
    let candidates = results.len();

    // sort_by is stable
    results.sort_by(|a, b| {
        b.similarity
            .partial_cmp(&a.similarity)
            .unwrap_or(Ordering::Equal)
    });
    results.truncate(k);

    debug!("Ranked {} candidates, kept {}", candidates, results.len());
    results
}
