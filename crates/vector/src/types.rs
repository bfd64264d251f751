use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Logical dimension of every embedding compared by the ranker
pub const EMBEDDING_DIMENSION: usize = 50;

/// Dense embedding vector
pub type Embedding = Vec<f64>;

/// Hand-authored style profile: lowercase keyword -> strength in [0, 1]
///
/// Keys are lowercased on insert so lookups never depend on case.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "BTreeMap<String, f64>", into = "BTreeMap<String, f64>")]
pub struct StyleWeights(BTreeMap<String, f64>);

impl StyleWeights {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a keyword strength
    pub fn insert(&mut self, keyword: impl AsRef<str>, strength: f64) {
        self.0.insert(keyword.as_ref().to_lowercase(), strength);
    }

    /// Strength for a keyword, 0.0 when absent
    pub fn get(&self, keyword: &str) -> f64 {
        self.0.get(keyword).copied().unwrap_or(0.0)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.0.iter().map(|(k, v)| (k.as_str(), *v))
    }
}

impl<K: AsRef<str>> FromIterator<(K, f64)> for StyleWeights {
    fn from_iter<I: IntoIterator<Item = (K, f64)>>(iter: I) -> Self {
        let mut weights = Self::new();
        for (keyword, strength) in iter {
            weights.insert(keyword, strength);
        }
        weights
    }
}

impl From<BTreeMap<String, f64>> for StyleWeights {
    fn from(map: BTreeMap<String, f64>) -> Self {
        map.into_iter().collect()
    }
}

impl From<StyleWeights> for BTreeMap<String, f64> {
    fn from(weights: StyleWeights) -> Self {
        weights.0
    }
}
