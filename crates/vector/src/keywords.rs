//! Style vocabulary and the fixed cluster layout of the embedding space.

use std::ops::Range;

/// Keyword -> base strength used when scanning query text
pub static STYLE_KEYWORDS: &[(&str, f64)] = &[
    ("sustainable", 0.9),
    ("eco-friendly", 0.9),
    ("upcycled", 0.85),
    ("bohemian", 0.8),
    ("boho", 0.8),
    ("flowy", 0.7),
    ("minimalist", 0.7),
    ("minimal", 0.7),
    ("clean", 0.65),
    ("simple", 0.6),
    ("avant-garde", 0.9),
    ("futuristic", 0.85),
    ("architectural", 0.8),
    ("bold", 0.75),
    ("romantic", 0.8),
    ("feminine", 0.75),
    ("delicate", 0.7),
    ("vintage", 0.8),
    ("streetwear", 0.9),
    ("urban", 0.85),
    ("contemporary", 0.7),
    ("casual", 0.6),
    ("luxury", 0.9),
    ("elegant", 0.8),
    ("formal", 0.85),
    ("evening", 0.8),
    ("pastel", 0.7),
    ("neutral", 0.6),
    ("timeless", 0.65),
];

/// A contiguous block of dimensions sharing one semantic theme
#[derive(Debug, Clone)]
pub struct StyleCluster {
    pub name: &'static str,

    /// Dimensions this cluster writes to
    pub dimensions: Range<usize>,

    /// Multiplier applied to the summed keyword scores
    pub weight: f64,

    /// Any nonzero score among these activates the cluster.
    /// On the seeding path these are also the summed keywords.
    pub triggers: &'static [&'static str],

    /// Keywords summed on the query path (a subset of `triggers`)
    pub query_terms: &'static [&'static str],

    /// Raw substrings that activate the cluster on the query path
    pub hints: &'static [&'static str],
}

/// Cluster partition of the embedding space, [0, 50) in steps of 10
pub static STYLE_CLUSTERS: [StyleCluster; 5] = [
    StyleCluster {
        name: "sustainable-minimalist",
        dimensions: 0..10,
        weight: 0.8,
        triggers: &["sustainable", "minimalist"],
        query_terms: &["sustainable", "minimalist"],
        hints: &["eco"],
    },
    StyleCluster {
        name: "bohemian-romantic",
        dimensions: 10..20,
        weight: 0.7,
        triggers: &["bohemian", "romantic", "feminine"],
        query_terms: &["bohemian", "romantic"],
        hints: &[],
    },
    StyleCluster {
        name: "avant-garde-futuristic",
        dimensions: 20..30,
        weight: 0.9,
        triggers: &["avant-garde", "futuristic"],
        query_terms: &["avant-garde", "futuristic"],
        hints: &["bold"],
    },
    StyleCluster {
        name: "streetwear-urban",
        dimensions: 30..40,
        weight: 0.8,
        triggers: &["streetwear", "urban"],
        query_terms: &["streetwear", "urban"],
        hints: &["casual"],
    },
    StyleCluster {
        name: "luxury-formal",
        dimensions: 40..50,
        weight: 0.85,
        triggers: &["luxury", "formal", "elegant"],
        query_terms: &["luxury", "formal"],
        hints: &[],
    },
];
